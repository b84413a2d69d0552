//! System preamble construction.
//!
//! Every completion request carries a system preamble: fixed style
//! directives (short, conversational, voice-oriented responses) plus,
//! when known, the user's name and their most recent facts.

use murmur_types::profile::UserProfile;

/// Fixed style directives prepended to every request.
const BASE_PROMPT: &str = "You are a helpful AI assistant with memory. Key instructions:

RESPONSE STYLE:
- Keep responses SHORT (1-2 sentences, under 40 words)
- Be conversational and natural for voice
- Reference previous conversation context when relevant

MEMORY USAGE:";

/// Build the system preamble for one completion request.
///
/// The name and fact lines are conditional; the last 3 facts are
/// joined with "; ".
pub fn build_system_prompt(profile: &UserProfile) -> String {
    let mut prompt = BASE_PROMPT.to_string();

    if let Some(name) = &profile.name {
        prompt.push_str(&format!(
            "\n- User's name is {name} - USE IT naturally in conversation"
        ));
    }

    let facts = profile.recent_facts();
    if !facts.is_empty() {
        prompt.push_str(&format!(
            "\n- Important facts about user: {}",
            facts.join("; ")
        ));
    }

    prompt.push_str("\n\nRemember and reference these details throughout our conversation.");
    prompt
}
