//! Heuristic name extraction from user utterances.
//!
//! This is deliberately a single narrow function so the strategy can be
//! swapped for a real parser later without touching session or profile
//! plumbing. It is best-effort, advisory memory -- not verified
//! identity: complex phrasing is missed ("people call me Ava"), and
//! false positives slip through when the token after the marker looks
//! like a name ("I am happy" records "happy").
//!
//! Algorithm, case-insensitive over the raw utterance:
//! 1. Skip entirely if a name is already recorded (first-write-wins).
//! 2. Trigger only if the lowercased text contains "my name is",
//!    "i'm", or "i am".
//! 3. Tokenize on whitespace; at the first token equal to "is", "am",
//!    or "i'm", take the following token, strip trailing punctuation,
//!    and accept it iff it is alphabetic and longer than one char.

use tracing::info;

use murmur_types::profile::UserProfile;

const TRIGGER_PHRASES: [&str; 3] = ["my name is", "i'm", "i am"];
const TRAILING_PUNCTUATION: [char; 4] = ['.', ',', '!', '?'];

/// Update the profile from a user utterance.
///
/// Returns the newly learned name, or `None` when nothing was learned.
pub fn extract_user_info(profile: &mut UserProfile, utterance: &str) -> Option<String> {
    if profile.name.is_some() {
        return None;
    }

    let lowered = utterance.to_lowercase();
    if !TRIGGER_PHRASES.iter().any(|p| lowered.contains(p)) {
        return None;
    }

    let words: Vec<&str> = utterance.split_whitespace().collect();
    for (i, word) in words.iter().enumerate() {
        let marker = word.to_lowercase();
        if (marker == "is" || marker == "am" || marker == "i'm") && i + 1 < words.len() {
            let candidate = words[i + 1].trim_end_matches(&TRAILING_PUNCTUATION[..]);
            if candidate.chars().count() > 1 && candidate.chars().all(char::is_alphabetic) {
                profile.name = Some(candidate.to_string());
                profile
                    .important_facts
                    .push(format!("User's name is {candidate}"));
                info!(name = %candidate, "Learned user's name");
                return Some(candidate.to_string());
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_my_name_is() {
        let mut profile = UserProfile::default();
        let learned = extract_user_info(&mut profile, "My name is Ava");
        assert_eq!(learned.as_deref(), Some("Ava"));
        assert_eq!(profile.name.as_deref(), Some("Ava"));
        assert_eq!(profile.important_facts, ["User's name is Ava"]);
    }

    #[test]
    fn test_i_am_with_trailing_punctuation() {
        let mut profile = UserProfile::default();
        extract_user_info(&mut profile, "Hello, I am Marcus!");
        assert_eq!(profile.name.as_deref(), Some("Marcus"));
    }

    #[test]
    fn test_contraction_trigger() {
        let mut profile = UserProfile::default();
        extract_user_info(&mut profile, "hey, i'm Priya.");
        assert_eq!(profile.name.as_deref(), Some("Priya"));
    }

    #[test]
    fn test_first_write_wins() {
        let mut profile = UserProfile::default();
        extract_user_info(&mut profile, "My name is Ava");
        let second = extract_user_info(&mut profile, "My name is Zoe");
        assert!(second.is_none());
        assert_eq!(profile.name.as_deref(), Some("Ava"));
        assert_eq!(profile.important_facts.len(), 1);
    }

    #[test]
    fn test_numeric_token_rejected() {
        let mut profile = UserProfile::default();
        let learned = extract_user_info(&mut profile, "I am 25");
        assert!(learned.is_none());
        assert!(profile.name.is_none());
        assert!(profile.important_facts.is_empty());
    }

    #[test]
    fn test_single_char_token_rejected() {
        let mut profile = UserProfile::default();
        assert!(extract_user_info(&mut profile, "my name is X").is_none());
        assert!(profile.name.is_none());
    }

    #[test]
    fn test_no_trigger_phrase_is_ignored() {
        let mut profile = UserProfile::default();
        assert!(extract_user_info(&mut profile, "what is the weather").is_none());
        assert!(profile.name.is_none());
    }

    #[test]
    fn test_invalid_candidate_keeps_scanning() {
        // First marker ("is") is followed by a rejected token; the later
        // "am" marker still yields the name.
        let mut profile = UserProfile::default();
        extract_user_info(&mut profile, "this is 42 but I am Lena");
        assert_eq!(profile.name.as_deref(), Some("Lena"));
    }

    #[test]
    fn test_case_insensitive_markers() {
        let mut profile = UserProfile::default();
        extract_user_info(&mut profile, "MY NAME IS Dana");
        assert_eq!(profile.name.as_deref(), Some("Dana"));
    }
}
