//! User profile memory types for Murmur.
//!
//! The profile is process-wide and shared across all sessions: facts
//! learned about the user persist across restarts via the snapshot.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Number of recent facts surfaced in the system preamble.
pub const SURFACED_FACT_COUNT: usize = 3;

/// Cross-session facts learned about the user.
///
/// `name` is first-write-wins: once recorded it is never overwritten.
/// `preferences` is reserved for future extraction logic and is never
/// populated today. `important_facts` is append-only and unbounded;
/// only the last [`SURFACED_FACT_COUNT`] entries reach the prompt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub preferences: HashMap<String, String>,
    #[serde(default)]
    pub important_facts: Vec<String>,
}

impl UserProfile {
    /// The most recent facts, oldest first, capped at
    /// [`SURFACED_FACT_COUNT`].
    pub fn recent_facts(&self) -> &[String] {
        let len = self.important_facts.len();
        &self.important_facts[len.saturating_sub(SURFACED_FACT_COUNT)..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_blank() {
        let profile = UserProfile::default();
        assert!(profile.name.is_none());
        assert!(profile.preferences.is_empty());
        assert!(profile.important_facts.is_empty());
    }

    #[test]
    fn test_recent_facts_under_cap() {
        let profile = UserProfile {
            important_facts: vec!["a".to_string(), "b".to_string()],
            ..Default::default()
        };
        assert_eq!(profile.recent_facts(), ["a", "b"]);
    }

    #[test]
    fn test_recent_facts_caps_at_last_three() {
        let profile = UserProfile {
            important_facts: (1..=5).map(|i| format!("fact {i}")).collect(),
            ..Default::default()
        };
        assert_eq!(profile.recent_facts(), ["fact 3", "fact 4", "fact 5"]);
    }

    #[test]
    fn test_profile_deserialize_tolerates_missing_fields() {
        let profile: UserProfile = serde_json::from_str("{}").unwrap();
        assert!(profile.name.is_none());
        assert!(profile.important_facts.is_empty());
    }
}
