//! Session title derivation.
//!
//! Titles come from the first user turn and are computed once, never
//! recomputed. Truncation rule: content of 50 chars or fewer is used
//! unchanged; longer content keeps the first 47 chars plus an ellipsis
//! marker.

use murmur_types::chat::TITLE_MAX_LEN;

/// Number of characters kept before the ellipsis marker.
const TRUNCATED_LEN: usize = 47;

/// Derive a session title from the first user message.
pub fn derive_title(first_message: &str) -> String {
    if first_message.chars().count() > TITLE_MAX_LEN {
        let head: String = first_message.chars().take(TRUNCATED_LEN).collect();
        format!("{head}...")
    } else {
        first_message.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_message_unchanged() {
        assert_eq!(derive_title("Plan my trip to Tokyo"), "Plan my trip to Tokyo");
    }

    #[test]
    fn test_exactly_fifty_chars_unchanged() {
        let msg = "x".repeat(50);
        assert_eq!(derive_title(&msg), msg);
    }

    #[test]
    fn test_long_message_truncated_to_47_plus_ellipsis() {
        let msg = "a".repeat(60);
        let title = derive_title(&msg);
        assert_eq!(title, format!("{}...", "a".repeat(47)));
        assert_eq!(title.chars().count(), 50);
    }

    #[test]
    fn test_truncation_counts_chars_not_bytes() {
        let msg = "é".repeat(60);
        let title = derive_title(&msg);
        assert_eq!(title.chars().count(), 50);
        assert!(title.ends_with("..."));
    }
}
