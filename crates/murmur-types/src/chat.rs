//! Chat session and turn types for Murmur.
//!
//! These types model one conversation thread: the full display history
//! shown to the user, and the bounded context window submitted to the
//! completion API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Re-export MessageRole from the llm module (turns and completion
// requests share it).
pub use crate::llm::MessageRole;

/// Maximum number of entries retained in a session's context window.
pub const CONTEXT_WINDOW_LIMIT: usize = 12;

/// Maximum title length before the truncation rule applies.
pub const TITLE_MAX_LEN: usize = 50;

/// Default title for a session with no user turns yet.
pub const DEFAULT_TITLE: &str = "New Chat";

/// A single turn in the full display history.
///
/// Immutable once appended. Timestamps are for display and export only;
/// ordering is insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// A reduced projection of a turn used only for API submission.
///
/// No timestamp -- the completion provider only sees role and content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextMessage {
    pub role: MessageRole,
    pub content: String,
}

impl From<&ChatMessage> for ContextMessage {
    fn from(msg: &ChatMessage) -> Self {
        Self {
            role: msg.role.clone(),
            content: msg.content.clone(),
        }
    }
}

/// One independent conversation thread.
///
/// `messages` is the unbounded display history; `context_window` holds
/// at most [`CONTEXT_WINDOW_LIMIT`] of the most recent turns. Invariant:
/// `message_count == messages.len()`.
///
/// Every field tolerates absence on deserialization so snapshots written
/// by older versions keep loading after field additions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: String,
    #[serde(default = "default_title")]
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub context_window: Vec<ContextMessage>,
    #[serde(default)]
    pub message_count: u32,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl ChatSession {
    /// Create an empty session with the given id.
    pub fn new(id: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: DEFAULT_TITLE.to_string(),
            created_at: now,
            last_updated: now,
            messages: Vec::new(),
            context_window: Vec::new(),
            message_count: 0,
        }
    }

    /// A ≤50-char preview of the first message, for list views.
    ///
    /// "No messages" when the session is empty; truncated content gets
    /// an ellipsis marker.
    pub fn preview(&self) -> String {
        match self.messages.first() {
            None => "No messages".to_string(),
            Some(first) => {
                let content = &first.content;
                if content.chars().count() > TITLE_MAX_LEN {
                    let head: String = content.chars().take(TITLE_MAX_LEN).collect();
                    format!("{head}...")
                } else {
                    content.clone()
                }
            }
        }
    }
}

/// Summary row for the session list view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: String,
    pub title: String,
    pub last_updated: DateTime<Utc>,
    pub message_count: u32,
    pub preview: String,
    pub is_current: bool,
}
