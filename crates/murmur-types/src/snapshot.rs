//! Persisted snapshot and export document types for Murmur.
//!
//! `StateSnapshot` is the single JSON document written on save and read
//! on startup. Its top-level key names are the stable on-disk layout:
//! `timestamp`, `global_user_profile`, `all_chats`, `current_chat_id`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::chat::{ChatMessage, ChatSession};
use crate::profile::UserProfile;

/// The full application state as one serialized document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub global_user_profile: UserProfile,
    #[serde(default)]
    pub all_chats: HashMap<String, ChatSession>,
    #[serde(default)]
    pub current_chat_id: Option<String>,
}

/// A timestamped export of one session's metadata, profile, and full
/// message history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionExport {
    pub chat_id: String,
    pub title: String,
    pub exported_at: DateTime<Utc>,
    pub user_profile: UserProfile,
    pub messages: Vec<ChatMessage>,
}
