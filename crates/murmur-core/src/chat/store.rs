//! In-memory session store.
//!
//! `SessionStore` owns the full application state: the session
//! collection, the current-session pointer, and the cross-session user
//! profile. Invariant: whenever the collection is non-empty, the
//! current pointer references an existing entry; operations that could
//! leave it dangling re-select or lazily create a session.

use std::collections::HashMap;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use murmur_types::chat::{ChatSession, SessionSummary};
use murmur_types::error::SessionError;
use murmur_types::profile::UserProfile;
use murmur_types::snapshot::StateSnapshot;

/// Length of the compact session identifier.
const SESSION_ID_LEN: usize = 8;

/// Owns the session collection, current pointer, and user profile.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<String, ChatSession>,
    current_id: Option<String>,
    profile: UserProfile,
}

/// Generate a fresh compact session identifier.
///
/// Truncated from a random UUIDv4, so collisions are negligible at the
/// session counts a single process sees.
fn new_session_id() -> String {
    Uuid::new_v4().simple().to_string()[..SESSION_ID_LEN].to_string()
}

impl SessionStore {
    /// Create an empty store with a blank profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from a loaded snapshot.
    ///
    /// A stale `current_chat_id` pointing at a missing session is
    /// dropped; `ensure_current` will re-select on first use.
    pub fn from_snapshot(snapshot: StateSnapshot) -> Self {
        let current_id = snapshot
            .current_chat_id
            .filter(|id| snapshot.all_chats.contains_key(id));
        Self {
            sessions: snapshot.all_chats,
            current_id,
            profile: snapshot.global_user_profile,
        }
    }

    /// Serialize the full store state into a snapshot document.
    pub fn to_snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            timestamp: Utc::now(),
            global_user_profile: self.profile.clone(),
            all_chats: self.sessions.clone(),
            current_chat_id: self.current_id.clone(),
        }
    }

    /// Allocate a new empty session and make it current.
    ///
    /// Returns the new session's id. No failure mode.
    pub fn create(&mut self) -> String {
        let id = new_session_id();
        let session = ChatSession::new(id.clone());
        self.sessions.insert(id.clone(), session);
        self.current_id = Some(id.clone());
        info!(chat_id = %id, "Created new chat");
        id
    }

    /// Make `id` the current session and return it.
    ///
    /// On `NotFound` the current pointer is left unchanged.
    pub fn switch(&mut self, id: &str) -> Result<&ChatSession, SessionError> {
        if !self.sessions.contains_key(id) {
            return Err(SessionError::NotFound);
        }
        self.current_id = Some(id.to_string());
        info!(chat_id = %id, "Switched chat");
        Ok(&self.sessions[id])
    }

    /// Remove a session.
    ///
    /// If it was current, the oldest surviving session (by creation
    /// time, id as tie-break) becomes current; with no survivors a
    /// fresh empty session is created. Returns the current id after
    /// deletion.
    pub fn delete(&mut self, id: &str) -> Result<String, SessionError> {
        if self.sessions.remove(id).is_none() {
            return Err(SessionError::NotFound);
        }
        info!(chat_id = %id, "Deleted chat");

        let current_valid = self
            .current_id
            .as_ref()
            .is_some_and(|c| self.sessions.contains_key(c));
        if !current_valid {
            let survivor = self
                .sessions
                .values()
                .min_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)))
                .map(|s| s.id.clone());
            match survivor {
                Some(next) => {
                    debug!(chat_id = %next, "Re-selected current chat");
                    self.current_id = Some(next);
                }
                None => {
                    self.create();
                }
            }
        }

        Ok(self.current_id.clone().expect("current session after delete"))
    }

    /// Session summaries sorted by last update, most recent first.
    pub fn list(&self) -> Vec<SessionSummary> {
        let mut summaries: Vec<SessionSummary> = self
            .sessions
            .values()
            .map(|s| SessionSummary {
                id: s.id.clone(),
                title: s.title.clone(),
                last_updated: s.last_updated,
                message_count: s.message_count,
                preview: s.preview(),
                is_current: self.current_id.as_deref() == Some(s.id.as_str()),
            })
            .collect();
        summaries.sort_by(|a, b| b.last_updated.cmp(&a.last_updated));
        summaries
    }

    /// Guarantee a valid current session, creating one if needed.
    ///
    /// Covers both the empty store and a dangling pointer.
    pub fn ensure_current(&mut self) -> String {
        match &self.current_id {
            Some(id) if self.sessions.contains_key(id) => id.clone(),
            _ => self.create(),
        }
    }

    /// The current session, if the pointer is valid.
    pub fn current(&self) -> Option<&ChatSession> {
        self.current_id
            .as_deref()
            .and_then(|id| self.sessions.get(id))
    }

    /// Mutable access to the current session, if the pointer is valid.
    pub fn current_mut(&mut self) -> Option<&mut ChatSession> {
        let id = self.current_id.clone()?;
        self.sessions.get_mut(&id)
    }

    /// The current session id, if any.
    pub fn current_id(&self) -> Option<&str> {
        self.current_id.as_deref()
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut UserProfile {
        &mut self.profile
    }

    /// Number of sessions in the collection.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Total display-history turns across all sessions.
    pub fn total_messages(&self) -> usize {
        self.sessions.values().map(|s| s.messages.len()).sum()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_create_yields_distinct_ids_and_newest_is_current() {
        let mut store = SessionStore::new();
        let mut ids = std::collections::HashSet::new();
        for _ in 0..50 {
            let id = store.create();
            assert_eq!(id.len(), SESSION_ID_LEN);
            assert!(ids.insert(id.clone()));
            assert_eq!(store.current_id(), Some(id.as_str()));
        }
        assert_eq!(store.session_count(), 50);
    }

    #[test]
    fn test_switch_to_existing_session() {
        let mut store = SessionStore::new();
        let first = store.create();
        let second = store.create();
        assert_eq!(store.current_id(), Some(second.as_str()));

        let session = store.switch(&first).unwrap();
        assert_eq!(session.id, first);
        assert_eq!(store.current_id(), Some(first.as_str()));
    }

    #[test]
    fn test_switch_missing_leaves_current_unchanged() {
        let mut store = SessionStore::new();
        let id = store.create();
        let err = store.switch("deadbeef").unwrap_err();
        assert!(matches!(err, SessionError::NotFound));
        assert_eq!(store.current_id(), Some(id.as_str()));
    }

    #[test]
    fn test_delete_noncurrent_keeps_current() {
        let mut store = SessionStore::new();
        let first = store.create();
        let second = store.create();

        let current = store.delete(&first).unwrap();
        assert_eq!(current, second);
        assert_eq!(store.session_count(), 1);
    }

    #[test]
    fn test_delete_current_selects_oldest_survivor() {
        let mut store = SessionStore::new();
        let first = store.create();
        let second = store.create();
        let third = store.create();

        // Force distinct creation times so the survivor rule is exercised.
        store.sessions.get_mut(&first).unwrap().created_at =
            Utc::now() - Duration::seconds(30);
        store.sessions.get_mut(&second).unwrap().created_at =
            Utc::now() - Duration::seconds(20);

        let current = store.delete(&third).unwrap();
        assert_eq!(current, first);
        assert_eq!(store.current_id(), Some(first.as_str()));
    }

    #[test]
    fn test_delete_last_session_creates_fresh_one() {
        let mut store = SessionStore::new();
        let only = store.create();

        let current = store.delete(&only).unwrap();
        assert_ne!(current, only);
        assert_eq!(store.session_count(), 1);
        let fresh = store.current().unwrap();
        assert!(fresh.messages.is_empty());
        assert_eq!(fresh.message_count, 0);
    }

    #[test]
    fn test_delete_missing_reports_not_found() {
        let mut store = SessionStore::new();
        store.create();
        assert!(matches!(
            store.delete("deadbeef"),
            Err(SessionError::NotFound)
        ));
        assert_eq!(store.session_count(), 1);
    }

    #[test]
    fn test_list_sorted_by_last_updated_desc() {
        let mut store = SessionStore::new();
        let first = store.create();
        let second = store.create();
        let third = store.create();

        let base = Utc::now();
        store.sessions.get_mut(&first).unwrap().last_updated = base - Duration::seconds(10);
        store.sessions.get_mut(&second).unwrap().last_updated = base;
        store.sessions.get_mut(&third).unwrap().last_updated = base - Duration::seconds(5);

        let list = store.list();
        assert_eq!(list[0].id, second);
        assert_eq!(list[1].id, third);
        assert_eq!(list[2].id, first);
        assert!(list[0].is_current);
        assert!(!list[1].is_current);
    }

    #[test]
    fn test_ensure_current_creates_on_empty() {
        let mut store = SessionStore::new();
        assert!(store.current().is_none());
        let id = store.ensure_current();
        assert_eq!(store.current_id(), Some(id.as_str()));
        // Idempotent once valid.
        assert_eq!(store.ensure_current(), id);
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let mut store = SessionStore::new();
        let id = store.create();
        store.profile_mut().name = Some("Ava".to_string());
        store
            .profile_mut()
            .important_facts
            .push("User's name is Ava".to_string());

        let snapshot = store.to_snapshot();
        let restored = SessionStore::from_snapshot(snapshot);
        assert_eq!(restored.current_id(), Some(id.as_str()));
        assert_eq!(restored.session_count(), 1);
        assert_eq!(restored.profile().name.as_deref(), Some("Ava"));
    }

    #[test]
    fn test_from_snapshot_drops_dangling_current_pointer() {
        let snapshot = StateSnapshot {
            timestamp: Utc::now(),
            global_user_profile: UserProfile::default(),
            all_chats: HashMap::new(),
            current_chat_id: Some("deadbeef".to_string()),
        };
        let store = SessionStore::from_snapshot(snapshot);
        assert!(store.current_id().is_none());
    }
}
