//! JSON file implementation of the [`SnapshotStore`] port.
//!
//! The full application state is one pretty-printed JSON document at
//! `{data_dir}/saved_chats/all_chats.json`. Writes go through a
//! temporary file and an atomic rename, so a crash mid-write leaves
//! the previous snapshot intact rather than a corrupt file. Exports
//! land next to it as `chat_{id}_{timestamp}.json`.

use std::path::{Path, PathBuf};

use murmur_core::persist::SnapshotStore;
use murmur_types::error::PersistenceError;
use murmur_types::snapshot::{SessionExport, StateSnapshot};

/// Directory under the data dir holding the snapshot and exports.
const STORAGE_DIR: &str = "saved_chats";

/// Name of the full-state snapshot document.
const SNAPSHOT_FILE: &str = "all_chats.json";

/// Timestamp suffix format for export filenames.
const EXPORT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Snapshot store writing JSON documents under the data directory.
pub struct JsonSnapshotStore {
    dir: PathBuf,
}

impl JsonSnapshotStore {
    /// Create a store rooted at `{data_dir}/saved_chats/`.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            dir: data_dir.join(STORAGE_DIR),
        }
    }

    /// Path of the snapshot document.
    pub fn snapshot_path(&self) -> PathBuf {
        self.dir.join(SNAPSHOT_FILE)
    }
}

impl SnapshotStore for JsonSnapshotStore {
    async fn save(&self, snapshot: &StateSnapshot) -> Result<(), PersistenceError> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let json = serde_json::to_string_pretty(snapshot)?;
        let path = self.snapshot_path();
        let tmp_path = self.dir.join(format!("{SNAPSHOT_FILE}.tmp"));

        // Write-then-rename keeps the previous snapshot readable if
        // the process dies mid-write.
        tokio::fs::write(&tmp_path, json).await?;
        tokio::fs::rename(&tmp_path, &path).await?;

        tracing::debug!(path = %path.display(), chats = snapshot.all_chats.len(), "Saved snapshot");
        Ok(())
    }

    async fn load(&self) -> Result<Option<StateSnapshot>, PersistenceError> {
        let path = self.snapshot_path();
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let snapshot = serde_json::from_str(&content)?;
        Ok(Some(snapshot))
    }

    async fn export_session(
        &self,
        export: &SessionExport,
    ) -> Result<PathBuf, PersistenceError> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let timestamp = export.exported_at.format(EXPORT_TIMESTAMP_FORMAT);
        let path = self
            .dir
            .join(format!("chat_{}_{timestamp}.json", export.chat_id));

        let json = serde_json::to_string_pretty(export)?;
        tokio::fs::write(&path, json).await?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::HashMap;
    use tempfile::TempDir;

    use murmur_types::chat::{ChatMessage, ChatSession, MessageRole};
    use murmur_types::profile::UserProfile;

    fn sample_snapshot() -> StateSnapshot {
        let mut all_chats = HashMap::new();
        let mut session = ChatSession::new("ab12cd34".to_string());
        session.messages.push(ChatMessage {
            role: MessageRole::User,
            content: "hello".to_string(),
            created_at: Utc::now(),
        });
        session.message_count = 1;
        all_chats.insert(session.id.clone(), session);

        StateSnapshot {
            timestamp: Utc::now(),
            global_user_profile: UserProfile {
                name: Some("Ava".to_string()),
                ..Default::default()
            },
            all_chats,
            current_chat_id: Some("ab12cd34".to_string()),
        }
    }

    #[tokio::test]
    async fn test_load_missing_file_returns_none() {
        let tmp = TempDir::new().unwrap();
        let store = JsonSnapshotStore::new(tmp.path());
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_load_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let store = JsonSnapshotStore::new(tmp.path());

        store.save(&sample_snapshot()).await.unwrap();
        let loaded = store.load().await.unwrap().unwrap();

        assert_eq!(loaded.current_chat_id.as_deref(), Some("ab12cd34"));
        assert_eq!(loaded.all_chats.len(), 1);
        assert_eq!(loaded.all_chats["ab12cd34"].messages.len(), 1);
        assert_eq!(loaded.global_user_profile.name.as_deref(), Some("Ava"));
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_snapshot() {
        let tmp = TempDir::new().unwrap();
        let store = JsonSnapshotStore::new(tmp.path());

        store.save(&sample_snapshot()).await.unwrap();

        let mut second = sample_snapshot();
        second.current_chat_id = None;
        second.all_chats.clear();
        store.save(&second).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert!(loaded.all_chats.is_empty());
        assert!(loaded.current_chat_id.is_none());

        // No temp file left behind after the rename.
        assert!(!tmp
            .path()
            .join(STORAGE_DIR)
            .join(format!("{SNAPSHOT_FILE}.tmp"))
            .exists());
    }

    #[tokio::test]
    async fn test_load_corrupt_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let store = JsonSnapshotStore::new(tmp.path());

        tokio::fs::create_dir_all(tmp.path().join(STORAGE_DIR))
            .await
            .unwrap();
        tokio::fs::write(store.snapshot_path(), "{ not json")
            .await
            .unwrap();

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, PersistenceError::Serialize(_)));
    }

    #[tokio::test]
    async fn test_export_filename_carries_id_and_timestamp() {
        let tmp = TempDir::new().unwrap();
        let store = JsonSnapshotStore::new(tmp.path());

        let export = SessionExport {
            chat_id: "ab12cd34".to_string(),
            title: "hello".to_string(),
            exported_at: Utc::now(),
            user_profile: UserProfile::default(),
            messages: Vec::new(),
        };
        let path = store.export_session(&export).await.unwrap();

        let name = path.file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("chat_ab12cd34_"));
        assert!(name.ends_with(".json"));
        assert!(path.exists());

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        let parsed: SessionExport = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.chat_id, "ab12cd34");
    }
}
