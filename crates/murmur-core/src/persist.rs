//! SnapshotStore trait definition.
//!
//! Persistence port for the full-state snapshot document and the
//! per-session export files. Implementations live in `murmur-infra`
//! (e.g., `JsonSnapshotStore`). Uses native async fn in traits
//! (RPITIT, Rust 2024 edition).

use std::path::PathBuf;

use murmur_types::error::PersistenceError;
use murmur_types::snapshot::{SessionExport, StateSnapshot};

/// Repository trait for snapshot persistence.
pub trait SnapshotStore: Send + Sync {
    /// Write the full state snapshot, overwriting the previous one.
    fn save(
        &self,
        snapshot: &StateSnapshot,
    ) -> impl std::future::Future<Output = Result<(), PersistenceError>> + Send;

    /// Read the snapshot, if one exists.
    ///
    /// `Ok(None)` means no snapshot has been written yet; errors are
    /// for unreadable or unparsable files. Callers absorb both by
    /// falling back to default state.
    fn load(
        &self,
    ) -> impl std::future::Future<Output = Result<Option<StateSnapshot>, PersistenceError>> + Send;

    /// Write a timestamped single-session export, returning its path.
    fn export_session(
        &self,
        export: &SessionExport,
    ) -> impl std::future::Future<Output = Result<PathBuf, PersistenceError>> + Send;
}
