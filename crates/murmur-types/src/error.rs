use thiserror::Error;

/// Errors related to session store operations.
///
/// `NotFound` is reported and non-fatal: the caller leaves the current
/// session unchanged and continues.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("chat not found")]
    NotFound,
}

/// Errors from snapshot persistence.
///
/// Callers log and absorb these -- a persistence failure never stops
/// the process; state continues in-memory.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
