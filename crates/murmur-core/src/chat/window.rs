//! Context window management.
//!
//! The context window is the bounded, most-recent subset of turns
//! submitted to the completion API; the unbounded display history is
//! never touched here. Eviction is FIFO: when the window exceeds
//! [`CONTEXT_WINDOW_LIMIT`] entries, the oldest are discarded.

use murmur_types::chat::{ContextMessage, CONTEXT_WINDOW_LIMIT};

/// Append a turn to the window, then trim to the limit.
pub fn push(window: &mut Vec<ContextMessage>, message: ContextMessage) {
    window.push(message);
    trim(window);
}

/// Retain only the most recent [`CONTEXT_WINDOW_LIMIT`] entries.
pub fn trim(window: &mut Vec<ContextMessage>) {
    if window.len() > CONTEXT_WINDOW_LIMIT {
        let excess = window.len() - CONTEXT_WINDOW_LIMIT;
        window.drain(..excess);
    }
}
