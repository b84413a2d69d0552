//! Infrastructure layer for Murmur.
//!
//! Contains implementations of the ports defined in `murmur-core`:
//! the OpenAI-compatible completion client and the JSON snapshot
//! store, plus configuration loading and data-directory resolution.

pub mod config;
pub mod llm;
pub mod snapshot;
