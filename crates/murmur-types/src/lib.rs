//! Shared domain types for Murmur.
//!
//! This crate contains the core domain types used across the Murmur
//! chat-session manager: sessions, turns, the user profile, persisted
//! snapshot documents, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
pub mod profile;
pub mod snapshot;
