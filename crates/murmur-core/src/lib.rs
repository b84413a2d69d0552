//! Business logic and port definitions for Murmur.
//!
//! This crate defines the "ports" (the completion-provider and
//! snapshot-store traits) that the infrastructure layer implements.
//! It depends only on `murmur-types` -- never on `murmur-infra` or any
//! network/IO crate.

pub mod chat;
pub mod llm;
pub mod memory;
pub mod persist;
