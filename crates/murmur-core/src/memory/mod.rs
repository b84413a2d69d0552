//! User profile memory for Murmur.
//!
//! Facts about the user are extracted heuristically from their
//! utterances and injected into every completion request's system
//! preamble.

pub mod extractor;
