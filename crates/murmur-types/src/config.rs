//! Global configuration for Murmur.
//!
//! Deserialized from `config.toml` in the data directory. Every field
//! has a default so a partial (or absent) file still yields a working
//! configuration.

use serde::{Deserialize, Serialize};

/// Completion-request and server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MurmurConfig {
    /// Model identifier sent with every completion request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Token budget cap per completion.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Bind host for the HTTP server.
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port for the HTTP server.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_model() -> String {
    "llama-3.1-8b-instant".to_string()
}

fn default_max_tokens() -> u32 {
    100
}

fn default_temperature() -> f64 {
    0.7
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for MurmurConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            host: default_host(),
            port: default_port(),
        }
    }
}
