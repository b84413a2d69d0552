//! Configuration and data-directory resolution for Murmur.
//!
//! Reads `config.toml` from the data directory (`~/.murmur/` in
//! production) and deserializes it into [`MurmurConfig`]. Falls back
//! to defaults when the file is missing or malformed. The completion
//! API key comes from the environment only, wrapped in
//! [`secrecy::SecretString`] so it never appears in logs.

use std::path::{Path, PathBuf};

use secrecy::SecretString;

use murmur_types::config::MurmurConfig;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "MURMUR_DATA_DIR";

/// Environment variable holding the completion API key.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// Resolve the data directory from environment or platform defaults.
///
/// Priority: `MURMUR_DATA_DIR`, then `~/.murmur`, then `./.murmur`
/// when no home directory can be determined.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }
    match dirs::home_dir() {
        Some(home) => home.join(".murmur"),
        None => PathBuf::from(".murmur"),
    }
}

/// Load configuration from `{data_dir}/config.toml`.
///
/// - Missing file: returns [`MurmurConfig::default()`].
/// - Unreadable or unparsable file: logs a warning, returns the
///   default.
pub async fn load_config(data_dir: &Path) -> MurmurConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return MurmurConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return MurmurConfig::default();
        }
    };

    match toml::from_str::<MurmurConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            MurmurConfig::default()
        }
    }
}

/// Read the completion API key from the environment.
pub fn api_key_from_env() -> Option<SecretString> {
    std::env::var(API_KEY_ENV).ok().map(SecretString::from)
}
