//! Application state wiring all services together.
//!
//! `AppState` pins the generic `ChatService` to the concrete infra
//! implementations and wraps it in a single `tokio::sync::Mutex`.
//! Axum handles requests concurrently, but every mutating operation on
//! the session store goes through this one lock -- the single
//! mutual-exclusion section the concurrency model calls for; there is
//! no per-session locking.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::Mutex;

use murmur_core::chat::service::{ChatOptions, ChatService};
use murmur_infra::config::{api_key_from_env, load_config, resolve_data_dir, API_KEY_ENV};
use murmur_infra::llm::openai_compat::OpenAiCompatibleProvider;
use murmur_infra::snapshot::JsonSnapshotStore;
use murmur_types::config::MurmurConfig;

/// The service generics pinned to the infra implementations.
pub type ConcreteChatService = ChatService<OpenAiCompatibleProvider, JsonSnapshotStore>;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<Mutex<ConcreteChatService>>,
    pub config: MurmurConfig,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Initialize the application state: resolve the data directory,
    /// load configuration, wire the provider and snapshot store, and
    /// restore persisted chats.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_config(&data_dir).await;

        let api_key = api_key_from_env()
            .ok_or_else(|| anyhow::anyhow!("{API_KEY_ENV} is not set; export your API key first"))?;
        let provider = OpenAiCompatibleProvider::groq(api_key, &config.model);
        let snapshots = JsonSnapshotStore::new(&data_dir);

        let options = ChatOptions {
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        };
        let service = ChatService::load(provider, snapshots, options).await;

        Ok(Self {
            service: Arc::new(Mutex::new(service)),
            config,
            data_dir,
        })
    }
}
