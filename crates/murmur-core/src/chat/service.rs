//! Chat service orchestrating the full conversation lifecycle.
//!
//! `ChatService` coordinates the session store, profile memory, prompt
//! construction, the completion gateway, and the amortized snapshot
//! policy. Generic over `CompletionProvider` and `SnapshotStore` so
//! `murmur-core` never depends on `murmur-infra`.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use murmur_types::chat::{ChatMessage, ContextMessage, MessageRole, SessionSummary};
use murmur_types::error::{PersistenceError, SessionError};
use murmur_types::llm::CompletionRequest;
use murmur_types::profile::UserProfile;
use murmur_types::snapshot::SessionExport;

use crate::chat::store::SessionStore;
use crate::chat::{title, window};
use crate::llm::prompt::build_system_prompt;
use crate::llm::provider::CompletionProvider;
use crate::memory::extractor::extract_user_info;
use crate::persist::SnapshotStore;

/// Fixed reply for empty or whitespace-only input.
pub const EMPTY_INPUT_PROMPT: &str = "Please say something!";

/// A snapshot is written every N completed messages.
const SAVE_INTERVAL: u32 = 4;

/// Completion-request parameters.
#[derive(Debug, Clone)]
pub struct ChatOptions {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl Default for ChatOptions {
    fn default() -> Self {
        Self {
            model: "llama-3.1-8b-instant".to_string(),
            max_tokens: 100,
            temperature: 0.7,
        }
    }
}

/// Result of an ask turn.
///
/// A gateway failure still produces a reply -- the degraded text
/// embeds the error description and the session fields reflect the
/// untouched state.
#[derive(Debug, Clone, Serialize)]
pub struct AskReply {
    pub response: String,
    pub user_name: Option<String>,
    pub message_count: u32,
    pub chat_id: Option<String>,
    pub chat_title: Option<String>,
}

/// Result of switching to another session.
#[derive(Debug, Clone, Serialize)]
pub struct SwitchReply {
    pub chat_id: String,
    pub messages: Vec<ChatMessage>,
    pub title: String,
    pub message_count: u32,
}

/// Result of exporting the current session to disk.
#[derive(Debug, Clone, Serialize)]
pub struct ExportReceipt {
    pub filename: String,
    pub message_count: u32,
}

/// The current session's full data for client-side download.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshotView {
    pub chat_id: String,
    pub title: String,
    pub export_date: DateTime<Utc>,
    pub user_profile: UserProfile,
    pub total_messages: u32,
    pub messages: Vec<ChatMessage>,
}

/// Aggregate profile and session statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MemoryInfo {
    pub user_profile: UserProfile,
    pub current_chat_messages: u32,
    pub total_messages_all_chats: u32,
    pub total_chats: u32,
    pub current_chat_id: Option<String>,
}

/// Orchestrates session lifecycle, profile memory, and the ask flow.
pub struct ChatService<P: CompletionProvider, S: SnapshotStore> {
    store: SessionStore,
    provider: P,
    snapshots: S,
    options: ChatOptions,
}

impl<P: CompletionProvider, S: SnapshotStore> ChatService<P, S> {
    /// Build a service from a previously persisted snapshot.
    ///
    /// A missing, unreadable, or unparsable snapshot degrades to
    /// default state with a logged warning -- startup never fails on
    /// persistence. One session is guaranteed to exist afterwards.
    pub async fn load(provider: P, snapshots: S, options: ChatOptions) -> Self {
        let mut store = match snapshots.load().await {
            Ok(Some(snapshot)) => {
                let store = SessionStore::from_snapshot(snapshot);
                info!(chats = store.session_count(), "Loaded chats from storage");
                store
            }
            Ok(None) => {
                info!("No saved chats found, starting fresh");
                SessionStore::new()
            }
            Err(err) => {
                warn!(error = %err, "Failed to load saved chats, starting fresh");
                SessionStore::new()
            }
        };
        store.ensure_current();

        Self {
            store,
            provider,
            snapshots,
            options,
        }
    }

    /// Read access to the underlying store (status reporting, tests).
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    // --- Session lifecycle ---

    /// Create a new session and make it current. Returns its id.
    pub async fn create_session(&mut self) -> String {
        let id = self.store.create();
        self.save_state().await;
        id
    }

    /// Session summaries (most recently updated first) plus the
    /// current id.
    pub fn list_sessions(&self) -> (Vec<SessionSummary>, Option<String>) {
        (
            self.store.list(),
            self.store.current_id().map(str::to_string),
        )
    }

    /// Switch to another session, returning its full display history.
    ///
    /// On `NotFound` the current session is unchanged.
    pub async fn switch_session(&mut self, id: &str) -> Result<SwitchReply, SessionError> {
        let reply = {
            let session = self.store.switch(id)?;
            SwitchReply {
                chat_id: session.id.clone(),
                messages: session.messages.clone(),
                title: session.title.clone(),
                message_count: session.message_count,
            }
        };
        self.save_state().await;
        Ok(reply)
    }

    /// Delete a session, returning the id that is current afterwards.
    pub async fn delete_session(&mut self, id: &str) -> Result<String, SessionError> {
        let new_current = self.store.delete(id)?;
        self.save_state().await;
        Ok(new_current)
    }

    // --- The ask flow ---

    /// Run one conversation turn.
    ///
    /// Empty input short-circuits with a fixed prompt and no state
    /// mutation. Otherwise: profile memory update, system preamble,
    /// staged context window to the gateway, and -- only on a confirmed
    /// response -- commit of both turns, title freeze, counters, and
    /// the amortized save policy. A failed call leaves the session
    /// untouched and surfaces the error as degraded text.
    pub async fn ask(&mut self, raw_message: &str) -> AskReply {
        let message = raw_message.trim();
        if message.is_empty() {
            return AskReply {
                response: EMPTY_INPUT_PROMPT.to_string(),
                user_name: self.store.profile().name.clone(),
                message_count: self.store.current().map_or(0, |s| s.message_count),
                chat_id: self.store.current_id().map(str::to_string),
                chat_title: self.store.current().map(|s| s.title.clone()),
            };
        }

        self.store.ensure_current();

        // Profile memory update runs before the completion call; a
        // learned name survives even if the call fails.
        extract_user_info(self.store.profile_mut(), message);
        let system_prompt = build_system_prompt(self.store.profile());

        // Stage the window with the new user turn; nothing is committed
        // to the session until the gateway confirms a response.
        let mut staged_window = self
            .store
            .current()
            .map(|s| s.context_window.clone())
            .unwrap_or_default();
        window::push(
            &mut staged_window,
            ContextMessage {
                role: MessageRole::User,
                content: message.to_string(),
            },
        );

        let request = CompletionRequest {
            model: self.options.model.clone(),
            messages: staged_window.clone(),
            system: Some(system_prompt),
            max_tokens: self.options.max_tokens,
            temperature: Some(self.options.temperature),
        };

        match self.provider.complete(&request).await {
            Ok(response) => {
                let reply = response.content.trim().to_string();
                self.commit_turn(message, &reply, staged_window).await
            }
            Err(err) => {
                warn!(provider = self.provider.name(), error = %err, "Completion call failed");
                AskReply {
                    response: format!("Error: {err}"),
                    user_name: self.store.profile().name.clone(),
                    message_count: self.store.current().map_or(0, |s| s.message_count),
                    chat_id: self.store.current_id().map(str::to_string),
                    chat_title: self.store.current().map(|s| s.title.clone()),
                }
            }
        }
    }

    /// Commit a confirmed exchange to the current session.
    async fn commit_turn(
        &mut self,
        user_message: &str,
        reply: &str,
        staged_window: Vec<ContextMessage>,
    ) -> AskReply {
        let now = Utc::now();
        let user_name = self.store.profile().name.clone();

        let (chat_id, chat_title, message_count) = {
            let session = self
                .store
                .current_mut()
                .expect("current session exists after ensure_current");

            session.messages.push(ChatMessage {
                role: MessageRole::User,
                content: user_message.to_string(),
                created_at: now,
            });

            // Title freezes on the first user turn.
            let user_turns = session
                .messages
                .iter()
                .filter(|m| m.role == MessageRole::User)
                .count();
            if user_turns == 1 {
                session.title = title::derive_title(user_message);
            }

            session.messages.push(ChatMessage {
                role: MessageRole::Assistant,
                content: reply.to_string(),
                created_at: now,
            });

            session.context_window = staged_window;
            window::push(
                &mut session.context_window,
                ContextMessage {
                    role: MessageRole::Assistant,
                    content: reply.to_string(),
                },
            );

            session.last_updated = now;
            session.message_count = session.messages.len() as u32;

            (
                session.id.clone(),
                session.title.clone(),
                session.message_count,
            )
        };

        // Amortized write policy: snapshot every 4th completed message.
        if message_count % SAVE_INTERVAL == 0 {
            self.save_state().await;
        }

        AskReply {
            response: reply.to_string(),
            user_name,
            message_count,
            chat_id: Some(chat_id),
            chat_title: Some(chat_title),
        }
    }

    // --- Export & reporting ---

    /// Write the current session to a timestamped export file.
    pub async fn export_session(&mut self) -> Result<ExportReceipt, PersistenceError> {
        self.store.ensure_current();
        let session = self
            .store
            .current()
            .expect("current session exists after ensure_current");

        let export = SessionExport {
            chat_id: session.id.clone(),
            title: session.title.clone(),
            exported_at: Utc::now(),
            user_profile: self.store.profile().clone(),
            messages: session.messages.clone(),
        };
        let message_count = session.messages.len() as u32;

        let path = self.snapshots.export_session(&export).await?;
        info!(path = %path.display(), "Exported chat");

        Ok(ExportReceipt {
            filename: path.display().to_string(),
            message_count,
        })
    }

    /// The current session's metadata, profile, and full history.
    pub fn session_snapshot(&mut self) -> SessionSnapshotView {
        self.store.ensure_current();
        let session = self
            .store
            .current()
            .expect("current session exists after ensure_current");

        SessionSnapshotView {
            chat_id: session.id.clone(),
            title: session.title.clone(),
            export_date: Utc::now(),
            user_profile: self.store.profile().clone(),
            total_messages: session.messages.len() as u32,
            messages: session.messages.clone(),
        }
    }

    /// Profile plus aggregate session statistics.
    pub fn memory_info(&self) -> MemoryInfo {
        MemoryInfo {
            user_profile: self.store.profile().clone(),
            current_chat_messages: self.store.current().map_or(0, |s| s.messages.len() as u32),
            total_messages_all_chats: self.store.total_messages() as u32,
            total_chats: self.store.session_count() as u32,
            current_chat_id: self.store.current_id().map(str::to_string),
        }
    }

    /// Persist the full state, absorbing any failure.
    ///
    /// A snapshot write error is logged and the process continues
    /// in-memory; persistence is never fatal.
    async fn save_state(&self) {
        if let Err(err) = self.snapshots.save(&self.store.to_snapshot()).await {
            warn!(error = %err, "Failed to save chats, continuing in-memory");
        }
    }
}
