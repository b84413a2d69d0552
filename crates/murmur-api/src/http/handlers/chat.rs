//! The ask endpoint.
//!
//! POST /api/v1/chat/ask
//!
//! Runs one conversation turn against the current chat: profile memory
//! update, context-window submission to the completion gateway, and
//! commit of both turns on success. A gateway failure still returns
//! 200 with a degraded text response -- it is not an HTTP error.

use std::time::Instant;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use murmur_core::chat::service::AskReply;

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Request body for the ask endpoint.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    /// The user's utterance. Empty or whitespace-only input
    /// short-circuits with a fixed prompt and no state change.
    #[serde(default)]
    pub message: String,
}

/// POST /api/v1/chat/ask - Run one conversation turn.
pub async fn ask(
    State(state): State<AppState>,
    Json(body): Json<AskRequest>,
) -> Result<ApiResponse<AskReply>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();

    let reply = state.service.lock().await.ask(&body.message).await;

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(ApiResponse::success(reply, request_id, elapsed))
}
