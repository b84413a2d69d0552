//! Session lifecycle HTTP handlers.
//!
//! Endpoints:
//! - POST   /api/v1/sessions              - Create a chat and make it current
//! - GET    /api/v1/sessions              - List all chats, most recent first
//! - POST   /api/v1/sessions/{id}/switch  - Make another chat current
//! - DELETE /api/v1/sessions/{id}         - Delete a chat

use std::time::Instant;

use axum::extract::{Path, State};
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use murmur_core::chat::service::SwitchReply;
use murmur_types::chat::SessionSummary;

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Body of the session list response.
#[derive(Debug, Serialize)]
pub struct SessionListBody {
    pub chats: Vec<SessionSummary>,
    pub current_chat_id: Option<String>,
}

/// POST /api/v1/sessions - Create a new chat session.
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<ApiResponse<serde_json::Value>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();

    let chat_id = state.service.lock().await.create_session().await;

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(ApiResponse::success(
        json!({"chat_id": chat_id}),
        request_id,
        elapsed,
    ))
}

/// GET /api/v1/sessions - List chats sorted by last update.
pub async fn list_sessions(
    State(state): State<AppState>,
) -> Result<ApiResponse<SessionListBody>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();

    let (chats, current_chat_id) = state.service.lock().await.list_sessions();

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(ApiResponse::success(
        SessionListBody {
            chats,
            current_chat_id,
        },
        request_id,
        elapsed,
    ))
}

/// POST /api/v1/sessions/{id}/switch - Make another chat current.
///
/// Returns the chat's full display history; 404 leaves the current
/// chat unchanged.
pub async fn switch_session(
    State(state): State<AppState>,
    Path(chat_id): Path<String>,
) -> Result<ApiResponse<SwitchReply>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();

    let reply = state.service.lock().await.switch_session(&chat_id).await?;

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(ApiResponse::success(reply, request_id, elapsed))
}

/// DELETE /api/v1/sessions/{id} - Delete a chat.
///
/// Returns the id that is current after deletion.
pub async fn delete_session(
    State(state): State<AppState>,
    Path(chat_id): Path<String>,
) -> Result<ApiResponse<serde_json::Value>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();

    let new_current = state.service.lock().await.delete_session(&chat_id).await?;

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(ApiResponse::success(
        json!({"new_current_chat": new_current}),
        request_id,
        elapsed,
    ))
}
