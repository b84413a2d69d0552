//! Profile memory, export, and snapshot handlers.
//!
//! Endpoints:
//! - POST /api/v1/sessions/current/export   - Write the current chat to a file
//! - GET  /api/v1/sessions/current/snapshot - Current chat data for download
//! - GET  /api/v1/memory                    - Profile and aggregate statistics

use std::time::Instant;

use axum::extract::State;
use uuid::Uuid;

use murmur_core::chat::service::{ExportReceipt, MemoryInfo, SessionSnapshotView};

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// POST /api/v1/sessions/current/export - Export the current chat.
pub async fn export_session(
    State(state): State<AppState>,
) -> Result<ApiResponse<ExportReceipt>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();

    let receipt = state.service.lock().await.export_session().await?;

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(ApiResponse::success(receipt, request_id, elapsed))
}

/// GET /api/v1/sessions/current/snapshot - Current chat for download.
pub async fn get_session_snapshot(
    State(state): State<AppState>,
) -> Result<ApiResponse<SessionSnapshotView>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();

    let view = state.service.lock().await.session_snapshot();

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(ApiResponse::success(view, request_id, elapsed))
}

/// GET /api/v1/memory - Profile and aggregate session statistics.
pub async fn get_memory_info(
    State(state): State<AppState>,
) -> Result<ApiResponse<MemoryInfo>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();

    let info = state.service.lock().await.memory_info();

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(ApiResponse::success(info, request_id, elapsed))
}
