//! Contact API Handlers

use axum::{Json, extract::State};
use chrono::Utc;
use shared::ApiResponse;
use shared::models::ContactMessage;
use shared::request::ContactMessageRequest;

use crate::core::ServerState;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_email, validate_required_text,
};
use crate::utils::{AppError, AppResult, ok};

/// 提交联系表单消息
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ContactMessageRequest>,
) -> AppResult<Json<ApiResponse<ContactMessage>>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_email(&payload.email)?;
    validate_required_text(&payload.message, "message", MAX_NOTE_LEN)?;

    let message = ContactMessage {
        id: uuid::Uuid::new_v4().to_string(),
        name: payload.name.trim().to_string(),
        email: payload.email.trim().to_string(),
        message: payload.message.trim().to_string(),
        created_at: Utc::now().timestamp_millis(),
    };

    state
        .storage
        .insert_contact_message(&message)
        .map_err(|e| AppError::storage(e.to_string()))?;

    tracing::info!(id = %message.id, "Contact message received");
    Ok(ok(message))
}
