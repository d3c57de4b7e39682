//! Reservations API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::ApiResponse;
use shared::models::Reservation;
use shared::request::ReservationRequest;

use crate::booking::RejectReason;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult, ok};

/// 提交一笔预订
///
/// 引擎内部重新推导可订性，绕过前端直接调接口
/// 也订不到闭店日或不存在的时刻。
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ReservationRequest>,
) -> AppResult<Json<ApiResponse<Reservation>>> {
    let reservation = state.engine.submit(&payload).map_err(|reason| match reason {
        RejectReason::Validation(msg) => AppError::Validation(msg),
        RejectReason::PartyTooLarge => AppError::PartyTooLarge,
        RejectReason::SlotFull => AppError::SlotFull(format!(
            "{} {} is fully booked, please pick another time",
            payload.date, payload.time
        )),
        RejectReason::Storage => AppError::storage("Failed to persist reservation"),
    })?;
    Ok(ok(reservation))
}

/// 按 id 查询预订
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Reservation>>> {
    let reservation = state
        .storage
        .get_reservation(&id)
        .map_err(|e| AppError::storage(e.to_string()))?
        .ok_or_else(|| AppError::not_found(format!("Reservation {id} not found")))?;
    Ok(ok(reservation))
}
