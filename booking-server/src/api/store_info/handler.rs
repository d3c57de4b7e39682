//! Store Info API Handlers

use axum::{Json, extract::State};
use shared::ApiResponse;
use shared::models::StoreInfo;

use crate::core::ServerState;
use crate::utils::ok;

/// 获取门店信息
pub async fn get(State(state): State<ServerState>) -> Json<ApiResponse<StoreInfo>> {
    ok(state.content.store_info().clone())
}
