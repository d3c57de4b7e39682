//! Menu API Handlers

use axum::{Json, extract::State};
use shared::ApiResponse;
use shared::models::Menu;

use crate::core::ServerState;
use crate::utils::ok;

/// 获取菜单
pub async fn get(State(state): State<ServerState>) -> Json<ApiResponse<Menu>> {
    ok(state.content.menu().clone())
}
