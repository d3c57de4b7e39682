//! Reviews API Handlers

use axum::{Json, extract::State};
use shared::ApiResponse;
use shared::models::Review;

use crate::core::ServerState;
use crate::utils::ok;

/// 获取顾客评价列表
pub async fn get(State(state): State<ServerState>) -> Json<ApiResponse<Vec<Review>>> {
    ok(state.content.reviews().to_vec())
}
