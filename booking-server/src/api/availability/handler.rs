//! Availability API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use shared::ApiResponse;
use shared::models::AvailabilityView;

use crate::core::ServerState;
use crate::utils::time::{parse_date, today_in_tz};
use crate::utils::{AppResult, ok};

/// 查询参数
#[derive(Deserialize)]
pub struct AvailabilityQuery {
    /// 目标日期 (YYYY-MM-DD)
    date: String,
}

/// 查询某日的可订时段
///
/// 闭店日返回 `open: false` 和空列表；开放但满员的日期返回
/// `open: true` 和空列表，两者是不同的业务状态。
pub async fn get(
    State(state): State<ServerState>,
    Query(query): Query<AvailabilityQuery>,
) -> AppResult<Json<ApiResponse<AvailabilityView>>> {
    let date = parse_date(&query.date)?;
    let today = today_in_tz(state.config.timezone);
    let view = state.resolver.available_times(date, today);
    Ok(ok(view))
}
