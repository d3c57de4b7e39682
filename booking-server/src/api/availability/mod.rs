//! Availability API Module
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/availability?date=YYYY-MM-DD | GET | 查询某日可订时段 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Availability router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/availability", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", get(handler::get))
}
