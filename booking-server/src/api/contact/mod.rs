//! Contact API Module
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/contact | POST | 提交联系表单消息 |

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

/// Contact router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/contact", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", post(handler::create))
}
