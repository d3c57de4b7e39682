//! Reviews API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Reviews router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/reviews", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", get(handler::get))
}
