mod plan;
mod sessions;

pub use plan::*;
pub use sessions::*;

use crate::state::AppState;
use axum::routing::{get, post};
use std::sync::Arc;

pub fn router(state: Arc<AppState>) -> axum::Router {
    axum::Router::new()
        .route("/health", get(health))
        .route("/plan", post(plan))
        .route("/sessions/{id}", get(session))
        .route("/sessions/{id}/trips", post(submit_trip))
        .with_state(state)
}

pub async fn health() -> &'static str {
    "OK"
}
