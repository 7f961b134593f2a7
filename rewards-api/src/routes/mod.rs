//! API route handlers

pub mod health;
pub mod points;

use axum::{routing::get, routing::post, Router};

use crate::state::AppState;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        // Points endpoints
        .route("/add", post(points::add_points))
        .route("/spend", post(points::spend_points))
        .route("/balance", get(points::get_balance))
        // State
        .with_state(state)
}
