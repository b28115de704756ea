pub mod health;

use axum::{routing::get, Router};

use crate::packing::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Packing API
        .route("/api/v1/packings", get(handlers::handle_list_sources))
        .route("/api/v1/packings/:source", get(handlers::handle_get_packing))
        .route(
            "/api/v1/packings/:source/render",
            get(handlers::handle_get_render_plan),
        )
        .with_state(state)
}
