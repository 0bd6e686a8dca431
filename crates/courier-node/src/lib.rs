//! # Courier Node
//!
//! HTTP service exposing Courier route planning.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod api;
pub mod config;
pub mod state;

pub use config::NodeConfig;
pub use state::AppState;

/// Build the planning router over `state`.
///
/// Every route is open to cross-origin callers; requests are traced.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(api::health::health_check))
        .route(
            "/api/v1/routes",
            post(api::routes::create_route).get(api::routes::list_routes),
        )
        .route("/api/v1/routes/simulate", post(api::simulate::simulate_route))
        // The literal `simulate` segment takes precedence over `:id`.
        .route("/api/v1/routes/:id", get(api::routes::get_route))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
