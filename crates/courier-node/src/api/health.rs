//! Liveness report for the planning service.

use axum::{extract::State, Json};
use courier_planner::{PlannerConfig, RoutePlanner};
use serde::Serialize;

use crate::state::AppState;

/// What `/health` reports: liveness plus the limits the planner enforces.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub planner: PlannerConfig,
    pub routes_stored: usize,
}

/// `GET /health`
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let routes_stored = state.routes.read().await.len();

    Json(HealthResponse {
        status: "healthy",
        service: "courier-node",
        version: env!("CARGO_PKG_VERSION"),
        planner: state.planner.config().clone(),
        routes_stored,
    })
}
