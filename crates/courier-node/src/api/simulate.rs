//! Simulation endpoint.

use axum::{extract::State, http::StatusCode, Json};
use courier_core::Route;
use serde::Serialize;

use crate::api::error_response;
use crate::api::routes::PlanRouteRequest;
use crate::state::AppState;

/// Response from simulation.
#[derive(Debug, Serialize)]
pub struct SimulateResponse {
    pub route: Route,
    pub total_distance: f64,
    pub legs: Vec<f64>,
}

/// Plan a route without storing it.
pub async fn simulate_route(
    State(state): State<AppState>,
    Json(req): Json<PlanRouteRequest>,
) -> Result<Json<SimulateResponse>, (StatusCode, String)> {
    let plan = state
        .plan_route(&req.locations, &req.labels())
        .map_err(error_response)?;

    Ok(Json(SimulateResponse {
        legs: plan.legs(),
        route: plan.route,
        total_distance: plan.total_distance,
    }))
}
