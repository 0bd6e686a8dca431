//! Route API endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use courier_core::{CourierError, Point, Route};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::api::error_response;
use crate::state::{AppState, RouteRecord};

/// Request to plan a route.
#[derive(Debug, Deserialize)]
pub struct PlanRouteRequest {
    /// Delivery locations as `[x, y]` pairs.
    pub locations: Vec<Point>,

    /// Priority label per location; `null` counts as an unrecognized label.
    #[serde(default)]
    pub priorities: Vec<Option<String>>,
}

impl PlanRouteRequest {
    /// Labels with missing entries replaced by the empty string.
    pub fn labels(&self) -> Vec<&str> {
        self.priorities
            .iter()
            .map(|p| p.as_deref().unwrap_or(""))
            .collect()
    }
}

/// Response with a stored route.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub id: Uuid,
    pub route: Route,
    pub total_distance: f64,
    pub stops: usize,
    pub created_at: String,
}

impl From<RouteRecord> for RouteResponse {
    fn from(record: RouteRecord) -> Self {
        Self {
            id: record.id,
            stops: record.plan.stops(),
            route: record.plan.route,
            total_distance: record.plan.total_distance,
            created_at: record.created_at.to_rfc3339(),
        }
    }
}

/// Plan and store a route.
pub async fn create_route(
    State(state): State<AppState>,
    Json(req): Json<PlanRouteRequest>,
) -> Result<(StatusCode, Json<RouteResponse>), (StatusCode, String)> {
    let plan = state
        .plan_route(&req.locations, &req.labels())
        .map_err(error_response)?;

    let record = state.store_route(plan).await;
    info!(
        "Planned route {} with {} stops, distance {:.2}",
        record.id,
        record.plan.stops(),
        record.plan.total_distance
    );

    Ok((StatusCode::CREATED, Json(record.into())))
}

/// Get a route by ID.
pub async fn get_route(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RouteResponse>, (StatusCode, String)> {
    let record = state
        .get_route(id)
        .await
        .ok_or_else(|| error_response(CourierError::not_found("Route", id)))?;

    Ok(Json(record.into()))
}

/// List all routes.
pub async fn list_routes(State(state): State<AppState>) -> Json<Vec<RouteResponse>> {
    let records = state.list_routes().await;
    Json(records.into_iter().map(RouteResponse::from).collect())
}
