//! Application state.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use courier_core::{Point, Result, RoutePlan};
use courier_planner::{PlannerConfig, PriorityRoutePlanner, RoutePlanner};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Routes planned through the API.
    pub routes: Arc<RwLock<HashMap<Uuid, RouteRecord>>>,

    /// The planner engine.
    pub planner: Arc<PriorityRoutePlanner>,
}

/// A stored planning result.
#[derive(Debug, Clone)]
pub struct RouteRecord {
    pub id: Uuid,
    pub plan: RoutePlan,

    pub created_at: DateTime<Utc>,
}

impl AppState {
    /// Create a new application state.
    pub fn new() -> Self {
        Self::with_config(PlannerConfig::default())
    }

    /// Create application state whose planner uses `config`.
    pub fn with_config(config: PlannerConfig) -> Self {
        Self {
            routes: Arc::new(RwLock::new(HashMap::new())),
            planner: Arc::new(PriorityRoutePlanner::with_config(config)),
        }
    }

    /// Run the planner without storing anything.
    pub fn plan_route<S: AsRef<str>>(
        &self,
        locations: &[Point],
        priorities: &[S],
    ) -> Result<RoutePlan> {
        self.planner.plan(locations, priorities)
    }

    /// Store a plan and return its record.
    pub async fn store_route(&self, plan: RoutePlan) -> RouteRecord {
        let record = RouteRecord {
            id: Uuid::new_v4(),
            plan,
            created_at: Utc::now(),
        };

        let mut routes = self.routes.write().await;
        routes.insert(record.id, record.clone());
        record
    }

    /// Get a route by ID.
    pub async fn get_route(&self, id: Uuid) -> Option<RouteRecord> {
        let routes = self.routes.read().await;
        routes.get(&id).cloned()
    }

    /// List all routes, oldest first.
    pub async fn list_routes(&self) -> Vec<RouteRecord> {
        let routes = self.routes.read().await;
        let mut records: Vec<RouteRecord> = routes.values().cloned().collect();
        records.sort_by_key(|r| (r.created_at, r.id));
        records
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
