//! Priority-ordered route planner.

use courier_core::{CourierError, DeliveryPoint, Point, Priority, Result, Route, RoutePlan};
use tracing::{debug, warn};

use crate::distance::path_length;
use crate::planner::{PlannerConfig, RoutePlanner};

/// Visits points tier by tier (high, medium, low, then unrecognized labels),
/// keeping the caller's order within a tier.
///
/// No geometric optimization is attempted: the path is simply walked in that
/// order and its length reported.
#[derive(Debug, Clone, Default)]
pub struct PriorityRoutePlanner {
    config: PlannerConfig,
}

impl PriorityRoutePlanner {
    /// Create a new planner with default configuration.
    pub fn new() -> Self {
        Self {
            config: PlannerConfig::default(),
        }
    }

    /// Create a new planner with custom configuration.
    pub fn with_config(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Reject input the planner cannot produce a meaningful plan for.
    fn validate<S: AsRef<str>>(&self, locations: &[Point], priorities: &[S]) -> Result<()> {
        if locations.len() != priorities.len() {
            warn!(
                locations = locations.len(),
                priorities = priorities.len(),
                "Rejecting route request with mismatched inputs"
            );
            return Err(CourierError::invalid_argument(format!(
                "{} locations but {} priorities",
                locations.len(),
                priorities.len()
            )));
        }

        if locations.len() > self.config.max_points {
            warn!("Route request exceeds max points limit");
            return Err(CourierError::invalid_argument(format!(
                "{} locations exceeds the limit of {}",
                locations.len(),
                self.config.max_points
            )));
        }

        if self.config.reject_non_finite {
            if let Some(index) = locations.iter().position(|p| !p.is_finite()) {
                return Err(CourierError::invalid_argument(format!(
                    "location {} has a non-finite coordinate: {}",
                    index, locations[index]
                )));
            }
        }

        Ok(())
    }

    /// Tag each location with its tier and input position.
    fn delivery_points<S: AsRef<str>>(locations: &[Point], priorities: &[S]) -> Vec<DeliveryPoint> {
        locations
            .iter()
            .zip(priorities)
            .enumerate()
            .map(|(index, (point, label))| {
                DeliveryPoint::new(*point, Priority::classify(label.as_ref()), index)
            })
            .collect()
    }

    /// Order delivery points by `(rank, original_index)`.
    fn order(points: &mut [DeliveryPoint]) {
        // The index makes every key unique, so an unstable sort is safe.
        points.sort_unstable_by_key(DeliveryPoint::sort_key);
    }
}

impl RoutePlanner for PriorityRoutePlanner {
    fn plan<S: AsRef<str>>(&self, locations: &[Point], priorities: &[S]) -> Result<RoutePlan> {
        self.validate(locations, priorities)?;

        if locations.is_empty() {
            debug!("Empty route request");
            return Ok(RoutePlan::empty());
        }

        let mut points = Self::delivery_points(locations, priorities);
        Self::order(&mut points);

        let route: Route = points.iter().map(DeliveryPoint::point).collect();
        let total_distance = path_length(route.points());

        if self.config.reject_non_finite && !total_distance.is_finite() {
            warn!(stops = route.len(), "Route length overflows f64");
            return Err(CourierError::invalid_argument(format!(
                "total distance of {} stops is not representable",
                route.len()
            )));
        }

        debug!(
            stops = route.len(),
            total_distance, "Planned priority route"
        );

        Ok(RoutePlan::new(route, total_distance))
    }

    fn config(&self) -> &PlannerConfig {
        &self.config
    }

    fn set_config(&mut self, config: PlannerConfig) {
        self.config = config;
    }
}
