//! The result of a planning call.

use serde::{Deserialize, Serialize};

use crate::types::Route;

/// An ordered route together with the length of the path through it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    /// Points in visiting order.
    pub route: Route,

    /// Sum of the straight-line legs between consecutive points.
    pub total_distance: f64,
}

impl RoutePlan {
    /// Create a plan from an already-ordered route and its length.
    pub fn new(route: Route, total_distance: f64) -> Self {
        Self {
            route,
            total_distance,
        }
    }

    /// A plan with no stops.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of stops on the route.
    pub fn stops(&self) -> usize {
        self.route.len()
    }

    /// Length of each leg, in visiting order. Has one entry fewer than the
    /// route has stops.
    pub fn legs(&self) -> Vec<f64> {
        self.route
            .points()
            .windows(2)
            .map(|pair| pair[0].distance_to(&pair[1]))
            .collect()
    }
}
