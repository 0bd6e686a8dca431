//! Planner trait and configuration.

use courier_core::{Point, Result, RoutePlan};
use serde::{Deserialize, Serialize};

/// Configuration for the planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Maximum number of points accepted in a single call.
    pub max_points: usize,

    /// Reject NaN or infinite coordinates instead of planning through them.
    pub reject_non_finite: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_points: 100_000,
            reject_non_finite: true,
        }
    }
}

/// Trait for route planning engines.
pub trait RoutePlanner: Send + Sync {
    /// Order `locations` for visiting and measure the resulting path.
    ///
    /// `priorities[i]` is the label of `locations[i]`; the two slices must
    /// have the same length.
    fn plan<S: AsRef<str>>(&self, locations: &[Point], priorities: &[S]) -> Result<RoutePlan>;

    /// Get the planner configuration.
    fn config(&self) -> &PlannerConfig;

    /// Update the planner configuration.
    fn set_config(&mut self, config: PlannerConfig);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = PlannerConfig::default();
        assert_eq!(config.max_points, 100_000);
        assert!(config.reject_non_finite);
    }

    #[test]
    fn test_config_partial_json() {
        let config: PlannerConfig = serde_json::from_str(r#"{ "max_points": 10 }"#).unwrap();
        assert_eq!(config.max_points, 10);
        assert!(config.reject_non_finite);
    }
}
