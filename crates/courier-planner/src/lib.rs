//! # Courier Planner
//!
//! Priority-ordered route planning engine for Courier.

pub mod distance;
pub mod planner;
pub mod priority;

pub use distance::path_length;
pub use planner::{PlannerConfig, RoutePlanner};
pub use priority::PriorityRoutePlanner;
