//! # Courier Core
//!
//! Core types for Courier delivery route planning.
//!
//! This crate provides the fundamental building blocks:
//! - [`Point`] - A location on the plane
//! - [`Priority`] - The tier a delivery point is visited in
//! - [`DeliveryPoint`] - A point tagged with tier and arrival order
//! - [`Route`] / [`RoutePlan`] - Visiting order and its path length
//! - [`CourierError`] - Error types

pub mod error;
pub mod plan;
pub mod types;

// Re-exports for convenience
pub use error::{CourierError, Result};
pub use plan::RoutePlan;
pub use types::*;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{CourierError, Result};
    pub use crate::plan::RoutePlan;
    pub use crate::types::{DeliveryPoint, Point, Priority, Route};
}
