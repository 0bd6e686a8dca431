//! Common types used across Courier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A delivery location on the plane.
///
/// Serialized as a two-element array `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to another point.
    ///
    /// Finite whenever the true distance fits in an `f64`.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Returns true if both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self {
            x: f64::from(x),
            y: f64::from(y),
        }
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Priority tier of a delivery point.
///
/// Variants are declared in visiting order, so the derived `Ord` agrees with
/// [`Priority::rank`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(from = "String", into = "&'static str")]
pub enum Priority {
    /// Visited first.
    High,
    /// Visited after every high-priority point.
    Medium,
    /// Visited after every medium-priority point.
    Low,
    /// Any label outside the known set. Visited last.
    #[default]
    Unknown,
}

impl Priority {
    /// Classify a label. Matching is exact and case-sensitive; anything other
    /// than `high`, `medium` or `low` is [`Priority::Unknown`].
    pub fn classify(label: &str) -> Self {
        match label {
            "high" => Priority::High,
            "medium" => Priority::Medium,
            "low" => Priority::Low,
            _ => Priority::Unknown,
        }
    }

    /// Ordinal rank used as the primary sort key (0 is visited first).
    pub const fn rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
            Priority::Unknown => 3,
        }
    }

    /// The label this tier is written as.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
            Priority::Unknown => "unknown",
        }
    }
}

impl From<String> for Priority {
    fn from(label: String) -> Self {
        Priority::classify(&label)
    }
}

impl From<Priority> for &'static str {
    fn from(priority: Priority) -> Self {
        priority.as_str()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A point tagged with its tier and its position in the caller's input.
///
/// Only lives for the duration of a single planning call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeliveryPoint {
    point: Point,
    priority: Priority,
    original_index: usize,
}

impl DeliveryPoint {
    /// Create a new delivery point.
    pub fn new(point: Point, priority: Priority, original_index: usize) -> Self {
        Self {
            point,
            priority,
            original_index,
        }
    }

    pub fn point(&self) -> Point {
        self.point
    }

    /// Composite ordering key: tier first, then arrival order.
    pub fn sort_key(&self) -> (u8, usize) {
        (self.priority.rank(), self.original_index)
    }
}

/// Points in visiting order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route {
    points: Vec<Point>,
}

impl Route {
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<Vec<Point>> for Route {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl FromIterator<Point> for Route {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", point)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_rank() {
        assert_eq!(Priority::classify("high").rank(), 0);
        assert_eq!(Priority::classify("medium").rank(), 1);
        assert_eq!(Priority::classify("low").rank(), 2);
        assert_eq!(Priority::classify("urgent").rank(), 3);
        assert_eq!(Priority::classify("").rank(), 3);
    }

    #[test]
    fn test_priority_is_case_sensitive() {
        assert_eq!(Priority::classify("High"), Priority::Unknown);
        assert_eq!(Priority::classify("LOW"), Priority::Unknown);
        assert_eq!(Priority::classify(" high"), Priority::Unknown);
    }

    #[test]
    fn test_priority_ord_matches_rank() {
        let tiers = [
            Priority::High,
            Priority::Medium,
            Priority::Low,
            Priority::Unknown,
        ];
        for pair in tiers.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].rank() < pair[1].rank());
        }
    }

    #[test]
    fn test_priority_serde() {
        let json = serde_json::to_string(&Priority::Medium).unwrap();
        assert_eq!(json, "\"medium\"");

        let parsed: Priority = serde_json::from_str("\"whenever\"").unwrap();
        assert_eq!(parsed, Priority::Unknown);
    }

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(b.distance_to(&a), 5.0);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_point_distance_large_coordinates_stays_finite() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1e200, 0.0);
        assert_eq!(a.distance_to(&b), 1e200);

        let c = Point::new(-3e200, 4e200);
        let d = Point::new(0.0, 0.0);
        let distance = c.distance_to(&d);
        assert!(distance.is_finite());
        assert!((distance - 5e200).abs() <= 5e200 * 1e-15);
    }

    #[test]
    fn test_point_from_integers_is_exact() {
        assert_eq!(
            Point::from((i32::MAX, i32::MIN)),
            Point::new(2_147_483_647.0, -2_147_483_648.0)
        );
    }

    #[test]
    fn test_point_serializes_as_pair() {
        let json = serde_json::to_string(&Point::new(2.0, 3.5)).unwrap();
        assert_eq!(json, "[2.0,3.5]");

        let parsed: Point = serde_json::from_str("[1, 2]").unwrap();
        assert_eq!(parsed, Point::new(1.0, 2.0));
    }

    #[test]
    fn test_delivery_point_sort_key() {
        let dp = DeliveryPoint::new(Point::new(1.0, 1.0), Priority::Low, 4);
        assert_eq!(dp.sort_key(), (2, 4));
    }

    #[test]
    fn test_route_display() {
        let route: Route = vec![Point::new(0.0, 0.0), Point::new(5.0, 1.0)].into();
        assert_eq!(route.to_string(), "[(0, 0), (5, 1)]");
        assert_eq!(Route::default().to_string(), "[]");
    }
}
