//! Path length helpers.

use courier_core::Point;

/// Total length of the polyline through `points`, summed in order.
///
/// Empty and single-point paths have length positive zero.
pub fn path_length(points: &[Point]) -> f64 {
    points
        .windows(2)
        .map(|pair| pair[0].distance_to(&pair[1]))
        .fold(0.0, |total, leg| total + leg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_length_boundaries() {
        assert_eq!(path_length(&[]), 0.0);
        assert_eq!(path_length(&[Point::new(7.0, -2.0)]), 0.0);
        assert!(path_length(&[Point::new(7.0, -2.0)]).is_sign_positive());
    }

    #[test]
    fn test_path_length_three_four_five() {
        let points = [Point::new(0.0, 0.0), Point::new(3.0, 4.0)];
        assert_eq!(path_length(&points), 5.0);
    }

    #[test]
    fn test_path_length_sums_legs() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(3.0, 0.0),
            Point::new(0.0, 0.0),
        ];
        assert_eq!(path_length(&points), 12.0);
    }

    #[test]
    fn test_path_length_revisits_count() {
        let a = Point::new(1.0, 1.0);
        let b = Point::new(1.0, 3.0);
        assert_eq!(path_length(&[a, b, a, b]), 6.0);
    }
}
