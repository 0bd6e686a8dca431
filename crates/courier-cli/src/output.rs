//! Rendering of planning results.

use std::fmt::Write as _;

use courier_core::{Point, Route, RoutePlan};

/// Human-readable report of one planning run.
pub fn render_text(
    locations: &[Point],
    priorities: &[String],
    plan: &RoutePlan,
    show_legs: bool,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\nCalculating route...");
    let _ = writeln!(out, "Input Locations: {}", Route::from(locations.to_vec()));
    let _ = writeln!(out, "Input Priorities: {:?}", priorities);

    let _ = writeln!(out, "\n--- Results ---");
    let _ = writeln!(out, "Optimized Route: {}", plan.route);

    if show_legs {
        for (i, (pair, length)) in plan
            .route
            .points()
            .windows(2)
            .zip(plan.legs())
            .enumerate()
        {
            let _ = writeln!(
                out,
                "  Leg {}: {} -> {} = {:.2}",
                i + 1,
                pair[0],
                pair[1],
                length
            );
        }
    }

    let _ = writeln!(out, "Total Distance: {:.2} units", plan.total_distance);
    out
}

/// Pretty-printed JSON form of the plan.
pub fn render_json(plan: &RoutePlan) -> serde_json::Result<String> {
    serde_json::to_string_pretty(plan)
}
