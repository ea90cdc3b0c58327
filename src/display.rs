//! Text and JSON rendering of ride details

use std::fmt::Write;

use chrono::NaiveDateTime;
use ridepath_core::RouteReport;
use serde_json::{Value as JsonValue, json};

const WIDTH: usize = 70;

/// Route as a single arrow-separated line, e.g. `Delhi → Jaipur → Ahmedabad`
pub fn route_summary(report: &RouteReport) -> String {
    report.stops().collect::<Vec<_>>().join(" → ")
}

/// Clock time of arrival, with the date when the ride ends on a later day
pub fn format_arrival(departure: NaiveDateTime, arrival: NaiveDateTime) -> String {
    if arrival.date() == departure.date() {
        arrival.format("%I:%M %p").to_string()
    } else {
        arrival.format("%I:%M %p on %a %d %b").to_string()
    }
}

/// Full ride breakdown table for terminal output
pub fn format_ride_details(report: &RouteReport, departure: NaiveDateTime) -> String {
    let heavy_rule = "=".repeat(WIDTH);
    let light_rule = "-".repeat(WIDTH);
    let mut details = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(details, "\nRide Details:\n{heavy_rule}");
    let _ = writeln!(details, "Pickup Location: {}", report.pickup);
    let _ = writeln!(details, "Drop-off Location: {}", report.dropoff);
    let _ = writeln!(details, "Route: {}", route_summary(report));

    let _ = writeln!(details, "\nRoute Breakdown:\n{light_rule}");
    let _ = writeln!(
        details,
        "{:15} {:15} {:>10} {:10} {:10} {:>6}",
        "From", "To", "Distance", "Route", "Traffic", "ETA"
    );
    let _ = writeln!(details, "{light_rule}");

    for row in &report.segments {
        let _ = writeln!(
            details,
            "{:15} {:15} {:>10} {:10} {:10} {:>5.1}h",
            row.from, row.to, row.distance_km, row.route, row.traffic, row.time_hours
        );
    }

    let _ = writeln!(details, "{heavy_rule}");
    let _ = writeln!(details, "Total Distance: {} km", report.total_distance_km);
    let _ = writeln!(
        details,
        "Total Estimated Time: {:.1} hours",
        report.total_time_hours
    );
    match report.arrival_at(departure) {
        Some(arrival) => {
            let _ = writeln!(
                details,
                "Expected Arrival: {}",
                format_arrival(departure, arrival)
            );
        }
        None => {
            let _ = writeln!(details, "Expected Arrival: unknown");
        }
    }

    details
}

/// Ride details as JSON, including the computed arrival time
pub fn ride_details_json(report: &RouteReport, departure: NaiveDateTime) -> JsonValue {
    json!({
        "route": report,
        "departure": departure,
        "arrival": report.arrival_at(departure),
    })
}
