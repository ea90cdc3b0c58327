//! Per-segment breakdown of a found route.
//!
//! Distances in a report are physical road lengths, never the
//! traffic-adjusted routing cost.

use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;

use crate::{Error, Path, RoadGraph, TrafficLevel};

/// One traversed segment of a route
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentRow {
    pub from: String,
    pub to: String,
    pub distance_km: f64,
    pub route: String,
    pub traffic: TrafficLevel,
    pub time_hours: f64,
}

/// Read-only summary of a route: totals plus one row per segment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteReport {
    pub pickup: String,
    pub dropoff: String,
    pub segments: Vec<SegmentRow>,
    pub total_distance_km: f64,
    pub total_time_hours: f64,
}

impl RouteReport {
    /// Location names along the route, pickup first
    pub fn stops(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.pickup.as_str()).chain(self.segments.iter().map(|row| row.to.as_str()))
    }

    /// Total estimated travel time, millisecond precision
    #[allow(clippy::cast_possible_truncation)]
    pub fn travel_time(&self) -> TimeDelta {
        TimeDelta::milliseconds((self.total_time_hours * 3_600_000.0).round() as i64)
    }

    /// Expected arrival for a ride departing at `departure`
    ///
    /// Keeps minutes and rolls over to the next day as needed.
    pub fn arrival_at(&self, departure: NaiveDateTime) -> Option<NaiveDateTime> {
        departure.checked_add_signed(self.travel_time())
    }
}

/// Walk a path and summarize each segment it uses
///
/// # Errors
///
/// Returns [`Error::EmptyPath`] if the path has fewer than two locations,
/// [`Error::UnknownLocation`] if it holds an id this graph never issued and
/// [`Error::DisconnectedPath`] if two consecutive locations share no segment
pub fn build_report(path: &Path, graph: &RoadGraph) -> Result<RouteReport, Error> {
    if path.is_degenerate() {
        return Err(Error::EmptyPath);
    }

    let names = path
        .nodes()
        .iter()
        .map(|&id| {
            graph
                .network()
                .node_weight(id)
                .map(|location| location.name.as_str())
                .ok_or_else(|| Error::UnknownLocation(format!("#{}", id.index())))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut segments = Vec::with_capacity(path.len() - 1);
    let mut total_distance_km = 0.0;
    let mut total_time_hours = 0.0;

    for (ids, pair) in path.nodes().windows(2).zip(names.windows(2)) {
        let (from, to) = (pair[0], pair[1]);
        let segment = graph
            .segment(ids[0], ids[1])
            .ok_or_else(|| Error::DisconnectedPath {
                from: from.to_string(),
                to: to.to_string(),
            })?;

        let time_hours = segment.estimated_time_hours();
        total_distance_km += segment.distance;
        total_time_hours += time_hours;

        segments.push(SegmentRow {
            from: from.to_string(),
            to: to.to_string(),
            distance_km: segment.distance,
            route: segment.route.clone(),
            traffic: segment.traffic,
            time_hours,
        });
    }

    Ok(RouteReport {
        pickup: names[0].to_string(),
        dropoff: names[names.len() - 1].to_string(),
        segments,
        total_distance_km,
        total_time_hours,
    })
}
