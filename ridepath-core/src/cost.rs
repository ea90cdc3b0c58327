//! Traffic-aware cost model.
//!
//! Two independent mappings over (distance, traffic level): the routing
//! weight minimized by the solver, and the travel time shown to riders.
//! The solver never looks at travel time.

use crate::TrafficLevel;

/// Multiplier applied to distance, indexed by [`TrafficLevel::index`]
const TRAFFIC_FACTOR: [f64; TrafficLevel::COUNT] = [1.0, 1.2, 1.5];

/// Average speed in km/h, indexed by [`TrafficLevel::index`]
const AVERAGE_SPEED_KMH: [f64; TrafficLevel::COUNT] = [70.0, 55.0, 40.0];

pub fn traffic_factor(traffic: TrafficLevel) -> f64 {
    TRAFFIC_FACTOR[traffic.index()]
}

pub fn average_speed_kmh(traffic: TrafficLevel) -> f64 {
    AVERAGE_SPEED_KMH[traffic.index()]
}

/// Routing weight of a segment: distance inflated by congestion
pub fn adjusted_cost(distance: f64, traffic: TrafficLevel) -> f64 {
    distance * traffic_factor(traffic)
}

/// Estimated travel time in hours
pub fn estimated_time_hours(distance: f64, traffic: TrafficLevel) -> f64 {
    distance / average_speed_kmh(traffic)
}
