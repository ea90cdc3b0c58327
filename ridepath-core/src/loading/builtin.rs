//! Fixed road table of major Indian cities.
//!
//! Distances are road kilometers along the named national highway.

use super::{
    builder::GraphBuilder,
    dataset::{AdjacencyTable, SegmentRecord},
};
use crate::{Error, RoadGraph, TrafficLevel};

use TrafficLevel::{Heavy, Low, Moderate};

const CITIES: [&str; 9] = [
    "Delhi",
    "Mumbai",
    "Kolkata",
    "Bangalore",
    "Chennai",
    "Hyderabad",
    "Ahmedabad",
    "Jaipur",
    "Lucknow",
];

const CONNECTIONS: [(&str, &str, f64, &str, TrafficLevel); 16] = [
    ("Delhi", "Mumbai", 1414.0, "NH48", Moderate),
    ("Delhi", "Kolkata", 1474.0, "NH19", Heavy),
    ("Delhi", "Jaipur", 281.0, "NH48", Low),
    ("Delhi", "Lucknow", 555.0, "NH27", Moderate),
    ("Delhi", "Ahmedabad", 934.0, "NH48", Moderate),
    ("Mumbai", "Bangalore", 984.0, "NH48", Moderate),
    ("Mumbai", "Hyderabad", 706.0, "NH65", Heavy),
    ("Mumbai", "Ahmedabad", 524.0, "NH48", Low),
    ("Mumbai", "Jaipur", 1148.0, "NH48", Moderate),
    ("Kolkata", "Hyderabad", 1515.0, "NH16", Heavy),
    ("Kolkata", "Chennai", 1679.0, "NH16", Moderate),
    ("Kolkata", "Lucknow", 985.0, "NH27", Low),
    ("Bangalore", "Chennai", 346.0, "NH48", Moderate),
    ("Bangalore", "Hyderabad", 574.0, "NH44", Heavy),
    ("Chennai", "Hyderabad", 627.0, "NH65", Moderate),
    ("Jaipur", "Ahmedabad", 657.0, "NH48", Moderate),
];

fn builder() -> GraphBuilder {
    let builder = CITIES
        .into_iter()
        .fold(GraphBuilder::new(), |builder, city| builder.location(city));
    CONNECTIONS
        .into_iter()
        .fold(builder, |builder, (a, b, distance, route, traffic)| {
            builder.connection(a, b, distance, traffic, route)
        })
}

/// The built-in city graph
///
/// # Errors
///
/// Fails only if the table itself is corrupt
pub fn builtin_graph() -> Result<RoadGraph, Error> {
    builder().build()
}

/// The built-in table in its directed, serializable form
pub fn builtin_table() -> AdjacencyTable {
    let mut table: AdjacencyTable = CITIES
        .into_iter()
        .map(|city| (city.to_string(), Default::default()))
        .collect();
    for (a, b, distance, route, traffic) in CONNECTIONS {
        for (from, to) in [(a, b), (b, a)] {
            if let Some(neighbors) = table.get_mut(from) {
                neighbors.insert(
                    to.to_string(),
                    SegmentRecord {
                        distance,
                        traffic: traffic.as_str().to_string(),
                        route: route.to_string(),
                    },
                );
            }
        }
    }
    table
}
