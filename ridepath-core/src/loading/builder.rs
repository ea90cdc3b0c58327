use hashbrown::HashMap;
use log::{debug, info};

use super::dataset::{AdjacencyTable, SegmentRecord};
use crate::{
    Error, GraphViolation, Location, RoadGraph, RoadNetwork, Segment, TrafficLevel,
};

/// Build a road graph from a directed adjacency table
///
/// Every entry must have an identical reverse entry, reference a declared
/// location, have a positive finite distance and a known traffic level.
///
/// # Errors
///
/// Returns [`Error::InvalidGraph`] describing the first violation found
pub fn build_graph(table: &AdjacencyTable) -> Result<RoadGraph, Error> {
    let mut graph = RoadNetwork::with_capacity(table.len(), table.len() * 2);
    let ids: HashMap<&str, _> = table
        .keys()
        .map(|name| (name.as_str(), graph.add_node(Location::new(name.as_str()))))
        .collect();

    for (from, neighbors) in table {
        for (to, record) in neighbors {
            let segment = validate_entry(table, from, to, record)?;
            // store each connection once, from its lexicographically smaller end
            if from < to {
                graph.add_edge(ids[from.as_str()], ids[to.as_str()], segment);
            }
        }
    }

    info!(
        "Road graph built: {} locations, {} segments",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(RoadGraph::new(graph))
}

fn validate_entry(
    table: &AdjacencyTable,
    from: &str,
    to: &str,
    record: &SegmentRecord,
) -> Result<Segment, GraphViolation> {
    if from == to {
        return Err(GraphViolation::SelfLoop {
            location: from.to_string(),
        });
    }

    let Some(reverse_neighbors) = table.get(to) else {
        return Err(GraphViolation::DanglingReference {
            from: from.to_string(),
            to: to.to_string(),
        });
    };

    if !record.distance.is_finite() || record.distance <= 0.0 {
        return Err(GraphViolation::InvalidDistance {
            from: from.to_string(),
            to: to.to_string(),
            distance: record.distance,
        });
    }

    let traffic = parse_traffic(from, to, &record.traffic)?;

    let Some(reverse) = reverse_neighbors.get(from) else {
        return Err(GraphViolation::AsymmetricSegment {
            from: from.to_string(),
            to: to.to_string(),
        });
    };

    let reverse_traffic = parse_traffic(to, from, &reverse.traffic)?;
    if reverse.distance != record.distance
        || reverse_traffic != traffic
        || reverse.route != record.route
    {
        return Err(GraphViolation::MismatchedSegment {
            from: from.to_string(),
            to: to.to_string(),
        });
    }

    Ok(Segment {
        distance: record.distance,
        traffic,
        route: record.route.clone(),
    })
}

fn parse_traffic(from: &str, to: &str, level: &str) -> Result<TrafficLevel, GraphViolation> {
    level
        .parse()
        .map_err(|_| GraphViolation::UnknownTrafficLevel {
            from: from.to_string(),
            to: to.to_string(),
            level: level.to_string(),
        })
}

/// Incremental construction of a road graph from undirected connections.
///
/// Each connection is expanded into both directed entries, so symmetry
/// holds by construction; membership and distances are still validated
/// by [`build_graph`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    locations: Vec<String>,
    connections: Vec<(String, String, SegmentRecord)>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location(mut self, name: impl Into<String>) -> Self {
        self.locations.push(name.into());
        self
    }

    pub fn connection(
        mut self,
        a: impl Into<String>,
        b: impl Into<String>,
        distance: f64,
        traffic: TrafficLevel,
        route: impl Into<String>,
    ) -> Self {
        let record = SegmentRecord {
            distance,
            traffic: traffic.as_str().to_string(),
            route: route.into(),
        };
        self.connections.push((a.into(), b.into(), record));
        self
    }

    /// Validate and build the graph
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGraph`] on duplicate locations, connections to
    /// undeclared locations, self-loops or invalid distances
    pub fn build(self) -> Result<RoadGraph, Error> {
        let mut table = AdjacencyTable::new();
        for name in self.locations {
            if table.contains_key(&name) {
                return Err(GraphViolation::DuplicateLocation { location: name }.into());
            }
            table.insert(name, Default::default());
        }

        for (a, b, record) in self.connections {
            for (from, to) in [(&a, &b), (&b, &a)] {
                let Some(neighbors) = table.get_mut(from.as_str()) else {
                    return Err(GraphViolation::DanglingReference {
                        from: to.clone(),
                        to: from.clone(),
                    }
                    .into());
                };
                neighbors.insert(to.clone(), record.clone());
            }
        }

        debug!("Building road graph from {} locations", table.len());
        build_graph(&table)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn record(distance: f64, traffic: &str, route: &str) -> SegmentRecord {
        SegmentRecord {
            distance,
            traffic: traffic.to_string(),
            route: route.to_string(),
        }
    }

    fn table(entries: &[(&str, &str, SegmentRecord)], extra: &[&str]) -> AdjacencyTable {
        let mut table: AdjacencyTable = BTreeMap::new();
        for name in extra {
            table.entry((*name).to_string()).or_default();
        }
        for (from, to, rec) in entries {
            table
                .entry((*from).to_string())
                .or_default()
                .insert((*to).to_string(), rec.clone());
        }
        table
    }

    fn violation(result: Result<RoadGraph, Error>) -> GraphViolation {
        match result {
            Err(Error::InvalidGraph(violation)) => violation,
            other => panic!("expected invalid graph, got {other:?}"),
        }
    }

    #[test]
    fn symmetric_table_builds_one_edge_per_connection() {
        let t = table(
            &[
                ("A", "B", record(10.0, "low", "R1")),
                ("B", "A", record(10.0, "low", "R1")),
                ("B", "C", record(5.0, "heavy", "R2")),
                ("C", "B", record(5.0, "heavy", "R2")),
            ],
            &[],
        );
        let graph = build_graph(&t).unwrap();

        assert_eq!(graph.location_count(), 3);
        assert_eq!(graph.segment_count(), 2);
        let neighbors = graph.neighbors("B").unwrap();
        assert_eq!(neighbors.len(), 2);
    }

    #[test]
    fn missing_reverse_entry_is_rejected() {
        let t = table(&[("A", "B", record(10.0, "low", "R1"))], &["B"]);
        assert_eq!(
            violation(build_graph(&t)),
            GraphViolation::AsymmetricSegment {
                from: "A".into(),
                to: "B".into()
            }
        );
    }

    #[test]
    fn differing_reverse_entry_is_rejected() {
        let t = table(
            &[
                ("Ahmedabad", "Delhi", record(934.0, "heavy", "NH48")),
                ("Delhi", "Ahmedabad", record(934.0, "moderate", "NH48")),
            ],
            &[],
        );
        assert!(matches!(
            violation(build_graph(&t)),
            GraphViolation::MismatchedSegment { .. }
        ));
    }

    #[test]
    fn dangling_reference_is_rejected() {
        let t = table(&[("A", "Nowhere", record(1.0, "low", ""))], &[]);
        assert_eq!(
            violation(build_graph(&t)),
            GraphViolation::DanglingReference {
                from: "A".into(),
                to: "Nowhere".into()
            }
        );
    }

    #[test]
    fn self_loop_is_rejected() {
        let t = table(&[("A", "A", record(1.0, "low", ""))], &[]);
        assert!(matches!(
            violation(build_graph(&t)),
            GraphViolation::SelfLoop { .. }
        ));
    }

    #[test]
    fn non_positive_distance_is_rejected() {
        for distance in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let t = table(
                &[
                    ("A", "B", record(distance, "low", "")),
                    ("B", "A", record(distance, "low", "")),
                ],
                &[],
            );
            assert!(matches!(
                violation(build_graph(&t)),
                GraphViolation::InvalidDistance { .. }
            ));
        }
    }

    #[test]
    fn unknown_traffic_level_is_rejected() {
        let t = table(
            &[
                ("A", "B", record(1.0, "gridlock", "")),
                ("B", "A", record(1.0, "gridlock", "")),
            ],
            &[],
        );
        assert_eq!(
            violation(build_graph(&t)),
            GraphViolation::UnknownTrafficLevel {
                from: "A".into(),
                to: "B".into(),
                level: "gridlock".into()
            }
        );
    }

    #[test]
    fn builder_rejects_duplicate_location() {
        let result = GraphBuilder::new().location("A").location("A").build();
        assert!(matches!(
            violation(result),
            GraphViolation::DuplicateLocation { .. }
        ));
    }

    #[test]
    fn builder_rejects_undeclared_endpoint() {
        let result = GraphBuilder::new()
            .location("A")
            .connection("A", "B", 3.0, TrafficLevel::Low, "")
            .build();
        assert!(matches!(
            violation(result),
            GraphViolation::DanglingReference { .. }
        ));
    }

    #[test]
    fn builder_connections_are_symmetric() {
        let graph = GraphBuilder::new()
            .location("A")
            .location("B")
            .connection("A", "B", 3.0, TrafficLevel::Moderate, "R")
            .build()
            .unwrap();
        let a = graph.id("A").unwrap();
        let b = graph.id("B").unwrap();
        assert_eq!(graph.segment(a, b), graph.segment(b, a));
        assert_eq!(graph.segment(a, b).unwrap().traffic, TrafficLevel::Moderate);
    }
}
