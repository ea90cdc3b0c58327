use std::{
    collections::BinaryHeap,
    sync::atomic::{AtomicBool, Ordering},
};

use hashbrown::{HashMap, HashSet};
use log::{debug, trace};

use super::state::State;
use crate::{Error, LocationId, Path, RoadGraph};

/// Minimum-cost path and its total traffic-adjusted cost
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    pub path: Path,
    pub cost: f64,
}

impl ShortestPath {
    pub fn into_parts(self) -> (Path, f64) {
        (self.path, self.cost)
    }
}

/// Find the minimum-cost path between two locations.
///
/// Equal-cost alternatives are resolved by whichever is settled first.
///
/// # Errors
///
/// Returns [`Error::UnknownLocation`] if either endpoint is not in the graph
/// and [`Error::NoPath`] if `target` cannot be reached from `start`
pub fn find_path(graph: &RoadGraph, start: &str, target: &str) -> Result<ShortestPath, Error> {
    search(graph, start, target, None)
}

/// Same as [`find_path`], but stops with [`Error::Cancelled`] once `cancel`
/// is set. The flag is checked every time a location is taken off the queue.
///
/// # Errors
///
/// See [`find_path`]; additionally [`Error::Cancelled`]
pub fn find_path_cancellable(
    graph: &RoadGraph,
    start: &str,
    target: &str,
    cancel: &AtomicBool,
) -> Result<ShortestPath, Error> {
    search(graph, start, target, Some(cancel))
}

fn search(
    graph: &RoadGraph,
    start: &str,
    target: &str,
    cancel: Option<&AtomicBool>,
) -> Result<ShortestPath, Error> {
    let start_id = graph.id(start)?;
    let target_id = graph.id(target)?;

    if start_id == target_id {
        return Ok(ShortestPath {
            path: Path::new(vec![start_id]),
            cost: 0.0,
        });
    }

    let estimated_nodes = graph.location_count();
    let mut costs: HashMap<LocationId, f64> = HashMap::with_capacity(estimated_nodes);
    let mut predecessors: HashMap<LocationId, LocationId> = HashMap::with_capacity(estimated_nodes);
    let mut settled: HashSet<LocationId> = HashSet::with_capacity(estimated_nodes);
    let mut heap = BinaryHeap::with_capacity(estimated_nodes);

    heap.push(State {
        cost: 0.0,
        node: start_id,
    });
    costs.insert(start_id, 0.0);

    let mut reached = false;
    while let Some(State { cost, node }) = heap.pop() {
        if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            debug!("Search {start} -> {target} cancelled");
            return Err(Error::Cancelled);
        }

        if node == target_id {
            reached = true;
            break;
        }

        // Stale queue entry for an already settled location
        if !settled.insert(node) {
            continue;
        }

        for (next, segment) in graph.edges(node) {
            let next_cost = cost + segment.adjusted_cost();

            let improves = costs.get(&next).is_none_or(|&known| next_cost < known);
            if improves {
                trace!(
                    "Relaxed {} -> {}: {next_cost:.1}",
                    graph.name(node),
                    graph.name(next)
                );
                costs.insert(next, next_cost);
                predecessors.insert(next, node);
                heap.push(State {
                    cost: next_cost,
                    node: next,
                });
            }
        }
    }

    if !reached {
        debug!(
            "No path {start} -> {target}, {} locations settled",
            settled.len()
        );
        return Err(Error::NoPath {
            start: start.to_string(),
            target: target.to_string(),
        });
    }

    let nodes = reconstruct(&predecessors, start_id, target_id);
    let cost = costs[&target_id];
    debug!(
        "Path {start} -> {target}: {} locations, cost {cost:.1}, {} settled",
        nodes.len(),
        settled.len()
    );

    Ok(ShortestPath {
        path: Path::new(nodes),
        cost,
    })
}

/// Follow predecessors backward from target to start
fn reconstruct(
    predecessors: &HashMap<LocationId, LocationId>,
    start: LocationId,
    target: LocationId,
) -> Vec<LocationId> {
    let mut nodes = vec![target];
    let mut current = target;
    while current != start {
        match predecessors.get(&current) {
            Some(&prev) => {
                nodes.push(prev);
                current = prev;
            }
            None => break,
        }
    }
    nodes.reverse();
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GraphBuilder, TrafficLevel, builtin_graph};

    fn triangle() -> RoadGraph {
        GraphBuilder::new()
            .location("Delhi")
            .location("Jaipur")
            .location("Ahmedabad")
            .connection("Delhi", "Jaipur", 281.0, TrafficLevel::Low, "NH48")
            .connection("Jaipur", "Ahmedabad", 657.0, TrafficLevel::Moderate, "NH48")
            .connection("Delhi", "Ahmedabad", 934.0, TrafficLevel::Moderate, "NH48")
            .build()
            .unwrap()
    }

    #[test]
    fn prefers_cheaper_detour_over_congested_direct_road() {
        let graph = triangle();
        let result = find_path(&graph, "Delhi", "Ahmedabad").unwrap();

        assert_eq!(result.path.names(&graph), ["Delhi", "Jaipur", "Ahmedabad"]);
        assert!((result.cost - 1069.4).abs() < 1e-9);
    }

    #[test]
    fn heavy_traffic_flips_the_choice() {
        // direct road clear, detour congested
        let graph = GraphBuilder::new()
            .location("A")
            .location("B")
            .location("C")
            .connection("A", "B", 100.0, TrafficLevel::Heavy, "")
            .connection("B", "C", 100.0, TrafficLevel::Heavy, "")
            .connection("A", "C", 250.0, TrafficLevel::Low, "")
            .build()
            .unwrap();
        let result = find_path(&graph, "A", "C").unwrap();
        assert_eq!(result.path.names(&graph), ["A", "C"]);
        assert_eq!(result.cost, 250.0);
    }

    #[test]
    fn same_start_and_target_is_degenerate() {
        let graph = triangle();
        let result = find_path(&graph, "Jaipur", "Jaipur").unwrap();
        assert!(result.path.is_degenerate());
        assert_eq!(result.path.names(&graph), ["Jaipur"]);
        assert_eq!(result.cost, 0.0);
    }

    #[test]
    fn unknown_endpoints_are_reported() {
        let graph = triangle();
        let err = find_path(&graph, "Nowhereville", "Delhi").unwrap_err();
        assert!(matches!(err, Error::UnknownLocation(name) if name == "Nowhereville"));
        let err = find_path(&graph, "Delhi", "Nowhereville").unwrap_err();
        assert!(matches!(err, Error::UnknownLocation(name) if name == "Nowhereville"));
    }

    #[test]
    fn disconnected_components_have_no_path() {
        let graph = GraphBuilder::new()
            .location("A")
            .location("B")
            .location("C")
            .location("D")
            .connection("A", "B", 1.0, TrafficLevel::Low, "")
            .connection("C", "D", 1.0, TrafficLevel::Low, "")
            .build()
            .unwrap();
        let err = find_path(&graph, "A", "D").unwrap_err();
        assert!(matches!(err, Error::NoPath { .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn isolated_location_has_no_path() {
        let graph = GraphBuilder::new()
            .location("A")
            .location("B")
            .build()
            .unwrap();
        assert!(matches!(
            find_path(&graph, "A", "B"),
            Err(Error::NoPath { .. })
        ));
    }

    #[test]
    fn cancelled_search_stops() {
        let graph = builtin_graph().unwrap();
        let cancel = AtomicBool::new(true);
        let err = find_path_cancellable(&graph, "Delhi", "Chennai", &cancel).unwrap_err();
        assert!(matches!(err, Error::Cancelled));

        let cancel = AtomicBool::new(false);
        let result = find_path_cancellable(&graph, "Delhi", "Chennai", &cancel).unwrap();
        assert_eq!(result, find_path(&graph, "Delhi", "Chennai").unwrap());
    }

    #[test]
    fn reconstruct_follows_predecessors() {
        let ids: Vec<LocationId> = (0..4).map(LocationId::new).collect();
        let predecessors: HashMap<_, _> = [(ids[3], ids[1]), (ids[1], ids[0])].into_iter().collect();
        assert_eq!(
            reconstruct(&predecessors, ids[0], ids[3]),
            vec![ids[0], ids[1], ids[3]]
        );
    }
}
