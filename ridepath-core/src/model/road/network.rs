//! Immutable road graph with name lookup

use hashbrown::HashMap;
use petgraph::{
    graph::{NodeIndex, UnGraph},
    visit::EdgeRef,
};

use super::components::{Location, Segment};
use crate::{Error, LocationId};

pub type RoadNetwork = UnGraph<Location, Segment>;

/// Road network plus a name index over its locations.
///
/// Every connection is stored once as an undirected edge, so the
/// reverse direction always carries the same segment attributes.
/// Built through [`GraphBuilder`](crate::GraphBuilder) and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct RoadGraph {
    pub(crate) graph: RoadNetwork,
    index: HashMap<String, NodeIndex>,
}

impl RoadGraph {
    pub(crate) fn new(graph: RoadNetwork) -> Self {
        let index = graph
            .node_indices()
            .map(|id| (graph[id].name.clone(), id))
            .collect();
        Self { graph, index }
    }

    /// Underlying petgraph network
    pub fn network(&self) -> &RoadNetwork {
        &self.graph
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Resolve a location name to its identifier
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownLocation`] if the name is not part of the graph
    pub fn id(&self, name: &str) -> Result<LocationId, Error> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownLocation(name.to_string()))
    }

    /// Location for an identifier issued by this graph
    pub fn location(&self, id: LocationId) -> &Location {
        &self.graph[id]
    }

    pub fn name(&self, id: LocationId) -> &str {
        &self.graph[id].name
    }

    /// Neighbours of a location together with the connecting segment
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownLocation`] if the name is not part of the graph
    pub fn neighbors(&self, name: &str) -> Result<Vec<(&Location, &Segment)>, Error> {
        let id = self.id(name)?;
        Ok(self
            .edges(id)
            .map(|(next, segment)| (self.location(next), segment))
            .collect())
    }

    /// Outgoing segments of a location, seen from `id`
    pub(crate) fn edges(&self, id: LocationId) -> impl Iterator<Item = (LocationId, &Segment)> {
        self.graph
            .edges(id)
            .map(move |edge| {
                // undirected edges may be stored in either orientation
                let next = if edge.source() == id {
                    edge.target()
                } else {
                    edge.source()
                };
                (next, edge.weight())
            })
    }

    /// Segment connecting two locations, in either direction
    pub fn segment(&self, from: LocationId, to: LocationId) -> Option<&Segment> {
        self.graph
            .find_edge(from, to)
            .map(|edge| &self.graph[edge])
    }

    /// All location names, sorted alphabetically
    pub fn locations(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.index.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn location_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn segment_count(&self) -> usize {
        self.graph.edge_count()
    }
}
