use crate::{Error, LocationId, RoadGraph};

/// Ordered sequence of locations, consecutive ones joined by a segment
/// when produced by the solver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    nodes: Vec<LocationId>,
}

impl Path {
    pub(crate) fn new(nodes: Vec<LocationId>) -> Self {
        debug_assert!(!nodes.is_empty());
        Self { nodes }
    }

    /// Resolve a sequence of location names.
    ///
    /// Only membership is checked here; connectivity is checked
    /// when the path is turned into a report.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPath`] for an empty sequence and
    /// [`Error::UnknownLocation`] for a name outside the graph
    pub fn from_names<S: AsRef<str>>(graph: &RoadGraph, names: &[S]) -> Result<Self, Error> {
        if names.is_empty() {
            return Err(Error::EmptyPath);
        }
        let nodes = names
            .iter()
            .map(|name| graph.id(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { nodes })
    }

    pub fn nodes(&self) -> &[LocationId] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Single-location path: pickup equals drop-off
    pub fn is_degenerate(&self) -> bool {
        self.nodes.len() < 2
    }

    pub fn start(&self) -> LocationId {
        self.nodes[0]
    }

    pub fn end(&self) -> LocationId {
        self.nodes[self.nodes.len() - 1]
    }

    pub fn names<'a>(&self, graph: &'a RoadGraph) -> Vec<&'a str> {
        self.nodes.iter().map(|&id| graph.name(id)).collect()
    }
}
