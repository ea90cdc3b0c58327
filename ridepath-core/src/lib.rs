//! Traffic-aware shortest-path routing over a road network.
//!
//! The graph is built once from a dataset and is read-only afterwards;
//! every search keeps its own state, so a [`RoadGraph`] can be shared
//! between threads without locking.

pub mod cost;
pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

use petgraph::graph::NodeIndex;

pub use cost::{adjusted_cost, estimated_time_hours};
pub use error::{Error, GraphViolation};
pub use loading::{DatasetSource, GraphBuilder, build_graph, builtin_graph, load_graph};
pub use model::{Location, RoadGraph, RoadNetwork, Segment, TrafficLevel};
pub use routing::{
    Path, RouteReport, SegmentRow, ShortestPath, build_report, find_path, find_path_cancellable,
};

/// Stable identifier of a location within one [`RoadGraph`]
pub type LocationId = NodeIndex;
