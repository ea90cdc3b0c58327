// Re-export key components
pub use crate::loading::{DatasetSource, GraphBuilder, load_graph};
pub use crate::model::{Location, RoadGraph, Segment, TrafficLevel};
pub use crate::routing::{
    Path, RouteReport, SegmentRow, ShortestPath, build_report, find_path, find_path_cancellable,
};

// Cost model
pub use crate::cost::{adjusted_cost, estimated_time_hours};

// Errors
pub use crate::{Error, GraphViolation, LocationId};
