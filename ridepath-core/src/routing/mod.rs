//! Shortest-path search and route reporting

pub mod dijkstra;
mod path;
pub mod report;

pub use dijkstra::{ShortestPath, find_path, find_path_cancellable};
pub use path::Path;
pub use report::{RouteReport, SegmentRow, build_report};
