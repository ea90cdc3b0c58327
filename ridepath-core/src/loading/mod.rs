//! This module is responsible for loading road datasets
//! and building a validated routing graph from them.

mod builder;
mod builtin;
mod config;
mod dataset;

pub use builder::{GraphBuilder, build_graph};
pub use builtin::{builtin_graph, builtin_table};
pub use config::{DatasetSource, load_graph};
pub use dataset::{AdjacencyTable, SegmentRecord, parse_dataset, read_dataset};
