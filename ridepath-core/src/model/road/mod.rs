//! Road network model

pub mod components;
pub mod network;

pub use components::{Location, Segment, TrafficLevel};
pub use network::{RoadGraph, RoadNetwork};
