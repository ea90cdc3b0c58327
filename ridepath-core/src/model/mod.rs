//! Data model for traffic-aware road routing
//!
//! Contains the road graph and the per-segment attributes the router works with.

pub mod road;

pub use road::{Location, RoadGraph, RoadNetwork, Segment, TrafficLevel};
