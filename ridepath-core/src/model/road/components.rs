//! Road network components - locations, segments and traffic levels

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// Qualitative congestion category of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrafficLevel {
    Low,
    Moderate,
    Heavy,
}

impl TrafficLevel {
    pub const COUNT: usize = 3;
    pub const ALL: [TrafficLevel; TrafficLevel::COUNT] =
        [TrafficLevel::Low, TrafficLevel::Moderate, TrafficLevel::Heavy];

    /// Position of the level in per-level lookup tables
    pub const fn index(self) -> usize {
        match self {
            TrafficLevel::Low => 0,
            TrafficLevel::Moderate => 1,
            TrafficLevel::Heavy => 2,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            TrafficLevel::Low => "low",
            TrafficLevel::Moderate => "moderate",
            TrafficLevel::Heavy => "heavy",
        }
    }
}

impl fmt::Display for TrafficLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TrafficLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level = s.trim();
        TrafficLevel::ALL
            .into_iter()
            .find(|candidate| candidate.as_str().eq_ignore_ascii_case(level))
            .ok_or_else(|| Error::UnknownTrafficLevel(s.to_string()))
    }
}

/// Named place in the road network
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    pub name: String,
}

impl Location {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.name)
    }
}

/// Road segment between two locations, traversable in both directions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    /// Length in kilometers
    pub distance: f64,
    pub traffic: TrafficLevel,
    /// Informational route label (e.g. highway number), never used for costing
    pub route: String,
}

impl Segment {
    /// Routing weight of the segment
    pub fn adjusted_cost(&self) -> f64 {
        crate::cost::adjusted_cost(self.distance, self.traffic)
    }

    /// Expected travel time in hours
    pub fn estimated_time_hours(&self) -> f64 {
        crate::cost::estimated_time_hours(self.distance, self.traffic)
    }
}
