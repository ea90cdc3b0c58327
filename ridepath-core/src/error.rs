use thiserror::Error;

/// Integrity violations detected while building a [`RoadGraph`](crate::RoadGraph)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphViolation {
    #[error("location '{location}' has a segment to itself")]
    SelfLoop { location: String },
    #[error("location '{location}' is declared more than once")]
    DuplicateLocation { location: String },
    #[error("segment {from} -> {to} is declared more than once")]
    DuplicateSegment { from: String, to: String },
    #[error("segment {from} -> {to} points to an unknown location")]
    DanglingReference { from: String, to: String },
    #[error("segment {from} -> {to} has no matching {to} -> {from} entry")]
    AsymmetricSegment { from: String, to: String },
    #[error("segments {from} -> {to} and {to} -> {from} disagree on distance, traffic or route")]
    MismatchedSegment { from: String, to: String },
    #[error("segment {from} -> {to} has invalid distance {distance}")]
    InvalidDistance {
        from: String,
        to: String,
        distance: f64,
    },
    #[error("segment {from} -> {to} has unknown traffic level '{level}'")]
    UnknownTrafficLevel {
        from: String,
        to: String,
        level: String,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid graph: {0}")]
    InvalidGraph(#[from] GraphViolation),
    #[error("Unknown location: '{0}'")]
    UnknownLocation(String),
    #[error("Unknown traffic level: '{0}'")]
    UnknownTrafficLevel(String),
    #[error("No path from {start} to {target}")]
    NoPath { start: String, target: String },
    #[error("Path must contain at least two locations")]
    EmptyPath,
    #[error("Path is broken: no segment between {from} and {to}")]
    DisconnectedPath { from: String, to: String },
    #[error("Search was cancelled")]
    Cancelled,
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Dataset error: {0}")]
    DatasetError(#[from] serde_json::Error),
}

impl Error {
    /// Errors caused by the query rather than by the data or the caller's code.
    /// A front end should report these and ask again.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::UnknownLocation(_) | Error::NoPath { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_query_errors_are_recoverable() {
        assert!(Error::UnknownLocation("Nowhereville".into()).is_recoverable());
        assert!(
            Error::NoPath {
                start: "A".into(),
                target: "B".into()
            }
            .is_recoverable()
        );
        assert!(!Error::EmptyPath.is_recoverable());
        assert!(!Error::UnknownTrafficLevel("gridlock".into()).is_recoverable());
        assert!(
            !Error::InvalidGraph(GraphViolation::SelfLoop {
                location: "A".into()
            })
            .is_recoverable()
        );
    }

    #[test]
    fn violation_message_names_both_endpoints() {
        let err = Error::from(GraphViolation::AsymmetricSegment {
            from: "Delhi".into(),
            to: "Mumbai".into(),
        });
        assert_eq!(
            err.to_string(),
            "Invalid graph: segment Delhi -> Mumbai has no matching Mumbai -> Delhi entry"
        );
    }
}
