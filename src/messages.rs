//! User-facing wording for routing errors

use ridepath_core::Error;

pub const SAME_LOCATION: &str = "Pickup and drop-off locations are the same!";

/// Message shown to a rider for an error raised by the router
pub fn user_message(err: &Error) -> String {
    match err {
        Error::UnknownLocation(name) => format!("Error: '{name}' is not a valid location!"),
        Error::NoPath { start, target } => {
            format!("No road connects {start} and {target}. Try another drop-off.")
        }
        Error::EmptyPath => SAME_LOCATION.to_string(),
        Error::Cancelled => "Route search was cancelled.".to_string(),
        other => format!("Route calculation failed: {other}"),
    }
}
