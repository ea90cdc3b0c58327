//! Presentation layer for the ride route finder: input normalization,
//! ride detail rendering and user-facing error messages.

pub mod display;
pub mod input;
pub mod messages;

pub use display::{format_arrival, format_ride_details, ride_details_json, route_summary};
pub use input::{is_quit, is_yes, normalize_location};
pub use messages::{SAME_LOCATION, user_message};
