pub mod errors;
pub mod services;
pub mod tracker;

pub use errors::{Result, TrackerError};
pub use tracker::Tracker;
