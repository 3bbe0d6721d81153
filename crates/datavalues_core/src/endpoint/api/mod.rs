//! External-facing API of the data values endpoint.
//!
//! - **Types**: request and response enums for the endpoint and for the two
//!   collaborators it drives (persistence and entity directory)
//! - **Data values service**: the endpoint handler itself, a [`tower::Service`]
//!   that never fails and reports every error as a failure envelope

pub mod data_values;
pub mod types;

// Re-export all types for convenience
pub use types::*;
