//! In-memory collaborators for the data values endpoint.
//!
//! The host normally supplies its own persistence and entity directory. These
//! implementations back the default stack, the server binary and the tests.

pub mod directory;
pub mod persistence;
