//! Building blocks shared by the endpoint and its collaborators: identifiers,
//! stored records and endpoint configuration.

pub mod config;
pub mod identifier;
pub mod records;
