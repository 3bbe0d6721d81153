//! Data values API type definitions.
//!
//! ## Endpoint API
//! Requests accepted by the data values endpoint and the envelopes it answers
//! with. Identifiers travel as strings at this level: parsing them is part of
//! the endpoint's job, so that malformed input takes the same failure path as
//! any other error.
//!
//! ## Internal Service APIs
//! Request/response types for the collaborators injected into the endpoint:
//! - **Persistence**: storage of data value records
//! - **Entity directory**: lookup of tree nodes and their ancestor paths

use crate::endpoint::infrastructure::{
    identifier::Identifier,
    records::{DataValue, Entity},
};

/// Requests handled by the data values endpoint.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum EndpointRequest {
    /// Create a data value, or overwrite it if `data_value_id` names an existing one.
    ///
    /// The path of the record is recomputed on every call from the parent's
    /// current path, so re-persisting under a moved parent follows the move.
    PersistDataValue {
        /// Parent node; absent or blank attaches the data value to the data values root
        parent_id: Option<String>,
        /// Kind of the data value
        kind_id: String,
        /// Target record; absent or blank generates a new identifier
        data_value_id: Option<String>,
        name: String,
        alias: String,
    },

    /// Read back a stored data value.
    GetDataValueInfo {
        data_value_id: String,
    },

    /// Remove a stored data value.
    DeleteDataValue {
        data_value_id: String,
    },
}

impl EndpointRequest {
    /// Operation name used in logs.
    pub fn operation(&self) -> &'static str {
        match self {
            EndpointRequest::PersistDataValue { .. } => "PersistDataValue",
            EndpointRequest::GetDataValueInfo { .. } => "GetDataValueInfo",
            EndpointRequest::DeleteDataValue { .. } => "DeleteDataValue",
        }
    }
}

/// Envelopes returned by the data values endpoint.
///
/// Paths are fully shaped: the host root marker comes first, followed by the
/// string form of every identifier down to the data value itself.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum EndpointResponse {
    /// The data value was written.
    Persisted {
        id: String,
        path: Vec<String>,
    },

    /// Read-only projection of a stored data value.
    Info {
        data_value_id: String,
        kind_id: String,
        path: Vec<String>,
        alias: String,
        name: String,
    },

    /// The data value was removed.
    Deleted,

    /// The operation failed.
    ///
    /// The reason is always the same generic message; the underlying error is
    /// only recorded in the log.
    Failure {
        reason: String,
    },
}

/// Persistence service request types.
#[derive(Debug, Clone)]
pub enum PersistenceRequest {
    /// Insert the record, or replace the stored record with the same identifier.
    Persist(DataValue),

    /// Fetch a record. Fails if no record has this identifier.
    Retrieve(Identifier),

    /// Remove a record.
    Delete(Identifier),
}

/// Persistence service response types.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum PersistenceResponse {
    Persisted,
    DataValue(DataValue),
    Deleted,
}

/// Entity directory request types.
#[derive(Debug, Clone)]
pub enum DirectoryRequest {
    /// Fetch a tree node, including its full ancestor path.
    Retrieve(Identifier),

    /// Add a folder under `parent`, or under the directory root if `parent` is `None`.
    RegisterFolder {
        id: Identifier,
        parent: Option<Identifier>,
        name: String,
    },

    /// Forget a folder.
    Remove(Identifier),
}

/// Entity directory response types.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum DirectoryResponse {
    Entity(Entity),
    Registered(Entity),
    Removed,
}
