use thiserror::Error;

use crate::endpoint::infrastructure::identifier::Identifier;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum DataValueError {
    #[error("Data value error, internal data values API error")]
    InternalDataValuesError,

    #[error("Data value error, invalid identifier (input: {0:?})")]
    InvalidIdentifier(String),

    #[error("Data value error, data value not found (id: {0})")]
    DataValueNotFound(Identifier),

    #[error("Data value error, entity not found (id: {0})")]
    EntityNotFound(Identifier),

    #[error("Data value error, unexpected response from {0} service")]
    UnexpectedResponse(&'static str),
}
