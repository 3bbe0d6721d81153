//! Data values endpoint service.
//!
//! This module provides the handler behind the three data value operations:
//! persist (create or overwrite), get info and delete.
//!
//! ## Service Architecture
//!
//! The `DataValuesApiService` coordinates between two collaborators supplied by
//! the host:
//! - **Persistence Service**: stores, fetches and removes data value records
//! - **Entity Directory**: resolves the ancestor path of a parent node
//!
//! ## Error Boundary
//!
//! Every operation runs to completion behind a single error-mapping boundary.
//! Whatever goes wrong (a malformed identifier, a missing parent or record, a
//! failing collaborator) is logged with the operation's context and answered
//! with [`EndpointResponse::Failure`] carrying the generic [`UNHANDLED_ERROR`]
//! reason. The service error type is [`Infallible`], so no internal detail can
//! reach the caller.

use std::{convert::Infallible, future::Future, pin::Pin, sync::Arc, task::Poll};

use tower::{Service, ServiceExt};
use tracing::{debug, error, info};

use crate::endpoint::{
    api::types::{
        DirectoryRequest, DirectoryResponse, EndpointRequest, EndpointResponse,
        PersistenceRequest, PersistenceResponse,
    },
    error::DataValueError,
    infrastructure::{
        config::{EndpointConfig, UNHANDLED_ERROR},
        identifier::Identifier,
        records::{DataValue, child_path},
    },
};

const PERSIST_DATA_VALUE_ERROR: &str =
    "An error occurred while attempting to persist a data value.";
const GET_DATA_VALUE_INFO_ERROR: &str =
    "An error occurred while attempting to get the data value info for a data value.";
const DELETE_DATA_VALUE_ERROR: &str = "An error occurred while attempting to delete the data value.";

/// Data values endpoint service
///
/// Handles persist, get info and delete requests for data values by parsing
/// identifiers, computing paths, and delegating to the injected persistence
/// and entity directory services.
#[derive(Debug, Clone)]
pub struct DataValuesApiService<P, D> {
    /// Service storing data value records
    persistence: P,
    /// Service resolving tree nodes and their paths
    directory: D,
    config: Arc<EndpointConfig>,
}

impl<P, D> DataValuesApiService<P, D> {
    /// Creates a new endpoint service with the default configuration
    pub fn new(persistence: P, directory: D) -> Self {
        Self { persistence, directory, config: Arc::new(EndpointConfig::default()) }
    }

    pub fn with_config(self, config: EndpointConfig) -> Self {
        Self { config: Arc::new(config), ..self }
    }

    pub fn config(&self) -> &EndpointConfig {
        &self.config
    }
}

impl<P, D> DataValuesApiService<P, D>
where
    P: Service<PersistenceRequest, Response = PersistenceResponse, Error = DataValueError>,
    D: Service<DirectoryRequest, Response = DirectoryResponse, Error = DataValueError>,
{
    async fn persist(
        &mut self,
        parent_id: Option<String>,
        kind_id: String,
        data_value_id: Option<String>,
        name: String,
        alias: String,
    ) -> Result<EndpointResponse, DataValueError> {
        let parent_id =
            Identifier::parse_optional(parent_id.as_deref())?.filter(|id| !id.is_empty());
        let kind_id = Identifier::parse(&kind_id)?;
        let data_value_id = match Identifier::parse_optional(data_value_id.as_deref())? {
            Some(id) if id.is_empty() => {
                return Err(DataValueError::InvalidIdentifier(id.to_string()));
            }
            Some(id) => id,
            None => Identifier::new_random(),
        };

        let parent_path = match parent_id {
            Some(parent_id) => Some(self.entity_path(parent_id).await?),
            None => None,
        };
        let path = child_path(self.config.data_values_root, parent_path.as_deref(), data_value_id);
        debug!("[datavalues] computed path for {}: {:?}", data_value_id, path);

        let data_value = DataValue::new(data_value_id, kind_id, path, name, alias);
        let full_path = self.config.full_path(&data_value.path);
        match self.persistence.ready().await?.call(PersistenceRequest::Persist(data_value)).await? {
            PersistenceResponse::Persisted => {
                Ok(EndpointResponse::Persisted { id: data_value_id.to_string(), path: full_path })
            }
            _ => Err(DataValueError::UnexpectedResponse("persistence")),
        }
    }

    async fn get_info(&mut self, data_value_id: String) -> Result<EndpointResponse, DataValueError> {
        let id = Identifier::parse(&data_value_id)?;
        match self.persistence.ready().await?.call(PersistenceRequest::Retrieve(id)).await? {
            PersistenceResponse::DataValue(data_value) => Ok(EndpointResponse::Info {
                data_value_id: data_value.id.to_string(),
                kind_id: data_value.kind_id.to_string(),
                path: self.config.full_path(&data_value.path),
                alias: data_value.alias,
                name: data_value.name,
            }),
            _ => Err(DataValueError::UnexpectedResponse("persistence")),
        }
    }

    async fn delete(&mut self, data_value_id: String) -> Result<EndpointResponse, DataValueError> {
        let id = Identifier::parse(&data_value_id)?;
        match self.persistence.ready().await?.call(PersistenceRequest::Delete(id)).await? {
            PersistenceResponse::Deleted => Ok(EndpointResponse::Deleted),
            _ => Err(DataValueError::UnexpectedResponse("persistence")),
        }
    }

    /// Fetches the current path of a tree node from the entity directory.
    async fn entity_path(&mut self, id: Identifier) -> Result<Vec<Identifier>, DataValueError> {
        match self.directory.ready().await?.call(DirectoryRequest::Retrieve(id)).await? {
            DirectoryResponse::Entity(entity) => Ok(entity.path),
            _ => Err(DataValueError::UnexpectedResponse("entity directory")),
        }
    }
}

/// Turns the outcome of an operation into the envelope sent back to the caller.
fn into_envelope(
    result: Result<EndpointResponse, DataValueError>,
    operation: &'static str,
    context: &'static str,
) -> EndpointResponse {
    result.unwrap_or_else(|error| {
        error!(operation, %error, "{context}");
        EndpointResponse::Failure { reason: UNHANDLED_ERROR.to_string() }
    })
}

impl<P, D> Service<EndpointRequest> for DataValuesApiService<P, D>
where
    P: Service<PersistenceRequest, Response = PersistenceResponse, Error = DataValueError>
        + Clone
        + Send
        + 'static,
    P::Future: Send,
    D: Service<DirectoryRequest, Response = DirectoryResponse, Error = DataValueError>
        + Clone
        + Send
        + 'static,
    D::Future: Send,
{
    type Response = EndpointResponse;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _: &mut std::task::Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: EndpointRequest) -> Self::Future {
        let mut this = self.clone();
        let operation = request.operation();
        Box::pin(async move {
            Ok(match request {
                EndpointRequest::PersistDataValue {
                    parent_id,
                    kind_id,
                    data_value_id,
                    name,
                    alias,
                } => {
                    info!(
                        "[datavalues] {}: parent_id: {:?}, kind_id: {:?}, data_value_id: {:?}, name: {:?}, alias: {:?}",
                        operation, parent_id, kind_id, data_value_id, name, alias
                    );
                    into_envelope(
                        this.persist(parent_id, kind_id, data_value_id, name, alias).await,
                        operation,
                        PERSIST_DATA_VALUE_ERROR,
                    )
                }
                EndpointRequest::GetDataValueInfo { data_value_id } => {
                    info!("[datavalues] {}: data_value_id: {:?}", operation, data_value_id);
                    into_envelope(
                        this.get_info(data_value_id).await,
                        operation,
                        GET_DATA_VALUE_INFO_ERROR,
                    )
                }
                EndpointRequest::DeleteDataValue { data_value_id } => {
                    info!("[datavalues] {}: data_value_id: {:?}", operation, data_value_id);
                    into_envelope(this.delete(data_value_id).await, operation, DELETE_DATA_VALUE_ERROR)
                }
            })
        })
    }
}
