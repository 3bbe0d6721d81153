//! In-memory persistence of data value records.
//!
//! Records are keyed by identifier in a shared concurrent map. Persisting is an
//! upsert; deleting an unknown identifier succeeds unless strict deletes are on.

use std::{pin::Pin, sync::Arc, task::Poll};

use dashmap::DashMap;
use tower::Service;
use tracing::{debug, info};

use crate::endpoint::{
    api::{PersistenceRequest, PersistenceResponse},
    error::DataValueError,
    infrastructure::{identifier::Identifier, records::DataValue},
};

/// Persistence service storing data values in memory
///
/// Clones share the same store. Concurrent writes to the same identifier are
/// resolved last-write-wins.
#[derive(Debug, Default, Clone)]
pub struct DataValuePersistenceService {
    data_values: Arc<DashMap<Identifier, DataValue>>,
    /// Whether deleting an unknown identifier is an error
    strict_deletes: bool,
}

impl DataValuePersistenceService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `Delete` fail with `DataValueNotFound` for unknown identifiers
    /// instead of succeeding silently.
    pub fn with_strict_deletes(self, strict_deletes: bool) -> Self {
        Self { strict_deletes, ..self }
    }

    /// Stores a record directly, returning the one it replaced.
    pub fn insert(&self, data_value: DataValue) -> Option<DataValue> {
        self.data_values.insert(data_value.id, data_value)
    }

    pub fn get(&self, id: &Identifier) -> Option<DataValue> {
        self.data_values.get(id).map(|data_value| data_value.to_owned())
    }

    pub fn len(&self) -> usize {
        self.data_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data_values.is_empty()
    }

    fn retrieve(&self, id: Identifier) -> Result<DataValue, DataValueError> {
        self.get(&id).ok_or(DataValueError::DataValueNotFound(id))
    }

    fn delete(&self, id: Identifier) -> Result<(), DataValueError> {
        match self.data_values.remove(&id) {
            Some(_) => Ok(()),
            None if self.strict_deletes => Err(DataValueError::DataValueNotFound(id)),
            None => {
                debug!("[persistence] Delete: {} was not stored, nothing to do", id);
                Ok(())
            }
        }
    }
}

impl Service<PersistenceRequest> for DataValuePersistenceService {
    type Response = PersistenceResponse;
    type Error = DataValueError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _: &mut std::task::Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: PersistenceRequest) -> Self::Future {
        let this = self.clone();
        Box::pin(async move {
            match request {
                PersistenceRequest::Persist(data_value) => {
                    info!("[persistence] Persist: {:?}", data_value);
                    if let Some(previous) = this.insert(data_value) {
                        debug!("[persistence] Persist: replaced {:?}", previous);
                    }
                    Ok(PersistenceResponse::Persisted)
                }
                PersistenceRequest::Retrieve(id) => {
                    info!("[persistence] Retrieve: {}", id);
                    this.retrieve(id).map(PersistenceResponse::DataValue)
                }
                PersistenceRequest::Delete(id) => {
                    info!("[persistence] Delete: {}", id);
                    this.delete(id).map(|_| PersistenceResponse::Deleted)
                }
            }
        })
    }
}
