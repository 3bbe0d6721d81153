//! In-memory entity directory.
//!
//! Resolves tree nodes (folders, the directory root and, when attached to a
//! persistence service, stored data values) together with their ancestor paths.

use std::{pin::Pin, sync::Arc, task::Poll};

use dashmap::DashMap;
use tower::Service;
use tracing::info;

use crate::endpoint::{
    api::{DirectoryRequest, DirectoryResponse},
    error::DataValueError,
    infrastructure::{
        config::DEFAULT_DATA_VALUES_ROOT,
        identifier::Identifier,
        records::{Entity, EntityKind, child_path},
    },
    services::persistence::DataValuePersistenceService,
};

/// Entity directory service resolving tree nodes in memory
///
/// Folders are held by the directory itself. When a persistence service is
/// attached, stored data values resolve as entities too, so they can act as
/// parents of other nodes. The directory root always resolves to itself.
#[derive(Debug, Clone)]
pub struct EntityDirectoryService {
    root: Identifier,
    folders: Arc<DashMap<Identifier, Entity>>,
    data_values: Option<DataValuePersistenceService>,
}

impl Default for EntityDirectoryService {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_VALUES_ROOT)
    }
}

impl EntityDirectoryService {
    pub fn new(root: Identifier) -> Self {
        Self { root, folders: Arc::new(DashMap::new()), data_values: None }
    }

    /// Resolves data values stored in `persistence` as entities.
    pub fn with_data_values(self, persistence: DataValuePersistenceService) -> Self {
        Self { data_values: Some(persistence), ..self }
    }

    pub fn root(&self) -> Identifier {
        self.root
    }

    /// Stores an entity as is, without checking its path.
    pub fn insert(&self, entity: Entity) -> Option<Entity> {
        self.folders.insert(entity.id, entity)
    }

    fn retrieve(&self, id: Identifier) -> Result<Entity, DataValueError> {
        if id == self.root {
            return Ok(Entity {
                id,
                path: vec![id],
                name: String::new(),
                kind: EntityKind::Folder,
            });
        }
        if let Some(folder) = self.folders.get(&id) {
            return Ok(folder.to_owned());
        }
        self.data_values
            .as_ref()
            .and_then(|data_values| data_values.get(&id))
            .map(Entity::from)
            .ok_or(DataValueError::EntityNotFound(id))
    }

    fn register_folder(
        &self,
        id: Identifier,
        parent: Option<Identifier>,
        name: String,
    ) -> Result<Entity, DataValueError> {
        let parent_path = match parent {
            Some(parent) => Some(self.retrieve(parent)?.path),
            None => None,
        };
        let entity = Entity {
            id,
            path: child_path(self.root, parent_path.as_deref(), id),
            name,
            kind: EntityKind::Folder,
        };
        self.insert(entity.clone());
        Ok(entity)
    }
}

impl Service<DirectoryRequest> for EntityDirectoryService {
    type Response = DirectoryResponse;
    type Error = DataValueError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _: &mut std::task::Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: DirectoryRequest) -> Self::Future {
        let this = self.clone();
        Box::pin(async move {
            match request {
                DirectoryRequest::Retrieve(id) => {
                    info!("[directory] Retrieve: {}", id);
                    this.retrieve(id).map(DirectoryResponse::Entity)
                }
                DirectoryRequest::RegisterFolder { id, parent, name } => {
                    info!(
                        "[directory] RegisterFolder: id: {}, parent: {:?}, name: {:?}",
                        id, parent, name
                    );
                    this.register_folder(id, parent, name).map(DirectoryResponse::Registered)
                }
                DirectoryRequest::Remove(id) => {
                    info!("[directory] Remove: {}", id);
                    match this.folders.remove(&id) {
                        Some(_) => Ok(DirectoryResponse::Removed),
                        None => Err(DataValueError::EntityNotFound(id)),
                    }
                }
            }
        })
    }
}
