//! Data values endpoint.
//!
//! This module handles create-or-update, read and delete requests for data
//! values: named, kind-typed records addressed by their path in a content tree.
//!
//! ## Core Architecture
//!
//! ### Endpoint API
//! [`api::data_values::DataValuesApiService`] parses identifiers, computes
//! parent-relative paths, delegates to its collaborators and shapes response
//! envelopes. Failures never escape it: they are logged and reported with a
//! generic reason.
//!
//! ### Collaborators
//! - **Persistence**: stores data value records
//! - **Entity directory**: resolves the ancestor path of a parent node
//!
//! Both are [`tower::Service`]s injected at construction. In-memory versions
//! live in [`services`].
//!
//! ### Infrastructure
//! - **Identifier**: string codec for 128-bit node identifiers
//! - **Records**: data value and entity records, path computation
//! - **Config**: root marker and data values root
//!
//! ## Default Service Stack
//!
//! `DataValuesDefaultStack` wires the endpoint to the in-memory collaborators,
//! with the directory able to resolve stored data values as parents.
pub mod api;
pub mod error;
pub mod infrastructure;
pub mod services;

/// Standard endpoint stack backed by the in-memory collaborators.
pub type DataValuesDefaultStack = api::data_values::DataValuesApiService<
    services::persistence::DataValuePersistenceService,
    services::directory::EntityDirectoryService,
>;

/// Initialize the endpoint with in-memory collaborators and the default configuration.
///
/// # Returns
/// A tuple containing (endpoint service, persistence service, entity directory),
/// the collaborators sharing state with the ones held by the endpoint.
pub fn init_endpoint() -> (
    DataValuesDefaultStack,
    services::persistence::DataValuePersistenceService,
    services::directory::EntityDirectoryService,
) {
    init_endpoint_with_config(infrastructure::config::EndpointConfig::default(), false)
}

/// Initialize the endpoint with in-memory collaborators and an explicit configuration.
///
/// # Arguments
/// * `config` - Root marker and data values root used by the endpoint
/// * `strict_deletes` - Whether deleting an unknown data value is reported as a failure
///
/// The entity directory is rooted at the configured data values root.
pub fn init_endpoint_with_config(
    config: infrastructure::config::EndpointConfig,
    strict_deletes: bool,
) -> (
    DataValuesDefaultStack,
    services::persistence::DataValuePersistenceService,
    services::directory::EntityDirectoryService,
) {
    let persistence = services::persistence::DataValuePersistenceService::new()
        .with_strict_deletes(strict_deletes);
    let directory = services::directory::EntityDirectoryService::new(config.data_values_root)
        .with_data_values(persistence.clone());
    let endpoint =
        api::data_values::DataValuesApiService::new(persistence.clone(), directory.clone())
            .with_config(config);

    (endpoint, persistence, directory)
}
