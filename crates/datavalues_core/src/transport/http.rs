//! # HTTP Transport Implementation
//!
//! This module exposes the data values endpoint over HTTP with [`axum`]. Each
//! route translates its JSON body or query string into an [`EndpointRequest`],
//! runs it through the endpoint service, and answers with a JSON envelope.
//!
//! ## Routes
//!
//! - `POST /PersistDataValue`: body `parentId`, `kindId`, `dataValueId`,
//!   `dataValueName`, `dataValueAlias`
//! - `GET /GetDataValueInfo`: query `dataValueId`
//! - `POST /DeleteDataValue`: body `dataValueId`
//!
//! ## Envelopes
//!
//! Every route answers `200 OK`. The `success` field of the envelope carries the
//! outcome; failures only ever carry the generic `reason`. Bodies or query
//! strings that cannot be decoded, including ones carrying unknown keys, are
//! treated like any other failure: logged, then answered with the generic
//! envelope.

use std::convert::Infallible;

use axum::{
    Json, Router,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::{Value, json};
use tower::{Service, ServiceExt};
use tracing::error;

use crate::endpoint::{
    api::{EndpointRequest, EndpointResponse},
    infrastructure::config::UNHANDLED_ERROR,
};

/// Body of `POST /PersistDataValue`.
///
/// Field names are camelCase; the PascalCase spellings are accepted too. Any
/// other key rejects the whole body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct PersistDataValueBody {
    #[serde(alias = "ParentId")]
    pub parent_id: Option<String>,
    #[serde(alias = "KindId")]
    pub kind_id: Option<String>,
    #[serde(alias = "DataValueId")]
    pub data_value_id: Option<String>,
    #[serde(alias = "DataValueName")]
    pub data_value_name: Option<String>,
    #[serde(alias = "DataValueAlias")]
    pub data_value_alias: Option<String>,
}

impl From<PersistDataValueBody> for EndpointRequest {
    fn from(body: PersistDataValueBody) -> Self {
        EndpointRequest::PersistDataValue {
            parent_id: body.parent_id,
            kind_id: body.kind_id.unwrap_or_default(),
            data_value_id: body.data_value_id,
            name: body.data_value_name.unwrap_or_default(),
            alias: body.data_value_alias.unwrap_or_default(),
        }
    }
}

/// Query of `GET /GetDataValueInfo` and body of `POST /DeleteDataValue`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct DataValueIdentity {
    #[serde(alias = "DataValueId")]
    pub data_value_id: Option<String>,
}

/// Shapes an endpoint response into its JSON envelope.
pub fn envelope(response: EndpointResponse) -> Value {
    match response {
        EndpointResponse::Persisted { id, path } => {
            json!({ "success": true, "id": id, "path": path })
        }
        EndpointResponse::Info { data_value_id, kind_id, path, alias, name } => json!({
            "success": true,
            "dataValueId": data_value_id,
            "kindId": kind_id,
            "path": path,
            "alias": alias,
            "name": name,
        }),
        EndpointResponse::Deleted => json!({ "success": true }),
        EndpointResponse::Failure { reason } => json!({ "success": false, "reason": reason }),
    }
}

/// Builds the router serving the three data value routes.
///
/// The returned router can be nested under a base path by the caller.
pub fn data_values_router<S>(endpoint: S) -> Router
where
    S: Service<EndpointRequest, Response = EndpointResponse, Error = Infallible>
        + Clone
        + Send
        + Sync
        + 'static,
    S::Future: Send,
{
    Router::new()
        .route("/PersistDataValue", post(persist_data_value::<S>))
        .route("/GetDataValueInfo", get(get_data_value_info::<S>))
        .route("/DeleteDataValue", post(delete_data_value::<S>))
        .with_state(endpoint)
}

async fn persist_data_value<S>(
    State(endpoint): State<S>,
    body: Result<Json<PersistDataValueBody>, JsonRejection>,
) -> Json<Value>
where
    S: Service<EndpointRequest, Response = EndpointResponse, Error = Infallible> + Send,
    S::Future: Send,
{
    match body {
        Ok(Json(body)) => dispatch(endpoint, body.into()).await,
        Err(rejection) => rejected("PersistDataValue", rejection.body_text()),
    }
}

async fn get_data_value_info<S>(
    State(endpoint): State<S>,
    query: Result<Query<DataValueIdentity>, QueryRejection>,
) -> Json<Value>
where
    S: Service<EndpointRequest, Response = EndpointResponse, Error = Infallible> + Send,
    S::Future: Send,
{
    match query {
        Ok(Query(query)) => {
            let data_value_id = query.data_value_id.unwrap_or_default();
            dispatch(endpoint, EndpointRequest::GetDataValueInfo { data_value_id }).await
        }
        Err(rejection) => rejected("GetDataValueInfo", rejection.body_text()),
    }
}

async fn delete_data_value<S>(
    State(endpoint): State<S>,
    body: Result<Json<DataValueIdentity>, JsonRejection>,
) -> Json<Value>
where
    S: Service<EndpointRequest, Response = EndpointResponse, Error = Infallible> + Send,
    S::Future: Send,
{
    match body {
        Ok(Json(body)) => {
            let data_value_id = body.data_value_id.unwrap_or_default();
            dispatch(endpoint, EndpointRequest::DeleteDataValue { data_value_id }).await
        }
        Err(rejection) => rejected("DeleteDataValue", rejection.body_text()),
    }
}

async fn dispatch<S>(endpoint: S, request: EndpointRequest) -> Json<Value>
where
    S: Service<EndpointRequest, Response = EndpointResponse, Error = Infallible> + Send,
    S::Future: Send,
{
    let Ok(response) = endpoint.oneshot(request).await;
    Json(envelope(response))
}

fn rejected(operation: &'static str, detail: String) -> Json<Value> {
    error!(%detail, "[http] {operation}: could not decode the request");
    Json(envelope(EndpointResponse::Failure { reason: UNHANDLED_ERROR.to_string() }))
}
