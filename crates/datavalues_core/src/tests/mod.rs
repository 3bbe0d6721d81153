
use fixtures::{DataValueMapping, KIND};
use tower::Service;

use crate::endpoint::{
    api::EndpointResponse,
    infrastructure::{config::EndpointConfig, identifier::Identifier},
    init_endpoint, init_endpoint_with_config,
};

#[tokio::test]
async fn integration_persist_without_parent() {
    crate::datavalues_tracing::init();
    let (mut endpoint, persistence, _) = init_endpoint();
    let root = endpoint.config().data_values_root;

    let (id, path) = persist!(endpoint, DataValueMapping::new("Colors").under(Identifier::EMPTY));

    assert_eq!(id.len(), 36);
    assert_eq!(path, vec!["-1".to_string(), root.to_string(), id.clone()]);
    let stored = persistence.get(&Identifier::parse(&id).unwrap()).unwrap();
    assert_eq!(stored.kind_id.to_string(), KIND);
    assert_eq!(stored.path, vec![root, stored.id]);
}

#[tokio::test]
async fn integration_persist_under_nested_folders() {
    crate::datavalues_tracing::init();
    let (mut endpoint, _, mut directory) = init_endpoint();
    let outer = register_folder!(directory, Identifier::from_u128(0x10), None);
    let inner = register_folder!(directory, Identifier::from_u128(0x11), Some(outer.id));

    let (id, path) = persist!(endpoint, DataValueMapping::new("Sizes").under(inner.id));

    let expected: Vec<String> = std::iter::once("-1".to_string())
        .chain(inner.path.iter().map(ToString::to_string))
        .chain(std::iter::once(id.clone()))
        .collect();
    assert_eq!(path, expected);
    assert_eq!(path.len(), 5);
}

#[tokio::test]
async fn integration_persist_under_explicit_root() {
    crate::datavalues_tracing::init();
    let (mut endpoint, _, directory) = init_endpoint();

    let (id, path) = persist!(endpoint, DataValueMapping::new("Colors").under(directory.root()));

    assert_eq!(path, vec!["-1".to_string(), directory.root().to_string(), id]);
}

#[tokio::test]
async fn integration_persist_under_data_value() {
    crate::datavalues_tracing::init();
    let (mut endpoint, _, _) = init_endpoint();

    let (parent_id, parent_path) = persist!(endpoint, DataValueMapping::new("Parent"));
    let parent = Identifier::parse(&parent_id).unwrap();
    let (child_id, child_path) = persist!(endpoint, DataValueMapping::new("Child").under(parent));

    assert_eq!(child_path[..parent_path.len()], parent_path[..]);
    assert_eq!(child_path.last(), Some(&child_id));
    assert_eq!(child_path.len(), parent_path.len() + 1);
}

#[tokio::test]
async fn integration_persist_unknown_parent() {
    crate::datavalues_tracing::init();
    let (mut endpoint, persistence, _) = init_endpoint();

    persist_failure!(endpoint, DataValueMapping::new("Orphan").under(Identifier::from_u128(0xdead)));
    assert!(persistence.is_empty());
}

#[tokio::test]
async fn integration_repersist_overwrites_and_recomputes_path() {
    crate::datavalues_tracing::init();
    let (mut endpoint, persistence, mut directory) = init_endpoint();
    let first = register_folder!(directory, Identifier::from_u128(0x20), None);
    let second = register_folder!(directory, Identifier::from_u128(0x21), None);
    let moved = register_folder!(directory, Identifier::from_u128(0x22), Some(first.id));
    let id = Identifier::from_u128(0x99);

    let (_, before) = persist!(endpoint, DataValueMapping::new("Colors").under(moved.id).with_id(id));

    // Move the parent folder, then persist again under it with new fields
    register_folder!(directory, moved.id, Some(second.id));
    let (same_id, after) = persist!(
        endpoint,
        DataValueMapping::new("Colors").renamed("Shades").under(moved.id).with_id(id)
    );

    assert_eq!(same_id, id.to_string());
    assert_ne!(before, after);
    assert_eq!(after[2], second.id.to_string());
    assert_eq!(persistence.len(), 1);
    assert_eq!(
        get_info!(endpoint, id),
        EndpointResponse::Info {
            data_value_id: id.to_string(),
            kind_id: KIND.to_string(),
            path: after,
            alias: "shades".to_string(),
            name: "Shades".to_string(),
        }
    );
}

#[tokio::test]
async fn integration_get_info_never_persisted() {
    crate::datavalues_tracing::init();
    let (mut endpoint, _, _) = init_endpoint();

    assert_failure!(get_info!(endpoint, Identifier::new_random()));
    assert_failure!(get_info!(endpoint, "not-an-identifier"));
}

#[tokio::test]
async fn integration_delete_existing() {
    crate::datavalues_tracing::init();
    let (mut endpoint, persistence, _) = init_endpoint();
    let (id, _) = persist!(endpoint, DataValueMapping::new("Colors"));

    assert_eq!(delete!(endpoint, id), EndpointResponse::Deleted);
    assert!(persistence.is_empty());
    assert_failure!(get_info!(endpoint, id));
}

#[tokio::test]
async fn integration_delete_missing() {
    crate::datavalues_tracing::init();
    let (mut lenient, _, _) = init_endpoint();
    let (mut strict, _, _) = init_endpoint_with_config(EndpointConfig::default(), true);
    let id = Identifier::new_random();

    assert_eq!(delete!(lenient, id), EndpointResponse::Deleted);
    assert_failure!(delete!(strict, id));
}

#[tokio::test]
async fn integration_custom_config() {
    crate::datavalues_tracing::init();
    let data_values_root = Identifier::from_u128(0x77);
    let (mut endpoint, _, directory) = init_endpoint_with_config(
        EndpointConfig::default().with_root_id("root").with_data_values_root(data_values_root),
        false,
    );

    let (id, path) = persist!(endpoint, DataValueMapping::new("Colors"));

    assert_eq!(directory.root(), data_values_root);
    assert_eq!(path, vec!["root".to_string(), data_values_root.to_string(), id]);
}

#[tokio::test]
async fn integration_concurrent_persists() {
    crate::datavalues_tracing::init();
    let (endpoint, persistence, _) = init_endpoint();

    let handles: Vec<_> = (0..64)
        .map(|i| {
            let mut endpoint = endpoint.clone();
            tokio::spawn(async move {
                persist!(endpoint, DataValueMapping::new(&format!("Value {i}")))
            })
        })
        .collect();

    for handle in handles {
        let (id, path) = handle.await.unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path[2], id);
    }
    assert_eq!(persistence.len(), 64);
}
