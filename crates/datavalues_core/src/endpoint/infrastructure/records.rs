//! Records exchanged with the persistence collaborator and the entity directory.

use crate::endpoint::infrastructure::identifier::Identifier;

/// A named, kind-typed record addressed by its path in the content tree.
///
/// The path runs from the data values root (or from the top of the parent's
/// ancestor chain) down to the record itself, so it always ends with `id`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DataValue {
    pub id: Identifier,
    /// Externally-defined kind, never interpreted by this crate
    pub kind_id: Identifier,
    pub path: Vec<Identifier>,
    pub name: String,
    pub alias: String,
}

impl DataValue {
    pub fn new(
        id: Identifier,
        kind_id: Identifier,
        path: Vec<Identifier>,
        name: impl Into<String>,
        alias: impl Into<String>,
    ) -> Self {
        Self { id, kind_id, path, name: name.into(), alias: alias.into() }
    }
}

/// Kinds of tree nodes known to the entity directory.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum EntityKind {
    Folder,
    DataValue,
}

/// A node of the content tree as seen by the entity directory.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Entity {
    pub id: Identifier,
    pub path: Vec<Identifier>,
    pub name: String,
    pub kind: EntityKind,
}

impl From<DataValue> for Entity {
    fn from(data_value: DataValue) -> Self {
        Self {
            id: data_value.id,
            path: data_value.path,
            name: data_value.name,
            kind: EntityKind::DataValue,
        }
    }
}

/// Computes the path of a node from its parent's path.
///
/// Without a parent the node hangs directly under `root`.
pub fn child_path(
    root: Identifier,
    parent_path: Option<&[Identifier]>,
    id: Identifier,
) -> Vec<Identifier> {
    match parent_path {
        Some(parent_path) => parent_path.iter().copied().chain(std::iter::once(id)).collect(),
        None => vec![root, id],
    }
}
