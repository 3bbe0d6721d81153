//! Endpoint configuration.

use crate::endpoint::infrastructure::identifier::Identifier;

/// Marker of the host's system root, prepended to every returned path.
pub const DEFAULT_ROOT_ID: &str = "-1";

/// Identifier of the tree node under which parentless data values are placed.
pub const DEFAULT_DATA_VALUES_ROOT: Identifier =
    Identifier::from_u128(0x2d3bd0b2_0a91_4b2d_9e4e_2c3f6d5b7a10);

/// Generic failure reason returned to callers; details only go to the log.
pub const UNHANDLED_ERROR: &str = "An unhandled error occurred. Refer to the error log.";

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct EndpointConfig {
    /// String prepended to every path shaped into a response
    pub root_id: String,
    /// Parent of data values created without an explicit parent
    pub data_values_root: Identifier,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self { root_id: DEFAULT_ROOT_ID.to_string(), data_values_root: DEFAULT_DATA_VALUES_ROOT }
    }
}

impl EndpointConfig {
    pub fn with_root_id(self, root_id: impl Into<String>) -> Self {
        Self { root_id: root_id.into(), ..self }
    }

    pub fn with_data_values_root(self, data_values_root: Identifier) -> Self {
        Self { data_values_root, ..self }
    }

    /// Shapes a stored path for a response: root marker first, then every
    /// segment in its string form.
    pub fn full_path(&self, path: &[Identifier]) -> Vec<String> {
        std::iter::once(self.root_id.clone()).chain(path.iter().map(ToString::to_string)).collect()
    }
}
