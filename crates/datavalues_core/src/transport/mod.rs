//! Transports exposing the data values endpoint.

pub mod http;

/// Default port of the HTTP transport.
pub const DEFAULT_HTTP_PORT: u16 = 8090;
