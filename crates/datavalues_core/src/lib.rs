//! A request-handling layer for data values.
//!
//! Data values are named, kind-typed records addressed by a path of identifiers
//! through a content tree. This crate accepts create-or-update, read and delete
//! requests, resolves ancestor paths through an entity directory, delegates
//! storage to a persistence collaborator and shapes uniform response envelopes.
//!
//! Collaborators are [`tower`] services injected at construction, and the HTTP
//! surface is served with [`axum`].
//!
//! [`tower`]: https://docs.rs/tower
//! [`axum`]: https://docs.rs/axum

#[cfg(test)]
pub mod tests;

pub mod endpoint;
pub mod transport;

pub mod datavalues_tracing {
    use std::sync::Once;
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    static INIT: Once = Once::new();

    /// Initialize tracing for tests
    /// This sets up a tracing subscriber that will display logs during test execution.
    /// Call this at the beginning of tests that need to see tracing output.
    pub fn init() {
        INIT.call_once(|| {
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));

            fmt().with_target(false).with_test_writer().with_env_filter(filter).init();
        });
    }

    /// Initialize tracing for the server binary.
    ///
    /// Reads `RUST_LOG` and falls back to `default_directive` when it is unset
    /// or cannot be parsed.
    pub fn init_server(default_directive: &str) {
        INIT.call_once(|| {
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directive));

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_target(false))
                .init();
        });
    }
}
