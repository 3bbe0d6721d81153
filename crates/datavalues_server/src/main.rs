use std::net::SocketAddr;

use axum::Router;
use clap::Parser;
use datavalues_core::{
    endpoint::{
        infrastructure::{
            config::{DEFAULT_DATA_VALUES_ROOT, DEFAULT_ROOT_ID, EndpointConfig},
            identifier::Identifier,
        },
        init_endpoint_with_config,
    },
    transport::{DEFAULT_HTTP_PORT, http::data_values_router},
};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "datavalues_server")]
#[command(about = "Data values HTTP endpoint")]
struct DataValuesServerArgs {
    /// Server address to bind to
    #[arg(short, long, default_value = "[::1]")]
    address: String,

    /// Server port to bind to
    #[arg(short, long, default_value_t = DEFAULT_HTTP_PORT)]
    port: u16,

    /// Path under which the data value routes are served
    #[arg(short, long, default_value = "/datavalues")]
    base_path: String,

    /// Root marker prepended to every returned path
    #[arg(long, default_value = DEFAULT_ROOT_ID, allow_hyphen_values = true)]
    root_id: String,

    /// Identifier of the node parentless data values are attached to
    #[arg(long, default_value_t = DEFAULT_DATA_VALUES_ROOT)]
    data_values_root: Identifier,

    /// Report deletion of unknown data values as a failure
    #[arg(long, default_value_t = false)]
    strict_deletes: bool,
}

#[cfg(not(tarpaulin_include))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    datavalues_core::datavalues_tracing::init_server("info");

    let args = DataValuesServerArgs::parse();
    let address: SocketAddr = format!("{}:{}", args.address, args.port).parse()?;

    let config = EndpointConfig::default()
        .with_root_id(args.root_id)
        .with_data_values_root(args.data_values_root);
    let (endpoint, _, _) = init_endpoint_with_config(config, args.strict_deletes);

    let routes = data_values_router(endpoint);
    let base_path = args.base_path.trim_matches('/');
    let app = if base_path.is_empty() {
        routes
    } else {
        Router::new().nest(&format!("/{base_path}"), routes)
    };

    let listener = tokio::net::TcpListener::bind(address).await?;
    info!("[server] listening on {} under {:?}", address, args.base_path);
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("[server] shutting down");
        })
        .await?;

    Ok(())
}
