use std::net::{IpAddr, SocketAddr};
use tracing::info;
use userdir_services::{config::Config, routes, telemetry, users::InMemoryUserStorage};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();

    telemetry::init_tracing();

    if let Err(err) = dotenv {
        tracing::debug!("No .env loaded: {err}");
    }

    let config = Config::init()?;
    info!(
        environment = %config.environment(),
        server_addr = %config.server_addr(),
        port = %config.port(),
        api_base = %config.api_base(),
        "Configuration loaded"
    );

    let addr = SocketAddr::from((config.server_addr().parse::<IpAddr>()?, config.port()));
    let route = routes(InMemoryUserStorage::new(), config);

    info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, route).await?;

    Ok(())
}
