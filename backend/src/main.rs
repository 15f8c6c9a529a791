//! Catalog search server entry point.

use std::net::SocketAddr;

use backend::{config::AppConfig, server_extra::router};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, index = %config.algolia.index_name, "catalog search server listening");

    axum::serve(listener, router(config)).await?;
    Ok(())
}
