use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use flower_lighting::api::{self, AppState};
use flower_lighting::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load();
    let state = AppState {
        blob_pool: api::blob_pool(&config),
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "serving storefront api");
    axum::serve(listener, api::router(state)).await?;

    Ok(())
}
