//! feedtext server entry point.
//!
//! Boots the HTTP server: one fetch-decode-format cycle per request, no
//! background jobs, no persisted state.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use feedtext_core::config::AppConfig;

mod error;
mod routes;
mod state;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = AppConfig::load()?;
    let state = state::AppState::new(&config)?;
    let app = routes::create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("feedtext listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
