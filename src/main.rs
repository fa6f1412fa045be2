//! SSR host for the employee directory.
//!
//! Renders the Leptos shell, serves the hydration bundle under `/pkg` and
//! answers `/healthz`. Employee data lives behind the remote API; this
//! process only hands its base URL to the browser.

#![recursion_limit = "256"]

mod config;
mod routes;

use config::{ConfigError, HostConfig};

#[derive(Debug, thiserror::Error)]
enum HostError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind port {port}: {source}")]
    Bind { port: u16, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "employee-directory host stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    // A missing .env is normal outside local development.
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env loaded");
    }

    let config = HostConfig::from_env()?;
    let app = routes::app(&config).map_err(HostError::Leptos)?;
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .map_err(|source| HostError::Bind { port: config.port, source })?;

    tracing::info!(port = config.port, api_base_url = %config.api.base_url, "employee-directory listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
