#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use std::process::ExitCode;

use crate::config::HostConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "portfolio host failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let config = HostConfig::from_env()?;
    let app = routes::app(&config)?;

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, public_dir = %config.public_dir.display(), "portfolio listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
