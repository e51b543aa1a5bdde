mod api;
mod client;
mod config;
mod dto;
mod error;
mod state;

use crate::{config::Config, error::AppError, state::AppState};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(err) = run().await {
        error!("{err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    info!("Starting server...");
    let config = Config::from_env()?;
    let state = Arc::new(AppState::new(&config)?);
    let app = api::router(state);

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    info!("Listening to port {port}");
    axum::serve(listener, app).await?;
    Ok(())
}
