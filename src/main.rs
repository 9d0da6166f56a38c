mod api;
mod config;
mod models;
mod storage;
mod types;

use std::process::exit;
use std::sync::Arc;

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::api::{create_router, AppState};
use crate::config::{ServerConfig, USAGE};
use crate::storage::TransactionStorage;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let config = match ServerConfig::from_args(&args) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{error}");
            eprintln!("{USAGE}");
            eprintln!("Available log levels: error, warn, info, debug, trace (default: info)");
            exit(1);
        }
    };

    setup_logging(config.log_level);

    //NOTE: The store lives for the whole process, every handler receives the same instance through the router state
    let state = AppState::new(Arc::new(TransactionStorage::new()));
    let app = create_router(state);

    let listener = TcpListener::bind(config.bind_address).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        error!("Unable to listen for the shutdown signal: {error}");
        std::future::pending::<()>().await;
    }

    info!("Shutdown signal received");
}
