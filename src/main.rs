//! # Trade Query Service
//!
//! Main entry point: builds the record store once and serves it over REST.

use anyhow::Context;
use chrono::Utc;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use trade_query::api::rest::{AppState, create_router};
use trade_query::config::{AppConfig, LogConfig, LogFormat};
use trade_query::infrastructure::fixtures::{generate_records, random_seed};
use trade_query::infrastructure::persistence::InMemoryTradeRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;

    init_tracing(&config.log);

    info!(
        service = %config.service_name,
        environment = %config.environment,
        "Starting trade query service v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Log the seed so the same store can be regenerated.
    let seed = config.store.seed.unwrap_or_else(random_seed);
    let records = generate_records(config.store.records, seed, Utc::now())
        .context("failed to generate trade records")?;
    let repository = InMemoryTradeRepository::from_records(records)
        .context("failed to build record store")?;
    info!(records = repository.len(), seed, "Record store ready");

    let state = Arc::new(AppState::new(Arc::new(repository)));
    let app = create_router(state, &config.rest);

    let addr = config.rest.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("REST server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Trade query service stopped");
    Ok(())
}

fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(log.include_target);

    match log.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Failed to listen for shutdown signal: {}", e),
    }
}
