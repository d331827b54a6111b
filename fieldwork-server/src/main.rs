//! # Fieldwork Server
//!
//! Job-dispatch tracker for field inspectors.
//!
//! Inspectors are registered against a fixed timezone whitelist; jobs are
//! created available, assigned with a scheduled time, and completed with an
//! assessment note. The lifecycle transitions are guarded and atomic with
//! respect to the store.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use fieldwork_core::MemoryStore;
use fieldwork_server::{AppState, config::Config, create_api_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log).context("invalid log filter")?)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = AppState::new(Arc::new(MemoryStore::new()));
    let router = create_api_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "fieldwork server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("fieldwork server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to install ctrl-c handler");
        return;
    }
    info!("shutdown signal received");
}
