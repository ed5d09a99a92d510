//! stagetrack-web - Concert catalog aggregation service entry point
//!
//! Loads the four remote collections before the serve surface opens: a
//! failed initial fetch aborts startup rather than serving partial data.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::{error, info};

use stagetrack_common::config::ServiceConfig;
use stagetrack_web::fetch::{self, Sources};
use stagetrack_web::store::Store;
use stagetrack_web::{build_router, AppState};

/// Command-line arguments for stagetrack-web
#[derive(Parser, Debug)]
#[command(name = "stagetrack-web")]
#[command(about = "Concert catalog aggregation service")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "STAGETRACK_PORT")]
    port: Option<u16>,

    /// Base URL of the remote catalog API
    #[arg(long, env = "STAGETRACK_API_URL")]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!(
        "Starting stagetrack-web v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();
    let config = ServiceConfig::resolve(args.api_url, args.port);
    info!("Remote catalog API: {}", config.api_base_url);

    let client = fetch::build_client(Duration::from_secs(fetch::DEFAULT_TIMEOUT_SECS))
        .context("Failed to build HTTP client")?;
    let sources = Sources::from_base_url(&config.api_base_url);
    let store = Arc::new(Store::new());

    if let Err(e) = fetch::fetch_all(&client, &sources, &store).await {
        error!("Initial catalog fetch failed: {}", e);
        return Err(e.into());
    }
    info!("Catalog loaded");

    let state = AppState::new(store);
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("stagetrack-web listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
