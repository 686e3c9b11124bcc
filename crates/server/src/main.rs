use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::signal;
use tokio::sync::watch;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use smartdisplay_core::{
    create_source, load_config, load_config_or_default, validate_config, CatalogRefresher,
    CatalogStore,
};
use smartdisplay_server::{api::create_router, state::AppState};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Env var naming the config file
const CONFIG_ENV: &str = "SMARTDISPLAY_CONFIG";

/// Config file used when `SMARTDISPLAY_CONFIG` is not set
const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Smart Data Display v{}", VERSION);

    // An explicitly named config file must exist; the default one is optional
    let config = match std::env::var(CONFIG_ENV) {
        Ok(path) => {
            let path = PathBuf::from(path);
            info!("Loading configuration from {:?}", path);
            load_config(&path)
                .with_context(|| format!("Failed to load config from {:?}", path))?
        }
        Err(_) => {
            let path = PathBuf::from(DEFAULT_CONFIG_PATH);
            info!("Loading configuration from {:?} (optional)", path);
            load_config_or_default(&path)
                .with_context(|| format!("Failed to load config from {:?}", path))?
        }
    };

    validate_config(&config).context("Configuration validation failed")?;
    info!("Catalog source: {:?}", config.catalog.source);

    // Build the catalog before accepting requests
    let store = Arc::new(CatalogStore::empty());
    let refresher = Arc::new(CatalogRefresher::new(
        create_source(&config.catalog),
        Arc::clone(&store),
    ));
    let outcome = refresher
        .refresh()
        .await
        .context("Initial catalog load failed")?;
    info!("Catalog loaded with {} products", outcome.total_products);

    // Optional background refresh
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let periodic = match config.catalog.auto_refresh_secs {
        Some(secs) => {
            info!("Auto refresh every {}s", secs);
            Some(Arc::clone(&refresher).spawn_periodic(Duration::from_secs(secs), shutdown_rx))
        }
        None => {
            info!("Auto refresh disabled");
            None
        }
    };

    let state = Arc::new(AppState::new(config.clone(), refresher));
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(config.server.host, config.server.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutting down...");
    let _ = shutdown_tx.send(true);
    if let Some(handle) = periodic {
        let _ = handle.await;
        info!("Auto refresh stopped");
    }

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
