//! AutoSearch suggestion gateway binary.

use anyhow::Context;
use autosearch_gateway::{create_router, AppState, Args, GatewayConfig};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line args
    let args = Args::parse();

    // Initialize tracing
    let log_level = args.log_level.clone();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "autosearch_gateway={0},autosearch_core={0},tower_http=info",
                    log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = GatewayConfig::from(&args);

    let catalog = config.load_catalog().with_context(|| match &config.catalog_path {
        Some(path) => format!("failed to load catalog from {}", path.display()),
        None => "failed to build built-in catalog".to_string(),
    })?;

    info!(
        listen = %config.listen_addr,
        variables = catalog.variables().len(),
        operators = catalog.operators().len(),
        logicals = catalog.logicals().len(),
        cors = config.cors_enabled,
        "Starting AutoSearch gateway"
    );

    // Create application state
    let state = AppState::new(catalog, config.clone());

    // Create router
    let app = create_router(state);

    // Start server
    let listener = TcpListener::bind(&config.listen_addr).await?;
    info!("Autocomplete API listening on http://{}", config.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
