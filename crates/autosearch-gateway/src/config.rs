//! Gateway configuration.

use std::path::PathBuf;

use autosearch_core::{Catalog, CatalogError};
use clap::Parser;

/// AutoSearch suggestion gateway command line arguments.
#[derive(Debug, Parser)]
#[command(name = "autosearch-gateway")]
#[command(about = "HTTP/JSON autocomplete suggestion service")]
#[command(version)]
pub struct Args {
    /// Address to listen on for HTTP requests.
    #[arg(short, long, default_value = "0.0.0.0:8080")]
    pub listen: String,

    /// JSON catalog definition to serve (built-in sample catalog when unset).
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Don't send cross-origin headers.
    #[arg(long, default_value_t = false)]
    pub no_cors: bool,
}

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Address to listen on for HTTP requests.
    pub listen_addr: String,
    /// Catalog definition file, if any.
    pub catalog_path: Option<PathBuf>,
    /// Whether to allow cross-origin requests from any origin.
    pub cors_enabled: bool,
}

impl GatewayConfig {
    /// Load the configured catalog, falling back to the built-in one.
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog_path {
            Some(path) => Catalog::load(path),
            None => Ok(Catalog::builtin()),
        }
    }
}

impl From<&Args> for GatewayConfig {
    fn from(args: &Args) -> Self {
        Self {
            listen_addr: args.listen.clone(),
            catalog_path: args.catalog.clone(),
            cors_enabled: !args.no_cors,
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            catalog_path: None,
            cors_enabled: true,
        }
    }
}
