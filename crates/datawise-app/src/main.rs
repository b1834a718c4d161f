//! DataWise application binary - composition root.
//!
//! 1. Parse CLI arguments and load configuration from TOML
//! 2. Initialize tracing
//! 3. Load the sales dataset, degrading to an empty store on failure
//! 4. Start the axum REST API server

mod cli;

use std::path::Path;

use clap::Parser;

use datawise_api::routes;
use datawise_api::state::AppState;
use datawise_core::{DatawiseConfig, DatawiseError};
use datawise_store::SalesStore;

use cli::CliArgs;

/// Load the dataset, or fall back to an explicit empty store.
///
/// With an empty store every question is answered with the
/// dataset-unavailable message instead of failing the process.
fn load_store_or_empty(path: &Path) -> SalesStore {
    match SalesStore::load(path) {
        Ok(store) => {
            if store.is_empty() {
                tracing::warn!(path = %path.display(), "Sales dataset contains no records");
            }
            store
        }
        Err(e) => {
            tracing::error!(
                path = %path.display(),
                error = %e,
                "Failed to load sales dataset, serving with an empty dataset"
            );
            SalesStore::empty()
        }
    }
}

fn init_tracing(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .or_else(|_| tracing_subscriber::EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config precedes tracing init; its load outcome is logged afterwards.
    let config_file = args.resolve_config_path();
    let loaded = DatawiseConfig::load(&config_file);
    let mut config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => DatawiseConfig::default(),
    };
    args.apply(&mut config);

    init_tracing(&config.general.log_level);
    tracing::info!("Starting DataWise v{}", env!("CARGO_PKG_VERSION"));

    match loaded {
        Ok(_) => tracing::info!(path = %config_file.display(), "Configuration loaded"),
        Err(DatawiseError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!(path = %config_file.display(), "No config file, using defaults")
        }
        Err(e) => tracing::warn!(
            path = %config_file.display(),
            error = %e,
            "Failed to load config, using defaults"
        ),
    }

    // Dataset.
    let store = load_store_or_empty(Path::new(&config.dataset.path));
    tracing::info!(records = store.len(), "Sales store ready");

    // API server.
    let state = AppState::new(&config.server, store);
    if let Err(e) = routes::start_server(&config.server, state).await {
        tracing::error!(error = %e, "API server stopped");
        return Err(e.into());
    }

    Ok(())
}
