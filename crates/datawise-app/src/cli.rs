//! CLI argument definitions for the DataWise service.
//!
//! Uses `clap` with derive macros for ergonomic argument parsing.
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

use datawise_core::DatawiseConfig;

/// DataWise - answers natural-language questions about a sales dataset.
#[derive(Parser, Debug, Default)]
#[command(name = "datawise", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Address to bind the API server to.
    #[arg(long = "host")]
    pub host: Option<String>,

    /// API server port.
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,

    /// Path to the JSON sales dataset.
    #[arg(short = 'd', long = "dataset")]
    pub dataset: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > DATAWISE_CONFIG env var > ./datawise.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("DATAWISE_CONFIG") {
            return PathBuf::from(p);
        }
        PathBuf::from("datawise.toml")
    }

    /// Resolve the API server port.
    ///
    /// Priority: --port flag > DATAWISE_PORT env var > config file value.
    pub fn resolve_port(&self, config_port: u16) -> u16 {
        if let Some(p) = self.port {
            return p;
        }
        if let Ok(val) = std::env::var("DATAWISE_PORT") {
            if let Ok(p) = val.parse::<u16>() {
                return p;
            }
        }
        config_port
    }

    /// Resolve the dataset path.
    ///
    /// Priority: --dataset flag > DATAWISE_DATASET env var > config file value.
    pub fn resolve_dataset(&self, config_path: &str) -> String {
        if let Some(ref p) = self.dataset {
            return p.to_string_lossy().to_string();
        }
        if let Ok(p) = std::env::var("DATAWISE_DATASET") {
            return p;
        }
        config_path.to_string()
    }

    /// Fold every override into the loaded configuration.
    pub fn apply(&self, config: &mut DatawiseConfig) {
        if let Some(ref host) = self.host {
            config.server.host = host.clone();
        }
        config.server.port = self.resolve_port(config.server.port);
        config.dataset.path = self.resolve_dataset(&config.dataset.path);
        if let Some(ref level) = self.log_level {
            config.general.log_level = level.clone();
        }
    }
}
