use crate::config::ClientConfig;
use crate::domain::model::OrderId;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "pedidos")]
#[command(about = "CRUD client for the pedidos (orders) REST resource")]
pub struct CliConfig {
    #[arg(long, help = "API base URL (overrides --config and $API_BASE_URL)")]
    pub base_url: Option<String>,

    #[arg(long, help = "TOML file with base_url and [headers]")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List every order
    List,
    /// Fetch one order
    Get { id: OrderId },
    /// Create an order from a JSON document
    Create {
        #[arg(value_parser = parse_json)]
        data: serde_json::Value,
    },
    /// Replace an order with a JSON document
    Update {
        id: OrderId,
        #[arg(value_parser = parse_json)]
        data: serde_json::Value,
    },
    /// Delete an order
    Delete { id: OrderId },
}

/// Parses the argument as a JSON document rather than a JSON string.
fn parse_json(s: &str) -> serde_json::Result<serde_json::Value> {
    serde_json::from_str(s)
}

impl CliConfig {
    /// `--base-url` wins over the config file, which wins over the environment.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::from_env(),
        };

        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }

        Ok(config)
    }
}
