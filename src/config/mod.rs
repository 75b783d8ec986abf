pub mod toml_config;

use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "vernacular-site"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Server-rendered storefront with vernacular content")
)]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub config: Option<String>,

    /// Override `server.bind_address` from the config file
    #[cfg_attr(feature = "cli", arg(long))]
    pub bind: Option<String>,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Emit logs as JSON lines"))]
    pub json_logs: bool,
}

impl CliConfig {
    /// Loads the TOML file when one is given, then applies command-line overrides.
    pub fn load(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None => {
                tracing::info!("No configuration file given, using defaults");
                TomlConfig::default()
            }
        };

        if let Some(bind) = &self.bind {
            tracing::info!("🔧 Bind address overridden to: {}", bind);
            config.server.bind_address = bind.clone();
        }

        Ok(config)
    }
}
