pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "pet-inventory")]
#[command(about = "Interactive in-memory pet inventory")]
pub struct CliConfig {
    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the configured file (or defaults) and applies flag overrides.
    pub fn resolve(&self) -> crate::utils::error::Result<toml_config::AppConfig> {
        let mut config = match &self.config {
            Some(path) => toml_config::AppConfig::from_file(path)?,
            None => toml_config::AppConfig::default(),
        };

        if self.verbose {
            config.logging.level = "debug".to_string();
        }
        if self.json_logs {
            config.logging.format = "json".to_string();
        }

        Ok(config)
    }
}
