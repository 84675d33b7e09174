use anyhow::Context;
use clap::Parser;
use pet_inventory::utils::{logger, validation::Validate};
use pet_inventory::{
    AppConfig, CliConfig, ConfigProvider, InMemoryInventory, InventoryApp, Terminal,
};

fn load_config(cli: &CliConfig) -> pet_inventory::Result<AppConfig> {
    let config = cli.resolve()?;
    config.validate()?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // Config first: the log level comes from it
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    // Logging
    if config.json_logs() {
        logger::init_json_logger(config.log_level());
    } else {
        logger::init_cli_logger(config.log_level());
    }

    tracing::info!("🚀 Starting pet-inventory");
    match &cli.config {
        Some(path) => tracing::info!("📁 Configuration loaded from: {}", path.display()),
        None => tracing::debug!("No configuration file, using defaults"),
    }

    // Session
    let mut app = InventoryApp::new(Terminal::stdio(), InMemoryInventory::new());
    if let Err(e) = app.run() {
        tracing::error!("❌ Session aborted: {}", e);
        return Err(e).context("terminal session failed");
    }

    Ok(())
}
