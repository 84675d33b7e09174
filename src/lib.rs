pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::console::Terminal;
pub use config::toml_config::AppConfig;
pub use crate::core::{factory::PetFactory, inventory::InMemoryInventory, menu::InventoryApp};
pub use domain::model::{Gender, Kind, Pet, PetTraits};
pub use domain::ports::{ConfigProvider, Console, PetRepository};
pub use utils::error::{InventoryError, Result};
