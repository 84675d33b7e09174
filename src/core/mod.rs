pub mod factory;
pub mod inventory;
pub mod menu;

pub use crate::domain::model::{Gender, Kind, Pet, PetTraits};
pub use crate::domain::ports::{ConfigProvider, Console, PetRepository};
pub use crate::utils::error::Result;
