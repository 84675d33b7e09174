use crate::core::factory::PetFactory;
use crate::core::{Console, Gender, Kind, Pet, PetRepository, Result};
use crate::utils::error::InventoryError;
use crate::utils::validation::{is_confirmed, validate_non_empty_string};

const MENU: [&str; 3] = ["1. Add Pet", "2. List All Pets", "3. Exit"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddPet,
    ListPets,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<MenuChoice> {
        match input.trim() {
            "1" => Some(MenuChoice::AddPet),
            "2" => Some(MenuChoice::ListPets),
            "3" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Menu loop over an explicit console and inventory.
pub struct InventoryApp<C: Console, R: PetRepository> {
    console: C,
    inventory: R,
}

impl<C: Console, R: PetRepository> InventoryApp<C, R> {
    pub fn new(console: C, inventory: R) -> Self {
        Self { console, inventory }
    }

    pub fn inventory(&self) -> &R {
        &self.inventory
    }

    pub fn into_parts(self) -> (C, R) {
        (self.console, self.inventory)
    }

    /// Runs until the user picks Exit or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            for line in MENU {
                self.console.say(line)?;
            }

            let Some(input) = self.console.prompt("Choose an option: ")? else {
                tracing::debug!("Input closed, leaving menu");
                break;
            };

            match MenuChoice::parse(&input) {
                Some(MenuChoice::AddPet) => self.add_pet()?,
                Some(MenuChoice::ListPets) => self.list_pets()?,
                Some(MenuChoice::Exit) => break,
                None => {
                    tracing::debug!("Unknown menu choice: {:?}", input);
                    self.console.say("Invalid choice, try again.")?;
                }
            }
        }

        let stored = self.inventory.len();
        tracing::info!("🏁 Session ended with {} pet(s) in the inventory", stored);
        Ok(())
    }

    /// Add Pet flow. Validation errors are reported and swallowed here;
    /// terminal failures propagate.
    pub fn add_pet(&mut self) -> Result<()> {
        let pet = match self.collect_pet() {
            Ok(pet) => pet,
            Err(e) if e.is_validation() => {
                tracing::warn!("⚠️ Pet rejected: {}", e);
                return self.console.say(&format!("An error occurred: {}", e));
            }
            Err(e) => return Err(e),
        };

        self.console.say("You are about to add the following pet:")?;
        self.console.say(&pet.to_string())?;
        let answer = self.ask("Do you want to proceed? (y/n): ")?;

        if is_confirmed(&answer) {
            tracing::info!("✅ Added {} '{}'", pet.kind(), pet.name());
            self.inventory.append(pet);
            self.console.say("Pet added successfully.")
        } else {
            tracing::info!("Cancelled adding {} '{}'", pet.kind(), pet.name());
            self.console.say("Pet addition cancelled.")
        }
    }

    pub fn list_pets(&mut self) -> Result<()> {
        if self.inventory.is_empty() {
            return self.console.say("No pets in the inventory.");
        }

        for pet in self.inventory.all() {
            self.console.say(&pet.to_string())?;
        }
        Ok(())
    }

    fn collect_pet(&mut self) -> Result<Pet> {
        let kind = Kind::parse(&self.ask("Enter what kind of pet: ")?)
            .ok_or_else(|| InventoryError::validation("Invalid pet kind!."))?;
        let gender = Gender::parse(&self.ask("Enter the gender: ")?)
            .ok_or_else(|| InventoryError::validation("Invalid gender!"))?;
        let name = validate_non_empty_string(
            &self.ask("Enter name of the pet: ")?,
            "Pet name cannot be empty.",
        )?;
        let owner = validate_non_empty_string(
            &self.ask("Enter the owner of the pet: ")?,
            "Owner cannot be empty.",
        )?;

        PetFactory::create(&mut self.console, kind, gender, &name, &owner)
    }

    fn ask(&mut self, message: &str) -> Result<String> {
        Ok(self.console.prompt(message)?.unwrap_or_default())
    }
}
