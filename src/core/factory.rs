use crate::core::{Console, Gender, Kind, Pet, PetTraits, Result};
use crate::utils::validation::parse_yes_no;

pub struct PetFactory;

impl PetFactory {
    /// Asks for the kind-specific attribute and builds the pet.
    pub fn create<C: Console>(
        console: &mut C,
        kind: Kind,
        gender: Gender,
        name: &str,
        owner: &str,
    ) -> Result<Pet> {
        let traits = match kind {
            Kind::Dog => PetTraits::Dog {
                breed: Self::ask(console, "Enter breed of the dog: ")?,
            },
            Kind::Cat => PetTraits::Cat {
                longhaired: Self::ask_yes_no(console, "Is the cat longhaired (y/n)? ")?,
            },
            Kind::Lizard => PetTraits::Lizard {
                can_fly: Self::ask_yes_no(console, "Can the lizard fly (y/n)? ")?,
            },
            Kind::Bird => PetTraits::Bird {
                can_fly: Self::ask_yes_no(console, "Can the bird fly (y/n)? ")?,
            },
        };

        let pet = Pet::new(gender, name, owner, traits)?;
        tracing::debug!("Built pet: {}", pet);
        Ok(pet)
    }

    fn ask<C: Console>(console: &mut C, message: &str) -> Result<String> {
        Ok(console.prompt(message)?.unwrap_or_default())
    }

    fn ask_yes_no<C: Console>(console: &mut C, message: &str) -> Result<bool> {
        parse_yes_no(&Self::ask(console, message)?)
    }
}
