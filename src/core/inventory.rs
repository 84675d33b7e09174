use crate::core::{Pet, PetRepository};

/// Session inventory; lives as long as the app that owns it.
#[derive(Debug, Default, Clone)]
pub struct InMemoryInventory {
    pets: Vec<Pet>,
}

impl InMemoryInventory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PetRepository for InMemoryInventory {
    fn append(&mut self, pet: Pet) {
        tracing::debug!(
            "Appending {} '{}' at position {}",
            pet.kind(),
            pet.name(),
            self.pets.len()
        );
        self.pets.push(pet);
    }

    fn all(&self) -> &[Pet] {
        &self.pets
    }
}
