use crate::utils::error::{InventoryError, Result};
use crate::utils::validation::validate_non_empty_string;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Dog,
    Cat,
    Lizard,
    Bird,
}

impl Kind {
    pub const ALL: [Kind; 4] = [Kind::Dog, Kind::Cat, Kind::Lizard, Kind::Bird];

    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Dog => "Dog",
            Kind::Cat => "Cat",
            Kind::Lizard => "Lizard",
            Kind::Bird => "Bird",
        }
    }

    /// Case-insensitive match against the variant names.
    pub fn parse(input: &str) -> Option<Kind> {
        let input = input.trim();
        Kind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(input))
    }
}

impl FromStr for Kind {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self> {
        Kind::parse(s).ok_or_else(|| InventoryError::validation("Invalid pet kind."))
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    pub fn parse(input: &str) -> Option<Gender> {
        let input = input.trim();
        [Gender::Male, Gender::Female]
            .into_iter()
            .find(|gender| gender.as_str().eq_ignore_ascii_case(input))
    }
}

impl FromStr for Gender {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self> {
        Gender::parse(s).ok_or_else(|| InventoryError::validation("Invalid gender!"))
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The one attribute that differs between kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PetTraits {
    Dog { breed: String },
    Cat { longhaired: bool },
    Lizard { can_fly: bool },
    Bird { can_fly: bool },
}

impl PetTraits {
    pub fn kind(&self) -> Kind {
        match self {
            PetTraits::Dog { .. } => Kind::Dog,
            PetTraits::Cat { .. } => Kind::Cat,
            PetTraits::Lizard { .. } => Kind::Lizard,
            PetTraits::Bird { .. } => Kind::Bird,
        }
    }
}

/// A registered pet. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pet {
    gender: Gender,
    name: String,
    owner: String,
    traits: PetTraits,
}

impl Pet {
    /// Builds a pet, trimming and rejecting blank `name`, `owner` or breed.
    pub fn new(gender: Gender, name: &str, owner: &str, traits: PetTraits) -> Result<Self> {
        let name = validate_non_empty_string(name, "Pet name cannot be empty.")?;
        let owner = validate_non_empty_string(owner, "Owner cannot be empty.")?;
        let traits = match traits {
            PetTraits::Dog { breed } => PetTraits::Dog {
                breed: validate_non_empty_string(&breed, "Breed cannot be empty.")?,
            },
            other => other,
        };

        Ok(Self {
            gender,
            name,
            owner,
            traits,
        })
    }

    pub fn kind(&self) -> Kind {
        self.traits.kind()
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn traits(&self) -> &PetTraits {
        &self.traits
    }
}

fn flag(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

impl fmt::Display for Pet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: Name = {}, Gender = {}, Owner = {}",
            self.kind(),
            self.name,
            self.gender,
            self.owner
        )?;
        match &self.traits {
            PetTraits::Dog { breed } => write!(f, ", Breed = {}", breed),
            PetTraits::Cat { longhaired } => write!(f, ", Longhaired = {}", flag(*longhaired)),
            PetTraits::Lizard { can_fly } | PetTraits::Bird { can_fly } => {
                write!(f, ", Can Fly = {}", flag(*can_fly))
            }
        }
    }
}
