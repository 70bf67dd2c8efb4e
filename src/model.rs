//! Animal model — species, movement types, and the `Animal` entity.
//!
//! DESIGN
//! ======
//! The species is a closed tag. An animal's name is always its species
//! identifier, which doubles as the discriminator the store uses to rebuild
//! the right variant on read. Sounds are a pure function of the tag.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// =============================================================================
// MOVEMENT TYPE
// =============================================================================

/// How an animal gets around. Serialized by its textual name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementType {
    Flying,
    Walking,
}

impl MovementType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flying => "Flying",
            Self::Walking => "Walking",
        }
    }

    /// Map a lower-case URL segment (`flying`, `walking`) to a movement type.
    #[must_use]
    pub fn from_path_segment(segment: &str) -> Option<Self> {
        match segment {
            "flying" => Some(Self::Flying),
            "walking" => Some(Self::Walking),
            _ => None,
        }
    }
}

impl fmt::Display for MovementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown movement type: {0:?}")]
pub struct UnknownMovementType(pub String);

impl FromStr for MovementType {
    type Err = UnknownMovementType;

    /// Parse the exact textual name, as written by the store.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Flying" => Ok(Self::Flying),
            "Walking" => Ok(Self::Walking),
            other => Err(UnknownMovementType(other.to_owned())),
        }
    }
}

// =============================================================================
// SPECIES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    Lion,
    Eagle,
    Tiger,
}

impl Species {
    /// Type identifier, stored as the discriminator.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lion => "Lion",
            Self::Eagle => "Eagle",
            Self::Tiger => "Tiger",
        }
    }

    #[must_use]
    pub fn sound(self) -> &'static str {
        match self {
            Self::Lion => "Graaaaawww!!!",
            Self::Eagle => "Screeeeeeech!!!",
            Self::Tiger => "Roooaaaar!!!",
        }
    }

    /// Exact match against a stored discriminator value.
    #[must_use]
    pub fn from_discriminator(value: &str) -> Option<Self> {
        match value {
            "Lion" => Some(Self::Lion),
            "Eagle" => Some(Self::Eagle),
            "Tiger" => Some(Self::Tiger),
            _ => None,
        }
    }

    /// Case-insensitive match against a URL segment.
    #[must_use]
    pub fn from_path_segment(segment: &str) -> Option<Self> {
        match segment.to_ascii_lowercase().as_str() {
            "lion" => Some(Self::Lion),
            "eagle" => Some(Self::Eagle),
            "tiger" => Some(Self::Tiger),
            _ => None,
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// ANIMAL
// =============================================================================

/// A zoo animal. `id` stays `None` until the store assigns one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    id: Option<i32>,
    species: Species,
    movement_type: MovementType,
}

impl Animal {
    #[must_use]
    pub fn new(species: Species, movement_type: MovementType) -> Self {
        Self { id: None, species, movement_type }
    }

    #[must_use]
    pub fn lion(movement_type: MovementType) -> Self {
        Self::new(Species::Lion, movement_type)
    }

    #[must_use]
    pub fn eagle(movement_type: MovementType) -> Self {
        Self::new(Species::Eagle, movement_type)
    }

    #[must_use]
    pub fn tiger(movement_type: MovementType) -> Self {
        Self::new(Species::Tiger, movement_type)
    }

    /// Rebuild a stored animal. Only the store hands out ids.
    pub(crate) fn stored(id: i32, species: Species, movement_type: MovementType) -> Self {
        Self { id: Some(id), species, movement_type }
    }

    #[must_use]
    pub fn id(&self) -> Option<i32> {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.species().as_str()
    }

    #[must_use]
    pub fn species(&self) -> Species {
        self.species
    }

    #[must_use]
    pub fn movement_type(&self) -> MovementType {
        self.movement_type
    }

    #[must_use]
    pub fn make_sound(&self) -> &'static str {
        self.species().sound()
    }
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
