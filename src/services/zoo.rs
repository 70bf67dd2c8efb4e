//! Zoo service — listing, filtering, and the unique-name guard on insert.
//!
//! DESIGN
//! ======
//! Reads delegate straight to the store. `add_animal` checks whether the name
//! is taken and only then writes. The check and the write are not atomic: two
//! concurrent adds can both pass the check. The store's unique constraint
//! settles that race, and its `Duplicate` error is reported as the same
//! rejection the check would have produced.
//!
//! ERROR HANDLING
//! ==============
//! A rejected add is an outcome, not an error. Store failures propagate
//! unchanged; nothing here retries.

use std::sync::Arc;

use tracing::{info, warn};

use crate::model::{Animal, MovementType};
use crate::store::{AnimalStore, StoreError};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ZooError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ZooError {
    /// Timeouts are transient; everything else is a hard failure.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Store(StoreError::Timeout(_)))
    }
}

/// Result of an add attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Stored; carries the animal with its assigned id.
    Added(Animal),
    /// An animal with this name already exists. Nothing was written; carries
    /// the unsaved candidate.
    Rejected(Animal),
}

impl AddOutcome {
    #[must_use]
    pub fn was_added(&self) -> bool {
        matches!(self, Self::Added(_))
    }

    /// The stored animal, or the rejected candidate (without an id).
    #[must_use]
    pub fn animal(&self) -> &Animal {
        match self {
            Self::Added(animal) | Self::Rejected(animal) => animal,
        }
    }
}

// =============================================================================
// SERVICE
// =============================================================================

#[derive(Clone)]
pub struct ZooService {
    store: Arc<dyn AnimalStore>,
}

impl ZooService {
    #[must_use]
    pub fn new(store: Arc<dyn AnimalStore>) -> Self {
        Self { store }
    }

    /// All animals, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns a store error if the read fails.
    pub async fn get_all_animals(&self) -> Result<Vec<Animal>, ZooError> {
        Ok(self.store.get_all_animals().await?)
    }

    /// Animals with the given movement type. Empty when none match.
    ///
    /// # Errors
    ///
    /// Returns a store error if the read fails.
    pub async fn get_animals_by_movement_type(&self, movement_type: MovementType) -> Result<Vec<Animal>, ZooError> {
        Ok(self
            .store
            .get_animals_by_movement_type(movement_type)
            .await?)
    }

    /// Add an animal unless one with the same name is already stored.
    ///
    /// # Errors
    ///
    /// Returns a store error if the existence check or the insert fails for
    /// any reason other than a duplicate name.
    pub async fn add_animal(&self, animal: &Animal) -> Result<AddOutcome, ZooError> {
        let name = animal.name();

        if self.store.animal_exists(name).await? {
            info!(%name, "animal already in zoo, not added");
            return Ok(AddOutcome::Rejected(animal.clone()));
        }

        match self.store.add_animal(animal).await {
            Ok(stored) => {
                info!(
                    id = stored.id(),
                    %name,
                    movement_type = %stored.movement_type(),
                    sound = stored.make_sound(),
                    "animal added to zoo"
                );
                Ok(AddOutcome::Added(stored))
            }
            Err(StoreError::Duplicate(_)) => {
                warn!(%name, "concurrent add won the race, not added");
                Ok(AddOutcome::Rejected(animal.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
#[path = "zoo_test.rs"]
mod tests;
