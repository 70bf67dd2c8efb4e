//! Animal store — single-table persistence for every species.
//!
//! DESIGN
//! ======
//! All species live in one `animals` table. The `name` column is the
//! discriminator: on read it is matched against the closed species set to
//! rebuild the right variant. Movement type is stored as its textual name.
//! A row that matches neither is corrupt data and fails the request.
//!
//! The `UNIQUE` constraint on `name` is the authoritative duplicate guard;
//! backends report a violation as [`StoreError::Duplicate`].

pub mod memory;
pub mod postgres;
pub mod timeout;

use std::time::Duration;

use async_trait::async_trait;

use crate::model::{Animal, MovementType, Species};

pub use memory::InMemoryAnimalStore;
pub use postgres::PgAnimalStore;
pub use timeout::TimeoutStore;

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("animal already stored: {0}")]
    Duplicate(String),
    #[error("corrupt animal row: {0}")]
    Corrupt(String),
    #[error("store operation timed out after {0:?}")]
    Timeout(Duration),
}

// =============================================================================
// STORE TRAIT
// =============================================================================

#[async_trait]
pub trait AnimalStore: Send + Sync {
    /// All animals, ordered by name (ordinal, case-sensitive).
    async fn get_all_animals(&self) -> Result<Vec<Animal>, StoreError>;

    async fn get_animals_by_movement_type(&self, movement_type: MovementType) -> Result<Vec<Animal>, StoreError>;

    /// Insert an animal and return it with its assigned id.
    ///
    /// No existence check happens here beyond the unique constraint.
    async fn add_animal(&self, animal: &Animal) -> Result<Animal, StoreError>;

    async fn animal_exists(&self, name: &str) -> Result<bool, StoreError>;
}

// =============================================================================
// ROW MAPPING
// =============================================================================

/// Raw `animals` row, before discriminator decoding.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct AnimalRow {
    pub id: i32,
    pub name: String,
    pub movement_type: String,
}

impl TryFrom<AnimalRow> for Animal {
    type Error = StoreError;

    fn try_from(row: AnimalRow) -> Result<Self, Self::Error> {
        let species = Species::from_discriminator(&row.name)
            .ok_or_else(|| StoreError::Corrupt(format!("row {}: unknown discriminator {:?}", row.id, row.name)))?;
        let movement_type = row
            .movement_type
            .parse::<MovementType>()
            .map_err(|e| StoreError::Corrupt(format!("row {}: {e}", row.id)))?;
        Ok(Animal::stored(row.id, species, movement_type))
    }
}

fn decode_rows(rows: Vec<AnimalRow>) -> Result<Vec<Animal>, StoreError> {
    rows.into_iter().map(Animal::try_from).collect()
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
