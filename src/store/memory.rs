//! In-process animal store.
//!
//! DESIGN
//! ======
//! Mirrors the Postgres layout: one table of raw `AnimalRow`s, decoded through
//! the same discriminator mapping on every read. The unique name check runs
//! under the write lock, so it plays the role of the database constraint.
//!
//! There is no real I/O here, so `get_all_animals` sleeps for a configurable
//! latency to stand in for a storage round trip.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{AnimalRow, AnimalStore, StoreError, decode_rows};
use crate::model::{Animal, MovementType};

pub const DEFAULT_MEMORY_STORE_LATENCY_MS: u64 = 500;

#[derive(Default)]
struct Table {
    rows: Vec<AnimalRow>,
    next_id: i32,
}

#[derive(Default)]
pub struct InMemoryAnimalStore {
    table: RwLock<Table>,
    latency: Duration,
}

impl InMemoryAnimalStore {
    /// Empty store with no simulated latency.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency, ..Self::new() }
    }

    /// Insert a raw row, bypassing decoding and the unique check.
    #[cfg(test)]
    pub(crate) async fn insert_raw(&self, name: &str, movement_type: &str) {
        let mut table = self.table.write().await;
        table.next_id += 1;
        let id = table.next_id;
        table.rows.push(AnimalRow { id, name: name.to_owned(), movement_type: movement_type.to_owned() });
    }
}

#[async_trait]
impl AnimalStore for InMemoryAnimalStore {
    async fn get_all_animals(&self) -> Result<Vec<Animal>, StoreError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let mut rows = self.table.read().await.rows.clone();
        rows.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        decode_rows(rows)
    }

    async fn get_animals_by_movement_type(&self, movement_type: MovementType) -> Result<Vec<Animal>, StoreError> {
        let rows: Vec<AnimalRow> = self
            .table
            .read()
            .await
            .rows
            .iter()
            .filter(|row| row.movement_type == movement_type.as_str())
            .cloned()
            .collect();
        decode_rows(rows)
    }

    async fn add_animal(&self, animal: &Animal) -> Result<Animal, StoreError> {
        let mut table = self.table.write().await;
        if table.rows.iter().any(|row| row.name == animal.name()) {
            return Err(StoreError::Duplicate(animal.name().to_owned()));
        }

        table.next_id += 1;
        let row = AnimalRow {
            id: table.next_id,
            name: animal.name().to_owned(),
            movement_type: animal.movement_type().as_str().to_owned(),
        };
        table.rows.push(row.clone());
        Animal::try_from(row)
    }

    async fn animal_exists(&self, name: &str) -> Result<bool, StoreError> {
        Ok(self.table.read().await.rows.iter().any(|row| row.name == name))
    }
}

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;
