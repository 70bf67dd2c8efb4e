//! Per-operation timeout wrapper for any [`AnimalStore`].

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;

use super::{AnimalStore, StoreError};
use crate::model::{Animal, MovementType};

pub const DEFAULT_STORE_TIMEOUT_MS: u64 = 5_000;

/// Bounds every call on the inner store. An elapsed deadline becomes
/// [`StoreError::Timeout`]; the inner operation is dropped at that point.
///
/// Dropping does not roll back. An insert that commits just before the
/// deadline still reports `Timeout`, and retrying that add is then rejected
/// as a duplicate even though the animal is stored.
pub struct TimeoutStore<S> {
    inner: S,
    limit: Duration,
}

impl<S: AnimalStore> TimeoutStore<S> {
    #[must_use]
    pub fn new(inner: S, limit: Duration) -> Self {
        Self { inner, limit }
    }

    async fn bounded<T>(&self, fut: impl Future<Output = Result<T, StoreError>> + Send) -> Result<T, StoreError> {
        match tokio::time::timeout(self.limit, fut).await {
            Ok(result) => result,
            Err(_) => Err(StoreError::Timeout(self.limit)),
        }
    }
}

#[async_trait]
impl<S: AnimalStore> AnimalStore for TimeoutStore<S> {
    async fn get_all_animals(&self) -> Result<Vec<Animal>, StoreError> {
        self.bounded(self.inner.get_all_animals()).await
    }

    async fn get_animals_by_movement_type(&self, movement_type: MovementType) -> Result<Vec<Animal>, StoreError> {
        self.bounded(self.inner.get_animals_by_movement_type(movement_type))
            .await
    }

    async fn add_animal(&self, animal: &Animal) -> Result<Animal, StoreError> {
        self.bounded(self.inner.add_animal(animal)).await
    }

    async fn animal_exists(&self, name: &str) -> Result<bool, StoreError> {
        self.bounded(self.inner.animal_exists(name)).await
    }
}

#[cfg(test)]
#[path = "timeout_test.rs"]
mod tests;
