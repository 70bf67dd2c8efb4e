use super::*;
use crate::store::InMemoryAnimalStore;
use async_trait::async_trait;

#[tokio::test(start_paused = true)]
async fn slow_listing_times_out() {
    let slow = InMemoryAnimalStore::with_latency(Duration::from_millis(500));
    let store = TimeoutStore::new(slow, Duration::from_millis(100));

    let err = store.get_all_animals().await.unwrap_err();
    assert!(matches!(err, StoreError::Timeout(limit) if limit == Duration::from_millis(100)));
}

#[tokio::test(start_paused = true)]
async fn fast_operations_pass_through() {
    let slow = InMemoryAnimalStore::with_latency(Duration::from_millis(500));
    let store = TimeoutStore::new(slow, Duration::from_millis(DEFAULT_STORE_TIMEOUT_MS));

    let added = store.add_animal(&Animal::lion(MovementType::Walking)).await.unwrap();
    assert_eq!(added.id(), Some(1));
    assert!(store.animal_exists("Lion").await.unwrap());
    assert_eq!(store.get_all_animals().await.unwrap().len(), 1);
    assert_eq!(
        store
            .get_animals_by_movement_type(MovementType::Walking)
            .await
            .unwrap()
            .len(),
        1
    );
}

#[tokio::test]
async fn inner_errors_are_not_rewritten() {
    let store = TimeoutStore::new(InMemoryAnimalStore::new(), Duration::from_secs(1));
    store.add_animal(&Animal::eagle(MovementType::Flying)).await.unwrap();
    let err = store.add_animal(&Animal::eagle(MovementType::Flying)).await.unwrap_err();
    assert!(matches!(err, StoreError::Duplicate(_)));
}

/// Commits the insert, then stalls before answering.
struct SlowAckStore(InMemoryAnimalStore);

#[async_trait]
impl AnimalStore for SlowAckStore {
    async fn get_all_animals(&self) -> Result<Vec<Animal>, StoreError> {
        self.0.get_all_animals().await
    }

    async fn get_animals_by_movement_type(&self, movement_type: MovementType) -> Result<Vec<Animal>, StoreError> {
        self.0.get_animals_by_movement_type(movement_type).await
    }

    async fn add_animal(&self, animal: &Animal) -> Result<Animal, StoreError> {
        let stored = self.0.add_animal(animal).await?;
        tokio::time::sleep(Duration::from_secs(1)).await;
        Ok(stored)
    }

    async fn animal_exists(&self, name: &str) -> Result<bool, StoreError> {
        self.0.animal_exists(name).await
    }
}

#[tokio::test(start_paused = true)]
async fn add_committed_before_deadline_still_reports_timeout() {
    let store = TimeoutStore::new(SlowAckStore(InMemoryAnimalStore::new()), Duration::from_millis(100));

    let err = store.add_animal(&Animal::tiger(MovementType::Walking)).await.unwrap_err();
    assert!(matches!(err, StoreError::Timeout(_)));

    // The row is there; a retry sees the unique constraint.
    assert!(store.animal_exists("Tiger").await.unwrap());
    let retry = store.add_animal(&Animal::tiger(MovementType::Walking)).await.unwrap_err();
    assert!(matches!(retry, StoreError::Duplicate(name) if name == "Tiger"));
}
