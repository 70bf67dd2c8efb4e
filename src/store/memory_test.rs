use super::*;
use crate::model::Species;
use tokio::time::Instant;

#[tokio::test]
async fn add_assigns_sequential_ids() {
    let store = InMemoryAnimalStore::new();
    let lion = store.add_animal(&Animal::lion(MovementType::Walking)).await.unwrap();
    let eagle = store.add_animal(&Animal::eagle(MovementType::Flying)).await.unwrap();
    assert_eq!(lion.id(), Some(1));
    assert_eq!(eagle.id(), Some(2));
}

#[tokio::test]
async fn duplicate_name_is_rejected_by_the_table() {
    let store = InMemoryAnimalStore::new();
    store.add_animal(&Animal::tiger(MovementType::Walking)).await.unwrap();

    let err = store
        .add_animal(&Animal::tiger(MovementType::Flying))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Duplicate(name) if name == "Tiger"));
    assert_eq!(store.get_all_animals().await.unwrap().len(), 1);
}

#[tokio::test]
async fn list_is_sorted_by_name_regardless_of_insert_order() {
    let store = InMemoryAnimalStore::new();
    for animal in [
        Animal::tiger(MovementType::Walking),
        Animal::lion(MovementType::Walking),
        Animal::eagle(MovementType::Flying),
    ] {
        store.add_animal(&animal).await.unwrap();
    }

    let names: Vec<_> = store.get_all_animals().await.unwrap().iter().map(Animal::name).collect();
    assert_eq!(names, vec!["Eagle", "Lion", "Tiger"]);
}

#[tokio::test]
async fn filter_returns_only_matching_movement_type() {
    let store = InMemoryAnimalStore::new();
    store.add_animal(&Animal::lion(MovementType::Walking)).await.unwrap();
    store.add_animal(&Animal::eagle(MovementType::Flying)).await.unwrap();

    let flying = store.get_animals_by_movement_type(MovementType::Flying).await.unwrap();
    assert_eq!(flying.len(), 1);
    assert_eq!(flying[0].species(), Species::Eagle);
    assert!(flying.iter().all(|a| a.movement_type() == MovementType::Flying));
}

#[tokio::test]
async fn filter_with_no_match_is_empty() {
    let store = InMemoryAnimalStore::new();
    store.add_animal(&Animal::lion(MovementType::Walking)).await.unwrap();
    let flying = store.get_animals_by_movement_type(MovementType::Flying).await.unwrap();
    assert!(flying.is_empty());
}

#[tokio::test]
async fn exists_uses_ordinal_equality() {
    let store = InMemoryAnimalStore::new();
    store.add_animal(&Animal::eagle(MovementType::Flying)).await.unwrap();
    assert!(store.animal_exists("Eagle").await.unwrap());
    assert!(!store.animal_exists("eagle").await.unwrap());
    assert!(!store.animal_exists("Lion").await.unwrap());
}

#[tokio::test]
async fn corrupt_row_fails_the_read() {
    let store = InMemoryAnimalStore::new();
    store.insert_raw("Lion", "Crawling").await;
    assert!(matches!(store.get_all_animals().await, Err(StoreError::Corrupt(_))));
}

#[tokio::test(start_paused = true)]
async fn latency_delays_full_listing() {
    let store = InMemoryAnimalStore::with_latency(Duration::from_millis(DEFAULT_MEMORY_STORE_LATENCY_MS));
    let started = Instant::now();
    store.get_all_animals().await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(DEFAULT_MEMORY_STORE_LATENCY_MS));
}
