//! Postgres-backed animal store.

use async_trait::async_trait;
use sqlx::PgPool;

use super::{AnimalRow, AnimalStore, StoreError, decode_rows};
use crate::model::{Animal, MovementType};

pub struct PgAnimalStore {
    pool: PgPool,
}

impl PgAnimalStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnimalStore for PgAnimalStore {
    async fn get_all_animals(&self) -> Result<Vec<Animal>, StoreError> {
        // "C" collation gives byte-wise ordering regardless of database locale.
        let rows = sqlx::query_as::<_, AnimalRow>(
            r#"SELECT id, name, movement_type FROM animals ORDER BY name COLLATE "C" ASC, id ASC"#,
        )
        .fetch_all(&self.pool)
        .await?;

        decode_rows(rows)
    }

    async fn get_animals_by_movement_type(&self, movement_type: MovementType) -> Result<Vec<Animal>, StoreError> {
        let rows = sqlx::query_as::<_, AnimalRow>(
            "SELECT id, name, movement_type FROM animals WHERE movement_type = $1 ORDER BY id ASC",
        )
        .bind(movement_type.as_str())
        .fetch_all(&self.pool)
        .await?;

        decode_rows(rows)
    }

    async fn add_animal(&self, animal: &Animal) -> Result<Animal, StoreError> {
        let result = sqlx::query_as::<_, AnimalRow>(
            "INSERT INTO animals (name, movement_type) VALUES ($1, $2)
             RETURNING id, name, movement_type",
        )
        .bind(animal.name())
        .bind(animal.movement_type().as_str())
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(row) => Animal::try_from(row),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(StoreError::Duplicate(animal.name().to_owned()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn animal_exists(&self, name: &str) -> Result<bool, StoreError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM animals WHERE name = $1)")
            .bind(name)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }
}

#[cfg(test)]
#[path = "postgres_test.rs"]
mod tests;
