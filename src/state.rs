//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the zoo service, which in turn owns the shared store handle (the
//! Postgres pool or the in-process table). There is no other shared mutable
//! state.

use std::sync::Arc;

use tracing::info;

use crate::config::{AppConfig, StoreBackend};
use crate::db;
use crate::services::zoo::ZooService;
use crate::store::{AnimalStore, InMemoryAnimalStore, PgAnimalStore, TimeoutStore};

/// Clone is required by Axum; the service is a cheap `Arc` handle.
#[derive(Clone)]
pub struct AppState {
    pub zoo: ZooService,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn AnimalStore>) -> Self {
        Self { zoo: ZooService::new(store) }
    }

    /// Connect the configured backend and wrap it in the per-call timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the Postgres connection or migrations fail.
    pub async fn from_config(config: &AppConfig) -> Result<Self, sqlx::Error> {
        let store: Arc<dyn AnimalStore> = match &config.backend {
            StoreBackend::Postgres { database_url, max_connections } => {
                let pool = db::init_pool(database_url, *max_connections, config.store_timeout).await?;
                info!(max_connections, "postgres animal store ready");
                Arc::new(TimeoutStore::new(PgAnimalStore::new(pool), config.store_timeout))
            }
            StoreBackend::Memory { latency } => {
                info!(?latency, "in-memory animal store ready");
                Arc::new(TimeoutStore::new(InMemoryAnimalStore::with_latency(*latency), config.store_timeout))
            }
        };
        Ok(Self::new(store))
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
