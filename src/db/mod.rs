//! Animal table pool setup and schema migrations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Startup uses this module to create the shared SQLx pool and apply the
//! `animals` schema before accepting API traffic. Pool checkouts are bounded
//! by the same limit as a store call, so a starved pool fails as fast as a
//! slow query would.

use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

/// Connect to the zoo database and bring the `animals` table up to date.
///
/// # Errors
///
/// Returns an error if the connection or migrations fail.
pub async fn init_pool(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect(database_url)
        .await?;

    sqlx::migrate!("src/db/migrations").run(&pool).await?;
    info!(max_connections, ?acquire_timeout, "animals schema migrated");

    Ok(pool)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
