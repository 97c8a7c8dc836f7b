// server/src/db/mod.rs

//! Database access: pool setup, embedded migrations, the PostgreSQL product
//! store and startup seeding.

pub mod pg_product_store;
pub mod seed;

pub use pg_product_store::PgProductStore;

use crate::config::AppConfig;
use crate::errors::{AppError, Result as AppResult};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{error, info, instrument};

/// Migrations under `server/migrations`, embedded at compile time.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

#[instrument(name = "db::connect", skip(config), fields(max_connections = config.database_max_connections))]
pub async fn connect(config: &AppConfig) -> AppResult<PgPool> {
  let database_url = config
    .database_url
    .as_deref()
    .ok_or_else(|| AppError::Config("DATABASE_URL is not set".to_string()))?;

  let pool = PgPoolOptions::new()
    .max_connections(config.database_max_connections)
    .connect(database_url)
    .await
    .map_err(|e| {
      error!(error = %e, "Failed to connect to the database.");
      AppError::Sqlx(e)
    })?;
  info!("Successfully connected to the database.");
  Ok(pool)
}

#[instrument(name = "db::run_migrations", skip(pool))]
pub async fn run_migrations(pool: &PgPool) -> AppResult<()> {
  MIGRATOR.run(pool).await?;
  info!("Database migrations applied.");
  Ok(())
}
