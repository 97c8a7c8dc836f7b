// server/src/main.rs

use actix_web::{web as actix_data, App, HttpServer};
use catalog::{InMemoryProductStore, ProductStore};
use catalog_server::config::{AppConfig, StoreBackend};
use catalog_server::db::{self, PgProductStore};
use catalog_server::state::AppState;
use catalog_server::{telemetry, web};
use std::sync::Arc;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  dotenvy::dotenv().ok();
  telemetry::init_tracing();

  tracing::info!("Starting product catalog server...");

  let app_config = AppConfig::from_env().map_err(|e| {
    tracing::error!(error = %e, "Failed to load application configuration.");
    e
  })?;

  let store: Arc<dyn ProductStore> = match app_config.store_backend {
    StoreBackend::Postgres => {
      let pool = db::connect(&app_config).await?;
      if app_config.run_migrations {
        db::run_migrations(&pool).await?;
      }
      Arc::new(PgProductStore::new(pool))
    }
    StoreBackend::Memory => {
      tracing::warn!("Using the in-memory store; data is lost on shutdown.");
      Arc::new(InMemoryProductStore::new())
    }
  };

  let server_address = app_config.bind_address();
  let app_state = AppState::new(&app_config, store);

  if app_config.seed_db {
    db::seed::seed_if_empty(&app_state.products).await?;
  }

  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await?;

  tracing::info!("Server stopped.");
  Ok(())
}
