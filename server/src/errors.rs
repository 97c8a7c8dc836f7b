// server/src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use catalog::CatalogError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Migration Error: {0}")]
  Migrate(#[from] sqlx::migrate::MigrateError),

  #[error("Catalog Error: {0}")]
  Catalog(#[from] CatalogError),

  #[error("Internal Server Error: {0}")]
  Internal(String), // For miscellaneous errors
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Validation(m) => HttpResponse::BadRequest().json(json!({"error": m})),
      AppError::NotFound(m) => HttpResponse::NotFound().json(json!({"error": m})),
      AppError::Config(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "Configuration issue", "detail": m}))
      }
      AppError::Sqlx(_) | AppError::Migrate(_) => {
        HttpResponse::InternalServerError().json(json!({"error": "Database operation failed"}))
      }
      AppError::Catalog(source) => match source {
        CatalogError::NotFound { .. } => HttpResponse::NotFound().json(json!({"error": source.to_string()})),
        CatalogError::OutOfStock { .. } | CatalogError::StockCheckFailed { .. } => {
          HttpResponse::BadRequest().json(json!({"error": source.to_string()}))
        }
        CatalogError::Store { source: store_err } => {
          tracing::error!(store_error = ?store_err, "Record store failure details");
          HttpResponse::InternalServerError().json(json!({"error": "Database operation failed"}))
        }
      },
      AppError::Internal(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "An internal error occurred", "detail": m}))
      }
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
