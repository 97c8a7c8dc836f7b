// core/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
  #[error("Product not found with id: {id}")]
  NotFound { id: i64 },

  #[error("Product out of stock")]
  OutOfStock { id: i64 },

  #[error("Stock check failed for product {id}: {reason}")]
  StockCheckFailed { id: i64, reason: String },

  #[error("Record store error. Source: {source}")]
  Store {
    #[source]
    source: AnyhowError,
  },
}

impl CatalogError {
  /// True for failures caused by the request itself rather than the infrastructure.
  pub fn is_domain(&self) -> bool {
    !matches!(self, CatalogError::Store { .. })
  }
}

// Store implementations report their own error types through anyhow.
impl From<AnyhowError> for CatalogError {
  fn from(err: AnyhowError) -> Self {
    // Unwrap a CatalogError that was previously boxed into anyhow.
    match err.downcast::<CatalogError>() {
      Ok(catalog_err) => catalog_err,
      Err(err) => CatalogError::Store { source: err },
    }
  }
}

pub type CatalogResult<T, E = CatalogError> = std::result::Result<T, E>;
