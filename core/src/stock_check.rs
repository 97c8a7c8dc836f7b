// core/src/stock_check.rs

//! The validation step that runs before a stock decrement.
//!
//! Modeled as a collaborator so a real check (a rate limiter, a reservation
//! service) can replace the fixed delay and report its own failures.

use crate::error::CatalogResult;
use crate::model::Product;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_STOCK_CHECK_DELAY: Duration = Duration::from_millis(100);

#[async_trait]
pub trait StockCheck: Send + Sync {
  /// Approves or rejects a pending decrement for `product`.
  ///
  /// A rejection should be `CatalogError::StockCheckFailed`; stock is left untouched.
  async fn check(&self, product: &Product) -> CatalogResult<()>;
}

/// Waits a fixed delay, then approves.
#[derive(Debug, Clone)]
pub struct DelayedStockCheck {
  delay: Duration,
}

impl DelayedStockCheck {
  pub fn new(delay: Duration) -> Self {
    Self { delay }
  }

  pub fn delay(&self) -> Duration {
    self.delay
  }
}

impl Default for DelayedStockCheck {
  fn default() -> Self {
    Self::new(DEFAULT_STOCK_CHECK_DELAY)
  }
}

#[async_trait]
impl StockCheck for DelayedStockCheck {
  async fn check(&self, product: &Product) -> CatalogResult<()> {
    debug!(product_id = ?product.id, delay_ms = self.delay.as_millis() as u64, "Validating stock update.");
    tokio::time::sleep(self.delay).await;
    Ok(())
  }
}

/// Approves immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateStockCheck;

#[async_trait]
impl StockCheck for ImmediateStockCheck {
  async fn check(&self, _product: &Product) -> CatalogResult<()> {
    Ok(())
  }
}
