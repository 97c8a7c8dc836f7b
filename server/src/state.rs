// server/src/state.rs
use crate::config::AppConfig;
use catalog::{DelayedStockCheck, ProductService, ProductStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub products: Arc<ProductService>,
}

impl AppState {
  /// Wires the product service over `store`, with the stock check delay taken from `config`.
  pub fn new(config: &AppConfig, store: Arc<dyn ProductStore>) -> Self {
    let stock_check = DelayedStockCheck::new(config.stock_check_delay);
    tracing::info!(delay_ms = stock_check.delay().as_millis() as u64, "Stock check configured.");
    Self {
      products: Arc::new(ProductService::new(store, Arc::new(stock_check))),
    }
  }
}
