// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use async_trait::async_trait;
use catalog::{
  CatalogError, CatalogResult, ImmediateStockCheck, InMemoryProductStore, Product, ProductDto, ProductService,
  ProductStore, StockCheck, StockDecrement,
};
use once_cell::sync::Lazy;
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};
use tracing::Level;

// --- Fixtures ---
pub fn widget() -> ProductDto {
  ProductDto::new("Widget", 9.99, 5)
}

pub fn sample_products() -> Vec<Product> {
  vec![
    Product::new("Keyboard", 49.90, 3),
    Product::new("Mouse", 19.50, 0),
    Product::new("Monitor", 199.00, 12),
  ]
}

/// A service over a fresh in-memory store that never waits in the stock check.
pub fn service_with(products: Vec<Product>) -> (ProductService, Arc<InMemoryProductStore>) {
  let store = Arc::new(InMemoryProductStore::with_products(products));
  let service = ProductService::new(store.clone(), Arc::new(ImmediateStockCheck));
  (service, store)
}

// --- Stock checks with observable behavior ---
#[derive(Debug, Default)]
pub struct CountingStockCheck {
  pub calls: AtomicUsize,
}

#[async_trait]
impl StockCheck for CountingStockCheck {
  async fn check(&self, _product: &Product) -> CatalogResult<()> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    Ok(())
  }
}

#[derive(Debug, Default)]
pub struct RejectingStockCheck;

#[async_trait]
impl StockCheck for RejectingStockCheck {
  async fn check(&self, product: &Product) -> CatalogResult<()> {
    Err(CatalogError::StockCheckFailed {
      id: product.id.unwrap_or_default(),
      reason: "validation service unavailable".to_string(),
    })
  }
}

// --- Store with a delete racing every read and write of one row ---
/// Wraps an in-memory store and removes row `target` as soon as it is read
/// or about to be overwritten, the way a concurrent DELETE would.
pub struct DeleteRacingStore {
  pub inner: Arc<InMemoryProductStore>,
  pub target: i64,
}

impl DeleteRacingStore {
  async fn race_delete(&self, id: i64) {
    if id == self.target {
      self.inner.delete_by_id(id).await.unwrap();
    }
  }
}

#[async_trait]
impl ProductStore for DeleteRacingStore {
  async fn find_all(&self) -> CatalogResult<Vec<Product>> {
    self.inner.find_all().await
  }

  async fn find_by_id(&self, id: i64) -> CatalogResult<Option<Product>> {
    let found = self.inner.find_by_id(id).await?;
    self.race_delete(id).await;
    Ok(found)
  }

  async fn save(&self, product: Product) -> CatalogResult<Product> {
    self.inner.save(product).await
  }

  async fn update(&self, product: Product) -> CatalogResult<Option<Product>> {
    if let Some(id) = product.id {
      self.race_delete(id).await;
    }
    self.inner.update(product).await
  }

  async fn delete_by_id(&self, id: i64) -> CatalogResult<bool> {
    self.inner.delete_by_id(id).await
  }

  async fn exists_by_id(&self, id: i64) -> CatalogResult<bool> {
    self.inner.exists_by_id(id).await
  }

  async fn decrement_stock_if_positive(&self, id: i64) -> CatalogResult<StockDecrement> {
    self.inner.decrement_stock_if_positive(id).await
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
