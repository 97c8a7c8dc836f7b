// core/src/store/mod.rs

//! The record store contract behind the product service.
//!
//! A `ProductStore` persists [`Product`] rows keyed by a store-assigned `i64` id.
//! Implementations must make [`ProductStore::decrement_stock_if_positive`] atomic
//! with respect to itself for a given id: two concurrent calls may never both
//! observe the same positive quantity and both write.

pub mod in_memory;

use crate::error::CatalogResult;
use crate::model::Product;
use async_trait::async_trait;

pub use in_memory::InMemoryProductStore;

/// Outcome of an atomic decrement-if-positive.
#[derive(Debug, Clone, PartialEq)]
pub enum StockDecrement {
  /// Stock was positive and has been lowered by one. Holds the updated row.
  Applied(Product),
  /// The row exists but its stock is zero (or below); nothing was written.
  OutOfStock,
  /// No row with the given id.
  Missing,
}

#[async_trait]
pub trait ProductStore: Send + Sync {
  /// All rows, ordered by id ascending.
  async fn find_all(&self) -> CatalogResult<Vec<Product>>;

  async fn find_by_id(&self, id: i64) -> CatalogResult<Option<Product>>;

  /// Insert-or-update.
  ///
  /// A record whose `id` names an existing row overwrites that row. Any other
  /// record is inserted under a freshly assigned id. Returns the persisted row.
  async fn save(&self, product: Product) -> CatalogResult<Product>;

  /// Overwrites the existing row named by `product.id`.
  ///
  /// Never inserts: returns `None` when the id is absent or names no row.
  async fn update(&self, product: Product) -> CatalogResult<Option<Product>>;

  /// Removes the row, returning whether one existed.
  async fn delete_by_id(&self, id: i64) -> CatalogResult<bool>;

  async fn exists_by_id(&self, id: i64) -> CatalogResult<bool>;

  async fn decrement_stock_if_positive(&self, id: i64) -> CatalogResult<StockDecrement>;
}
