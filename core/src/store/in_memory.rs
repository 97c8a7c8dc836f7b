// core/src/store/in_memory.rs
use super::{ProductStore, StockDecrement};
use crate::error::CatalogResult;
use crate::model::Product;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use tracing::{event, Level};

#[derive(Debug)]
struct Rows {
  by_id: BTreeMap<i64, Product>,
  next_id: i64,
}

/// Process-local record store backed by a `BTreeMap` under a `parking_lot::RwLock`.
///
/// Ids are assigned from a sequence starting at 1 and are never reused. Every
/// operation completes under a single lock acquisition, so the conditional
/// decrement is atomic. Guards are never held across an `.await`.
#[derive(Debug)]
pub struct InMemoryProductStore {
  rows: RwLock<Rows>,
}

impl InMemoryProductStore {
  pub fn new() -> Self {
    Self {
      rows: RwLock::new(Rows {
        by_id: BTreeMap::new(),
        next_id: 1,
      }),
    }
  }

  /// Builds a store pre-populated with `products`, assigning ids in order.
  pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
    let store = Self::new();
    {
      let mut rows = store.rows.write();
      for product in products {
        Self::insert_locked(&mut rows, product);
      }
    }
    store
  }

  pub fn len(&self) -> usize {
    self.rows.read().by_id.len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  fn insert_locked(rows: &mut Rows, mut product: Product) -> Product {
    let id = rows.next_id;
    rows.next_id += 1;
    product.id = Some(id);
    rows.by_id.insert(id, product.clone());
    product
  }
}

impl Default for InMemoryProductStore {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
  async fn find_all(&self) -> CatalogResult<Vec<Product>> {
    Ok(self.rows.read().by_id.values().cloned().collect())
  }

  async fn find_by_id(&self, id: i64) -> CatalogResult<Option<Product>> {
    Ok(self.rows.read().by_id.get(&id).cloned())
  }

  async fn save(&self, product: Product) -> CatalogResult<Product> {
    let mut rows = self.rows.write();
    match product.id {
      Some(id) if rows.by_id.contains_key(&id) => {
        rows.by_id.insert(id, product.clone());
        event!(Level::TRACE, product_id = id, "Overwrote existing row.");
        Ok(product)
      }
      _ => {
        let saved = Self::insert_locked(&mut rows, product);
        event!(Level::TRACE, product_id = ?saved.id, "Inserted new row.");
        Ok(saved)
      }
    }
  }

  async fn update(&self, product: Product) -> CatalogResult<Option<Product>> {
    let Some(id) = product.id else {
      return Ok(None);
    };
    let mut rows = self.rows.write();
    match rows.by_id.get_mut(&id) {
      Some(existing) => {
        *existing = product.clone();
        event!(Level::TRACE, product_id = id, "Updated existing row.");
        Ok(Some(product))
      }
      None => Ok(None),
    }
  }

  async fn delete_by_id(&self, id: i64) -> CatalogResult<bool> {
    Ok(self.rows.write().by_id.remove(&id).is_some())
  }

  async fn exists_by_id(&self, id: i64) -> CatalogResult<bool> {
    Ok(self.rows.read().by_id.contains_key(&id))
  }

  async fn decrement_stock_if_positive(&self, id: i64) -> CatalogResult<StockDecrement> {
    let mut rows = self.rows.write();
    let outcome = match rows.by_id.get_mut(&id) {
      None => StockDecrement::Missing,
      Some(product) if product.stock_quantity > 0 => {
        product.stock_quantity -= 1;
        StockDecrement::Applied(product.clone())
      }
      Some(_) => StockDecrement::OutOfStock,
    };
    Ok(outcome)
  }
}
