// core/src/service.rs

//! `ProductService` orchestrates the record store, the mapper and the stock
//! check. It speaks [`ProductDto`] to callers and [`Product`] to the store.

use crate::error::{CatalogError, CatalogResult};
use crate::mapper;
use crate::model::{Product, ProductDto};
use crate::stock_check::StockCheck;
use crate::store::{ProductStore, StockDecrement};
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[derive(Clone)]
pub struct ProductService {
  store: Arc<dyn ProductStore>,
  stock_check: Arc<dyn StockCheck>,
}

impl ProductService {
  pub fn new(store: Arc<dyn ProductStore>, stock_check: Arc<dyn StockCheck>) -> Self {
    Self { store, stock_check }
  }

  #[instrument(name = "product_service::find_all", skip(self), err(Display))]
  pub async fn find_all(&self) -> CatalogResult<Vec<ProductDto>> {
    let products = self.store.find_all().await?;
    Ok(mapper::to_dto_list(&products))
  }

  #[instrument(name = "product_service::find_by_id", skip(self), err(Display))]
  pub async fn find_by_id(&self, id: i64) -> CatalogResult<Option<ProductDto>> {
    let found = self.store.find_by_id(id).await?;
    Ok(found.as_ref().map(mapper::to_dto))
  }

  #[instrument(name = "product_service::save", skip(self, dto), fields(name = %dto.name), err(Display))]
  pub async fn save(&self, dto: ProductDto) -> CatalogResult<ProductDto> {
    let saved = self.store.save(Product::from(dto)).await?;
    info!(product_id = ?saved.id, "Product saved.");
    Ok(ProductDto::from(saved))
  }

  /// Saves each representation in order and returns the persisted rows.
  #[instrument(name = "product_service::save_all", skip(self, dtos), fields(count = dtos.len()), err(Display))]
  pub async fn save_all(&self, dtos: &[ProductDto]) -> CatalogResult<Vec<ProductDto>> {
    let mut saved = Vec::with_capacity(dtos.len());
    for record in mapper::to_record_list(dtos) {
      saved.push(self.store.save(record).await?);
    }
    Ok(mapper::to_dto_list(&saved))
  }

  /// Overwrites name, price and stock quantity of an existing product.
  /// The id carried by `details` is ignored.
  #[instrument(name = "product_service::update", skip(self, details), err(Display))]
  pub async fn update(&self, id: i64, details: ProductDto) -> CatalogResult<ProductDto> {
    let product = Product::new(details.name, details.price, details.stock_quantity).with_id(id);

    // Overwrite-only: a row deleted concurrently stays deleted.
    let updated = self
      .store
      .update(product)
      .await?
      .ok_or(CatalogError::NotFound { id })?;
    info!(product_id = id, "Product updated.");
    Ok(ProductDto::from(updated))
  }

  /// Removes the product. Returns `false` if there was nothing to remove.
  #[instrument(name = "product_service::delete_by_id", skip(self), err(Display))]
  pub async fn delete_by_id(&self, id: i64) -> CatalogResult<bool> {
    let removed = self.store.delete_by_id(id).await?;
    if removed {
      info!(product_id = id, "Product deleted.");
    }
    Ok(removed)
  }

  #[instrument(name = "product_service::exists_by_id", skip(self), err(Display))]
  pub async fn exists_by_id(&self, id: i64) -> CatalogResult<bool> {
    self.store.exists_by_id(id).await
  }

  /// Takes one unit out of stock.
  ///
  /// Runs the stock check first, then the store's atomic decrement-if-positive,
  /// so concurrent calls never drive the quantity below zero.
  #[instrument(name = "product_service::decrease_stock", skip(self), err(Display))]
  pub async fn decrease_stock(&self, id: i64) -> CatalogResult<ProductDto> {
    let product = self
      .store
      .find_by_id(id)
      .await?
      .ok_or(CatalogError::NotFound { id })?;

    self.stock_check.check(&product).await?;

    match self.store.decrement_stock_if_positive(id).await? {
      StockDecrement::Applied(updated) => {
        info!(
          "Decreased stock for product: {}, new qty {}",
          updated.name, updated.stock_quantity
        );
        Ok(ProductDto::from(updated))
      }
      StockDecrement::OutOfStock => {
        warn!(product_id = id, "Product out of stock.");
        Err(CatalogError::OutOfStock { id })
      }
      StockDecrement::Missing => {
        warn!(product_id = id, "Product disappeared before its stock could be decreased.");
        Err(CatalogError::NotFound { id })
      }
    }
  }
}
