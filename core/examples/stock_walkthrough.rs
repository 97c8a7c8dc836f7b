// core/examples/stock_walkthrough.rs

use catalog::{CatalogError, CatalogResult, DelayedStockCheck, InMemoryProductStore, ProductDto, ProductService};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> CatalogResult<()> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Stock Walkthrough ---");

  // 1. Wire a service over the in-memory store with a short stock check
  let service = ProductService::new(
    Arc::new(InMemoryProductStore::new()),
    Arc::new(DelayedStockCheck::new(Duration::from_millis(10))),
  );

  // 2. Create a product with two units in stock
  let lamp = service.save(ProductDto::new("Desk Lamp", 34.90, 2)).await?;
  let id = lamp.id.ok_or(CatalogError::NotFound { id: 0 })?;
  info!("Created {:?}", lamp);

  // 3. Sell until the store refuses
  loop {
    match service.decrease_stock(id).await {
      Ok(updated) => info!("Sold one, {} left", updated.stock_quantity),
      Err(CatalogError::OutOfStock { .. }) => {
        info!("Out of stock, stopping.");
        break;
      }
      Err(other) => return Err(other),
    }
  }

  info!("Final state: {:?}", service.find_by_id(id).await?);
  Ok(())
}
