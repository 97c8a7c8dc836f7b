// server/src/db/seed.rs

use crate::errors::Result as AppResult;
use catalog::{ProductDto, ProductService};
use tracing::{info, instrument};

fn sample_catalog() -> Vec<ProductDto> {
  vec![
    ProductDto::new("Notebook", 4.50, 120),
    ProductDto::new("Ballpoint Pen", 1.20, 500),
    ProductDto::new("Desk Lamp", 34.90, 15),
    ProductDto::new("USB-C Cable", 9.99, 60),
  ]
}

/// Inserts the sample catalog when the store holds no products.
/// Returns how many products were inserted.
#[instrument(name = "db::seed", skip(products))]
pub async fn seed_if_empty(products: &ProductService) -> AppResult<usize> {
  if !products.find_all().await?.is_empty() {
    info!("Store already holds products; skipping seed.");
    return Ok(0);
  }
  let inserted = products.save_all(&sample_catalog()).await?;
  info!("Seeded {} products.", inserted.len());
  Ok(inserted.len())
}
