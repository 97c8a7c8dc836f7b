// server/src/models/product.rs

use catalog::Product;
use sqlx::FromRow;

/// A row of the `products` table.
#[derive(Debug, Clone, FromRow)]
pub struct ProductRow {
  pub id: i64,
  pub name: String,
  pub price: f64,
  pub stock_quantity: i32,
}

impl From<ProductRow> for Product {
  fn from(row: ProductRow) -> Self {
    Product {
      id: Some(row.id),
      name: row.name,
      price: row.price,
      stock_quantity: row.stock_quantity,
    }
  }
}
