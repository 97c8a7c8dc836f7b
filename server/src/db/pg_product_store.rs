// server/src/db/pg_product_store.rs

use crate::models::ProductRow;
use async_trait::async_trait;
use catalog::{CatalogResult, Product, ProductStore, StockDecrement};
use sqlx::PgPool;
use tracing::{error, instrument};

const SELECT_COLUMNS: &str = "id, name, price, stock_quantity";

/// `ProductStore` over the `products` table.
///
/// Uses runtime queries. The conditional decrement is one `UPDATE ... WHERE
/// stock_quantity > 0`, which PostgreSQL serializes per row.
#[derive(Debug, Clone)]
pub struct PgProductStore {
  pool: PgPool,
}

impl PgProductStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  async fn insert(&self, product: Product) -> CatalogResult<Product> {
    let row: ProductRow = sqlx::query_as(&format!(
      "INSERT INTO products (name, price, stock_quantity) VALUES ($1, $2, $3) RETURNING {}",
      SELECT_COLUMNS
    ))
    .bind(product.name.as_str())
    .bind(product.price)
    .bind(product.stock_quantity)
    .fetch_one(&self.pool)
    .await
    .map_err(|e| store_error("insert product", e))?;
    Ok(row.into())
  }
}

fn store_error(operation: &str, e: sqlx::Error) -> catalog::CatalogError {
  error!("Database error during {}: {}", operation, e);
  anyhow::Error::new(e).context(format!("failed to {}", operation)).into()
}

#[async_trait]
impl ProductStore for PgProductStore {
  #[instrument(name = "pg_store::find_all", skip(self))]
  async fn find_all(&self) -> CatalogResult<Vec<Product>> {
    let rows: Vec<ProductRow> = sqlx::query_as(&format!("SELECT {} FROM products ORDER BY id ASC", SELECT_COLUMNS))
      .fetch_all(&self.pool)
      .await
      .map_err(|e| store_error("fetch products", e))?;
    Ok(rows.into_iter().map(Product::from).collect())
  }

  #[instrument(name = "pg_store::find_by_id", skip(self))]
  async fn find_by_id(&self, id: i64) -> CatalogResult<Option<Product>> {
    let row: Option<ProductRow> = sqlx::query_as(&format!("SELECT {} FROM products WHERE id = $1", SELECT_COLUMNS))
      .bind(id)
      .fetch_optional(&self.pool)
      .await
      .map_err(|e| store_error("fetch product", e))?;
    Ok(row.map(Product::from))
  }

  #[instrument(name = "pg_store::save", skip(self, product), fields(product_id = ?product.id))]
  async fn save(&self, product: Product) -> CatalogResult<Product> {
    if product.id.is_none() {
      return self.insert(product).await;
    }
    match self.update(product.clone()).await? {
      Some(updated) => Ok(updated),
      // Unknown ids are not honored; the row gets a fresh id.
      None => self.insert(product).await,
    }
  }

  #[instrument(name = "pg_store::update", skip(self, product), fields(product_id = ?product.id))]
  async fn update(&self, product: Product) -> CatalogResult<Option<Product>> {
    let Some(id) = product.id else {
      return Ok(None);
    };

    let updated: Option<ProductRow> = sqlx::query_as(&format!(
      "UPDATE products SET name = $2, price = $3, stock_quantity = $4 WHERE id = $1 RETURNING {}",
      SELECT_COLUMNS
    ))
    .bind(id)
    .bind(product.name.as_str())
    .bind(product.price)
    .bind(product.stock_quantity)
    .fetch_optional(&self.pool)
    .await
    .map_err(|e| store_error("update product", e))?;
    Ok(updated.map(Product::from))
  }

  #[instrument(name = "pg_store::delete_by_id", skip(self))]
  async fn delete_by_id(&self, id: i64) -> CatalogResult<bool> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await
      .map_err(|e| store_error("delete product", e))?;
    Ok(result.rows_affected() > 0)
  }

  #[instrument(name = "pg_store::exists_by_id", skip(self))]
  async fn exists_by_id(&self, id: i64) -> CatalogResult<bool> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
      .bind(id)
      .fetch_one(&self.pool)
      .await
      .map_err(|e| store_error("check product existence", e))
  }

  #[instrument(name = "pg_store::decrement_stock_if_positive", skip(self))]
  async fn decrement_stock_if_positive(&self, id: i64) -> CatalogResult<StockDecrement> {
    let updated: Option<ProductRow> = sqlx::query_as(&format!(
      "UPDATE products SET stock_quantity = stock_quantity - 1 WHERE id = $1 AND stock_quantity > 0 RETURNING {}",
      SELECT_COLUMNS
    ))
    .bind(id)
    .fetch_optional(&self.pool)
    .await
    .map_err(|e| store_error("decrement stock", e))?;

    if let Some(row) = updated {
      return Ok(StockDecrement::Applied(row.into()));
    }
    if self.exists_by_id(id).await? {
      Ok(StockDecrement::OutOfStock)
    } else {
      Ok(StockDecrement::Missing)
    }
  }
}
