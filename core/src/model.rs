// core/src/model.rs

//! The product record and its public representation.

use serde::{Deserialize, Serialize};

/// A stored product row.
///
/// `id` is `None` until the record store assigns one on first save.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
  pub id: Option<i64>,
  pub name: String,
  pub price: f64,
  pub stock_quantity: i32,
}

impl Product {
  /// Creates a record that has not been persisted yet.
  pub fn new(name: impl Into<String>, price: f64, stock_quantity: i32) -> Self {
    Self {
      id: None,
      name: name.into(),
      price,
      stock_quantity,
    }
  }

  pub fn with_id(mut self, id: i64) -> Self {
    self.id = Some(id);
    self
  }
}

/// Public shape of a product at the API boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<i64>,
  pub name: String,
  pub price: f64,
  pub stock_quantity: i32,
}

impl ProductDto {
  pub fn new(name: impl Into<String>, price: f64, stock_quantity: i32) -> Self {
    Self {
      id: None,
      name: name.into(),
      price,
      stock_quantity,
    }
  }
}
