// core/src/mapper.rs

//! Conversions between [`Product`] records and [`ProductDto`] representations.
//!
//! All functions are total and side-effect free. An absent value is an `Option`
//! at the call site and is lifted with `Option::map`, so `None` maps to `None`
//! while an empty slice maps to an empty `Vec`.

use crate::model::{Product, ProductDto};

pub fn to_dto(product: &Product) -> ProductDto {
  ProductDto {
    id: product.id,
    name: product.name.clone(),
    price: product.price,
    stock_quantity: product.stock_quantity,
  }
}

pub fn to_record(dto: &ProductDto) -> Product {
  Product {
    id: dto.id,
    name: dto.name.clone(),
    price: dto.price,
    stock_quantity: dto.stock_quantity,
  }
}

pub fn to_dto_list(products: &[Product]) -> Vec<ProductDto> {
  products.iter().map(to_dto).collect()
}

pub fn to_record_list(dtos: &[ProductDto]) -> Vec<Product> {
  dtos.iter().map(to_record).collect()
}

impl From<Product> for ProductDto {
  fn from(product: Product) -> Self {
    ProductDto {
      id: product.id,
      name: product.name,
      price: product.price,
      stock_quantity: product.stock_quantity,
    }
  }
}

impl From<ProductDto> for Product {
  fn from(dto: ProductDto) -> Self {
    Product {
      id: dto.id,
      name: dto.name,
      price: dto.price,
      stock_quantity: dto.stock_quantity,
    }
  }
}
