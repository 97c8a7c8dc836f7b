// core/src/lib.rs

//! Catalog: the product domain behind the catalog server.
//!
//! The crate provides:
//!  - The `Product` record and its `ProductDto` representation, with a pure mapper between them.
//!  - The `ProductStore` record-store contract and an in-memory implementation.
//!  - The `StockCheck` collaborator that approves a stock decrement.
//!  - `ProductService`, which exposes find/save/update/delete and an atomic
//!    decrease-stock on top of any store.

pub mod error;
pub mod mapper;
pub mod model;
pub mod service;
pub mod stock_check;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::error::{CatalogError, CatalogResult};
pub use crate::model::{Product, ProductDto};
pub use crate::service::ProductService;
pub use crate::stock_check::{DelayedStockCheck, ImmediateStockCheck, StockCheck, DEFAULT_STOCK_CHECK_DELAY};
pub use crate::store::{InMemoryProductStore, ProductStore, StockDecrement};

/*
    Wiring:
    1. Pick a store: `InMemoryProductStore` here, or a database-backed one implementing `ProductStore`.
    2. Pick a stock check: `DelayedStockCheck` for production latency, `ImmediateStockCheck` for tests.
    3. `ProductService::new(Arc::new(store), Arc::new(check))`, then share the service behind an `Arc`.
*/
