// server/src/lib.rs

//! HTTP server for the product catalog: actix-web routes over the `catalog`
//! service, backed by PostgreSQL or an in-memory store.

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod state;
pub mod telemetry;
pub mod web;

pub use crate::config::{AppConfig, StoreBackend};
pub use crate::errors::{AppError, Result};
pub use crate::state::AppState;
