// server/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Which record store backs the product service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
  Postgres,
  Memory,
}

impl FromStr for StoreBackend {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
      "memory" | "in-memory" => Ok(StoreBackend::Memory),
      other => Err(AppError::Config(format!(
        "Invalid STORE_BACKEND: '{}' (expected 'postgres' or 'memory')",
        other
      ))),
    }
  }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub store_backend: StoreBackend,
  /// Required when `store_backend` is `Postgres`.
  pub database_url: Option<String>,
  pub database_max_connections: u32,
  pub run_migrations: bool,
  pub seed_db: bool,
  pub stock_check_delay: Duration,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| env::var(var_name).ok().filter(|v| !v.trim().is_empty());

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
    let server_port = parse_or("SERVER_PORT", get_env("SERVER_PORT"), 8080u16)?;
    let store_backend = match get_env("STORE_BACKEND") {
      Some(raw) => raw.parse::<StoreBackend>()?,
      None => StoreBackend::Postgres,
    };
    let database_url = get_env("DATABASE_URL");
    if store_backend == StoreBackend::Postgres && database_url.is_none() {
      return Err(AppError::Config(
        "Missing environment variable 'DATABASE_URL' (required when STORE_BACKEND=postgres)".to_string(),
      ));
    }
    let database_max_connections = parse_or("DATABASE_MAX_CONNECTIONS", get_env("DATABASE_MAX_CONNECTIONS"), 5u32)?;
    let run_migrations = parse_or("RUN_MIGRATIONS", get_env("RUN_MIGRATIONS"), true)?;
    let seed_db = parse_or("SEED_DB", get_env("SEED_DB"), false)?;
    let stock_check_delay_ms = parse_or(
      "STOCK_CHECK_DELAY_MS",
      get_env("STOCK_CHECK_DELAY_MS"),
      catalog::DEFAULT_STOCK_CHECK_DELAY.as_millis() as u64,
    )?;

    tracing::info!("Application configuration loaded successfully.");
    // Avoid logging the connection string; it may carry credentials.
    tracing::debug!(
      server_host = %server_host,
      server_port,
      ?store_backend,
      database_max_connections,
      run_migrations,
      seed_db,
      stock_check_delay_ms,
      "Loaded config details"
    );

    Ok(Self {
      server_host,
      server_port,
      store_backend,
      database_url,
      database_max_connections,
      run_migrations,
      seed_db,
      stock_check_delay: Duration::from_millis(stock_check_delay_ms),
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}

fn parse_or<T>(var_name: &str, raw: Option<String>, default: T) -> Result<T>
where
  T: FromStr,
  T::Err: std::fmt::Display,
{
  match raw {
    Some(value) => value
      .trim()
      .parse::<T>()
      .map_err(|e| AppError::Config(format!("Invalid {}: {}", var_name, e))),
    None => Ok(default),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_store_backend_parsing() {
    assert_eq!("postgres".parse::<StoreBackend>().unwrap(), StoreBackend::Postgres);
    assert_eq!(" Memory ".parse::<StoreBackend>().unwrap(), StoreBackend::Memory);
    assert!("redis".parse::<StoreBackend>().is_err());
  }

  #[test]
  fn test_parse_or_defaults_and_rejects_garbage() {
    assert_eq!(parse_or("SERVER_PORT", None, 8080u16).unwrap(), 8080);
    assert_eq!(parse_or("SERVER_PORT", Some(" 9000 ".to_string()), 8080u16).unwrap(), 9000);
    match parse_or("SERVER_PORT", Some("eighty".to_string()), 8080u16) {
      Err(AppError::Config(msg)) => assert!(msg.contains("SERVER_PORT")),
      other => panic!("Expected a config error, got {:?}", other.map(|_| ())),
    }
  }
}
