//! sluice-db - Database abstraction layer for Sluice
//!
//! This crate provides the `Database` trait and implementations for
//! Postgres (the hosted target) and DuckDB (local files and tests),
//! plus a DSN-dispatching `connect` factory.

pub mod duckdb;
pub mod error;
pub mod postgres;
pub mod traits;

pub use duckdb::DuckDbBackend;
pub use error::{DbError, DbResult};
pub use postgres::PostgresBackend;
pub use traits::Database;

use std::sync::Arc;

/// Connect to the backend selected by the DSN.
///
/// `postgres://` and `postgresql://` URLs go to the Postgres backend;
/// anything else is treated as a DuckDB file path (`:memory:` included).
pub async fn connect(dsn: &str) -> DbResult<Arc<dyn Database>> {
    if dsn.is_empty() {
        return Err(DbError::InvalidDsn("empty DSN".to_string()));
    }

    if dsn.starts_with("postgres://") || dsn.starts_with("postgresql://") {
        let backend = PostgresBackend::connect(dsn).await?;
        Ok(Arc::new(backend))
    } else {
        let backend = DuckDbBackend::new(dsn)?;
        Ok(Arc::new(backend))
    }
}
