//! Postgres database backend over sqlx

use crate::error::{DbError, DbResult};
use crate::traits::Database;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

/// Postgres backend holding a single-connection pool.
///
/// One session for the whole run, acquired eagerly so an unreachable
/// host fails before any file is read.
pub struct PostgresBackend {
    pool: PgPool,
}

impl PostgresBackend {
    /// Connect to a Postgres server from a DSN
    pub async fn connect(dsn: &str) -> DbResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_secs(10))
            .connect(dsn)
            .await
            .map_err(|e| DbError::Connection(e.to_string()))?;

        log::debug!("Connected to postgres target");
        Ok(Self { pool })
    }
}

#[async_trait]
impl Database for PostgresBackend {
    async fn execute_batch(&self, sql: &str) -> DbResult<()> {
        // raw_sql uses the simple query protocol, which accepts a full
        // multi-statement batch in one round trip.
        sqlx::raw_sql(sql)
            .execute(&self.pool)
            .await
            .map_err(|e| DbError::Execution(e.to_string()))?;
        Ok(())
    }

    async fn query_count(&self, sql: &str) -> DbResult<i64> {
        sqlx::query_scalar(sql)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DbError::Query(e.to_string()))
    }

    fn db_type(&self) -> &'static str {
        "postgres"
    }
}
