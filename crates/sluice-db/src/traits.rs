//! Database trait definition

use crate::error::DbResult;
use async_trait::async_trait;

/// Database abstraction trait for Sluice
///
/// Implementations must be Send + Sync for async operation. The surface
/// is deliberately small: the runner only ever sends whole statement
/// batches, and the verifier only ever reads single counts.
#[async_trait]
pub trait Database: Send + Sync {
    /// Execute a full SQL text as one statement batch.
    ///
    /// No transaction is opened around the batch; each statement commits
    /// per the backend's autocommit behavior.
    async fn execute_batch(&self, sql: &str) -> DbResult<()>;

    /// Execute a read-only query whose first row/column is a count
    async fn query_count(&self, sql: &str) -> DbResult<i64>;

    /// Backend identifier for logging and verification-set selection
    fn db_type(&self) -> &'static str;
}
