//! Error types for sluice-db

use thiserror::Error;

/// Database operation errors
///
/// The three-way split matters to callers: `Connection` is fatal to a
/// run, `Execution` is recoverable per file, and `Query` fails only the
/// verification check that issued it.
#[derive(Error, Debug)]
pub enum DbError {
    /// Connection error (D001)
    #[error("[D001] Database connection failed: {0}")]
    Connection(String),

    /// Statement batch execution error (D002)
    #[error("[D002] SQL execution failed: {0}")]
    Execution(String),

    /// Read-only query error (D003)
    #[error("[D003] Query failed: {0}")]
    Query(String),

    /// Unrecognized or malformed DSN (D004)
    #[error("[D004] Invalid DSN: {0}")]
    InvalidDsn(String),

    /// Mutex poisoned (D005)
    #[error("[D005] Database mutex poisoned: {0}")]
    MutexPoisoned(String),
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;
