//! Error types for sluice-sync

use thiserror::Error;

/// Directory sync errors
#[derive(Error, Debug)]
pub enum SyncError {
    /// Connection error (S001)
    #[error("[S001] FTP connection failed: {0}")]
    Connect(String),

    /// Login error (S002)
    #[error("[S002] FTP login failed: {0}")]
    Login(String),

    /// Upload error (S003)
    #[error("[S003] Upload failed for {path}: {message}")]
    Upload { path: String, message: String },

    /// Remote operation error (S004)
    #[error("[S004] Remote operation failed: {0}")]
    Remote(String),

    /// Local directory not found (S005)
    #[error("[S005] Local directory not found: {path}")]
    LocalDirNotFound { path: String },

    /// Local IO error (S006)
    #[error("[S006] IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for SyncError
pub type SyncResult<T> = Result<T, SyncError>;
