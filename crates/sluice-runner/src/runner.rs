//! Migration runner: ordered per-file execution
//!
//! Per-file failures are captured and recorded; the runner always moves
//! on to the next file. Files are expected to carry their own guard
//! clauses (IF NOT EXISTS, ON CONFLICT DO NOTHING), so the recovery
//! model is fix-and-rerun, not rollback.

use sluice_core::{MigrationFile, RunReport};
use sluice_db::Database;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;

/// What went wrong with a single file
#[derive(Debug, Error)]
enum ApplyError {
    #[error(transparent)]
    Read(#[from] sluice_core::CoreError),

    #[error(transparent)]
    Execute(#[from] sluice_db::DbError),
}

/// Executes an ordered list of migration files against one database
pub struct MigrationRunner {
    db: Arc<dyn Database>,
}

impl MigrationRunner {
    /// Create a runner over an already-established connection
    pub fn new(db: Arc<dyn Database>) -> Self {
        Self { db }
    }

    /// Run every file in order and return the per-file report.
    ///
    /// This never returns an error: connection failures happen before a
    /// runner exists, and everything after that is a per-file outcome.
    pub async fn run(&self, files: &[MigrationFile]) -> RunReport {
        let start = Instant::now();
        let mut report = RunReport::new();

        log::info!(
            "Applying {} migration file(s) against {} target",
            files.len(),
            self.db.db_type()
        );

        for file in files {
            let file_start = Instant::now();
            let outcome = self.apply(file).await;
            let duration_ms = file_start.elapsed().as_millis() as u64;

            match outcome {
                Ok(()) => {
                    log::debug!("Applied {}", file.name);
                    report.record_applied(&file.name, duration_ms);
                }
                Err(e) => {
                    log::warn!("Migration {} failed: {}", file.name, e);
                    report.record_failed(&file.name, duration_ms, &e.to_string());
                }
            }
        }

        report.elapsed_ms = start.elapsed().as_millis() as u64;
        report
    }

    /// Read one file and send its full text as a single batch
    async fn apply(&self, file: &MigrationFile) -> Result<(), ApplyError> {
        let sql = file.read()?;
        self.db.execute_batch(&sql).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod tests;
