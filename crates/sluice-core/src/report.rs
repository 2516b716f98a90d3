//! Structured run reports
//!
//! The runner never aborts on a per-file failure; instead every outcome
//! lands in a `RunReport` so continuation is a visible, recorded
//! decision. Reports serialize to JSON under the target directory for
//! CI assertions, mirroring the human summary printed by the CLI.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use uuid::Uuid;

use crate::error::CoreResult;

/// Outcome of a single migration file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    /// The file's batch executed without error
    Applied,
    /// Reading or executing the file failed; later files still ran
    Failed,
}

impl std::fmt::Display for FileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileStatus::Applied => write!(f, "applied"),
            FileStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Per-file result within a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileResult {
    /// Migration name (file name without extension)
    pub name: String,

    /// Outcome for this file
    pub status: FileStatus,

    /// How long reading + executing took (in milliseconds)
    pub duration_ms: u64,

    /// Error message when the file failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of one verification check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    /// Check name (e.g. "tables", "policies")
    pub name: String,

    /// The counted value when the check succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,

    /// Error message when the check query failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckResult {
    /// Whether the check query executed successfully
    pub fn ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Results of the verification phase
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerificationReport {
    /// Individual check results, in execution order
    pub checks: Vec<CheckResult>,
}

impl VerificationReport {
    /// Whether every check executed successfully.
    ///
    /// A failing check never retroactively fails the migrations; it only
    /// fails the verification phase itself.
    pub fn passed(&self) -> bool {
        self.checks.iter().all(CheckResult::ok)
    }

    /// Number of checks whose query errored
    pub fn failed_count(&self) -> usize {
        self.checks.iter().filter(|c| !c.ok()).count()
    }
}

/// Full report for one migration run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Short unique identifier for this run
    pub run_id: String,

    /// When the run started
    pub started_at: DateTime<Utc>,

    /// Total wall-clock time for the run
    pub elapsed_ms: u64,

    /// Number of files applied successfully
    pub succeeded: usize,

    /// Number of files that failed
    pub failed: usize,

    /// Per-file results, in execution order
    pub results: Vec<FileResult>,

    /// Verification results (absent when verification was skipped)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification: Option<VerificationReport>,
}

impl RunReport {
    /// Create an empty report for a run starting now
    pub fn new() -> Self {
        Self {
            run_id: Uuid::new_v4().to_string()[..8].to_string(),
            started_at: Utc::now(),
            elapsed_ms: 0,
            succeeded: 0,
            failed: 0,
            results: Vec::new(),
            verification: None,
        }
    }

    /// Record a successfully applied file
    pub fn record_applied(&mut self, name: &str, duration_ms: u64) {
        self.succeeded += 1;
        self.results.push(FileResult {
            name: name.to_string(),
            status: FileStatus::Applied,
            duration_ms,
            error: None,
        });
    }

    /// Record a failed file
    pub fn record_failed(&mut self, name: &str, duration_ms: u64, error: &str) {
        self.failed += 1;
        self.results.push(FileResult {
            name: name.to_string(),
            status: FileStatus::Failed,
            duration_ms,
            error: Some(error.to_string()),
        });
    }

    /// Whether every file in the run was applied
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }

    /// Load a report from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = fs::read_to_string(path)?;
        let report: RunReport = serde_json::from_str(&content)?;
        Ok(report)
    }

    /// Save the report to a file path atomically
    ///
    /// Uses write-to-temp-then-rename pattern to prevent corruption
    pub fn save(&self, path: &Path) -> CoreResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }
}

impl Default for RunReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
