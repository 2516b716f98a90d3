//! Shared helpers for CLI commands

use anyhow::{Context, Result};
use sluice_core::{Config, VerificationReport};
use std::path::Path;

use crate::cli::GlobalArgs;

/// Load project configuration honoring the --config override.
///
/// Without an override a missing sluice.yml falls back to defaults, so
/// `migrate --files ... --dsn ...` works outside any project.
pub(crate) fn load_config(global: &GlobalArgs) -> Result<Config> {
    if let Some(config_path) = &global.config {
        Config::load(Path::new(config_path)).context("Failed to load configuration file")
    } else {
        Config::load_or_default(Path::new(&global.project_dir))
            .context("Failed to load project configuration")
    }
}

/// Print one line per verification check
pub(crate) fn print_verification(report: &VerificationReport) {
    for check in &report.checks {
        match (&check.value, &check.error) {
            (Some(value), _) => println!("  {}: {}", check.name, value),
            (None, Some(error)) => println!("  \u{2717} {} - {}", check.name, error),
            (None, None) => println!("  {}: -", check.name),
        }
    }
}
