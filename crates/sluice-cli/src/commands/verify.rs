//! Verify command implementation

use anyhow::{Context, Result};
use sluice_core::VerificationReport;
use sluice_runner::{default_checks, run_verification};

use crate::cli::{GlobalArgs, VerifyArgs};
use crate::commands::common::{load_config, print_verification};

/// Execute the verify command
pub(crate) async fn execute(args: &VerifyArgs, global: &GlobalArgs) -> Result<()> {
    let report = run(args, global).await?;

    if !report.passed() {
        println!(
            "\n{} of {} check(s) failed",
            report.failed_count(),
            report.checks.len()
        );
        std::process::exit(1);
    }

    Ok(())
}

/// Run the verification checks and return the report.
///
/// `execute` owns the process exit, so this stays callable from tests.
async fn run(args: &VerifyArgs, global: &GlobalArgs) -> Result<VerificationReport> {
    let config = load_config(global)?;

    let dsn = config.resolve_dsn(args.dsn.as_deref())?;
    let db = sluice_db::connect(&dsn)
        .await
        .context("Failed to connect to database")?;

    println!("Verifying schema '{}':", config.schema);

    let checks = default_checks(db.db_type(), &config.schema);
    let report = run_verification(&db, &checks).await;
    print_verification(&report);

    Ok(report)
}

#[cfg(test)]
#[path = "verify_test.rs"]
mod tests;
