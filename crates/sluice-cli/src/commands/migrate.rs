//! Migrate command implementation

use anyhow::{Context, Result};
use sluice_core::{migration, FileStatus, RunReport};
use sluice_runner::{default_checks, run_verification, MigrationRunner};
use std::path::Path;

use crate::cli::{GlobalArgs, MigrateArgs};
use crate::commands::common::{load_config, print_verification};

/// Execute the migrate command
pub(crate) async fn execute(args: &MigrateArgs, global: &GlobalArgs) -> Result<()> {
    let report = run(args, global).await?;

    if !report.all_succeeded() {
        std::process::exit(1);
    }

    Ok(())
}

/// Run the migration flow and return the report.
///
/// `execute` owns the process exit, so this stays callable from tests.
async fn run(args: &MigrateArgs, global: &GlobalArgs) -> Result<RunReport> {
    let project_dir = Path::new(&global.project_dir);
    let config = load_config(global)?;

    let files = if args.files.is_empty() {
        migration::discover(&config.migration_paths_absolute(project_dir))
            .context("Failed to discover migration files")?
    } else {
        migration::from_paths(&args.files).context("Failed to resolve migration files")?
    };

    if global.verbose {
        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        eprintln!("[verbose] Running {} file(s) in order: {:?}", files.len(), names);
    }

    let dsn = config.resolve_dsn(args.dsn.as_deref())?;
    let db = sluice_db::connect(&dsn)
        .await
        .context("Failed to connect to database")?;

    println!("Applying {} migration file(s)...\n", files.len());

    let runner = MigrationRunner::new(db.clone());
    let mut report = runner.run(&files).await;

    for result in &report.results {
        match result.status {
            FileStatus::Applied => {
                println!("  \u{2713} {} [{}ms]", result.name, result.duration_ms);
            }
            FileStatus::Failed => {
                println!(
                    "  \u{2717} {} - {} [{}ms]",
                    result.name,
                    result.error.as_deref().unwrap_or("unknown error"),
                    result.duration_ms
                );
            }
        }
    }

    if config.verification.enabled && !args.no_verify {
        println!("\nVerification:");
        let checks = default_checks(db.db_type(), &config.schema);
        let verification = run_verification(&db, &checks).await;
        print_verification(&verification);
        report.verification = Some(verification);
    }

    let report_path = config
        .target_path_absolute(project_dir)
        .join("migrate-report.json");
    if let Err(e) = report.save(&report_path) {
        eprintln!("Warning: Failed to save run report: {}", e);
    } else if global.verbose {
        eprintln!("[verbose] Report written to {}", report_path.display());
    }

    println!();
    println!(
        "Completed: {} succeeded, {} failed",
        report.succeeded, report.failed
    );
    println!("Total time: {}ms", report.elapsed_ms);

    Ok(report)
}

#[cfg(test)]
#[path = "migrate_test.rs"]
mod tests;
