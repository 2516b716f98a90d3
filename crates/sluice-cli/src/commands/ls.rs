//! Ls command implementation

use anyhow::{Context, Result};
use sluice_core::migration;
use std::path::Path;

use crate::cli::{GlobalArgs, LsArgs, LsOutput};
use crate::commands::common::load_config;

/// Execute the ls command
pub(crate) async fn execute(args: &LsArgs, global: &GlobalArgs) -> Result<()> {
    let project_dir = Path::new(&global.project_dir);
    let config = load_config(global)?;

    let files = migration::discover(&config.migration_paths_absolute(project_dir))
        .context("Failed to discover migration files")?;

    match args.output {
        LsOutput::Table => {
            for (i, file) in files.iter().enumerate() {
                println!("{:>4}  {}  {}", i + 1, file.name, file.path.display());
            }
            println!("\n{} migration file(s)", files.len());
        }
        LsOutput::Json => {
            let entries: Vec<serde_json::Value> = files
                .iter()
                .map(|f| {
                    serde_json::json!({
                        "name": f.name,
                        "path": f.path.display().to_string(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }

    Ok(())
}
