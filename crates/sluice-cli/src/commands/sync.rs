//! Sync command implementation

use anyhow::{bail, Context, Result};
use sluice_sync::{sync_tree, FtpRemote};
use std::path::Path;

use crate::cli::{GlobalArgs, SyncArgs};
use crate::commands::common::load_config;

/// Execute the sync command
pub(crate) async fn execute(args: &SyncArgs, global: &GlobalArgs) -> Result<()> {
    let project_dir = Path::new(&global.project_dir);
    let config = load_config(global)?;

    let Some(deploy) = &config.deploy else {
        bail!("No deploy section in sluice.yml; nothing to sync");
    };

    let local_dir = args.local_dir.as_deref().unwrap_or(&deploy.local_dir);
    let local_root = project_dir.join(local_dir);

    let (user, password) = deploy.resolve_credentials()?;

    if global.verbose {
        eprintln!(
            "[verbose] Syncing {} to ftp://{}:{}{}",
            local_root.display(),
            deploy.host,
            deploy.port,
            deploy.remote_root
        );
    }

    let mut remote = FtpRemote::connect(&deploy.host, deploy.port, &user, &password)
        .context("Failed to connect to FTP server")?;

    let report = sync_tree(
        &mut remote,
        &local_root,
        &deploy.remote_root,
        deploy.write_rewrite_rules,
    )?;

    remote.quit();

    for path in &report.uploaded {
        println!("  \u{2713} {}", path);
    }
    for failed in &report.failed {
        println!("  \u{2717} {} - {}", failed.path, failed.error);
    }

    println!();
    println!(
        "Uploaded {} file(s), {} failed, {} remote entr(ies) cleaned",
        report.uploaded.len(),
        report.failed.len(),
        report.cleaned
    );

    if !report.all_succeeded() {
        std::process::exit(1);
    }

    Ok(())
}
