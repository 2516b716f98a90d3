//! Recursive directory upload
//!
//! Mirrors a local build-output tree onto a remote root: best-effort
//! cleanup of the destination, directories created before the files
//! inside them, every file uploaded by relative path, and finally a
//! fixed rewrite-rules file written at the root. Per-file upload
//! failures are collected, never fatal.

use crate::error::{SyncError, SyncResult};
use crate::remote::Remote;
use std::fs::File;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Name of the rewrite-rules file written at the remote root
pub const REWRITE_RULES_FILE: &str = ".htaccess";

/// SPA fallback rules: serve index.html for any path that is not a file
pub const REWRITE_RULES: &str = "\
RewriteEngine On
RewriteBase /
RewriteRule ^index\\.html$ - [L]
RewriteCond %{REQUEST_FILENAME} !-f
RewriteCond %{REQUEST_FILENAME} !-d
RewriteRule . /index.html [L]
";

/// A file whose upload failed
#[derive(Debug, Clone)]
pub struct FailedUpload {
    /// Remote path that was being written
    pub path: String,

    /// Error message from the remote
    pub error: String,
}

/// Outcome of one sync run
#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    /// Remote paths uploaded successfully, in upload order
    pub uploaded: Vec<String>,

    /// Uploads that failed; the sync continued past each
    pub failed: Vec<FailedUpload>,

    /// Remote entries removed during cleanup
    pub cleaned: usize,

    /// Whether the rewrite-rules file was written
    pub wrote_rewrite_rules: bool,
}

impl SyncReport {
    /// Whether every upload succeeded
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Join a remote root and a relative local path with forward slashes
fn join_remote(root: &str, rel: &Path) -> String {
    let rel: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    let root = root.trim_end_matches('/');
    if root.is_empty() {
        format!("/{}", rel.join("/"))
    } else {
        format!("{}/{}", root, rel.join("/"))
    }
}

/// Collect relative directory and file paths under a root.
///
/// Entries are sorted per directory and parents precede children, which
/// is what guarantees mkdir-before-upload ordering downstream.
fn walk(root: &Path) -> SyncResult<(Vec<PathBuf>, Vec<PathBuf>)> {
    fn walk_dir(
        root: &Path,
        dir: &Path,
        dirs: &mut Vec<PathBuf>,
        files: &mut Vec<PathBuf>,
    ) -> SyncResult<()> {
        let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .collect();
        entries.sort();

        for path in entries {
            let rel = path
                .strip_prefix(root)
                .expect("walked path is under root")
                .to_path_buf();
            if path.is_dir() {
                dirs.push(rel);
                walk_dir(root, &path, dirs, files)?;
            } else {
                files.push(rel);
            }
        }
        Ok(())
    }

    let mut dirs = Vec::new();
    let mut files = Vec::new();
    walk_dir(root, root, &mut dirs, &mut files)?;
    Ok((dirs, files))
}

/// Resolve an NLST entry to a full remote path.
///
/// Servers disagree about NLST output: some return absolute paths,
/// some paths relative to the listed directory, some bare names. Only
/// an absolute entry is trusted as-is; anything else is reduced to its
/// last component and joined back onto the listed root.
fn entry_path(remote_root: &str, entry: &str) -> String {
    if entry.starts_with('/') {
        return entry.to_string();
    }
    let name = entry.rsplit('/').next().unwrap_or(entry);
    join_remote(remote_root, Path::new(name))
}

/// Best-effort cleanup of the remote root: delete files, fall back to
/// directory removal, ignore everything that refuses to die.
fn cleanup(remote: &mut dyn Remote, remote_root: &str) -> usize {
    let entries = match remote.list(remote_root) {
        Ok(entries) => entries,
        Err(e) => {
            log::debug!("Remote listing of {} failed, skipping cleanup: {}", remote_root, e);
            return 0;
        }
    };

    let mut cleaned = 0;
    for entry in entries {
        let path = entry_path(remote_root, &entry);

        if remote.remove_file(&path).is_ok() {
            cleaned += 1;
        } else if remote.remove_dir(&path).is_ok() {
            cleaned += 1;
        } else {
            log::debug!("Could not remove remote entry {}", path);
        }
    }
    cleaned
}

/// Upload a local tree to the remote root.
///
/// Fatal errors are limited to a missing local directory and local read
/// failures while walking; everything remote is per-item best effort.
pub fn sync_tree(
    remote: &mut dyn Remote,
    local_root: &Path,
    remote_root: &str,
    write_rewrite_rules: bool,
) -> SyncResult<SyncReport> {
    if !local_root.is_dir() {
        return Err(SyncError::LocalDirNotFound {
            path: local_root.display().to_string(),
        });
    }

    let mut report = SyncReport::default();

    report.cleaned = cleanup(remote, remote_root);

    let (dirs, files) = walk(local_root)?;
    log::info!(
        "Syncing {} file(s) in {} dir(s) to {}",
        files.len(),
        dirs.len() + 1,
        remote_root
    );

    // Parents come first in walk order, and mkdir is idempotent
    remote.mkdir(remote_root)?;
    for dir in &dirs {
        remote.mkdir(&join_remote(remote_root, dir))?;
    }

    for rel in &files {
        let remote_path = join_remote(remote_root, rel);
        let result = File::open(local_root.join(rel))
            .map_err(SyncError::from)
            .and_then(|mut f| remote.upload(&remote_path, &mut f));

        match result {
            Ok(()) => report.uploaded.push(remote_path),
            Err(e) => {
                log::warn!("Upload of {} failed: {}", remote_path, e);
                report.failed.push(FailedUpload {
                    path: remote_path,
                    error: e.to_string(),
                });
            }
        }
    }

    if write_rewrite_rules {
        let path = join_remote(remote_root, Path::new(REWRITE_RULES_FILE));
        let mut cursor = Cursor::new(REWRITE_RULES.as_bytes());
        match remote.upload(&path, &mut cursor) {
            Ok(()) => {
                report.wrote_rewrite_rules = true;
                report.uploaded.push(path);
            }
            Err(e) => {
                log::warn!("Writing rewrite rules failed: {}", e);
                report.failed.push(FailedUpload {
                    path,
                    error: e.to_string(),
                });
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
#[path = "sync_test.rs"]
mod tests;
