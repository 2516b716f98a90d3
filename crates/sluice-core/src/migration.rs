//! Migration file discovery and loading
//!
//! A migration is a plain UTF-8 SQL file. Ordering is the whole
//! contract: an explicit `--files` list runs in the given order, and a
//! discovered directory runs in lexicographic file-name order, which is
//! why migration files carry sortable prefixes (001_, 002_, ...).

use crate::error::{CoreError, CoreResult};
use std::path::{Path, PathBuf};

/// A single migration file: a name plus a path, read lazily
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationFile {
    /// Display name (file name without the .sql extension)
    pub name: String,

    /// Path to the SQL file
    pub path: PathBuf,
}

impl MigrationFile {
    /// Create a migration from a path, deriving the display name
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { name, path }
    }

    /// Read the full SQL text of this migration
    pub fn read(&self) -> CoreResult<String> {
        if !self.path.exists() {
            return Err(CoreError::MigrationNotFound {
                path: self.path.display().to_string(),
            });
        }

        let bytes = std::fs::read(&self.path).map_err(|e| CoreError::IoWithPath {
            path: self.path.display().to_string(),
            source: e,
        })?;

        String::from_utf8(bytes).map_err(|_| CoreError::MigrationNotUtf8 {
            path: self.path.display().to_string(),
        })
    }
}

/// Build a migration list from an explicit, ordered list of paths.
///
/// The caller's order is preserved exactly. Missing files are an error
/// here rather than at execution time so a typo fails the run before
/// anything touches the database.
pub fn from_paths<P: AsRef<Path>>(paths: &[P]) -> CoreResult<Vec<MigrationFile>> {
    let mut files = Vec::with_capacity(paths.len());
    for p in paths {
        let path = p.as_ref();
        if !path.exists() {
            return Err(CoreError::MigrationNotFound {
                path: path.display().to_string(),
            });
        }
        files.push(MigrationFile::from_path(path.to_path_buf()));
    }
    Ok(files)
}

/// Discover migrations from configured directories.
///
/// Directories are scanned in configured order; within each directory,
/// `.sql` files are sorted lexicographically by file name.
pub fn discover(dirs: &[PathBuf]) -> CoreResult<Vec<MigrationFile>> {
    let mut all = Vec::new();

    for dir in dirs {
        if !dir.is_dir() {
            return Err(CoreError::MigrationsDirNotFound {
                path: dir.display().to_string(),
            });
        }

        let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)
            .map_err(|e| CoreError::IoWithPath {
                path: dir.display().to_string(),
                source: e,
            })?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().map(|ext| ext == "sql").unwrap_or(false)
            })
            .collect();

        entries.sort_by_key(|path| path.file_name().map(|n| n.to_os_string()));

        log::debug!("Discovered {} migrations in {}", entries.len(), dir.display());

        all.extend(entries.into_iter().map(MigrationFile::from_path));
    }

    Ok(all)
}

#[cfg(test)]
#[path = "migration_test.rs"]
mod tests;
