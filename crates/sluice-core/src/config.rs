//! Configuration types and parsing for sluice.yml
//!
//! Secrets never live in the config file. The config names the
//! environment variables that hold the database DSN and the FTP
//! credentials; `resolve_*` helpers read them at run time.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main project configuration from sluice.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Project name
    #[serde(default = "default_name")]
    pub name: String,

    /// Project version
    #[serde(default = "default_version")]
    pub version: String,

    /// Directories containing migration SQL files, applied in listed
    /// order; files within a directory run in lexicographic order
    #[serde(default = "default_migration_paths")]
    pub migration_paths: Vec<String>,

    /// Target schema for verification queries
    #[serde(default = "default_schema")]
    pub schema: String,

    /// Output directory for run reports
    #[serde(default = "default_target_path")]
    pub target_path: String,

    /// Database connection configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Verification phase configuration
    #[serde(default)]
    pub verification: VerificationConfig,

    /// FTP deploy configuration (absent = `sluice sync` unavailable)
    #[serde(default)]
    pub deploy: Option<DeployConfig>,
}

/// Database connection configuration
///
/// The DSN itself is read from the environment, never stored here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Environment variable holding the connection DSN
    #[serde(default = "default_dsn_env")]
    pub dsn_env: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            dsn_env: default_dsn_env(),
        }
    }
}

/// Verification phase configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationConfig {
    /// Whether to run verification checks after migrations (default: true)
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// FTP deploy configuration for `sluice sync`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeployConfig {
    /// FTP host name
    pub host: String,

    /// FTP port (default: 21)
    #[serde(default = "default_ftp_port")]
    pub port: u16,

    /// Environment variable holding the FTP user name
    #[serde(default = "default_ftp_user_env")]
    pub user_env: String,

    /// Environment variable holding the FTP password
    #[serde(default = "default_ftp_password_env")]
    pub password_env: String,

    /// Remote directory to upload into
    #[serde(default = "default_remote_root")]
    pub remote_root: String,

    /// Local directory to upload (relative to the project dir)
    #[serde(default = "default_local_dir")]
    pub local_dir: String,

    /// Write the SPA rewrite-rules file at the remote root after upload
    #[serde(default = "default_true")]
    pub write_rewrite_rules: bool,
}

fn default_name() -> String {
    "sluice".to_string()
}

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_migration_paths() -> Vec<String> {
    vec!["migrations".to_string()]
}

fn default_schema() -> String {
    "public".to_string()
}

fn default_target_path() -> String {
    "target".to_string()
}

fn default_dsn_env() -> String {
    "SLUICE_DATABASE_URL".to_string()
}

fn default_ftp_port() -> u16 {
    21
}

fn default_ftp_user_env() -> String {
    "SLUICE_FTP_USER".to_string()
}

fn default_ftp_password_env() -> String {
    "SLUICE_FTP_PASSWORD".to_string()
}

fn default_remote_root() -> String {
    "/".to_string()
}

fn default_local_dir() -> String {
    "dist".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: default_name(),
            version: default_version(),
            migration_paths: default_migration_paths(),
            schema: default_schema(),
            target_path: default_target_path(),
            database: DatabaseConfig::default(),
            verification: VerificationConfig::default(),
            deploy: None,
        }
    }
}

impl Config {
    /// Load configuration from a specific file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a project directory
    /// Looks for sluice.yml or sluice.yaml
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        let yml_path = dir.join("sluice.yml");
        let yaml_path = dir.join("sluice.yaml");

        if yml_path.exists() {
            Self::load(&yml_path)
        } else if yaml_path.exists() {
            Self::load(&yaml_path)
        } else {
            Err(CoreError::ConfigNotFound {
                path: dir.join("sluice.yml").display().to_string(),
            })
        }
    }

    /// Load configuration from a project directory, falling back to
    /// defaults when no config file exists.
    ///
    /// `migrate --files ... --dsn ...` must work without a project
    /// config, so a missing file is not an error here.
    pub fn load_or_default(dir: &Path) -> CoreResult<Self> {
        match Self::load_from_dir(dir) {
            Ok(config) => Ok(config),
            Err(CoreError::ConfigNotFound { .. }) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Validate the configuration
    fn validate(&self) -> CoreResult<()> {
        if self.name.is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "Project name cannot be empty".to_string(),
            });
        }

        if self.migration_paths.is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "At least one migration_paths entry must be specified".to_string(),
            });
        }

        if self.schema.is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "Schema cannot be empty".to_string(),
            });
        }

        if let Some(deploy) = &self.deploy {
            if deploy.host.is_empty() {
                return Err(CoreError::ConfigInvalid {
                    message: "deploy.host cannot be empty".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Resolve the connection DSN: an explicit override wins, otherwise
    /// the environment variable named by `database.dsn_env`.
    pub fn resolve_dsn(&self, override_dsn: Option<&str>) -> CoreResult<String> {
        if let Some(dsn) = override_dsn {
            return Ok(dsn.to_string());
        }

        std::env::var(&self.database.dsn_env).map_err(|_| CoreError::MissingEnvVar {
            name: self.database.dsn_env.clone(),
            purpose: "database connection DSN".to_string(),
        })
    }

    /// Migration directories as absolute paths under the project root
    pub fn migration_paths_absolute(&self, root: &Path) -> Vec<PathBuf> {
        self.migration_paths.iter().map(|p| root.join(p)).collect()
    }

    /// Report output directory as an absolute path under the project root
    pub fn target_path_absolute(&self, root: &Path) -> PathBuf {
        root.join(&self.target_path)
    }
}

impl DeployConfig {
    /// Resolve FTP credentials from the configured environment variables
    pub fn resolve_credentials(&self) -> CoreResult<(String, String)> {
        let user = std::env::var(&self.user_env).map_err(|_| CoreError::MissingEnvVar {
            name: self.user_env.clone(),
            purpose: "FTP user name".to_string(),
        })?;
        let password = std::env::var(&self.password_env).map_err(|_| CoreError::MissingEnvVar {
            name: self.password_env.clone(),
            purpose: "FTP password".to_string(),
        })?;
        Ok((user, password))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
