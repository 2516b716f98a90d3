//! sluice-core - Core library for Sluice
//!
//! This crate provides shared types: configuration parsing, migration
//! file discovery and loading, and structured run reports used across
//! all Sluice components.

pub mod config;
pub mod error;
pub mod migration;
pub mod report;

pub use config::{Config, DatabaseConfig, DeployConfig, VerificationConfig};
pub use error::{CoreError, CoreResult};
pub use migration::{discover, from_paths, MigrationFile};
pub use report::{CheckResult, FileResult, FileStatus, RunReport, VerificationReport};
