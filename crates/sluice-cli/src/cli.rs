//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Sluice - run ordered SQL migration files and verify the result
#[derive(Parser, Debug)]
#[command(name = "sluice")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,

    /// Override config file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply migration files in order, then run verification checks
    Migrate(MigrateArgs),

    /// Run only the verification checks against the target
    Verify(VerifyArgs),

    /// List the migration files that would run, in order
    Ls(LsArgs),

    /// Upload the configured local directory to the FTP destination
    Sync(SyncArgs),
}

/// Arguments for the migrate command
#[derive(Args, Debug)]
pub struct MigrateArgs {
    /// Explicit migration files, applied in the given order
    /// (default: discover from the configured migrations directory)
    #[arg(long, num_args = 1..)]
    pub files: Vec<String>,

    /// Connection DSN (default: the env var named in config)
    #[arg(long)]
    pub dsn: Option<String>,

    /// Skip the verification phase
    #[arg(long)]
    pub no_verify: bool,
}

/// Arguments for the verify command
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Connection DSN (default: the env var named in config)
    #[arg(long)]
    pub dsn: Option<String>,
}

/// Arguments for the ls command
#[derive(Args, Debug)]
pub struct LsArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: LsOutput,
}

/// List output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LsOutput {
    /// Table format
    Table,
    /// JSON output
    Json,
}

/// Arguments for the sync command
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Override the local directory to upload
    #[arg(long)]
    pub local_dir: Option<String>,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
