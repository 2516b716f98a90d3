//! sluice-runner - Migration execution for Sluice
//!
//! The runner applies an ordered list of SQL files to one database
//! connection with partial-failure isolation, then the verifier runs a
//! fixed set of read-only introspection checks. Both produce structured
//! results from sluice-core rather than aborting control flow.

pub mod runner;
pub mod verify;

pub use runner::MigrationRunner;
pub use verify::{default_checks, run_verification, Check};
