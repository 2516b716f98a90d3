//! Verification phase: fixed read-only introspection checks
//!
//! Runs after the migration files, never before. A check that errors is
//! recorded in the report and the phase continues; prior migration
//! outcomes are never revisited.

use sluice_core::{CheckResult, VerificationReport};
use sluice_db::Database;
use std::sync::Arc;

/// One named introspection query returning a count
#[derive(Debug, Clone)]
pub struct Check {
    /// Stable check name used in reports
    pub name: &'static str,

    /// The count query to run
    pub sql: String,
}

/// Escape a schema name for use inside a SQL string literal
fn quote_literal(s: &str) -> String {
    s.replace('\'', "''")
}

/// The fixed check set for a backend.
///
/// Postgres targets get the full catalog set (tables, RLS tables,
/// policies, functions, views). DuckDB has no pg_catalog, so local
/// targets get the information_schema subset.
pub fn default_checks(db_type: &str, schema: &str) -> Vec<Check> {
    let schema = quote_literal(schema);

    match db_type {
        "postgres" => vec![
            Check {
                name: "tables",
                sql: format!(
                    "SELECT COUNT(*) FROM pg_catalog.pg_tables WHERE schemaname = '{}'",
                    schema
                ),
            },
            Check {
                name: "rls_enabled_tables",
                sql: format!(
                    "SELECT COUNT(*) FROM pg_catalog.pg_class c \
                     JOIN pg_catalog.pg_namespace n ON n.oid = c.relnamespace \
                     WHERE n.nspname = '{}' AND c.relkind = 'r' AND c.relrowsecurity",
                    schema
                ),
            },
            Check {
                name: "policies",
                sql: format!(
                    "SELECT COUNT(*) FROM pg_catalog.pg_policies WHERE schemaname = '{}'",
                    schema
                ),
            },
            Check {
                name: "functions",
                sql: format!(
                    "SELECT COUNT(*) FROM information_schema.routines WHERE routine_schema = '{}'",
                    schema
                ),
            },
            Check {
                name: "views",
                sql: format!(
                    "SELECT COUNT(*) FROM information_schema.views WHERE table_schema = '{}'",
                    schema
                ),
            },
        ],
        _ => vec![
            Check {
                name: "tables",
                sql: format!(
                    "SELECT COUNT(*) FROM information_schema.tables \
                     WHERE table_schema = '{}' AND table_type = 'BASE TABLE'",
                    schema
                ),
            },
            Check {
                name: "views",
                sql: format!(
                    "SELECT COUNT(*) FROM information_schema.tables \
                     WHERE table_schema = '{}' AND table_type = 'VIEW'",
                    schema
                ),
            },
            Check {
                name: "columns",
                sql: format!(
                    "SELECT COUNT(*) FROM information_schema.columns WHERE table_schema = '{}'",
                    schema
                ),
            },
        ],
    }
}

/// Run a check set and collect per-check results
pub async fn run_verification(db: &Arc<dyn Database>, checks: &[Check]) -> VerificationReport {
    let mut report = VerificationReport::default();

    for check in checks {
        match db.query_count(&check.sql).await {
            Ok(value) => {
                log::debug!("Verification check {}: {}", check.name, value);
                report.checks.push(CheckResult {
                    name: check.name.to_string(),
                    value: Some(value),
                    error: None,
                });
            }
            Err(e) => {
                log::warn!("Verification check {} failed: {}", check.name, e);
                report.checks.push(CheckResult {
                    name: check.name.to_string(),
                    value: None,
                    error: Some(e.to_string()),
                });
            }
        }
    }

    report
}

#[cfg(test)]
#[path = "verify_test.rs"]
mod tests;
