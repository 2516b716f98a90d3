use super::*;
use crate::verify::{default_checks, run_verification};
use sluice_core::{migration, FileStatus};
use sluice_db::DuckDbBackend;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn memory_db() -> Arc<dyn Database> {
    Arc::new(DuckDbBackend::in_memory().unwrap())
}

fn write_migrations(specs: &[(&str, &str)]) -> (TempDir, Vec<MigrationFile>) {
    let dir = TempDir::new().unwrap();
    let mut paths = Vec::new();
    for (name, sql) in specs {
        let path = dir.path().join(name);
        fs::write(&path, sql).unwrap();
        paths.push(path);
    }
    let files = migration::from_paths(&paths).unwrap();
    (dir, files)
}

#[tokio::test]
async fn test_all_valid_files_applied() {
    let db = memory_db();
    let (_dir, files) = write_migrations(&[
        ("001_users.sql", "CREATE TABLE users (id INT);"),
        ("002_orders.sql", "CREATE TABLE orders (id INT, user_id INT);"),
        ("003_seed.sql", "INSERT INTO users VALUES (1);"),
    ]);

    let runner = MigrationRunner::new(db.clone());
    let report = runner.run(&files).await;

    assert!(report.all_succeeded());
    assert_eq!(report.succeeded, 3);
    assert_eq!(report.failed, 0);
    assert_eq!(
        db.query_count("SELECT COUNT(*) FROM users").await.unwrap(),
        1
    );
}

#[tokio::test]
async fn test_partial_failure_isolation() {
    let db = memory_db();
    let (_dir, files) = write_migrations(&[
        ("001_users.sql", "CREATE TABLE users (id INT);"),
        ("002_broken.sql", "CREAT TABLE broken (id INT);"),
        ("003_orders.sql", "CREATE TABLE orders (id INT);"),
    ]);

    let runner = MigrationRunner::new(db.clone());
    let report = runner.run(&files).await;

    assert!(!report.all_succeeded());
    assert_eq!(report.succeeded, 2);
    assert_eq!(report.failed, 1);

    // Exactly the broken file failed; files after it still ran
    assert_eq!(report.results[0].status, FileStatus::Applied);
    assert_eq!(report.results[1].status, FileStatus::Failed);
    assert!(report.results[1].error.is_some());
    assert_eq!(report.results[2].status, FileStatus::Applied);

    assert_eq!(
        db.query_count("SELECT COUNT(*) FROM orders").await.unwrap(),
        0
    );
}

#[tokio::test]
async fn test_rerun_with_guards_is_idempotent() {
    let db = memory_db();
    let (_dir, files) = write_migrations(&[
        (
            "001_users.sql",
            "CREATE TABLE IF NOT EXISTS users (id INT PRIMARY KEY);",
        ),
        (
            "002_seed.sql",
            "INSERT INTO users VALUES (1) ON CONFLICT DO NOTHING;",
        ),
    ]);

    let runner = MigrationRunner::new(db.clone());

    let first = runner.run(&files).await;
    assert!(first.all_succeeded());

    let second = runner.run(&files).await;
    assert!(second.all_succeeded());
    assert_eq!(second.succeeded, first.succeeded);

    // Seed did not duplicate
    assert_eq!(
        db.query_count("SELECT COUNT(*) FROM users").await.unwrap(),
        1
    );
}

#[tokio::test]
async fn test_empty_file_list_succeeds() {
    let db = memory_db();
    let runner = MigrationRunner::new(db.clone());
    let report = runner.run(&[]).await;

    assert!(report.all_succeeded());
    assert!(report.results.is_empty());

    // Verification still runs against an empty target
    let checks = default_checks(db.db_type(), "main");
    let verification = run_verification(&db, &checks).await;
    assert!(verification.passed());
}

#[tokio::test]
async fn test_unreadable_file_counts_as_failure() {
    let db = memory_db();
    let (_dir, mut files) = write_migrations(&[("001_users.sql", "CREATE TABLE users (id INT);")]);
    files.push(MigrationFile::from_path(PathBuf::from(
        "/nonexistent/002_gone.sql",
    )));

    let runner = MigrationRunner::new(db);
    let report = runner.run(&files).await;

    assert_eq!(report.succeeded, 1);
    assert_eq!(report.failed, 1);
    assert_eq!(report.results[1].status, FileStatus::Failed);
}

#[tokio::test]
async fn test_earlier_files_survive_a_later_failure() {
    // Cross-file independence: file 1's work is committed before file 2
    // runs, so file 2 failing cannot undo it.
    let db = memory_db();
    let (_dir, files) = write_migrations(&[
        ("001_kept.sql", "CREATE TABLE kept (id INT);"),
        ("002_broken.sql", "CREAT TABLE broken (id INT);"),
    ]);

    let runner = MigrationRunner::new(db.clone());
    let report = runner.run(&files).await;

    assert_eq!(report.failed, 1);
    assert_eq!(
        db.query_count(
            "SELECT COUNT(*) FROM information_schema.tables WHERE table_name = 'kept'"
        )
        .await
        .unwrap(),
        1
    );
}
