use super::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_from_path_derives_name() {
    let migration = MigrationFile::from_path(PathBuf::from("/tmp/001_create_tables.sql"));
    assert_eq!(migration.name, "001_create_tables");
}

#[test]
fn test_read_migration() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("001_init.sql");
    fs::write(&path, "CREATE TABLE IF NOT EXISTS users (id INT);").unwrap();

    let migration = MigrationFile::from_path(path);
    let sql = migration.read().unwrap();
    assert!(sql.contains("CREATE TABLE"));
}

#[test]
fn test_read_missing_migration() {
    let migration = MigrationFile::from_path(PathBuf::from("/nonexistent/001_init.sql"));
    let result = migration.read();
    assert!(matches!(result, Err(CoreError::MigrationNotFound { .. })));
}

#[test]
fn test_read_non_utf8_migration() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("001_bad.sql");
    fs::write(&path, [0xffu8, 0xfe, 0x00, 0x01]).unwrap();

    let migration = MigrationFile::from_path(path);
    let result = migration.read();
    assert!(matches!(result, Err(CoreError::MigrationNotUtf8 { .. })));
}

#[test]
fn test_from_paths_preserves_order() {
    let dir = tempdir().unwrap();
    let b = dir.path().join("b.sql");
    let a = dir.path().join("a.sql");
    fs::write(&b, "SELECT 1;").unwrap();
    fs::write(&a, "SELECT 2;").unwrap();

    // Caller order wins, not lexicographic order
    let files = from_paths(&[&b, &a]).unwrap();
    assert_eq!(files[0].name, "b");
    assert_eq!(files[1].name, "a");
}

#[test]
fn test_from_paths_missing_file() {
    let result = from_paths(&[Path::new("/nonexistent/x.sql")]);
    assert!(matches!(result, Err(CoreError::MigrationNotFound { .. })));
}

#[test]
fn test_discover_sorts_lexicographically() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("002_policies.sql"), "SELECT 1;").unwrap();
    fs::write(dir.path().join("001_schema.sql"), "SELECT 1;").unwrap();
    fs::write(dir.path().join("010_seed.sql"), "SELECT 1;").unwrap();
    fs::write(dir.path().join("README.md"), "not sql").unwrap();

    let files = discover(&[dir.path().to_path_buf()]).unwrap();
    let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["001_schema", "002_policies", "010_seed"]);
}

#[test]
fn test_discover_multiple_dirs_keeps_dir_order() {
    let dir = tempdir().unwrap();
    let schema = dir.path().join("schema");
    let policies = dir.path().join("policies");
    fs::create_dir(&schema).unwrap();
    fs::create_dir(&policies).unwrap();
    fs::write(schema.join("001_tables.sql"), "SELECT 1;").unwrap();
    fs::write(policies.join("001_rls.sql"), "SELECT 1;").unwrap();

    // policies listed first: directory order beats file-name order
    let files = discover(&[policies, schema]).unwrap();
    let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["001_rls", "001_tables"]);
}

#[test]
fn test_discover_missing_dir() {
    let result = discover(&[PathBuf::from("/nonexistent/migrations")]);
    assert!(matches!(
        result,
        Err(CoreError::MigrationsDirNotFound { .. })
    ));
}

#[test]
fn test_discover_empty_dir() {
    let dir = tempdir().unwrap();
    let files = discover(&[dir.path().to_path_buf()]).unwrap();
    assert!(files.is_empty());
}
