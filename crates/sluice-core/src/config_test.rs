use super::*;

#[test]
fn test_parse_minimal_config() {
    let config: Config = serde_yaml::from_str("name: test_project").unwrap();
    assert_eq!(config.name, "test_project");
    assert_eq!(config.migration_paths, vec!["migrations".to_string()]);
    assert_eq!(config.schema, "public");
    assert_eq!(config.database.dsn_env, "SLUICE_DATABASE_URL");
    assert!(config.verification.enabled);
    assert!(config.deploy.is_none());
}

#[test]
fn test_parse_full_config() {
    let yaml = r#"
name: platform_db
version: "2.0.0"
migration_paths:
  - migrations/schema
  - migrations/policies
schema: app
database:
  dsn_env: PLATFORM_DATABASE_URL
verification:
  enabled: false
deploy:
  host: ftp.example.com
  remote_root: /public_html
  local_dir: dist
"#;
    let config: Config = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.name, "platform_db");
    assert_eq!(config.migration_paths.len(), 2);
    assert_eq!(config.schema, "app");
    assert_eq!(config.database.dsn_env, "PLATFORM_DATABASE_URL");
    assert!(!config.verification.enabled);

    let deploy = config.deploy.unwrap();
    assert_eq!(deploy.host, "ftp.example.com");
    assert_eq!(deploy.port, 21);
    assert_eq!(deploy.remote_root, "/public_html");
    assert!(deploy.write_rewrite_rules);
}

#[test]
fn test_unknown_field_rejected() {
    let result: Result<Config, _> = serde_yaml::from_str("name: test\npassword: hunter2");
    assert!(result.is_err());
}

#[test]
fn test_load_missing_file() {
    let result = Config::load(Path::new("/nonexistent/sluice.yml"));
    assert!(matches!(result, Err(CoreError::ConfigNotFound { .. })));
}

#[test]
fn test_load_from_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("sluice.yml"), "name: from_dir").unwrap();

    let config = Config::load_from_dir(dir.path()).unwrap();
    assert_eq!(config.name, "from_dir");
}

#[test]
fn test_load_or_default_without_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_or_default(dir.path()).unwrap();
    assert_eq!(config.name, "sluice");
}

#[test]
fn test_load_or_default_surfaces_parse_errors() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("sluice.yml"), "name: [unclosed").unwrap();

    let result = Config::load_or_default(dir.path());
    assert!(result.is_err());
}

#[test]
fn test_validate_empty_migration_paths() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sluice.yml");
    std::fs::write(&path, "name: test\nmigration_paths: []").unwrap();

    let result = Config::load(&path);
    assert!(matches!(result, Err(CoreError::ConfigInvalid { .. })));
}

#[test]
fn test_resolve_dsn_override_wins() {
    let config = Config::default();
    let dsn = config
        .resolve_dsn(Some("postgres://localhost/app"))
        .unwrap();
    assert_eq!(dsn, "postgres://localhost/app");
}

#[test]
fn test_resolve_dsn_missing_env() {
    let mut config = Config::default();
    config.database.dsn_env = "SLUICE_TEST_UNSET_DSN_VAR".to_string();
    let result = config.resolve_dsn(None);
    assert!(matches!(result, Err(CoreError::MissingEnvVar { .. })));
}

#[test]
fn test_paths_absolute() {
    let config = Config::default();
    let root = PathBuf::from("/tmp/project");
    assert_eq!(
        config.migration_paths_absolute(&root),
        vec![root.join("migrations")]
    );
    assert_eq!(config.target_path_absolute(&root), root.join("target"));
}
