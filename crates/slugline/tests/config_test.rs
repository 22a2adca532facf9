//! Tests for configuration loading.

use slugline::{BackfillPolicy, SluglineConfig, SluglineErrorKind};

#[test]
fn test_from_file_overrides_selected_fields() {
    let toml = r#"
[parser]
footer_phrases = ["PRODUCTION DRAFT"]

[classify]
backfill = "eager"
max_attempts = 3
"#;

    let temp_dir = tempfile::tempdir().unwrap();
    let file_path = temp_dir.path().join("slugline.toml");
    std::fs::write(&file_path, toml).unwrap();

    let config = SluglineConfig::from_file(&file_path).unwrap();

    assert_eq!(config.parser.footer_phrases(), &vec!["PRODUCTION DRAFT".to_string()]);
    assert_eq!(config.parser.continuation_marker(), "\\");
    assert!(!config.parser.header_prefixes().is_empty());
    assert_eq!(*config.classify.backfill(), BackfillPolicy::Eager);
    assert_eq!(*config.classify.max_attempts(), Some(3));
}

#[test]
fn test_from_file_rejects_invalid_values() {
    let toml = r#"
[classify]
max_attempts = 0
"#;

    let temp_dir = tempfile::tempdir().unwrap();
    let file_path = temp_dir.path().join("bad.toml");
    std::fs::write(&file_path, toml).unwrap();

    let err = SluglineConfig::from_file(&file_path).unwrap_err();
    assert!(matches!(err.kind(), SluglineErrorKind::Config(_)));
}

#[test]
fn test_from_file_missing_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let result = SluglineConfig::from_file(temp_dir.path().join("absent.toml"));
    assert!(result.is_err());
}

#[test]
fn test_load_includes_bundled_defaults() {
    let config = SluglineConfig::load().unwrap();
    assert!(config.validate().is_ok());
    assert!(!config.parser.footer_phrases().is_empty());
}

#[test]
fn test_default_matches_empty_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file_path = temp_dir.path().join("empty.toml");
    std::fs::write(&file_path, "").unwrap();

    assert_eq!(SluglineConfig::from_file(&file_path).unwrap(), SluglineConfig::default());
}
