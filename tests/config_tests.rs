//! Integration tests for configuration management

use course_catalog::catalog::{CategoryMode, SortKey, DEFAULT_PAGE_SIZE};
use course_catalog::config::{Config, ConfigOverrides};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a temporary config directory
fn setup_temp_config() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");
    (temp_dir, config_file)
}

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.exports_dir.is_empty(),
        "Default exports_dir should not be empty"
    );
    assert_eq!(config.catalog.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(config.generator.featured_limit, 8);
    assert_eq!(config.sort_key(), SortKey::Popular);
    assert_eq!(config.category_mode(), CategoryMode::Replace);
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[generator]
seed = "1234"
featured_limit = 4

[catalog]
page_size = 12
sort = "rating"
category_mode = "intersect"

[paths]
exports_dir = "./exports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.seed(), Some(1234));
    assert_eq!(config.generator.featured_limit, 4);
    assert_eq!(config.catalog.page_size, 12);
    assert_eq!(config.sort_key(), SortKey::Rating);
    assert_eq!(config.category_mode(), CategoryMode::Intersect);
    assert_eq!(config.paths.exports_dir, "./exports");
}

#[test]
fn test_config_from_toml_partial() {
    let toml_str = r#"
[logging]
level = "error"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.seed(), None);
    assert_eq!(config.catalog.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(config.sort_key(), SortKey::Popular);
    assert_eq!(config.category_mode(), CategoryMode::Replace);
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$COURSE_CATALOG/catalog.log"

[paths]
exports_dir = "$COURSE_CATALOG/exports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    assert!(config.logging.file.contains("coursecatalog"));
    assert!(!config.logging.file.contains("$COURSE_CATALOG"));
    assert!(config.paths.exports_dir.contains("coursecatalog"));
    assert!(config.paths.exports_dir.ends_with("exports"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    assert!(config.get("level").is_some());

    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "debug");

    config
        .set("verbose", "true")
        .expect("Failed to set verbose");
    assert!(config.logging.verbose);

    config.set("page-size", "50").expect("Failed to set page size");
    assert_eq!(config.get("page_size").unwrap(), "50");

    config.set("seed", "99").expect("Failed to set seed");
    assert_eq!(config.seed(), Some(99));
    config.set("seed", "").expect("Failed to clear seed");
    assert_eq!(config.seed(), None);

    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_set_validates_values() {
    let mut config = Config::from_defaults();

    assert!(config.set("verbose", "maybe").is_err());
    assert!(config.set("seed", "-1").is_err());
    assert!(config.set("page_size", "many").is_err());
    assert!(config.set("featured_limit", "-3").is_err());
    assert!(config.set("category_mode", "merge").is_err());
    assert!(config.set("category_mode", "intersect").is_ok());
    assert_eq!(config.category_mode(), CategoryMode::Intersect);
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("level", "debug").expect("Failed to set level");
    config.set("page_size", "5").expect("Failed to set page size");

    config
        .unset("level", &defaults)
        .expect("Failed to unset level");
    config
        .unset("page_size", &defaults)
        .expect("Failed to unset page size");

    assert_eq!(config.logging.level, defaults.logging.level);
    assert_eq!(config.catalog.page_size, defaults.catalog.page_size);
    assert!(config.unset("nope", &defaults).is_err());
}

#[test]
fn test_config_save_and_load() {
    let (_temp_dir, config_file) = setup_temp_config();

    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");
    config.set("sort", "newest").expect("Failed to set sort");

    let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");
    fs::write(&config_file, toml_str).expect("Failed to write config");

    let content = fs::read_to_string(&config_file).expect("Failed to read config");
    let loaded_config = Config::from_toml(&content).expect("Failed to parse loaded config");

    assert_eq!(loaded_config.logging.level, "info");
    assert_eq!(loaded_config.sort_key(), SortKey::Newest);
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        seed: Some("77".to_string()),
        page_size: Some(6),
        category_mode: Some("intersect".to_string()),
        exports_dir: Some("./custom_exports".to_string()),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.seed(), Some(77));
    assert_eq!(config.catalog.page_size, 6);
    assert_eq!(config.category_mode(), CategoryMode::Intersect);
    assert_eq!(config.paths.exports_dir, "./custom_exports");
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let before = config.catalog.page_size;

    config.apply_overrides(&ConfigOverrides {
        level: Some("debug".to_string()),
        ..ConfigOverrides::default()
    });

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.catalog.page_size, before);
}

#[test]
fn test_config_display_format() {
    let display_str = Config::from_defaults().to_string();

    for section in ["[logging]", "[generator]", "[catalog]", "[paths]"] {
        assert!(display_str.contains(section), "missing {section}");
    }
    assert!(display_str.contains("page_size"));
    assert!(display_str.contains("exports_dir"));
}

#[test]
fn test_merge_defaults_adds_missing_fields() {
    let toml_str = r#"
[logging]
level = "error"
file = ""
verbose = false

[catalog]
sort = ""
category_mode = ""

[paths]
exports_dir = ""
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse minimal config");
    let defaults = Config::from_defaults();

    assert!(
        config.merge_defaults(&defaults),
        "merge_defaults should return true when fields are added"
    );
    assert_eq!(config.paths.exports_dir, defaults.paths.exports_dir);
    assert_eq!(config.catalog.sort, defaults.catalog.sort);
    assert!(!config.merge_defaults(&defaults));
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"
verbose = false

[catalog]
sort = "alphabetical"
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    config.merge_defaults(&Config::from_defaults());

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert_eq!(config.sort_key(), SortKey::Alphabetical);
}

#[test]
fn test_get_catalog_dir() {
    let dir = Config::get_catalog_dir();
    assert!(dir.to_string_lossy().contains("coursecatalog"));
    assert_ne!(dir, PathBuf::from("."));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();
    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}
