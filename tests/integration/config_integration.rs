//! Integration tests for configuration loading and init

use crate::integration::test_utils::with_home_env;
use huesync::config::{ConfigLoader, HuesyncConfig};
use huesync::init::write_default_config;
use tempfile::TempDir;

#[test]
fn test_load_uses_defaults_without_global_file() {
    let test_dir = TempDir::new().unwrap();
    with_home_env(&test_dir, || {
        let config = ConfigLoader::load().unwrap();
        assert!(config
            .merge
            .source
            .ends_with(".local/share/color-schemes/MaterialYou.colors"));
        assert_eq!(config.accent.alpha, 0.8);
        assert!(config.validate().is_ok());
    });
}

#[test]
fn test_load_picks_up_global_file() {
    let test_dir = TempDir::new().unwrap();
    with_home_env(&test_dir, || {
        let config_path = ConfigLoader::global_config_path().unwrap();
        std::fs::create_dir_all(config_path.parent().unwrap()).unwrap();
        std::fs::write(
            &config_path,
            "[merge]\ntarget = \"/tmp/alternate-globals\"\n\n[accent]\nalpha = 0.25\n",
        )
        .unwrap();

        let config = ConfigLoader::load().unwrap();
        assert_eq!(
            config.merge.target,
            std::path::PathBuf::from("/tmp/alternate-globals")
        );
        assert_eq!(config.accent.alpha, 0.25);
        // Unset sections keep their defaults.
        assert_eq!(config.accent.field, "borderColor");
    });
}

#[test]
fn test_init_writes_loadable_default_config() {
    let test_dir = TempDir::new().unwrap();
    with_home_env(&test_dir, || {
        let result = write_default_config(false).unwrap();
        assert!(result.created);
        assert!(result.path.exists());

        let loaded = ConfigLoader::load_from_file(&result.path).unwrap();
        let defaults = HuesyncConfig::default();
        assert_eq!(loaded.accent.schema_id, defaults.accent.schema_id);
        assert_eq!(loaded.merge.target, defaults.merge.target);
        assert!(loaded.validate().is_ok());
    });
}

#[test]
fn test_init_preserves_existing_config_without_force() {
    let test_dir = TempDir::new().unwrap();
    with_home_env(&test_dir, || {
        let first = write_default_config(false).unwrap();
        std::fs::write(&first.path, "[accent]\nalpha = 0.1\n").unwrap();

        let second = write_default_config(false).unwrap();
        assert!(!second.created);
        let kept = ConfigLoader::load_from_file(&second.path).unwrap();
        assert_eq!(kept.accent.alpha, 0.1);

        let forced = write_default_config(true).unwrap();
        assert!(forced.created);
        let reset = ConfigLoader::load_from_file(&forced.path).unwrap();
        assert_eq!(reset.accent.alpha, 0.8);
    });
}
