//! Integration tests for the accent push operation

use huesync::accent::{self, AccentColor, AccentOutcome, SettingsBackend};
use huesync::config::AccentConfig;
use huesync::error::AccentError;
use std::cell::RefCell;
use std::collections::HashMap;
use tempfile::TempDir;

/// In-memory settings database standing in for the session's dconf.
struct MemoryBackend {
    schemas: Vec<String>,
    values: RefCell<HashMap<String, String>>,
}

impl MemoryBackend {
    fn new(schema: &str) -> Self {
        Self {
            schemas: vec![schema.to_string()],
            values: RefCell::new(HashMap::new()),
        }
    }

    fn seed(self, path: &str, value: &str) -> Self {
        self.values
            .borrow_mut()
            .insert(path.to_string(), value.to_string());
        self
    }
}

impl SettingsBackend for MemoryBackend {
    fn schema_exists(&self, schema_id: &str) -> Result<bool, AccentError> {
        Ok(self.schemas.iter().any(|s| s == schema_id))
    }

    fn read(&self, path: &str) -> Result<Option<String>, AccentError> {
        Ok(self.values.borrow().get(path).cloned())
    }

    fn write(&self, path: &str, value: &str) -> Result<(), AccentError> {
        self.values
            .borrow_mut()
            .insert(path.to_string(), value.to_string());
        Ok(())
    }
}

fn config_for(dir: &TempDir) -> AccentConfig {
    AccentConfig {
        colors_file: dir.path().join("MaterialYou.colors"),
        schema_id: "org.gnome.shell.extensions.rounded-window-corners-reborn".to_string(),
        settings_path: "/org/gnome/shell/extensions/rounded-window-corners-reborn/global-rounded-corner-settings".to_string(),
        field: "borderColor".to_string(),
        alpha: 0.8,
        local_schema_dir: None,
    }
}

#[test]
fn test_accent_from_scheme_file_updates_settings() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir);
    std::fs::write(&config.colors_file, "[General]\nAccentColor=255,0,0\n").unwrap();
    let backend = MemoryBackend::new(&config.schema_id).seed(
        &config.settings_path,
        "{'borderColor': <(0.5, 0.5, 0.5, 1.0)>, 'borderRadius': <uint32 12>, 'smoothing': <0.0>}",
    );

    let outcome = accent::run(&config, None, None, false, &backend).unwrap();

    match outcome {
        AccentOutcome::Applied(report) => {
            assert!(report.written);
            assert_eq!(report.previous.as_deref(), Some("<(0.5, 0.5, 0.5, 1.0)>"));
        }
        other => panic!("expected applied, got {:?}", other),
    }
    let stored = backend.read(&config.settings_path).unwrap().unwrap();
    assert!(stored.contains("'borderColor': <(1.0, 0.0, 0.0, 0.8)>"));
    assert!(stored.contains("'borderRadius': <uint32 12>"));
    assert!(stored.contains("'smoothing': <0.0>"));
}

#[test]
fn test_explicit_color_override_skips_scheme_file() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir);
    let backend = MemoryBackend::new(&config.schema_id);

    let outcome = accent::run(&config, Some("#0000ff"), Some(0.5), false, &backend).unwrap();

    match outcome {
        AccentOutcome::Applied(report) => {
            assert_eq!(report.color.blue, 1.0);
            assert_eq!(report.color.alpha, 0.5);
        }
        other => panic!("expected applied, got {:?}", other),
    }
}

#[test]
fn test_missing_colors_file_soft_skips() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir);
    let backend = MemoryBackend::new(&config.schema_id);

    let outcome = accent::run(&config, None, None, false, &backend).unwrap();

    assert_eq!(outcome, AccentOutcome::SourceMissing);
    assert_eq!(backend.read(&config.settings_path).unwrap(), None);
}

#[test]
fn test_missing_schema_fails() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir);
    std::fs::write(&config.colors_file, "[General]\nAccentColor=255,0,0\n").unwrap();
    let backend = MemoryBackend {
        schemas: vec![],
        values: RefCell::new(HashMap::new()),
    };

    let err = accent::run(&config, None, None, false, &backend).unwrap_err();
    assert!(matches!(err, AccentError::SchemaMissing(_)));
}

#[test]
fn test_pushing_same_color_twice_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir);
    std::fs::write(&config.colors_file, "[General]\nAccentColor=16,32,64\n").unwrap();
    let backend = MemoryBackend::new(&config.schema_id)
        .seed(&config.settings_path, "{'blur': <false>}");

    accent::run(&config, None, None, false, &backend).unwrap();
    let once = backend.read(&config.settings_path).unwrap();
    accent::run(&config, None, None, false, &backend).unwrap();

    assert_eq!(backend.read(&config.settings_path).unwrap(), once);
}

#[test]
fn test_color_components_match_scheme_values() {
    let color = AccentColor::parse("51,102,204", 0.8).unwrap();
    assert!((color.red - 0.2).abs() < 1e-9);
    assert!((color.green - 0.4).abs() < 1e-9);
    assert!((color.blue - 0.8).abs() < 1e-9);
}
