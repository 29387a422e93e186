//! Configuration System
//!
//! Tool configuration: which files the merge reads and writes, where the
//! accent push points, and logging. Loaded from the global config file with
//! environment overrides; every field has a default matching the paths the
//! upstream color generator writes to, so the tool runs with no config file
//! at all.

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod paths;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HuesyncConfig {
    /// Color-scheme merge settings
    #[serde(default)]
    pub merge: MergeConfig,

    /// Accent push settings
    #[serde(default)]
    pub accent: AccentConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for HuesyncConfig {
    fn default() -> Self {
        Self {
            merge: MergeConfig::default(),
            accent: AccentConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Merge operation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeConfig {
    /// Generated color-scheme file to merge from
    #[serde(default = "paths::default_scheme_file")]
    pub source: PathBuf,

    /// Desktop configuration file to merge into
    #[serde(default = "paths::default_target_file")]
    pub target: PathBuf,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            source: paths::default_scheme_file(),
            target: paths::default_target_file(),
        }
    }
}

/// Accent push configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccentConfig {
    /// Generated color-scheme file to read the accent from
    #[serde(default = "paths::default_scheme_file")]
    pub colors_file: PathBuf,

    /// Settings schema of the target plugin
    #[serde(default = "default_schema_id")]
    pub schema_id: String,

    /// Settings database path holding the plugin's dictionary
    #[serde(default = "default_settings_path")]
    pub settings_path: String,

    /// Dictionary field to replace
    #[serde(default = "default_field")]
    pub field: String,

    /// Border opacity applied to the pushed color
    #[serde(default = "default_alpha")]
    pub alpha: f64,

    /// Extension-local schema directory, for plugins that do not register
    /// their schema system-wide
    #[serde(default = "paths::default_local_schema_dir")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_schema_dir: Option<PathBuf>,
}

impl Default for AccentConfig {
    fn default() -> Self {
        Self {
            colors_file: paths::default_scheme_file(),
            schema_id: default_schema_id(),
            settings_path: default_settings_path(),
            field: default_field(),
            alpha: default_alpha(),
            local_schema_dir: paths::default_local_schema_dir(),
        }
    }
}

fn default_schema_id() -> String {
    "org.gnome.shell.extensions.rounded-window-corners-reborn".to_string()
}

fn default_settings_path() -> String {
    "/org/gnome/shell/extensions/rounded-window-corners-reborn/global-rounded-corner-settings"
        .to_string()
}

fn default_field() -> String {
    "borderColor".to_string()
}

fn default_alpha() -> f64 {
    0.8
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Merge(String),
    Accent(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Merge(msg) => write!(f, "Merge: {}", msg),
            ValidationError::Accent(msg) => write!(f, "Accent: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl MergeConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.source.as_os_str().is_empty() {
            return Err("Source path cannot be empty".to_string());
        }
        if self.target.as_os_str().is_empty() {
            return Err("Target path cannot be empty".to_string());
        }
        Ok(())
    }
}

impl AccentConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_id.is_empty() {
            return Err("Schema id cannot be empty".to_string());
        }
        if !self.settings_path.starts_with('/') {
            return Err(format!(
                "Settings path must be absolute, got {:?}",
                self.settings_path
            ));
        }
        if self.field.is_empty() {
            return Err("Field name cannot be empty".to_string());
        }
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(format!("Alpha must be within 0.0-1.0, got {}", self.alpha));
        }
        Ok(())
    }
}

impl HuesyncConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.merge.validate() {
            errors.push(ValidationError::Merge(e));
        }
        if let Err(e) = self.accent.validate() {
            errors.push(ValidationError::Accent(e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
