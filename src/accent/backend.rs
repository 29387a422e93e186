//! Settings database backends.
//!
//! The production backend talks to the session's dconf database through the
//! `dconf` and `gsettings` command-line tools. The trait seam keeps the
//! accent logic testable without a desktop session.

use crate::error::AccentError;
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

/// Seam to the settings database that persists plugin configuration.
pub trait SettingsBackend {
    /// Whether the plugin's settings schema is installed.
    fn schema_exists(&self, schema_id: &str) -> Result<bool, AccentError>;

    /// Serialized value at a settings path. `None` when the key is unset.
    fn read(&self, path: &str) -> Result<Option<String>, AccentError>;

    /// Write a serialized value to a settings path.
    fn write(&self, path: &str, value: &str) -> Result<(), AccentError>;
}

/// Backend for the session dconf database.
pub struct DconfBackend {
    /// Extension-local schema directory, checked when the schema is not
    /// registered system-wide. Shell extensions usually ship their schema
    /// next to the extension instead of installing it globally.
    local_schema_dir: Option<PathBuf>,
}

impl DconfBackend {
    pub fn new(local_schema_dir: Option<PathBuf>) -> Self {
        Self { local_schema_dir }
    }

    fn run(program: &str, args: &[&str]) -> Result<std::process::Output, AccentError> {
        Command::new(program)
            .args(args)
            .output()
            .map_err(|e| AccentError::Backend {
                command: format!("{} {}", program, args.join(" ")),
                message: e.to_string(),
            })
    }
}

impl SettingsBackend for DconfBackend {
    fn schema_exists(&self, schema_id: &str) -> Result<bool, AccentError> {
        let output = Self::run("gsettings", &["list-schemas"])?;
        if output.status.success() {
            let listed = String::from_utf8_lossy(&output.stdout)
                .lines()
                .any(|line| line.trim() == schema_id);
            if listed {
                return Ok(true);
            }
        }

        if let Some(dir) = &self.local_schema_dir {
            if dir.is_dir() {
                debug!(schema_dir = %dir.display(), "using extension-local schema directory");
                return Ok(true);
            }
        }

        Ok(false)
    }

    fn read(&self, path: &str) -> Result<Option<String>, AccentError> {
        let output = Self::run("dconf", &["read", path])?;
        if !output.status.success() {
            return Err(AccentError::Backend {
                command: format!("dconf read {}", path),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok(if text.is_empty() { None } else { Some(text) })
    }

    fn write(&self, path: &str, value: &str) -> Result<(), AccentError> {
        let output = Self::run("dconf", &["write", path, value])?;
        if !output.status.success() {
            return Err(AccentError::Backend {
                command: format!("dconf write {}", path),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}
