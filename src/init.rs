//! Initialization of the default configuration file via `huesync init`.

use crate::config::{ConfigLoader, HuesyncConfig};
use crate::error::HuesyncError;
use std::fs;
use std::path::PathBuf;

/// Result of an init run.
#[derive(Debug, Clone)]
pub struct InitResult {
    pub path: PathBuf,
    /// False when an existing file was left untouched.
    pub created: bool,
}

/// Write the default configuration to the global config path. An existing
/// file is left untouched unless `force` is set.
pub fn write_default_config(force: bool) -> Result<InitResult, HuesyncError> {
    let path = ConfigLoader::global_config_path().ok_or_else(|| {
        HuesyncError::Config("cannot resolve home directory for configuration path".to_string())
    })?;

    if path.exists() && !force {
        return Ok(InitResult {
            path,
            created: false,
        });
    }

    let text = toml::to_string_pretty(&HuesyncConfig::default()).map_err(|e| {
        HuesyncError::Config(format!("failed to serialize default configuration: {}", e))
    })?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, text)?;

    Ok(InitResult {
        path,
        created: true,
    })
}
