//! Configuration loading facade: defaults, global file, environment.

use super::sources;
use super::HuesyncConfig;
use crate::error::HuesyncError;
use config::{Config, Environment};
use std::path::{Path, PathBuf};

/// Loads configuration from the global file and the environment. Field
/// defaults come from the serde definitions, so an empty build still yields
/// a usable configuration.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration. Precedence (lowest to highest): field defaults,
    /// the global config file, `HUESYNC_*` environment variables
    /// (e.g. `HUESYNC_MERGE__TARGET`).
    pub fn load() -> Result<HuesyncConfig, HuesyncError> {
        let mut builder = Config::builder();
        builder = sources::global_file::add_to_builder(builder)?;
        builder = builder.add_source(Environment::with_prefix("HUESYNC").separator("__"));
        let raw = builder.build()?;
        Ok(raw.try_deserialize()?)
    }

    /// Load configuration from an explicit file, skipping the global file
    /// and the environment.
    pub fn load_from_file(path: &Path) -> Result<HuesyncConfig, HuesyncError> {
        let raw = Config::builder()
            .add_source(config::File::from(path.to_path_buf()))
            .build()?;
        Ok(raw.try_deserialize()?)
    }

    /// Path of the global config file, if a home directory can be resolved.
    pub fn global_config_path() -> Option<PathBuf> {
        super::paths::global_config_path()
    }
}
