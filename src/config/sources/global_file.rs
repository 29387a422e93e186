//! Global config file source: ~/.config/huesync/config.toml or $XDG_CONFIG_HOME/huesync/config.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use tracing::debug;

/// Add the global config file source to the builder if it exists. Running
/// without one is the normal case for a generator hook, so absence is not
/// worth a warning.
pub(crate) fn add_to_builder(
    mut builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if let Some(path) = super::super::paths::global_config_path() {
        if path.exists() {
            builder = builder.add_source(File::from(path).required(false));
        } else {
            debug!(
                config_path = %path.display(),
                "global configuration file not found; using defaults"
            );
        }
    }
    Ok(builder)
}
