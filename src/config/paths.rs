//! Default filesystem locations under the invoking user's home.

use directories::BaseDirs;
use std::path::PathBuf;

fn home_dir() -> PathBuf {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Color-scheme file the upstream generator writes.
pub(crate) fn default_scheme_file() -> PathBuf {
    home_dir().join(".local/share/color-schemes/MaterialYou.colors")
}

/// Desktop environment's global configuration file.
pub(crate) fn default_target_file() -> PathBuf {
    home_dir().join(".config/kdeglobals")
}

/// Schema directory the shell extension ships with.
pub(crate) fn default_local_schema_dir() -> Option<PathBuf> {
    Some(home_dir().join(".local/share/gnome-shell/extensions/rounded-window-corners@fxgn/schemas"))
}

/// Path to the global config file: $XDG_CONFIG_HOME/huesync/config.toml
/// (~/.config/huesync/config.toml when XDG_CONFIG_HOME is unset).
pub(crate) fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.config_dir().join("huesync").join("config.toml"))
}
