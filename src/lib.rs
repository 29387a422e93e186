//! Huesync: color-scheme propagation for generated desktop themes
//!
//! Merges generated color-scheme documents into the desktop environment's
//! global configuration file and pushes the generated accent color into
//! shell plugin settings.

pub mod accent;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod init;
pub mod logging;
pub mod merge;
pub mod status;
