//! CLI route: single route table and run context. Dispatches to domain services and presentation.

use crate::accent::{self, DconfBackend};
use crate::cli::command_name;
use crate::cli::parse::Commands;
use crate::config::{ConfigLoader, HuesyncConfig};
use crate::error::HuesyncError;
use crate::merge;
use crate::status::{build_status, format_status_text};
use std::path::{Path, PathBuf};
use tracing::info;

/// Runtime context for CLI execution: resolved and validated configuration.
/// Built from an optional explicit config path using ConfigLoader only.
#[derive(Debug)]
pub struct RunContext {
    config: HuesyncConfig,
}

impl RunContext {
    /// Create run context from an optional explicit config path.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, HuesyncError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };

        config.validate().map_err(|errors| {
            let msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            HuesyncError::Config(format!(
                "Configuration validation failed:\n{}",
                msgs.join("\n")
            ))
        })?;

        Ok(Self { config })
    }

    /// Resolved configuration.
    pub fn config(&self) -> &HuesyncConfig {
        &self.config
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, HuesyncError> {
        info!(command = command_name(command), "executing command");
        match command {
            Commands::Merge {
                source,
                target,
                dry_run,
            } => self.handle_merge(source.as_deref(), target.as_deref(), *dry_run),
            Commands::Accent {
                color,
                colors_file,
                alpha,
                dry_run,
            } => self.handle_accent(
                color.as_deref(),
                colors_file.as_deref(),
                *alpha,
                *dry_run,
            ),
            Commands::Status { format } => self.handle_status(format),
            Commands::Init { force } => {
                let result = crate::init::write_default_config(*force)?;
                Ok(super::format_init_result(&result))
            }
        }
    }

    fn handle_merge(
        &self,
        source: Option<&Path>,
        target: Option<&Path>,
        dry_run: bool,
    ) -> Result<String, HuesyncError> {
        let source = source.unwrap_or(&self.config.merge.source);
        let target = target.unwrap_or(&self.config.merge.target);
        let outcome = merge::merge_files(source, target, dry_run)?;
        Ok(super::format_merge_outcome(&outcome, source, target, dry_run))
    }

    fn handle_accent(
        &self,
        color: Option<&str>,
        colors_file: Option<&Path>,
        alpha: Option<f64>,
        dry_run: bool,
    ) -> Result<String, HuesyncError> {
        let mut accent_config = self.config.accent.clone();
        if let Some(file) = colors_file {
            accent_config.colors_file = file.to_path_buf();
        }

        let backend = DconfBackend::new(accent_config.local_schema_dir.clone());
        let outcome = accent::run(&accent_config, color, alpha, dry_run, &backend)?;
        Ok(super::format_accent_outcome(
            &outcome,
            &accent_config.colors_file,
        ))
    }

    fn handle_status(&self, format: &str) -> Result<String, HuesyncError> {
        let status = build_status(&self.config);
        match format {
            "json" => serde_json::to_string_pretty(&status)
                .map_err(|e| HuesyncError::Config(e.to_string())),
            "text" => Ok(format_status_text(&status)),
            other => Err(HuesyncError::Config(format!(
                "Invalid format: '{}'. Must be 'text' or 'json'.",
                other
            ))),
        }
    }
}
