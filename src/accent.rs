//! Accent propagation into shell plugin settings
//!
//! Reads the generated accent color and pushes it into the plugin's
//! persisted settings: the current settings dictionary is read from the
//! settings database, the border-color field is replaced with the new color,
//! and the dictionary is written back with every other field untouched.

mod backend;
mod variant;

pub use backend::{DconfBackend, SettingsBackend};

use crate::config::AccentConfig;
use crate::document::ConfigDocument;
use crate::error::AccentError;
use serde::Serialize;
use std::fmt;
use std::path::Path;
use tracing::{debug, info};

/// RGBA accent color, components in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AccentColor {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl AccentColor {
    /// Parse a color literal: either a `R,G,B` decimal triple (0-255, the
    /// color-scheme file notation) or a `#RRGGBB` hex string. `alpha` is
    /// supplied separately since neither notation carries it.
    pub fn parse(text: &str, alpha: f64) -> Result<Self, AccentError> {
        let trimmed = text.trim();

        if let Some(hex_part) = trimmed.strip_prefix('#') {
            let bytes = hex::decode(hex_part)
                .map_err(|_| AccentError::ColorParse(trimmed.to_string()))?;
            if bytes.len() != 3 {
                return Err(AccentError::ColorParse(trimmed.to_string()));
            }
            return Ok(Self::from_rgb8(bytes[0], bytes[1], bytes[2], alpha));
        }

        let parts: Vec<&str> = trimmed.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(AccentError::ColorParse(trimmed.to_string()));
        }
        let mut rgb = [0u8; 3];
        for (slot, part) in rgb.iter_mut().zip(&parts) {
            *slot = part
                .parse()
                .map_err(|_| AccentError::ColorParse(trimmed.to_string()))?;
        }
        Ok(Self::from_rgb8(rgb[0], rgb[1], rgb[2], alpha))
    }

    fn from_rgb8(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self {
            red: f64::from(red) / 255.0,
            green: f64::from(green) / 255.0,
            blue: f64::from(blue) / 255.0,
            alpha,
        }
    }

    /// Serialized `(dddd)` tuple for the settings value. The debug float
    /// format guarantees a decimal point, which the variant text grammar
    /// requires to read the components as doubles.
    pub fn to_variant(&self) -> String {
        format!(
            "<({:?}, {:?}, {:?}, {:?})>",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.2}, {:.2}, {:.2}, {:.2})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

/// What the accent push did, or why it did nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum AccentOutcome {
    /// Colors file absent: nothing to do.
    SourceMissing,
    Applied(AccentReport),
}

/// Summary of a performed accent push.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccentReport {
    pub color: AccentColor,
    /// Previous serialized field value, when the field existed.
    pub previous: Option<String>,
    /// False on dry runs.
    pub written: bool,
}

/// Resolve the accent color: an explicit literal wins, otherwise the
/// generated scheme's `[General] AccentColor` entry. `Ok(None)` means the
/// colors file is absent (soft-skip).
pub fn resolve_color(
    colors_file: &Path,
    override_color: Option<&str>,
    alpha: f64,
) -> Result<Option<AccentColor>, AccentError> {
    if let Some(literal) = override_color {
        return AccentColor::parse(literal, alpha).map(Some);
    }

    if !colors_file.is_file() {
        debug!(colors_file = %colors_file.display(), "colors file not found, skipping accent push");
        return Ok(None);
    }

    let doc = ConfigDocument::load(colors_file)?;
    let value = doc
        .get("General", "AccentColor")
        .ok_or_else(|| AccentError::MissingAccentKey {
            path: colors_file.to_path_buf(),
        })?;
    AccentColor::parse(value, alpha).map(Some)
}

/// Push `color` into the plugin settings via `backend`.
pub fn apply_accent(
    config: &AccentConfig,
    color: AccentColor,
    dry_run: bool,
    backend: &dyn SettingsBackend,
) -> Result<AccentReport, AccentError> {
    if !backend.schema_exists(&config.schema_id)? {
        return Err(AccentError::SchemaMissing(config.schema_id.clone()));
    }

    let current = backend.read(&config.settings_path)?;
    let dict = current.as_deref().unwrap_or("{}");

    let previous = variant::get_entry(dict, &config.field)?;
    let updated = variant::set_entry(dict, &config.field, &color.to_variant())?;

    if !dry_run {
        backend.write(&config.settings_path, &updated)?;
    }

    info!(
        settings_path = %config.settings_path,
        field = %config.field,
        color = %color,
        dry_run,
        "updated plugin accent"
    );

    Ok(AccentReport {
        color,
        previous,
        written: !dry_run,
    })
}

/// Full accent operation: resolve the color, then push it.
pub fn run(
    config: &AccentConfig,
    override_color: Option<&str>,
    alpha_override: Option<f64>,
    dry_run: bool,
    backend: &dyn SettingsBackend,
) -> Result<AccentOutcome, AccentError> {
    let alpha = alpha_override.unwrap_or(config.alpha);
    match resolve_color(&config.colors_file, override_color, alpha)? {
        None => Ok(AccentOutcome::SourceMissing),
        Some(color) => apply_accent(config, color, dry_run, backend).map(AccentOutcome::Applied),
    }
}
