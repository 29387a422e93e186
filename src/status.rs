//! Status data and population logic.
//!
//! Produces the `huesync status` view: resolved paths, whether each file is
//! present, and a summary of the parsed source document. Used by the CLI in
//! both text and json form.

use crate::config::HuesyncConfig;
use crate::document::ConfigDocument;
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};

/// Full status view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusReport {
    pub merge: MergeStatus,
    pub accent: AccentStatus,
}

/// Merge section: resolved paths and source document summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeStatus {
    pub source: String,
    pub source_present: bool,
    pub target: String,
    pub target_present: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keys: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_error: Option<String>,
}

/// Accent section: resolved settings target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccentStatus {
    pub colors_file: String,
    pub colors_file_present: bool,
    pub schema_id: String,
    pub settings_path: String,
}

/// Build the status view from resolved configuration.
pub fn build_status(config: &HuesyncConfig) -> StatusReport {
    let source = &config.merge.source;
    let source_present = source.is_file();

    let mut sections = None;
    let mut keys = None;
    let mut parse_error = None;
    if source_present {
        match ConfigDocument::load(source) {
            Ok(doc) => {
                sections = Some(doc.sections().count());
                keys = Some(doc.sections().map(|s| s.len()).sum());
            }
            Err(e) => parse_error = Some(e.to_string()),
        }
    }

    StatusReport {
        merge: MergeStatus {
            source: source.display().to_string(),
            source_present,
            target: config.merge.target.display().to_string(),
            target_present: config.merge.target.is_file(),
            sections,
            keys,
            parse_error,
        },
        accent: AccentStatus {
            colors_file: config.accent.colors_file.display().to_string(),
            colors_file_present: config.accent.colors_file.is_file(),
            schema_id: config.accent.schema_id.clone(),
            settings_path: config.accent.settings_path.clone(),
        },
    }
}

/// Render the status view as text.
pub fn format_status_text(status: &StatusReport) -> String {
    let mut output = String::from("Merge:\n");
    output.push_str(&format!(
        "  Source: {} ({})\n",
        status.merge.source,
        presence(status.merge.source_present)
    ));
    output.push_str(&format!(
        "  Target: {} ({})\n",
        status.merge.target,
        presence(status.merge.target_present)
    ));
    if let (Some(sections), Some(keys)) = (status.merge.sections, status.merge.keys) {
        output.push_str(&format!("  Scheme: {} sections, {} keys\n", sections, keys));
    }
    if let Some(ref err) = status.merge.parse_error {
        output.push_str(&format!("  Scheme: {} ({})\n", "unparseable".red(), err));
    }

    output.push_str("\nAccent:\n");
    output.push_str(&format!(
        "  Colors file: {} ({})\n",
        status.accent.colors_file,
        presence(status.accent.colors_file_present)
    ));
    output.push_str(&format!("  Schema: {}\n", status.accent.schema_id));
    output.push_str(&format!("  Settings path: {}", status.accent.settings_path));
    output
}

fn presence(present: bool) -> String {
    if present {
        "present".green().to_string()
    } else {
        "missing".yellow().to_string()
    }
}
