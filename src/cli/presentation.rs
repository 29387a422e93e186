//! Presentation formatters for merge, accent, and init results.

use crate::accent::AccentOutcome;
use crate::init::InitResult;
use crate::merge::{MergeOutcome, WriteKind};
use owo_colors::OwoColorize;
use std::path::Path;

pub fn format_merge_outcome(
    outcome: &MergeOutcome,
    source: &Path,
    target: &Path,
    dry_run: bool,
) -> String {
    let report = match outcome {
        MergeOutcome::SourceMissing => {
            return format!(
                "Nothing to do: source file {} not found.",
                source.display()
            )
        }
        MergeOutcome::Merged(report) => report,
    };

    if dry_run {
        let mut output = format!(
            "Would merge {} into {}:\n",
            source.display(),
            target.display()
        );
        for section in &report.sections_added {
            output.push_str(&format!("  {} [{}]\n", "+".green(), section));
        }
        for write in &report.writes {
            match write.kind {
                WriteKind::Inserted => output.push_str(&format!(
                    "  {} [{}] {}={}\n",
                    "+".green(),
                    write.section,
                    write.key,
                    write.value
                )),
                WriteKind::Updated => output.push_str(&format!(
                    "  {} [{}] {}={}\n",
                    "~".yellow(),
                    write.section,
                    write.key,
                    write.value
                )),
                WriteKind::Unchanged => {}
            }
        }
        output.push_str(&format!(
            "{} sections added, {} keys inserted, {} keys updated, {} unchanged.",
            report.sections_added.len(),
            report.inserted(),
            report.updated(),
            report.unchanged()
        ));
        return output;
    }

    format!(
        "Merged {} into {}: {} sections added, {} keys inserted, {} keys updated.",
        source.display(),
        target.display(),
        report.sections_added.len(),
        report.inserted(),
        report.updated()
    )
}

pub fn format_accent_outcome(outcome: &AccentOutcome, colors_file: &Path) -> String {
    match outcome {
        AccentOutcome::SourceMissing => format!(
            "Nothing to do: colors file {} not found.",
            colors_file.display()
        ),
        AccentOutcome::Applied(report) => {
            let mut output = if report.written {
                format!("Updated border color to {}.", report.color)
            } else {
                format!("Would update border color to {}.", report.color)
            };
            if let Some(ref previous) = report.previous {
                output.push_str(&format!(" Previous value: {}", previous));
            }
            output
        }
    }
}

pub fn format_init_result(result: &InitResult) -> String {
    if result.created {
        format!("Wrote default configuration: {}", result.path.display())
    } else {
        format!(
            "Configuration already exists: {} (use --force to overwrite)",
            result.path.display()
        )
    }
}
