//! Color-scheme merge operation
//!
//! Overlays a generated color-scheme document onto a target configuration
//! document: sections missing from the target are created at the end, keys
//! from the source overwrite same-named target keys, and keys that exist
//! only in the target are left untouched. An absent source file is a
//! distinct non-error outcome, since the upstream generator may not have
//! run yet.

use crate::document::ConfigDocument;
use crate::error::MergeError;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// What the merge did, or why it did nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Source file absent: nothing to do, target untouched.
    SourceMissing,
    Merged(MergeReport),
}

/// How a single key was affected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WriteKind {
    Inserted,
    Updated,
    Unchanged,
}

/// One key-level write the merge performed (or would perform).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyWrite {
    pub section: String,
    pub key: String,
    pub value: String,
    pub kind: WriteKind,
}

/// Summary of a performed merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    pub sections_added: Vec<String>,
    pub writes: Vec<KeyWrite>,
}

impl MergeReport {
    pub fn inserted(&self) -> usize {
        self.count(WriteKind::Inserted)
    }

    pub fn updated(&self) -> usize {
        self.count(WriteKind::Updated)
    }

    pub fn unchanged(&self) -> usize {
        self.count(WriteKind::Unchanged)
    }

    /// True when the merge would leave the target semantically identical.
    pub fn is_noop(&self) -> bool {
        self.sections_added.is_empty() && self.inserted() == 0 && self.updated() == 0
    }

    fn count(&self, kind: WriteKind) -> usize {
        self.writes.iter().filter(|w| w.kind == kind).count()
    }
}

/// Overlay `source` onto `target` in place.
///
/// Sections are visited in source order; missing target sections are
/// appended at the end of the target's section order, and new keys append
/// after the pre-existing keys of their section.
pub fn merge_documents(target: &mut ConfigDocument, source: &ConfigDocument) -> MergeReport {
    let mut report = MergeReport::default();

    for section in source.sections() {
        if target.section(section.name()).is_none() {
            report.sections_added.push(section.name().to_string());
        }
        let target_section = target.ensure_section(section.name());

        for (key, value) in section.entries() {
            let kind = match target_section.get(key) {
                None => WriteKind::Inserted,
                Some(existing) if existing == value => WriteKind::Unchanged,
                Some(_) => WriteKind::Updated,
            };
            target_section.set(key, value);
            report.writes.push(KeyWrite {
                section: section.name().to_string(),
                key: key.to_string(),
                value: value.to_string(),
                kind,
            });
        }
    }

    report
}

/// Merge the color-scheme file at `source` into the configuration file at
/// `target`, rewriting `target` via atomic replace.
///
/// A missing source yields `MergeOutcome::SourceMissing` with the target
/// untouched. A missing target is treated as an empty document. With
/// `dry_run` the report is computed but nothing is written.
pub fn merge_files(source: &Path, target: &Path, dry_run: bool) -> Result<MergeOutcome, MergeError> {
    if !source.is_file() {
        debug!(source = %source.display(), "source scheme not found, skipping merge");
        return Ok(MergeOutcome::SourceMissing);
    }

    let source_doc = ConfigDocument::load(source)?;
    let mut target_doc = if target.exists() {
        ConfigDocument::load(target)?
    } else {
        ConfigDocument::new()
    };

    let report = merge_documents(&mut target_doc, &source_doc);

    if !dry_run {
        target_doc.write_atomic(target)?;
    }

    info!(
        source = %source.display(),
        target = %target.display(),
        sections_added = report.sections_added.len(),
        keys_inserted = report.inserted(),
        keys_updated = report.updated(),
        dry_run,
        "merged color scheme"
    );

    Ok(MergeOutcome::Merged(report))
}
