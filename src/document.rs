//! Sectioned key-value documents
//!
//! Parser and serializer for the INI-like dialect used by desktop
//! configuration files: `[Section]` headers followed by `Key=Value` lines.
//! Keys are case-sensitive, values are opaque strings (no `%` or `${}`
//! interpolation), and the delimiter spacing of each assignment is recorded
//! so untouched lines round-trip byte-for-byte. Comments and blank lines are
//! kept in place for the same reason.

use crate::error::{DocumentError, ParseError};
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Delimiter spacing of an assignment line, preserved on write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DelimiterStyle {
    /// `Key=Value`
    Tight,
    /// `Key = Value`
    Spaced,
}

/// One line inside a section body (or the document preamble).
#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    Entry {
        key: String,
        value: String,
        style: DelimiterStyle,
    },
    /// Raw comment line including its `#`/`;` marker.
    Comment(String),
    Blank,
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Entry {
                key,
                value,
                style: DelimiterStyle::Tight,
            } => writeln!(f, "{}={}", key, value),
            Line::Entry {
                key,
                value,
                style: DelimiterStyle::Spaced,
            } => writeln!(f, "{} = {}", key, value),
            Line::Comment(text) => writeln!(f, "{}", text),
            Line::Blank => writeln!(f),
        }
    }
}

/// A named group of ordered key-value pairs.
///
/// Keys are unique within a section and their case is preserved exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    lines: Vec<Line>,
}

impl Section {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: Vec::new(),
        }
    }

    /// Section name as written in the header, without brackets.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.lines.iter().find_map(|line| match line {
            Line::Entry { key: k, value, .. } if k == key => Some(value.as_str()),
            _ => None,
        })
    }

    /// Insert or overwrite `key`. Overwriting keeps the entry's position and
    /// delimiter style; a new key is appended after the last existing entry.
    pub fn set(&mut self, key: &str, value: &str) {
        for line in &mut self.lines {
            if let Line::Entry { key: k, value: v, .. } = line {
                if k == key {
                    *v = value.to_string();
                    return;
                }
            }
        }
        let at = self
            .lines
            .iter()
            .rposition(|line| matches!(line, Line::Entry { .. }))
            .map(|i| i + 1)
            .unwrap_or(self.lines.len());
        self.lines.insert(
            at,
            Line::Entry {
                key: key.to_string(),
                value: value.to_string(),
                style: DelimiterStyle::Tight,
            },
        );
    }

    /// Key-value pairs in document order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.lines.iter().filter_map(|line| match line {
            Line::Entry { key, value, .. } => Some((key.as_str(), value.as_str())),
            _ => None,
        })
    }

    /// Number of key-value entries (comments and blanks excluded).
    pub fn len(&self) -> usize {
        self.entries().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An ordered set of named sections, plus any preamble lines that appear
/// before the first section header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDocument {
    preamble: Vec<Line>,
    sections: Vec<Section>,
}

impl ConfigDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a document. Parsing is strict: every line must be a section
    /// header, an assignment, a comment (`#` or `;`), or blank.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut doc = ConfigDocument::new();
        let mut current: Option<usize> = None;

        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let raw = raw.trim_end_matches('\r');
            let trimmed = raw.trim();

            let line = if trimmed.is_empty() {
                Line::Blank
            } else if trimmed.starts_with('#') || trimmed.starts_with(';') {
                Line::Comment(raw.to_string())
            } else if let Some(name) = parse_header(trimmed) {
                if name.is_empty() {
                    return Err(ParseError::EmptySectionName { line_no });
                }
                if doc.section(name).is_some() {
                    return Err(ParseError::DuplicateSection {
                        line_no,
                        name: name.to_string(),
                    });
                }
                doc.sections.push(Section::new(name));
                current = Some(doc.sections.len() - 1);
                continue;
            } else if let Some((key, value, style)) = parse_assignment(raw) {
                let section_idx = match current {
                    Some(i) => i,
                    None => {
                        return Err(ParseError::KeyOutsideSection {
                            line_no,
                            line: raw.to_string(),
                        })
                    }
                };
                if doc.sections[section_idx].get(&key).is_some() {
                    return Err(ParseError::DuplicateKey {
                        line_no,
                        section: doc.sections[section_idx].name.clone(),
                        key,
                    });
                }
                Line::Entry { key, value, style }
            } else {
                return Err(ParseError::UnrecognizedLine {
                    line_no,
                    line: raw.to_string(),
                });
            };

            match current {
                Some(i) => doc.sections[i].lines.push(line),
                None => doc.preamble.push(line),
            }
        }

        Ok(doc)
    }

    /// Read and parse the document at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| DocumentError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&text).map_err(|e| DocumentError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Serialize to `path` via atomic replace: the content is written and
    /// synced to a sibling temp file which is then renamed over the target,
    /// so a crash mid-write leaves the old file intact.
    pub fn write_atomic(&self, path: impl AsRef<Path>) -> Result<(), DocumentError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| DocumentError::Write {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut tmp_name = path.as_os_str().to_os_string();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        let write_tmp = || -> std::io::Result<()> {
            let mut file = fs::File::create(&tmp_path)?;
            file.write_all(self.to_string().as_bytes())?;
            file.sync_all()
        };
        write_tmp().map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            DocumentError::Write {
                path: tmp_path.clone(),
                source: e,
            }
        })?;

        fs::rename(&tmp_path, path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            DocumentError::Write {
                path: path.to_path_buf(),
                source: e,
            }
        })
    }

    /// Section named `name`, if present.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.name == name)
    }

    /// Section named `name`, created (appended at the end of the section
    /// order) if absent.
    pub fn ensure_section(&mut self, name: &str) -> &mut Section {
        if let Some(i) = self.sections.iter().position(|s| s.name == name) {
            return &mut self.sections[i];
        }
        self.sections.push(Section::new(name));
        self.sections.last_mut().unwrap()
    }

    /// Sections in document order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Value of `key` in `section`, if both exist.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section).and_then(|s| s.get(key))
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty() && self.preamble.is_empty()
    }
}

impl fmt::Display for ConfigDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.preamble {
            write!(f, "{}", line)?;
        }
        for section in &self.sections {
            writeln!(f, "[{}]", section.name)?;
            for line in &section.lines {
                write!(f, "{}", line)?;
            }
        }
        Ok(())
    }
}

fn parse_header(trimmed: &str) -> Option<&str> {
    trimmed.strip_prefix('[')?.strip_suffix(']')
}

fn parse_assignment(raw: &str) -> Option<(String, String, DelimiterStyle)> {
    let eq = raw.find('=')?;
    let (key_part, rest) = raw.split_at(eq);
    let value_part = &rest[1..];

    let key = key_part.trim();
    if key.is_empty() {
        return None;
    }

    let style = if key_part.ends_with(' ') || value_part.starts_with(' ') {
        DelimiterStyle::Spaced
    } else {
        DelimiterStyle::Tight
    };

    Some((key.to_string(), value_part.trim().to_string(), style))
}
