//! Error types for the huesync color propagation tool.

use std::path::PathBuf;
use thiserror::Error;

/// Line-level parse errors for sectioned key-value documents.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line_no}: unrecognized line: {line:?}")]
    UnrecognizedLine { line_no: usize, line: String },

    #[error("line {line_no}: section header has an empty name")]
    EmptySectionName { line_no: usize },

    #[error("line {line_no}: duplicate section [{name}]")]
    DuplicateSection { line_no: usize, name: String },

    #[error("line {line_no}: duplicate key {key:?} in section [{section}]")]
    DuplicateKey {
        line_no: usize,
        section: String,
        key: String,
    },

    #[error("line {line_no}: key assignment before any section header: {line:?}")]
    KeyOutsideSection { line_no: usize, line: String },
}

/// Document-level errors carrying the file the operation touched.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Merge operation errors
#[derive(Debug, Error)]
pub enum MergeError {
    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Accent push errors
#[derive(Debug, Error)]
pub enum AccentError {
    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error("invalid color literal {0:?} (expected R,G,B or #RRGGBB)")]
    ColorParse(String),

    #[error("no [General] AccentColor entry in {path}")]
    MissingAccentKey { path: PathBuf },

    #[error("settings schema {0:?} not found; is the plugin installed?")]
    SchemaMissing(String),

    #[error("malformed settings value: {0}")]
    MalformedValue(String),

    #[error("settings backend command {command:?} failed: {message}")]
    Backend { command: String, message: String },
}

/// Top-level errors surfaced at the CLI boundary
#[derive(Debug, Error)]
pub enum HuesyncError {
    #[error(transparent)]
    Merge(#[from] MergeError),

    #[error(transparent)]
    Accent(#[from] AccentError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for HuesyncError {
    fn from(err: config::ConfigError) -> Self {
        HuesyncError::Config(err.to_string())
    }
}
