//! CLI parse: clap types for huesync. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Huesync CLI - propagate generated color-scheme values
#[derive(Parser)]
#[command(name = "huesync")]
#[command(about = "Propagate generated color-scheme values into desktop application settings")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Suppress all log output
    #[arg(long)]
    pub quiet: bool,

    /// Enable verbose logging (default: off)
    #[arg(long)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Merge the generated color scheme into the desktop configuration file
    Merge {
        /// Color-scheme file to merge from (default: generated scheme path)
        #[arg(long)]
        source: Option<PathBuf>,

        /// Configuration file to merge into (default: desktop global config)
        #[arg(long)]
        target: Option<PathBuf>,

        /// Report what would change without writing
        #[arg(long)]
        dry_run: bool,
    },
    /// Push the accent color into the shell plugin settings
    Accent {
        /// Color literal (R,G,B or #RRGGBB) overriding the scheme file
        #[arg(long)]
        color: Option<String>,

        /// Color-scheme file to read the accent from
        #[arg(long)]
        colors_file: Option<PathBuf>,

        /// Border opacity (0.0-1.0)
        #[arg(long)]
        alpha: Option<f64>,

        /// Report what would change without writing
        #[arg(long)]
        dry_run: bool,
    },
    /// Show resolved paths and source document summary
    Status {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}
