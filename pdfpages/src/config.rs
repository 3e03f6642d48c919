//! Configuration module for pdfpages.
//!
//! The CLI turns its parsed arguments into a [`Config`] that every command
//! handler reads. It covers where output documents go, whether they are
//! written at all, how they are compressed and how the outcome is reported.

use anyhow::{Result, bail};
use serde::Serialize;
use std::{path::PathBuf, str::FromStr};

use crate::PdfPagesError;

/// Compression level for output PDFs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionLevel {
    /// No compression - streams are written as they are.
    None,
    /// Compress content streams.
    #[default]
    Standard,
    /// Compress and drop empty streams.
    Maximum,
}

impl FromStr for CompressionLevel {
    type Err = PdfPagesError;

    /// Parse compression level from string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string doesn't match a valid compression level.
    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "standard" => Ok(Self::Standard),
            "maximum" => Ok(Self::Maximum),
            _ => Err(PdfPagesError::invalid_config(format!(
                "Invalid compression level: {s}. Must be one of: none, standard, maximum"
            ))),
        }
    }
}

/// How a finished command reports its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Human-readable status lines.
    #[default]
    Text,
    /// A single JSON document on stdout.
    Json,
}

/// Configuration shared by all commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory output documents are written to.
    pub output_dir: PathBuf,

    /// Dry run mode - validate and plan without writing files.
    pub dry_run: bool,

    /// Verbose output mode.
    pub verbose: bool,

    /// Quiet mode - suppress non-error output.
    pub quiet: bool,

    /// Compression level for output.
    pub compression: CompressionLevel,

    /// Report format.
    pub format: ReportFormat,
}

impl Config {
    /// Configuration writing to `output_dir` with every other option at its
    /// default.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            dry_run: false,
            verbose: false,
            quiet: false,
            compression: CompressionLevel::default(),
            format: ReportFormat::default(),
        }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Verbose and quiet modes are both enabled
    /// - The output directory does not exist or is not a directory
    pub fn validate(&self) -> Result<()> {
        if self.verbose && self.quiet {
            bail!("Cannot use both --verbose and --quiet");
        }

        if !self.output_dir.exists() {
            bail!(
                "Output directory does not exist: {}",
                self.output_dir.display()
            );
        }

        if !self.output_dir.is_dir() {
            bail!(
                "Output directory is not a directory: {}",
                self.output_dir.display()
            );
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }
}
