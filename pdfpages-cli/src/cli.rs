//! CLI argument parsing for pdfpages.
//!
//! This module defines the command-line interface structure using `clap`.
//! It is also compiled by the build script to render the man page, so it
//! only depends on the `pdfpages` library.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

use pdfpages::commands::CommandArgs;
use pdfpages::config::{CompressionLevel, Config, ReportFormat};
use pdfpages::error::Result;

/// Merge, remove, insert and split pages of PDF documents.
///
/// Every command writes new files named after the current local time
/// (HHMMSS_DDMMYYYY.pdf) and never modifies its inputs.
#[derive(Parser, Debug)]
#[command(name = "pdfpages")]
#[command(version)]
#[command(about = "Merge, remove, insert and split pages of PDF documents", long_about = None)]
#[command(author)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Directory to write output documents to
    ///
    /// Defaults to the current working directory.
    #[arg(short = 'd', long, global = true, value_name = "DIR", env = "PDFPAGES_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Dry run - validate arguments and plan outputs without writing files
    #[arg(short = 'n', long, global = true)]
    pub dry_run: bool,

    /// Verbose output - show page counts, file sizes and debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Compression level for output PDFs
    ///
    /// - none: No compression
    /// - standard: Compress content streams (default)
    /// - maximum: Compress and drop empty streams
    #[arg(short, long, global = true, value_name = "LEVEL", default_value = "standard")]
    #[arg(value_parser = ["none", "standard", "maximum"])]
    pub compression: String,

    /// Print the outcome as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Page operations.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Concatenate PDFs in the order given
    ///
    /// Example:
    ///   pdfpages merge a.pdf b.pdf c.pdf
    Merge {
        /// PDF files to merge (at least two)
        #[arg(required = true, value_name = "PDF")]
        pdfs: Vec<PathBuf>,
    },

    /// Remove pages and page ranges from a PDF
    ///
    /// Example:
    ///   pdfpages remove report.pdf 2 4-7 13
    Remove {
        /// Source PDF
        src_pdf: PathBuf,

        /// Pages ("5") or ranges ("3-7") to remove
        #[arg(required = true, value_name = "PAGES")]
        pages: Vec<String>,
    },

    /// Insert every page of one PDF after a page of another
    ///
    /// Page 0 inserts before the first page.
    ///
    /// Example:
    ///   pdfpages insert report.pdf appendix.pdf 14
    Insert {
        /// PDF receiving the pages
        src_pdf: PathBuf,

        /// PDF whose pages are inserted
        ins_pdf: PathBuf,

        /// Page after which to insert
        page: usize,
    },

    /// Write one new PDF per page or page range
    ///
    /// Example:
    ///   pdfpages split report.pdf 1 2-5 6-9
    Split {
        /// Source PDF
        src_pdf: PathBuf,

        /// Pages ("5") or ranges ("3-7"), one output each
        #[arg(required = true, value_name = "PAGES")]
        pages: Vec<String>,
    },
}

impl Cli {
    /// Convert CLI arguments into a Config. `execute` validates it.
    ///
    /// # Errors
    ///
    /// Returns an error if the compression level is invalid or the current
    /// directory cannot be determined.
    pub fn to_config(&self) -> Result<Config> {
        let compression = CompressionLevel::from_str(&self.compression)?;

        let output_dir = match &self.output_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };

        Ok(Config {
            output_dir,
            dry_run: self.dry_run,
            verbose: self.verbose,
            quiet: self.quiet,
            compression,
            format: if self.json {
                ReportFormat::Json
            } else {
                ReportFormat::Text
            },
        })
    }

    /// Arguments of the selected command.
    pub fn to_args(&self) -> CommandArgs {
        match self.command.clone() {
            Command::Merge { pdfs } => CommandArgs::Merge { pdfs },
            Command::Remove { src_pdf, pages } => CommandArgs::Remove { src_pdf, pages },
            Command::Insert {
                src_pdf,
                ins_pdf,
                page,
            } => CommandArgs::Insert {
                src_pdf,
                ins_pdf,
                page,
            },
            Command::Split { src_pdf, pages } => CommandArgs::Split { src_pdf, pages },
        }
    }
}
