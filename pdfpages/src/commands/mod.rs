//! Page operations.
//!
//! A command is looked up in the [`registry`], its arguments are validated,
//! and its handler runs one open → transform → write sequence. Nothing is
//! opened before every argument has passed validation.
//!
//! # Examples
//!
//! ```no_run
//! use pdfpages::commands::{CommandArgs, execute};
//! use pdfpages::Config;
//!
//! # fn example() -> pdfpages::Result<()> {
//! let args = CommandArgs::Remove {
//!     src_pdf: "report.pdf".into(),
//!     pages: vec!["2".into(), "4-7".into()],
//! };
//! let outcome = execute(&args, &Config::default())?;
//! println!("wrote {}", outcome.documents[0].path.display());
//! # Ok(())
//! # }
//! ```

mod insert;
mod merge;
pub mod registry;
mod remove;
mod split;

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::config::Config;
use crate::document::PdfDocument;
use crate::error::{PdfPagesError, Result};
use crate::io::PdfWriter;
use crate::output::naming::OutputNamer;
use crate::validation::validate_arguments;
use registry::CommandSpec;

/// The available commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandKind {
    /// Concatenate documents.
    Merge,
    /// Delete pages.
    Remove,
    /// Insert one document into another.
    Insert,
    /// Extract page spans into separate documents.
    Split,
}

impl CommandKind {
    /// Every command, in registry order.
    pub const ALL: [CommandKind; 4] = [Self::Merge, Self::Remove, Self::Insert, Self::Split];

    /// Name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Merge => "merge",
            Self::Remove => "remove",
            Self::Insert => "insert",
            Self::Split => "split",
        }
    }
}

impl FromStr for CommandKind {
    type Err = PdfPagesError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| PdfPagesError::other(format!("Unknown command: {s}")))
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parsed arguments of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandArgs {
    /// `merge <pdfs>...`
    Merge {
        /// Documents in output order.
        pdfs: Vec<PathBuf>,
    },
    /// `remove <src_pdf> <pages>...`
    Remove {
        /// Source document.
        src_pdf: PathBuf,
        /// Page tokens to delete.
        pages: Vec<String>,
    },
    /// `insert <src_pdf> <ins_pdf> <page>`
    Insert {
        /// Document receiving the pages.
        src_pdf: PathBuf,
        /// Document whose pages are inserted.
        ins_pdf: PathBuf,
        /// 1-based page after which to insert. `0` inserts at the front.
        page: usize,
    },
    /// `split <src_pdf> <pages>...`
    Split {
        /// Source document.
        src_pdf: PathBuf,
        /// One page token per output document.
        pages: Vec<String>,
    },
}

impl CommandArgs {
    /// Command these arguments belong to.
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::Merge { .. } => CommandKind::Merge,
            Self::Remove { .. } => CommandKind::Remove,
            Self::Insert { .. } => CommandKind::Insert,
            Self::Split { .. } => CommandKind::Split,
        }
    }

    /// Number of positional tokens the user supplied.
    pub fn supplied_count(&self) -> usize {
        match self {
            Self::Merge { pdfs } => pdfs.len(),
            Self::Remove { pages, .. } | Self::Split { pages, .. } => 1 + pages.len(),
            Self::Insert { .. } => 3,
        }
    }

    /// Look up an argument by its registry name.
    pub fn argument(&self, name: &str) -> Option<ArgValue<'_>> {
        let value = match (self, name) {
            (Self::Merge { pdfs }, "pdfs") => {
                ArgValue::Multiple(pdfs.iter().map(|p| Arg::Path(p)).collect())
            }
            (
                Self::Remove { src_pdf, .. }
                | Self::Insert { src_pdf, .. }
                | Self::Split { src_pdf, .. },
                "src_pdf",
            ) => ArgValue::Single(Arg::Path(src_pdf)),
            (Self::Remove { pages, .. } | Self::Split { pages, .. }, "pages") => {
                ArgValue::Multiple(pages.iter().map(|p| Arg::Text(p)).collect())
            }
            (Self::Insert { ins_pdf, .. }, "ins_pdf") => ArgValue::Single(Arg::Path(ins_pdf)),
            (Self::Insert { page, .. }, "page") => ArgValue::Single(Arg::Number(*page)),
            _ => return None,
        };
        Some(value)
    }
}

/// One argument element as seen by a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg<'a> {
    /// A file path.
    Path(&'a Path),
    /// Free text, such as a page token.
    Text(&'a str),
    /// An integer.
    Number(usize),
}

/// A named argument: one element or a list of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue<'a> {
    /// A single value.
    Single(Arg<'a>),
    /// A variadic argument.
    Multiple(Vec<Arg<'a>>),
}

/// A document produced by a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputDocument {
    /// Where the document was (or, in a dry run, would be) written.
    pub path: PathBuf,
    /// Pages in the document.
    pub page_count: usize,
    /// Size on disk. `None` in a dry run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
}

/// Result of running one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandOutcome {
    /// Command that ran.
    pub command: CommandKind,
    /// Whether writing was skipped.
    pub dry_run: bool,
    /// Output documents in the order they were produced.
    pub documents: Vec<OutputDocument>,
}

/// What a handler needs besides its arguments.
#[derive(Debug)]
pub struct CommandContext {
    config: Config,
    namer: OutputNamer,
    writer: PdfWriter,
}

impl CommandContext {
    /// Context writing to `config.output_dir`.
    pub fn new(config: &Config) -> Self {
        Self {
            namer: OutputNamer::new(&config.output_dir),
            writer: PdfWriter::from_compression(config.compression),
            config: config.clone(),
        }
    }

    /// Name `doc` with `suffix` and save it, unless this is a dry run.
    ///
    /// The document handle is consumed either way.
    pub fn write(&mut self, doc: PdfDocument, suffix: &str) -> Result<OutputDocument> {
        let path = self.namer.next_path(suffix);
        let page_count = doc.page_count();

        if self.config.dry_run {
            log::info!(
                "dry run: would write {page_count} page(s) to {}",
                path.display()
            );
            return Ok(OutputDocument {
                path,
                page_count,
                file_size: None,
            });
        }

        let stats = self.writer.save(doc.into_inner(), &path)?;

        Ok(OutputDocument {
            path: stats.output_path,
            page_count,
            file_size: Some(stats.file_size),
        })
    }
}

/// Validate `args` and run the matching command.
///
/// # Errors
///
/// Returns the first validation failure, or the error of the step that
/// failed. Outputs already written by an earlier step stay on disk.
pub fn execute(args: &CommandArgs, config: &Config) -> Result<CommandOutcome> {
    config.validate()?;

    let spec = CommandSpec::lookup(args.kind());
    validate_arguments(spec, args)?;

    let mut context = CommandContext::new(config);
    if !config.dry_run {
        context.writer.can_write(&config.output_dir)?;
    }
    let documents = (spec.handler)(args, &mut context)?;

    log::info!(
        "{} finished: {} document(s){}",
        spec.name,
        documents.len(),
        if config.dry_run { " (dry run)" } else { "" }
    );

    Ok(CommandOutcome {
        command: spec.kind,
        dry_run: config.dry_run,
        documents,
    })
}
