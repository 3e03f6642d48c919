//! pdfpages - Page-level operations on PDF files.
//!
//! This library merges, removes, inserts and splits pages of PDF documents.
//! Every command validates its arguments before any document is opened and
//! writes its results to fresh, timestamped files; inputs are never modified.
//!
//! - `merge`: concatenate documents in order
//! - `remove`: delete pages and page ranges
//! - `insert`: put one document's pages after a given page of another
//! - `split`: write one document per page or page range
//!
//! # Examples
//!
//! ## Running a command
//!
//! ```no_run
//! use pdfpages::commands::{CommandArgs, execute};
//! use pdfpages::Config;
//!
//! # fn example() -> pdfpages::Result<()> {
//! let args = CommandArgs::Split {
//!     src_pdf: "report.pdf".into(),
//!     pages: vec!["1".into(), "2-5".into()],
//! };
//!
//! let outcome = execute(&args, &Config::new("/tmp"))?;
//! for doc in &outcome.documents {
//!     println!("{} ({} pages)", doc.path.display(), doc.page_count);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Using Individual Components
//!
//! ```no_run
//! use pdfpages::document::PdfDocument;
//! use pdfpages::io::PdfWriter;
//! use pdfpages::pages::{PageIndexSet, parse_tokens};
//! use std::path::Path;
//!
//! # fn example() -> pdfpages::Result<()> {
//! let mut doc = PdfDocument::open(Path::new("input.pdf"))?;
//! doc.delete_pages(&PageIndexSet::from_tokens(&parse_tokens(["2", "4-6"])?))?;
//!
//! PdfWriter::new().save(doc.into_inner(), Path::new("output.pdf"))?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod commands;
pub mod config;
pub mod document;
pub mod error;
pub mod io;
pub mod output;
pub mod pages;
pub mod validation;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use commands::{CommandArgs, CommandKind, CommandOutcome, execute};
pub use config::Config;
pub use error::{PdfPagesError, Result};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
