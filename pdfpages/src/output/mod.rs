//! Output naming, formatting and reporting for pdfpages.
//!
//! This module handles everything a command produces besides the documents
//! themselves:
//! - Timestamped output paths ([`naming`])
//! - Formatted status messages ([`formatter`])
//! - Text and JSON outcome reports
//!
//! # Examples
//!
//! ```no_run
//! use pdfpages::output::{OutputFormatter, display_outcome};
//! use pdfpages::commands::{CommandArgs, execute};
//! use pdfpages::Config;
//!
//! # fn example(args: CommandArgs, config: Config) -> pdfpages::Result<()> {
//! let outcome = execute(&args, &config)?;
//! display_outcome(&OutputFormatter::from_config(&config), &outcome);
//! # Ok(())
//! # }
//! ```

pub mod formatter;
pub mod naming;

pub use formatter::OutputFormatter;
pub use naming::OutputNamer;

use crate::commands::CommandOutcome;
use crate::error::{PdfPagesError, Result};
use crate::io::writer::format_file_size;

/// Display a command outcome to the user.
pub fn display_outcome(formatter: &OutputFormatter, outcome: &CommandOutcome) {
    let count = outcome.documents.len();
    let noun = if count == 1 { "document" } else { "documents" };

    if outcome.dry_run {
        formatter.info(&format!(
            "Dry run: {} would write {count} {noun}",
            outcome.command
        ));
    } else {
        formatter.success(&format!("{}: wrote {count} {noun}", outcome.command));
    }

    for (index, doc) in outcome.documents.iter().enumerate() {
        formatter.list_item(index + 1, &doc.path.display().to_string());
        formatter.detail("Pages", &doc.page_count.to_string());
        if let Some(size) = doc.file_size {
            formatter.detail("Size", &format_file_size(size));
        }
    }
}

/// Render a command outcome as pretty-printed JSON.
pub fn render_json(outcome: &CommandOutcome) -> Result<String> {
    serde_json::to_string_pretty(outcome)
        .map_err(|e| PdfPagesError::other(format!("Failed to serialise report: {e}")))
}
