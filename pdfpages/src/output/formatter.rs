//! Status lines for the terminal.
//!
//! Quiet mode hides everything except errors, verbose mode adds per-document
//! details. Errors go to stderr, everything else to stdout. Colour is used
//! only when the stream is a terminal.
//!
//! # Examples
//!
//! ```
//! use pdfpages::output::formatter::OutputFormatter;
//!
//! let formatter = OutputFormatter::new(false, true);
//! formatter.success("split: wrote 2 documents");
//! formatter.list_item(1, "120000_01012024_page_1.pdf");
//! formatter.detail("Pages", "1");
//! ```

use std::io::{self, IsTerminal};

use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Info,
    Success,
    Error,
}

impl Status {
    fn prefix(self) -> &'static str {
        match self {
            Self::Info | Self::Error => "",
            Self::Success => "✓ ",
        }
    }

    fn color(self) -> Option<&'static str> {
        match self {
            Self::Info => None,
            Self::Success => Some("\x1b[32m"),
            Self::Error => Some("\x1b[31m"),
        }
    }
}

/// Prints command status honouring quiet and verbose modes.
#[derive(Debug, Clone)]
pub struct OutputFormatter {
    quiet: bool,
    verbose: bool,
}

impl OutputFormatter {
    /// Create a formatter.
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self { quiet, verbose }
    }

    /// Create a formatter from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.quiet, config.verbose)
    }

    /// Print an informational line. Suppressed in quiet mode.
    pub fn info(&self, message: &str) {
        if !self.quiet {
            println!("{}", render(Status::Info, message, stdout_colored()));
        }
    }

    /// Print a success line. Suppressed in quiet mode.
    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{}", render(Status::Success, message, stdout_colored()));
        }
    }

    /// Print an error line to stderr, even in quiet mode.
    pub fn error(&self, message: &str) {
        let colored = io::stderr().is_terminal() && std::env::var_os("TERM").is_some();
        eprintln!("{}", render(Status::Error, message, colored));
    }

    /// Print a `label: value` detail. Verbose mode only.
    pub fn detail(&self, label: &str, value: &str) {
        if self.verbose {
            println!("  {label}: {value}");
        }
    }

    /// Print a numbered list item. Suppressed in quiet mode.
    pub fn list_item(&self, index: usize, message: &str) {
        if !self.quiet {
            println!("  {index}. {message}");
        }
    }
}

fn stdout_colored() -> bool {
    io::stdout().is_terminal() && std::env::var_os("TERM").is_some()
}

fn render(status: Status, message: &str, colored: bool) -> String {
    match status.color() {
        Some(color) if colored => format!("{color}{}{message}\x1b[0m", status.prefix()),
        _ => format!("{}{message}", status.prefix()),
    }
}
