//! Error types for pdfpages.
//!
//! Every failure a command can hit is a variant of [`PdfPagesError`]. Errors
//! are raised where they are detected and never retried; the CLI maps each
//! one to a process exit code through [`PdfPagesError::exit_code`].
//!
//! # Error Categories
//!
//! - **Argument Errors**: malformed page tokens, too few arguments, wrong file type
//! - **File Errors**: missing inputs, unreadable or encrypted PDFs
//! - **Range Errors**: pages or insertion points beyond the document bounds
//! - **Write Errors**: output files that cannot be created or written

use std::io;
use std::path::PathBuf;

/// Result type alias for pdfpages operations.
pub type Result<T> = std::result::Result<T, PdfPagesError>;

/// Main error type for pdfpages operations.
#[derive(Debug, thiserror::Error)]
pub enum PdfPagesError {
    /// Path does not reference an existing file.
    #[error("File not found: {}", path.display())]
    FileNotFound {
        /// Path that was checked.
        path: PathBuf,
    },

    /// File exists but its extension does not match the required type.
    #[error("{} is not the expected filetype ({expected})", path.display())]
    InvalidFileType {
        /// Path that was checked.
        path: PathBuf,
        /// Required extension, without the leading dot.
        expected: String,
    },

    /// A page or page-range token is malformed.
    #[error("Invalid argument. {token} is not a valid page/page range")]
    InvalidPageInput {
        /// Token exactly as supplied by the user.
        token: String,
    },

    /// Fewer positional arguments than the command requires.
    #[error("{command} expects at least {minimum} arguments, got {supplied}")]
    InsufficientArguments {
        /// Name of the invoked command.
        command: String,
        /// Declared minimum.
        minimum: usize,
        /// Number of arguments actually supplied.
        supplied: usize,
    },

    /// A page index or insertion point lies outside the document.
    #[error(
        "Page {requested} is out of range for {}\n  PDF has {page_count} page(s)",
        path.display()
    )]
    PageRangeExceeded {
        /// Document the request was checked against.
        path: PathBuf,
        /// Offending 1-based page number or insertion point.
        requested: usize,
        /// Page count of the document.
        page_count: usize,
    },

    /// Failed to load PDF file.
    #[error("Failed to load PDF: {}\n  Reason: {reason}", path.display())]
    FailedToLoadPdf {
        /// Path to the PDF file.
        path: PathBuf,
        /// Reason for the failure.
        reason: String,
    },

    /// PDF file is encrypted and cannot be processed.
    #[error(
        "PDF is encrypted and cannot be processed: {}\n  \
         Hint: Decrypt the PDF first using 'qpdf --decrypt' or similar tools",
        path.display()
    )]
    EncryptedPdf {
        /// Path to the encrypted PDF.
        path: PathBuf,
    },

    /// The page tree of a document could not be read or rewritten.
    #[error("Malformed PDF structure: {reason}")]
    MalformedDocument {
        /// Description of what went wrong.
        reason: String,
    },

    /// Failed to create output file.
    #[error("Failed to create output file: {}\n  Reason: {source}", path.display())]
    FailedToCreateOutput {
        /// Path where output should be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to write to output file.
    #[error("Failed to write to output file: {}\n  Reason: {source}", path.display())]
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A handler received arguments for a different command.
    #[error("Arguments do not belong to the '{command}' command")]
    ArgumentMismatch {
        /// Command whose handler was invoked.
        command: String,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong with the configuration.
        message: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error.
        #[from]
        source: io::Error,
    },

    /// Generic error with a custom message.
    #[error("{message}")]
    Other {
        /// Error message.
        message: String,
    },
}

impl From<lopdf::Error> for PdfPagesError {
    fn from(err: lopdf::Error) -> Self {
        Self::malformed(err.to_string())
    }
}

impl From<anyhow::Error> for PdfPagesError {
    fn from(err: anyhow::Error) -> Self {
        Self::invalid_config(err.to_string())
    }
}

impl PdfPagesError {
    /// Create a FileNotFound error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create an InvalidFileType error.
    pub fn invalid_file_type(path: impl Into<PathBuf>, expected: impl Into<String>) -> Self {
        Self::InvalidFileType {
            path: path.into(),
            expected: expected.into(),
        }
    }

    /// Create an InvalidPageInput error.
    pub fn invalid_page_input(token: impl Into<String>) -> Self {
        Self::InvalidPageInput {
            token: token.into(),
        }
    }

    /// Create an InsufficientArguments error.
    pub fn insufficient_arguments(command: impl Into<String>, minimum: usize, supplied: usize) -> Self {
        Self::InsufficientArguments {
            command: command.into(),
            minimum,
            supplied,
        }
    }

    /// Create a PageRangeExceeded error.
    pub fn page_range_exceeded(path: impl Into<PathBuf>, requested: usize, page_count: usize) -> Self {
        Self::PageRangeExceeded {
            path: path.into(),
            requested,
            page_count,
        }
    }

    /// Create a FailedToLoadPdf error.
    pub fn failed_to_load_pdf(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::FailedToLoadPdf {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an EncryptedPdf error.
    pub fn encrypted_pdf(path: impl Into<PathBuf>) -> Self {
        Self::EncryptedPdf { path: path.into() }
    }

    /// Create a MalformedDocument error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedDocument {
            reason: reason.into(),
        }
    }

    /// Create an ArgumentMismatch error.
    pub fn argument_mismatch(command: impl Into<String>) -> Self {
        Self::ArgumentMismatch {
            command: command.into(),
        }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an Other error with a custom message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidFileType { .. } => 1,
            Self::InvalidPageInput { .. } => 1,
            Self::InsufficientArguments { .. } => 1,
            Self::ArgumentMismatch { .. } => 1,
            Self::InvalidConfig { .. } => 1,
            Self::Other { .. } => 1,
            Self::FileNotFound { .. } => 2,
            Self::FailedToLoadPdf { .. } => 3,
            Self::EncryptedPdf { .. } => 3,
            Self::PageRangeExceeded { .. } => 4,
            Self::FailedToCreateOutput { .. } => 5,
            Self::FailedToWrite { .. } => 5,
            Self::Io { .. } => 5,
            Self::MalformedDocument { .. } => 6,
        }
    }
}
