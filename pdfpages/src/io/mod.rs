//! PDF input/output operations.
//!
//! Loading goes through [`PdfReader`], saving through [`PdfWriter`]. Both
//! are synchronous; a command holds at most two documents at a time.

pub mod reader;
pub mod writer;

pub use reader::{LoadedPdf, PdfReader};
pub use writer::{PdfWriter, WriteOptions, WriteStatistics};
