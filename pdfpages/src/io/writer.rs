//! PDF writing and saving operations.
//!
//! This module provides safe PDF writing with:
//! - Atomic writes (write to temp file, then rename)
//! - Pruning of objects no page tree references any more
//! - Compression support
//! - Write statistics
//!
//! # Examples
//!
//! ```no_run
//! use pdfpages::io::writer::PdfWriter;
//! use lopdf::Document;
//! use std::path::Path;
//!
//! # fn example(doc: Document) -> pdfpages::Result<()> {
//! let writer = PdfWriter::new();
//! let stats = writer.save(doc, Path::new("output.pdf"))?;
//! println!("Wrote {} in {:?}", stats.format_file_size(), stats.write_time);
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::config::CompressionLevel;
use crate::error::{PdfPagesError, Result};

/// Options for writing PDF files.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Use atomic writes (write to temp file, then rename).
    pub atomic: bool,

    /// How hard to compress streams before writing.
    pub compression: CompressionLevel,

    /// Buffer size for writing (in bytes).
    pub buffer_size: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            atomic: true,
            compression: CompressionLevel::Standard,
            buffer_size: 8192,
        }
    }
}

/// Statistics about a write operation.
#[derive(Debug, Clone)]
pub struct WriteStatistics {
    /// Time taken to write the file.
    pub write_time: Duration,

    /// Size of the written file in bytes.
    pub file_size: u64,

    /// Path where the file was written.
    pub output_path: PathBuf,

    /// Number of objects dropped because nothing referenced them.
    pub pruned_objects: usize,

    /// Whether compression was applied.
    pub compressed: bool,
}

impl WriteStatistics {
    /// Format file size as human-readable string.
    pub fn format_file_size(&self) -> String {
        format_file_size(self.file_size)
    }
}

/// PDF writer with configurable behavior.
#[derive(Debug, Clone, Default)]
pub struct PdfWriter {
    options: WriteOptions,
}

impl PdfWriter {
    /// Create a new PDF writer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with custom options.
    pub fn with_options(options: WriteOptions) -> Self {
        Self { options }
    }

    /// Create a writer for the given compression level.
    pub fn from_compression(compression: CompressionLevel) -> Self {
        Self {
            options: WriteOptions {
                compression,
                ..Default::default()
            },
        }
    }

    /// Save a PDF document to a file and return statistics about the write.
    ///
    /// The document is consumed: unreachable objects are pruned, streams are
    /// compressed per the configured level, and objects are renumbered.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The output file cannot be created
    /// - Serialising or flushing the document fails
    /// - The temp file cannot be renamed into place
    pub fn save(&self, mut doc: Document, path: &Path) -> Result<WriteStatistics> {
        let start = Instant::now();

        let pruned_objects = doc.prune_objects().len();

        let compressed = match self.options.compression {
            CompressionLevel::None => false,
            CompressionLevel::Standard => {
                doc.compress();
                true
            }
            CompressionLevel::Maximum => {
                doc.compress();
                doc.delete_zero_length_streams();
                true
            }
        };

        doc.renumber_objects();

        let write_path = if self.options.atomic {
            temp_path(path)
        } else {
            path.to_path_buf()
        };

        let file = std::fs::File::create(&write_path).map_err(|e| {
            PdfPagesError::FailedToCreateOutput {
                path: write_path.clone(),
                source: e,
            }
        })?;

        let mut writer = std::io::BufWriter::with_capacity(self.options.buffer_size, file);

        doc.save_to(&mut writer)
            .map_err(|e| PdfPagesError::FailedToWrite {
                path: write_path.clone(),
                source: std::io::Error::other(e),
            })?;

        writer.flush().map_err(|e| PdfPagesError::FailedToWrite {
            path: write_path.clone(),
            source: e,
        })?;
        drop(writer);

        if self.options.atomic {
            std::fs::rename(&write_path, path).map_err(|e| {
                let _ = std::fs::remove_file(&write_path);
                PdfPagesError::FailedToWrite {
                    path: path.to_path_buf(),
                    source: e,
                }
            })?;
        }

        let write_time = start.elapsed();
        let file_size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);

        log::debug!(
            "saved {} ({}, {pruned_objects} object(s) pruned) in {write_time:?}",
            path.display(),
            format_file_size(file_size)
        );

        Ok(WriteStatistics {
            write_time,
            file_size,
            output_path: path.to_path_buf(),
            pruned_objects,
            compressed,
        })
    }

    /// Check that new documents can be created inside `dir`, without
    /// writing anything.
    ///
    /// # Errors
    ///
    /// Returns [`PdfPagesError::InvalidConfig`] if `dir` is missing or
    /// read-only.
    pub fn can_write(&self, dir: &Path) -> Result<()> {
        let metadata = std::fs::metadata(dir).map_err(|_| {
            PdfPagesError::invalid_config(format!(
                "Output directory does not exist: {}",
                dir.display()
            ))
        })?;

        if metadata.permissions().readonly() {
            return Err(PdfPagesError::invalid_config(format!(
                "Output directory is not writable: {}",
                dir.display()
            )));
        }

        Ok(())
    }
}

/// `<name>.tmp` next to the final file.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("output"));
    name.push(".tmp");
    path.with_file_name(name)
}

/// Format file size as human-readable string.
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{size} bytes")
    }
}
