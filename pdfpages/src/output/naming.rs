//! Output file naming.
//!
//! Every document a command produces lands in the output directory under a
//! timestamped name, `HHMMSS_DDMMYYYY<suffix>.pdf`, in local time. Two names
//! produced within the same second get `_1`, `_2`, ... appended so no
//! earlier output is overwritten.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use pdfpages::output::naming::OutputNamer;
//!
//! let namer = OutputNamer::new("/tmp");
//! let at = NaiveDate::from_ymd_opt(2024, 3, 7)
//!     .unwrap()
//!     .and_hms_opt(9, 5, 2)
//!     .unwrap();
//! assert_eq!(
//!     namer.path_at(at, "_page_2-4"),
//!     std::path::PathBuf::from("/tmp/090502_07032024_page_2-4.pdf")
//! );
//! ```

use chrono::{Local, NaiveDateTime};
use std::collections::HashSet;
use std::path::PathBuf;

/// `strftime` pattern of the timestamp part of a name.
const TIMESTAMP_FORMAT: &str = "%H%M%S_%d%m%Y";

/// Issues output paths inside one directory.
#[derive(Debug, Clone)]
pub struct OutputNamer {
    dir: PathBuf,
    issued: HashSet<PathBuf>,
}

impl OutputNamer {
    /// Create a namer for `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            issued: HashSet::new(),
        }
    }

    /// The undisambiguated name for `timestamp` and `suffix`.
    pub fn path_at(&self, timestamp: NaiveDateTime, suffix: &str) -> PathBuf {
        self.dir
            .join(format!("{}{suffix}.pdf", timestamp.format(TIMESTAMP_FORMAT)))
    }

    /// Issue a fresh path for the current local time.
    pub fn next_path(&mut self, suffix: &str) -> PathBuf {
        self.next_path_at(Local::now().naive_local(), suffix)
    }

    /// Issue a fresh path for `timestamp`.
    ///
    /// A candidate is taken if it neither exists on disk nor was issued
    /// earlier by this namer.
    pub fn next_path_at(&mut self, timestamp: NaiveDateTime, suffix: &str) -> PathBuf {
        let base = self.path_at(timestamp, suffix);
        let mut candidate = base.clone();
        let mut n = 0usize;

        while candidate.exists() || self.issued.contains(&candidate) {
            n += 1;
            candidate = self.dir.join(format!(
                "{}{suffix}_{n}.pdf",
                timestamp.format(TIMESTAMP_FORMAT)
            ));
        }

        if n > 0 {
            log::debug!(
                "{} already taken, using {}",
                base.display(),
                candidate.display()
            );
        }

        self.issued.insert(candidate.clone());
        candidate
    }
}
