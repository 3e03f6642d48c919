//! Page token parsing.
//!
//! Users address pages with tokens: a single 1-based page number (`"5"`) or an
//! inclusive range (`"3-7"`) whose start is strictly below its end. This module
//! turns tokens into the 0-based forms the document engine works with:
//!
//! - [`PageSpan`]: one `(start, end)` pair per token, used when every token
//!   produces its own document.
//! - [`PageIndexSet`]: the ascending, duplicate-free union of all tokens, used
//!   when pages are removed in a single pass.
//!
//! # Examples
//!
//! ```
//! use pdfpages::pages::{PageIndexSet, PageToken};
//!
//! let tokens = pdfpages::pages::parse_tokens(["4-6", "2", "5"]).unwrap();
//! let set = PageIndexSet::from_tokens(&tokens);
//! assert_eq!(set.to_vec(), vec![1, 3, 4, 5]);
//!
//! let token: PageToken = "3-4".parse().unwrap();
//! assert_eq!(token.span().len(), 2);
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{PdfPagesError, Result};

/// A parsed page token, in 1-based page numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageToken {
    /// A single page.
    Single(usize),
    /// An inclusive range with `start < end`.
    Range {
        /// First page of the range.
        start: usize,
        /// Last page of the range.
        end: usize,
    },
}

impl PageToken {
    /// Parse a token, rejecting anything outside the page grammar.
    ///
    /// # Errors
    ///
    /// Returns [`PdfPagesError::InvalidPageInput`] carrying the token when it
    /// is empty, non-numeric, zero, has more than one `-`, or describes a
    /// range whose start is not strictly below its end.
    pub fn parse(token: &str) -> Result<Self> {
        let invalid = || PdfPagesError::invalid_page_input(token);

        match token.split_once('-') {
            Some((start, end)) => {
                let start = parse_page_number(start).ok_or_else(invalid)?;
                let end = parse_page_number(end).ok_or_else(invalid)?;
                if start >= end {
                    return Err(invalid());
                }
                Ok(Self::Range { start, end })
            }
            None => parse_page_number(token)
                .map(Self::Single)
                .ok_or_else(invalid),
        }
    }

    /// First page covered by the token (1-based).
    pub fn first_page(&self) -> usize {
        match *self {
            Self::Single(page) => page,
            Self::Range { start, .. } => start,
        }
    }

    /// Last page covered by the token (1-based).
    pub fn last_page(&self) -> usize {
        match *self {
            Self::Single(page) => page,
            Self::Range { end, .. } => end,
        }
    }

    /// The 0-based inclusive span covered by the token.
    pub fn span(&self) -> PageSpan {
        PageSpan {
            start: self.first_page() - 1,
            end: self.last_page() - 1,
        }
    }
}

impl FromStr for PageToken {
    type Err = PdfPagesError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(page) => write!(f, "{page}"),
            Self::Range { start, end } => write!(f, "{start}-{end}"),
        }
    }
}

impl From<PageSpan> for PageToken {
    fn from(span: PageSpan) -> Self {
        if span.start == span.end {
            Self::Single(span.start + 1)
        } else {
            Self::Range {
                start: span.start + 1,
                end: span.end + 1,
            }
        }
    }
}

/// A 0-based inclusive page span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSpan {
    /// First page index.
    pub start: usize,
    /// Last page index (inclusive).
    pub end: usize,
}

impl PageSpan {
    /// Span covering the single page index `index`.
    pub fn single(index: usize) -> Self {
        Self {
            start: index,
            end: index,
        }
    }

    /// Number of pages in the span.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Spans always cover at least one page.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether every index of the span exists in a document of `page_count` pages.
    pub fn fits(&self, page_count: usize) -> bool {
        self.start <= self.end && self.end < page_count
    }
}

/// Ascending, duplicate-free set of 0-based page indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageIndexSet {
    indices: BTreeSet<usize>,
}

impl PageIndexSet {
    /// Union the pages of every token into one set.
    pub fn from_tokens(tokens: &[PageToken]) -> Self {
        let indices = tokens
            .iter()
            .flat_map(|token| {
                let span = token.span();
                span.start..=span.end
            })
            .collect();
        Self { indices }
    }

    /// Number of distinct indices.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the set holds no index.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Whether `index` is in the set.
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Highest index in the set.
    pub fn max(&self) -> Option<usize> {
        self.indices.last().copied()
    }

    /// Indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    /// Indices collected into a vector, ascending.
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl FromIterator<usize> for PageIndexSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            indices: iter.into_iter().collect(),
        }
    }
}

/// Parse every token, stopping at the first invalid one.
pub fn parse_tokens<I>(tokens: I) -> Result<Vec<PageToken>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|token| PageToken::parse(token.as_ref()))
        .collect()
}

/// Parse a positive decimal page number. Leading zeros are allowed.
fn parse_page_number(s: &str) -> Option<usize> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<usize>().ok().filter(|&page| page > 0)
}
