//! In-memory PDF documents.
//!
//! [`PdfDocument`] is the handle every command works with. It covers exactly
//! what the commands need from the PDF layer: open a file, start an empty
//! document, count pages, copy pages in from another document, delete pages,
//! and hand the result to [`PdfWriter`](crate::io::PdfWriter). A handle is
//! closed when it is dropped.
//!
//! # Examples
//!
//! ```no_run
//! use pdfpages::document::PdfDocument;
//! use std::path::Path;
//!
//! # fn example() -> pdfpages::Result<()> {
//! let mut base = PdfDocument::open(Path::new("a.pdf"))?;
//! let extra = PdfDocument::open(Path::new("b.pdf"))?;
//! let at = base.page_count();
//! base.insert_document(&extra, at)?;
//! # Ok(())
//! # }
//! ```

mod tree;

use lopdf::{Document, Object, ObjectId, dictionary};
use std::path::{Path, PathBuf};

use crate::error::{PdfPagesError, Result};
use crate::io::{LoadedPdf, PdfReader};
use crate::pages::{PageIndexSet, PageSpan};

/// PDF version of documents created from scratch.
const NEW_DOCUMENT_VERSION: &str = "1.7";

/// An open PDF document.
#[derive(Debug, Clone)]
pub struct PdfDocument {
    inner: Document,
    source: PathBuf,
}

impl PdfDocument {
    /// Open a PDF from disk.
    ///
    /// # Errors
    ///
    /// Returns [`PdfPagesError::FailedToLoadPdf`] or
    /// [`PdfPagesError::EncryptedPdf`] if lopdf cannot load the file.
    pub fn open(path: &Path) -> Result<Self> {
        PdfReader::new().load(path).map(Self::from)
    }

    /// Create a document with a catalog and an empty page tree.
    pub fn empty() -> Self {
        let mut doc = Document::with_version(NEW_DOCUMENT_VERSION);
        let pages_id = doc.new_object_id();

        doc.objects.insert(
            pages_id,
            dictionary! {
                "Type" => "Pages",
                "Kids" => Vec::<Object>::new(),
                "Count" => 0,
            }
            .into(),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        Self {
            inner: doc,
            source: PathBuf::from("<new document>"),
        }
    }

    /// Wrap an already loaded lopdf document.
    pub fn from_document(document: Document, source: impl Into<PathBuf>) -> Self {
        Self {
            inner: document,
            source: source.into(),
        }
    }

    /// Path the document was opened from.
    pub fn path(&self) -> &Path {
        &self.source
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.inner.get_pages().len()
    }

    /// Object ids of the pages, in document order.
    pub fn page_ids(&self) -> Vec<ObjectId> {
        tree::page_ids(&self.inner)
    }

    /// Borrow the underlying lopdf document.
    pub fn document(&self) -> &Document {
        &self.inner
    }

    /// Give up the handle and return the underlying lopdf document.
    pub fn into_inner(self) -> Document {
        self.inner
    }

    /// Insert every page of `source` so that its first page lands at index
    /// `start_at`.
    ///
    /// Returns the number of pages inserted.
    pub fn insert_document(&mut self, source: &PdfDocument, start_at: usize) -> Result<usize> {
        let count = source.page_count();
        if count == 0 {
            self.check_insertion_point(start_at)?;
            return Ok(0);
        }

        self.insert_pages(source, start_at, PageSpan { start: 0, end: count - 1 })
    }

    /// Copy the pages of `span` from `source` so that the first copied page
    /// lands at index `start_at`. `start_at == page_count()` appends.
    ///
    /// `source` is left untouched. Returns the number of pages inserted.
    ///
    /// # Errors
    ///
    /// Returns [`PdfPagesError::PageRangeExceeded`] if `start_at` lies past
    /// the end of this document or `span` does not fit in `source`.
    pub fn insert_pages(
        &mut self,
        source: &PdfDocument,
        start_at: usize,
        span: PageSpan,
    ) -> Result<usize> {
        self.check_insertion_point(start_at)?;

        let source_count = source.page_count();
        if !span.fits(source_count) {
            return Err(PdfPagesError::page_range_exceeded(
                source.path(),
                span.end + 1,
                source_count,
            ));
        }

        // Renumber a copy above our highest id so the object tables can be joined.
        let mut incoming = source.inner.clone();
        incoming.renumber_objects_with(self.inner.max_id + 1);

        let copied: Vec<ObjectId> = tree::page_ids(&incoming)
            .into_iter()
            .skip(span.start)
            .take(span.len())
            .collect();
        tree::materialize_inherited(&mut incoming, &copied)?;

        let mut pages = self.page_ids();
        pages.splice(start_at..start_at, copied.iter().copied());

        self.inner.max_id = self.inner.max_id.max(incoming.max_id);
        self.inner.objects.extend(incoming.objects);
        tree::rebuild(&mut self.inner, &pages)?;

        log::debug!(
            "inserted {} page(s) from {} at index {start_at} of {}",
            copied.len(),
            source.path().display(),
            self.path().display()
        );

        Ok(copied.len())
    }

    /// Delete every page whose 0-based index is in `indices`, in one pass.
    ///
    /// Returns the number of pages deleted.
    ///
    /// # Errors
    ///
    /// Returns [`PdfPagesError::PageRangeExceeded`] if any index is not
    /// strictly below the current page count. Nothing is deleted in that case.
    pub fn delete_pages(&mut self, indices: &PageIndexSet) -> Result<usize> {
        let count = self.page_count();
        if let Some(max) = indices.max()
            && max >= count
        {
            return Err(PdfPagesError::page_range_exceeded(self.path(), max + 1, count));
        }

        let kept: Vec<ObjectId> = self
            .page_ids()
            .into_iter()
            .enumerate()
            .filter(|(index, _)| !indices.contains(*index))
            .map(|(_, id)| id)
            .collect();

        tree::rebuild(&mut self.inner, &kept)?;

        log::debug!(
            "deleted {} page(s) from {}",
            indices.len(),
            self.path().display()
        );

        Ok(count - kept.len())
    }

    fn check_insertion_point(&self, start_at: usize) -> Result<()> {
        let count = self.page_count();
        if start_at > count {
            return Err(PdfPagesError::page_range_exceeded(self.path(), start_at, count));
        }
        Ok(())
    }
}

impl From<LoadedPdf> for PdfDocument {
    fn from(loaded: LoadedPdf) -> Self {
        Self::from_document(loaded.document, loaded.path)
    }
}
