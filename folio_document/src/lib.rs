// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Document: turn a document blob into a list of pages.
//!
//! [`Document::from_bytes`] sniffs the blob:
//!
//! - A `%PDF-` header selects the PDF path. Page sizes come from each page's
//!   `MediaBox`, inherited through the page tree when the page omits it, and
//!   default to US Letter when no box is declared at all. Encrypted files are
//!   rejected. A PDF without pages loads as an empty document.
//! - Otherwise the blob is tried as a raster image (PNG, JPEG, GIF, BMP,
//!   WebP, and the other formats `imagesize` knows); it becomes a single page
//!   of the image's pixel size.
//!
//! Rendering page content is out of scope; a [`Document`] only knows its
//! pages, which is all layout and the annotation overlay need.
//!
//! ```
//! use folio_document::{Document, DocumentFormat, blank_pdf};
//! use kurbo::Size;
//!
//! let bytes = blank_pdf([Size::new(300.0, 600.0)]).unwrap();
//! let doc = Document::from_bytes(&bytes).unwrap();
//! assert_eq!(doc.format(), DocumentFormat::Pdf);
//! assert_eq!(doc.pages()[0].size, Size::new(300.0, 600.0));
//! ```

mod error;
mod pdf;
mod raster;

pub use error::DocumentError;
pub use pdf::blank_pdf;

use folio_view::{LayoutConfig, Page, PageIndex, PageLayout};
use kurbo::Size;

/// Container format a [`Document`] was loaded from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    /// Portable Document Format.
    Pdf,
    /// A single raster image.
    Image,
}

/// A loaded document: its format and its fixed list of pages.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    format: DocumentFormat,
    pages: Vec<Page>,
}

impl Document {
    /// Loads a document from an in‑memory blob.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DocumentError> {
        let (format, sizes) = if pdf::sniff(bytes) {
            (DocumentFormat::Pdf, pdf::page_sizes(bytes)?)
        } else {
            (DocumentFormat::Image, vec![raster::image_size(bytes)?])
        };
        log::debug!("loaded {format:?} document with {} page(s)", sizes.len());
        Ok(Self::from_page_sizes(format, sizes))
    }

    /// Builds a document from known page sizes.
    #[must_use]
    pub fn from_page_sizes(format: DocumentFormat, sizes: impl IntoIterator<Item = Size>) -> Self {
        let pages = sizes
            .into_iter()
            .enumerate()
            .map(|(i, size)| Page::new(PageIndex(i), size))
            .collect();
        Self { format, pages }
    }

    /// The format the document was loaded from.
    #[must_use]
    pub fn format(&self) -> DocumentFormat {
        self.format
    }

    /// Pages in document order.
    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Number of pages.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Lays the pages out in document space.
    #[must_use]
    pub fn layout(&self, config: LayoutConfig) -> PageLayout {
        PageLayout::from_sizes(self.pages.iter().map(|p| p.size), config)
    }
}
