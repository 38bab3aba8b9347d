// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Point, Rect, Size};

/// Zero‑based index of a page in document order.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageIndex(pub usize);

impl PageIndex {
    /// Returns the raw index.
    #[inline]
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for PageIndex {
    #[inline]
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for PageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page {}", self.0)
    }
}

/// A single page of a loaded document.
///
/// Pages are immutable once the document is loaded: the set of pages and their
/// sizes are fixed for the document's lifetime.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Page {
    /// Position of the page in document order.
    pub index: PageIndex,
    /// Page size in page‑local units.
    pub size: Size,
}

impl Page {
    /// Creates a page description.
    #[inline]
    #[must_use]
    pub const fn new(index: PageIndex, size: Size) -> Self {
        Self { index, size }
    }

    /// Page bounds in page‑local space, anchored at the origin.
    #[inline]
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.size)
    }
}
