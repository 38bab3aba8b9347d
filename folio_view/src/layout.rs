// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use crate::page::{Page, PageIndex};

/// Spacing used when stacking pages into the document plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Vertical gap between consecutive pages, in document units.
    pub page_gap: f64,
    /// Empty border around the whole stack, in document units.
    pub margin: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_gap: 8.0,
            margin: 8.0,
        }
    }
}

/// Continuous vertical layout of pages in document space.
///
/// Pages are stacked top to bottom in document order and centered
/// horizontally on the widest page. Each page gets a frame in document space;
/// [`PageLayout::page_to_document`] and [`PageLayout::document_to_page`] move
/// points between a page's local (y‑up) space and that frame.
#[derive(Clone, Debug)]
pub struct PageLayout {
    pages: Vec<Page>,
    frames: Vec<Rect>,
    content_bounds: Rect,
    config: LayoutConfig,
}

impl PageLayout {
    /// Lays out pages with the given sizes, assigning indices in iteration order.
    #[must_use]
    pub fn from_sizes(sizes: impl IntoIterator<Item = Size>, config: LayoutConfig) -> Self {
        let pages: Vec<Page> = sizes
            .into_iter()
            .enumerate()
            .map(|(i, size)| Page::new(PageIndex(i), size))
            .collect();

        let widest = pages
            .iter()
            .map(|p| p.size.width)
            .fold(0.0_f64, f64::max);

        let mut frames = Vec::with_capacity(pages.len());
        let mut y = config.margin;
        for page in &pages {
            let x = config.margin + (widest - page.size.width) * 0.5;
            frames.push(Rect::from_origin_size(Point::new(x, y), page.size));
            y += page.size.height + config.page_gap;
        }

        let content_bounds = match frames.last() {
            Some(last) => Rect::new(
                0.0,
                0.0,
                widest + 2.0 * config.margin,
                last.y1 + config.margin,
            ),
            None => Rect::ZERO,
        };

        Self {
            pages,
            frames,
            content_bounds,
            config,
        }
    }

    /// All pages in document order.
    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Number of pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Returns `true` if the layout holds no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Spacing this layout was built with.
    #[must_use]
    pub fn config(&self) -> LayoutConfig {
        self.config
    }

    /// Bounding rectangle of the whole stack, margins included.
    ///
    /// An empty layout has zero‑sized bounds at the origin.
    #[must_use]
    pub fn content_bounds(&self) -> Rect {
        self.content_bounds
    }

    /// Frame of a page in document space.
    #[must_use]
    pub fn page_frame(&self, page: PageIndex) -> Option<Rect> {
        self.frames.get(page.get()).copied()
    }

    /// Returns the page whose frame contains `pt` (document space).
    #[must_use]
    pub fn page_at(&self, pt: Point) -> Option<PageIndex> {
        self.frames
            .iter()
            .position(|frame| frame.contains(pt))
            .map(PageIndex)
    }

    /// Maps a page‑local point into document space.
    #[must_use]
    pub fn page_to_document(&self, page: PageIndex, pt: Point) -> Option<Point> {
        let frame = self.page_frame(page)?;
        Some(Point::new(frame.x0 + pt.x, frame.y1 - pt.y))
    }

    /// Maps a document‑space point into the local space of `page`.
    ///
    /// The point does not have to lie inside the page frame.
    #[must_use]
    pub fn document_to_page(&self, page: PageIndex, pt: Point) -> Option<Point> {
        let frame = self.page_frame(page)?;
        Some(Point::new(pt.x - frame.x0, frame.y1 - pt.y))
    }
}
