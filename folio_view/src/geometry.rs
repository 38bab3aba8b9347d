// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::layout::PageLayout;
use crate::page::{Page, PageIndex};
use crate::viewport::Viewport;

/// Direction of a [`PageGeometry::convert`] call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConvertDirection {
    /// Page‑local space → view space.
    FromPage,
    /// View space → page‑local space.
    ToPage,
}

/// Page list plus point conversion between page‑local and view space.
///
/// This is the only capability the overlay needs from a document backend.
/// Implementations must answer with the *current* view state on every call;
/// callers never cache conversions across redraws.
pub trait PageGeometry {
    /// All pages, index and size, in document order.
    fn pages(&self) -> &[Page];

    /// Maps `point` between the local space of `page` and view space.
    ///
    /// If `page` does not name an existing page, `point` is returned unchanged.
    /// This keeps drawing code simple but can hide indexing mistakes; use
    /// [`checked_convert`] where an invalid index should be observable.
    fn convert(&self, point: Point, page: PageIndex, direction: ConvertDirection) -> Point;
}

/// Like [`PageGeometry::convert`], but returns `None` for an invalid page index.
pub fn checked_convert<G: PageGeometry + ?Sized>(
    geometry: &G,
    point: Point,
    page: PageIndex,
    direction: ConvertDirection,
) -> Option<Point> {
    (page.get() < geometry.pages().len()).then(|| geometry.convert(point, page, direction))
}

/// [`PageGeometry`] over a [`PageLayout`] seen through a [`Viewport`].
///
/// Borrowing both means a value of this type can only observe the viewport
/// state of the moment it was built; build one per paint pass.
#[derive(Clone, Copy, Debug)]
pub struct ViewportGeometry<'a> {
    layout: &'a PageLayout,
    viewport: &'a Viewport,
}

impl<'a> ViewportGeometry<'a> {
    /// Combines a layout and a viewport.
    #[must_use]
    pub fn new(layout: &'a PageLayout, viewport: &'a Viewport) -> Self {
        Self { layout, viewport }
    }

    /// The underlying layout.
    #[must_use]
    pub fn layout(&self) -> &'a PageLayout {
        self.layout
    }

    /// The underlying viewport.
    #[must_use]
    pub fn viewport(&self) -> &'a Viewport {
        self.viewport
    }
}

impl PageGeometry for ViewportGeometry<'_> {
    fn pages(&self) -> &[Page] {
        self.layout.pages()
    }

    fn convert(&self, point: Point, page: PageIndex, direction: ConvertDirection) -> Point {
        let converted = match direction {
            ConvertDirection::FromPage => self
                .layout
                .page_to_document(page, point)
                .map(|doc| self.viewport.document_to_view_point(doc)),
            ConvertDirection::ToPage => self
                .layout
                .document_to_page(page, self.viewport.view_to_document_point(point)),
        };
        converted.unwrap_or_else(|| {
            log::debug!(
                "convert: no {page} in a {}-page layout; passing point through",
                self.layout.len()
            );
            point
        })
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size, Vec2};

    use super::{ConvertDirection, PageGeometry, ViewportGeometry, checked_convert};
    use crate::{ClampMode, LayoutConfig, PageIndex, PageLayout, Viewport};

    fn two_pages() -> PageLayout {
        PageLayout::from_sizes(
            [Size::new(300.0, 600.0), Size::new(612.0, 792.0)],
            LayoutConfig::default(),
        )
    }

    #[test]
    fn round_trip_is_identity_for_valid_pages() {
        let layout = two_pages();
        let mut viewport = Viewport::new(Rect::new(0.0, 0.0, 375.0, 667.0));
        viewport.set_content_bounds(Some(layout.content_bounds()));
        viewport.fit_width(layout.content_bounds());
        viewport.zoom_about_view_point(Point::new(100.0, 300.0), 1.7);
        viewport.pan_by_view(Vec2::new(-20.0, -250.0));

        let geometry = ViewportGeometry::new(&layout, &viewport);
        let samples = [Point::ZERO, Point::new(100.0, 200.0), Point::new(-7.5, 1234.0)];
        for page in [PageIndex(0), PageIndex(1)] {
            for p in samples {
                let to_page = geometry.convert(p, page, ConvertDirection::ToPage);
                let back = geometry.convert(to_page, page, ConvertDirection::FromPage);
                assert!((back - p).hypot() < 1e-9, "{p:?} on {page} came back as {back:?}");
            }
        }
    }

    #[test]
    fn invalid_page_passes_point_through() {
        let layout = two_pages();
        let viewport = Viewport::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        let geometry = ViewportGeometry::new(&layout, &viewport);

        let p = Point::new(42.0, -3.0);
        for direction in [ConvertDirection::FromPage, ConvertDirection::ToPage] {
            assert_eq!(geometry.convert(p, PageIndex(2), direction), p);
            assert_eq!(checked_convert(&geometry, p, PageIndex(2), direction), None);
        }
        assert!(checked_convert(&geometry, p, PageIndex(1), ConvertDirection::FromPage).is_some());
    }

    #[test]
    fn conversion_tracks_viewport_changes() {
        let layout = PageLayout::from_sizes(
            [Size::new(100.0, 100.0)],
            LayoutConfig {
                page_gap: 0.0,
                margin: 0.0,
            },
        );
        let mut viewport = Viewport::new(Rect::new(0.0, 0.0, 50.0, 50.0));
        viewport.set_clamp_mode(ClampMode::None);

        let top_left = Point::new(0.0, 100.0);
        let before = ViewportGeometry::new(&layout, &viewport).convert(
            top_left,
            PageIndex(0),
            ConvertDirection::FromPage,
        );
        assert_eq!(before, Point::ZERO);

        viewport.set_zoom(2.0);
        viewport.pan_by_view(Vec2::new(10.0, 5.0));
        let after = ViewportGeometry::new(&layout, &viewport).convert(
            Point::new(50.0, 50.0),
            PageIndex(0),
            ConvertDirection::FromPage,
        );
        assert_eq!(after, Point::new(110.0, 105.0));
    }
}
