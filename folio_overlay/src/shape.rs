// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use folio_view::{Page, PageIndex};
use kurbo::Point;
use peniko::{Brush, Color};

/// Fill and stroke used to paint an [`AnnotationShape`].
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeStyle {
    /// Brush filling the shape interior.
    pub fill: Brush,
    /// Brush stroking the shape outline.
    pub stroke: Brush,
    /// Outline width in view units; not scaled by zoom.
    pub stroke_width: f64,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            fill: Brush::Solid(Color::new([1.0, 0.0, 0.0, 0.4])),
            stroke: Brush::Solid(Color::new([0.0, 1.0, 0.0, 1.0])),
            stroke_width: 10.0,
        }
    }
}

/// A closed polygon anchored to one page.
///
/// Points are in the page's local space (origin bottom‑left, y up) and are
/// re‑projected to view space on every paint.
#[derive(Clone, Debug, PartialEq)]
pub struct AnnotationShape {
    page: PageIndex,
    points: Vec<Point>,
    style: ShapeStyle,
}

impl AnnotationShape {
    /// Creates a shape on `page` with the default style.
    #[must_use]
    pub fn new(page: PageIndex, points: impl Into<Vec<Point>>) -> Self {
        Self {
            page,
            points: points.into(),
            style: ShapeStyle::default(),
        }
    }

    /// Replaces the style.
    #[must_use]
    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }

    /// The page this shape is anchored to.
    #[must_use]
    pub fn page(&self) -> PageIndex {
        self.page
    }

    /// Outline points in page‑local space.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The paint style.
    #[must_use]
    pub fn style(&self) -> &ShapeStyle {
        &self.style
    }
}

/// One centered quadrilateral per page, spanning the middle third of each axis.
///
/// Corners are `(W/3, H/3)`, `(2W/3, H/3)`, `(2W/3, 2H/3)`, `(W/3, 2H/3)`.
#[must_use]
pub fn default_shapes(pages: &[Page]) -> Vec<AnnotationShape> {
    pages
        .iter()
        .map(|page| {
            let (w, h) = (page.size.width, page.size.height);
            AnnotationShape::new(
                page.index,
                [
                    Point::new(w / 3.0, h / 3.0),
                    Point::new(2.0 * w / 3.0, h / 3.0),
                    Point::new(2.0 * w / 3.0, 2.0 * h / 3.0),
                    Point::new(w / 3.0, 2.0 * h / 3.0),
                ],
            )
        })
        .collect()
}

/// Error returned when shapes do not fit the document.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    /// A shape is anchored to a page the document does not have.
    #[error("shape is anchored to {page}, but the document has {page_count} pages")]
    PageOutOfRange {
        /// The offending page index.
        page: PageIndex,
        /// Number of pages in the document.
        page_count: usize,
    },
}

/// Checks that every shape references one of `page_count` pages.
pub fn validate_shapes(shapes: &[AnnotationShape], page_count: usize) -> Result<(), ShapeError> {
    match shapes.iter().find(|s| s.page.get() >= page_count) {
        Some(shape) => Err(ShapeError::PageOutOfRange {
            page: shape.page,
            page_count,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use folio_view::{Page, PageIndex};
    use kurbo::{Point, Size};

    use super::{AnnotationShape, ShapeError, default_shapes, validate_shapes};

    #[test]
    fn default_shape_spans_middle_third() {
        let pages = [Page::new(PageIndex(0), Size::new(300.0, 600.0))];
        let shapes = default_shapes(&pages);
        assert_eq!(shapes.len(), 1);
        assert_eq!(
            shapes[0].points(),
            &[
                Point::new(100.0, 200.0),
                Point::new(200.0, 200.0),
                Point::new(200.0, 400.0),
                Point::new(100.0, 400.0),
            ]
        );
    }

    #[test]
    fn validation_reports_first_bad_page() {
        let shapes = vec![
            AnnotationShape::new(PageIndex(0), [Point::ZERO, Point::new(1.0, 1.0)]),
            AnnotationShape::new(PageIndex(4), [Point::ZERO, Point::new(1.0, 1.0)]),
        ];
        assert_eq!(validate_shapes(&shapes, 5), Ok(()));
        assert_eq!(
            validate_shapes(&shapes, 2),
            Err(ShapeError::PageOutOfRange {
                page: PageIndex(4),
                page_count: 2,
            })
        );
    }
}
