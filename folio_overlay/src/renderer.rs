// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use folio_imaging::{
    Affine, DrawOp, FillRule, ImagingBackend, ImagingBackendExt, PathDesc, StateOp, StrokeStyle,
};
use folio_view::{ConvertDirection, Page, PageGeometry};
use kurbo::Point;

use crate::redraw::RedrawHandle;
use crate::shape::{AnnotationShape, ShapeError, default_shapes, validate_shapes};

/// Paints [`AnnotationShape`]s over a document view.
///
/// [`OverlayRenderer::redraw`] only marks the overlay dirty; the host's paint
/// pass calls [`OverlayRenderer::paint`], which projects every shape through
/// the current [`PageGeometry`] and emits its imaging ops.
#[derive(Debug)]
pub struct OverlayRenderer {
    shapes: Vec<AnnotationShape>,
    redraw: RedrawHandle,
}

impl OverlayRenderer {
    /// Creates a renderer for `shapes`, without validating their pages.
    ///
    /// The renderer starts idle; call [`OverlayRenderer::redraw`] to schedule
    /// the first frame.
    #[must_use]
    pub fn new(shapes: Vec<AnnotationShape>) -> Self {
        Self {
            shapes,
            redraw: RedrawHandle::new(),
        }
    }

    /// Creates a renderer for `shapes`, checking each against `pages`.
    pub fn try_new(shapes: Vec<AnnotationShape>, pages: &[Page]) -> Result<Self, ShapeError> {
        validate_shapes(&shapes, pages.len())?;
        Ok(Self::new(shapes))
    }

    /// Creates a renderer with the [`default_shapes`] for `pages`.
    #[must_use]
    pub fn with_pages(pages: &[Page]) -> Self {
        Self::new(default_shapes(pages))
    }

    /// Shapes painted by this renderer.
    #[must_use]
    pub fn shapes(&self) -> &[AnnotationShape] {
        &self.shapes
    }

    /// A handle sharing this renderer's redraw state.
    #[must_use]
    pub fn redraw_handle(&self) -> RedrawHandle {
        self.redraw.clone()
    }

    /// Requests a repaint on the next paint pass.
    pub fn redraw(&self) {
        self.redraw.request();
    }

    /// Returns `true` if a repaint is pending.
    #[must_use]
    pub fn needs_paint(&self) -> bool {
        self.redraw.is_pending()
    }

    /// Paints every shape into `backend` and clears the pending redraw.
    ///
    /// For each shape with at least two points: one closed path in view
    /// space, filled then stroked. Resources are released before returning.
    /// Returns the number of shapes drawn.
    pub fn paint<G, B>(&mut self, geometry: &G, backend: &mut B) -> usize
    where
        G: PageGeometry + ?Sized,
        B: ImagingBackend + ?Sized,
    {
        let mut drawn = 0;
        let mut points = Vec::new();
        for shape in &self.shapes {
            if shape.points().len() < 2 {
                log::debug!("skipping shape on {} with fewer than two points", shape.page());
                continue;
            }
            if drawn == 0 {
                backend.state(StateOp::SetTransform(Affine::IDENTITY));
                backend.state(StateOp::SetFillRule(FillRule::NonZero));
            }

            points.clear();
            points.extend(shape.points().iter().map(|p| {
                geometry.convert(*p, shape.page(), ConvertDirection::FromPage)
            }));
            paint_shape(backend, shape, &points);
            drawn += 1;
        }
        log::debug!("overlay paint pass: {drawn} of {} shapes", self.shapes.len());
        self.redraw.complete();
        drawn
    }
}

fn paint_shape<B: ImagingBackend + ?Sized>(
    backend: &mut B,
    shape: &AnnotationShape,
    view_points: &[Point],
) {
    let style = shape.style();
    let path = backend.create_path(PathDesc::polygon(view_points));
    backend.with_paint(style.fill.clone(), |b, paint| {
        b.state(StateOp::SetPaint(paint));
        b.draw(DrawOp::FillPath(path));
    });
    backend.state(StateOp::SetStroke(StrokeStyle::new(style.stroke_width)));
    backend.with_paint(style.stroke.clone(), |b, paint| {
        b.state(StateOp::SetPaint(paint));
        b.draw(DrawOp::StrokePath(path));
    });
    backend.destroy_path(path);
}
