// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

use crate::modes::{ClampMode, FitMode};

/// Pan/zoom viewport over the document plane.
///
/// `Viewport` tracks a rectangular region in view space and a uniform
/// pan+zoom transform mapping document coordinates into that region:
/// `view = view_origin + pan + zoom * document`.
/// It can be used to:
/// - Convert points and rectangles between document and view coordinates.
/// - Pan and zoom around a chosen anchor point.
/// - Fit the content (or its width) into the view.
///
/// Content bounds, when set, are used for clamping; the default
/// [`ClampMode::Contain`] keeps the view from scrolling past the content.
#[derive(Clone, Debug)]
pub struct Viewport {
    view_rect: Rect,
    content_bounds: Option<Rect>,
    zoom: f64,
    pan: Vec2,
    min_zoom: f64,
    max_zoom: f64,
    clamp_mode: ClampMode,
    fit_mode: FitMode,
    document_to_view: Affine,
    view_to_document: Affine,
}

impl Viewport {
    /// Creates a new viewport covering `view_rect` with zoom `1.0` and no pan.
    ///
    /// Zoom is clamped to the range `[1e-3, 1e3]` until
    /// [`Viewport::set_zoom_limits`] is called.
    #[must_use]
    pub fn new(view_rect: Rect) -> Self {
        let mut vp = Self {
            view_rect,
            content_bounds: None,
            zoom: 1.0,
            pan: Vec2::ZERO,
            min_zoom: 1e-3,
            max_zoom: 1e3,
            clamp_mode: ClampMode::default(),
            fit_mode: FitMode::default(),
            document_to_view: Affine::IDENTITY,
            view_to_document: Affine::IDENTITY,
        };
        vp.rebuild_transforms();
        vp
    }

    /// Returns the current view rectangle.
    #[must_use]
    pub fn view_rect(&self) -> Rect {
        self.view_rect
    }

    /// Sets the view rectangle, keeping zoom and pan.
    pub fn set_view_rect(&mut self, rect: Rect) {
        if self.view_rect == rect {
            return;
        }
        self.view_rect = rect;
        self.rebuild_transforms();
        self.clamp_to_bounds();
    }

    /// Sets optional content bounds used for clamping.
    pub fn set_content_bounds(&mut self, bounds: Option<Rect>) {
        if self.content_bounds == bounds {
            return;
        }
        self.content_bounds = bounds;
        self.clamp_to_bounds();
    }

    /// Returns the current content bounds, if any.
    #[must_use]
    pub fn content_bounds(&self) -> Option<Rect> {
        self.content_bounds
    }

    /// Returns the current uniform zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Returns the `(min, max)` zoom range.
    #[must_use]
    pub fn zoom_limits(&self) -> (f64, f64) {
        (self.min_zoom, self.max_zoom)
    }

    /// Sets the minimum and maximum zoom factors.
    ///
    /// The range is normalized so that `min_zoom <= max_zoom`, and the current
    /// zoom is clamped into it.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.set_zoom(self.zoom);
    }

    /// Sets the clamp mode.
    pub fn set_clamp_mode(&mut self, mode: ClampMode) {
        if self.clamp_mode != mode {
            self.clamp_mode = mode;
            self.clamp_to_bounds();
        }
    }

    /// Returns the current clamp mode.
    #[must_use]
    pub fn clamp_mode(&self) -> ClampMode {
        self.clamp_mode
    }

    /// Sets how [`Viewport::fit_rect`] positions content.
    pub fn set_fit_mode(&mut self, mode: FitMode) {
        self.fit_mode = mode;
    }

    /// Returns the current fit mode.
    #[must_use]
    pub fn fit_mode(&self) -> FitMode {
        self.fit_mode
    }

    /// Sets the zoom factor, clamped into the zoom range.
    ///
    /// The view origin stays anchored; use
    /// [`Viewport::zoom_about_view_point`] to zoom around another point.
    pub fn set_zoom(&mut self, zoom: f64) {
        let clamped = zoom.clamp(self.min_zoom, self.max_zoom);
        if (self.zoom - clamped).abs() < f64::EPSILON {
            return;
        }
        self.zoom_about_view_point(self.view_rect.origin(), clamped / self.zoom);
    }

    /// Pans the view by a delta in view space.
    pub fn pan_by_view(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        self.pan += delta;
        self.rebuild_transforms();
        self.clamp_to_bounds();
    }

    /// Scrolls so that `offset` (document space) sits at the view origin.
    pub fn scroll_to(&mut self, offset: Point) {
        self.pan = -offset.to_vec2() * self.zoom;
        self.rebuild_transforms();
        self.clamp_to_bounds();
    }

    /// Zooms by `factor` around an anchor point in view coordinates.
    ///
    /// The document point under the anchor stays under the anchor, unless
    /// clamping has to move it.
    pub fn zoom_about_view_point(&mut self, anchor_view: Point, factor: f64) {
        if factor <= 0.0 {
            return;
        }
        let old_zoom = self.zoom;
        let new_zoom = (old_zoom * factor).clamp(self.min_zoom, self.max_zoom);
        if (new_zoom - old_zoom).abs() < f64::EPSILON {
            return;
        }

        let anchor_document = self.view_to_document_point(anchor_view);
        self.zoom = new_zoom;
        self.rebuild_transforms();
        let moved = self.document_to_view_point(anchor_document);
        self.pan += anchor_view - moved;
        self.rebuild_transforms();
        self.clamp_to_bounds();
    }

    /// Zoom at which `rect`'s width exactly fills the view width.
    ///
    /// Returns `None` for degenerate view or content widths. The result is not
    /// clamped to the zoom range.
    #[must_use]
    pub fn size_to_fit_zoom(&self, rect: Rect) -> Option<f64> {
        let view_width = self.view_rect.width();
        if view_width <= 0.0 || rect.width() <= 0.0 {
            return None;
        }
        Some(view_width / rect.width())
    }

    /// Fits `rect`'s width into the view and aligns its top with the view top.
    pub fn fit_width(&mut self, rect: Rect) {
        let Some(zoom) = self.size_to_fit_zoom(rect) else {
            return;
        };
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
        self.pan = -rect.origin().to_vec2() * self.zoom;
        self.rebuild_transforms();
        self.clamp_to_bounds();
    }

    /// Fits the whole of `rect` into the view, preserving aspect ratio.
    pub fn fit_rect(&mut self, rect: Rect) {
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }
        let view_size = self.view_rect.size();
        if view_size.width <= 0.0 || view_size.height <= 0.0 {
            return;
        }

        let zoom = (view_size.width / rect.width())
            .min(view_size.height / rect.height())
            .clamp(self.min_zoom, self.max_zoom);
        self.zoom = zoom;

        let view_origin = self.view_rect.origin().to_vec2();
        self.pan = match self.fit_mode {
            FitMode::Center => {
                self.view_rect.center().to_vec2() - view_origin - rect.center().to_vec2() * zoom
            }
            FitMode::AlignMin => -rect.origin().to_vec2() * zoom,
        };

        self.rebuild_transforms();
        self.clamp_to_bounds();
    }

    /// Document point currently shown at the view origin.
    #[must_use]
    pub fn content_offset(&self) -> Point {
        self.view_to_document_point(self.view_rect.origin())
    }

    /// Returns the visible document‑space rectangle.
    #[must_use]
    pub fn visible_document_rect(&self) -> Rect {
        self.view_to_document_rect(self.view_rect)
    }

    /// Current document → view transform.
    #[must_use]
    pub fn document_to_view(&self) -> Affine {
        self.document_to_view
    }

    /// Converts a document‑space point into view coordinates.
    #[must_use]
    pub fn document_to_view_point(&self, pt: Point) -> Point {
        self.document_to_view * pt
    }

    /// Converts a view‑space point into document coordinates.
    #[must_use]
    pub fn view_to_document_point(&self, pt: Point) -> Point {
        self.view_to_document * pt
    }

    /// Converts a document‑space rectangle into view coordinates.
    #[must_use]
    pub fn document_to_view_rect(&self, rect: Rect) -> Rect {
        self.document_to_view.transform_rect_bbox(rect)
    }

    /// Converts a view‑space rectangle into document coordinates.
    #[must_use]
    pub fn view_to_document_rect(&self, rect: Rect) -> Rect {
        self.view_to_document.transform_rect_bbox(rect)
    }

    /// Snapshot of the current viewport state.
    #[must_use]
    pub fn snapshot(&self) -> ViewportSnapshot {
        ViewportSnapshot {
            view_rect: self.view_rect,
            content_bounds: self.content_bounds,
            content_offset: self.content_offset(),
            zoom: self.zoom,
            min_zoom: self.min_zoom,
            max_zoom: self.max_zoom,
            clamp_mode: self.clamp_mode,
        }
    }

    fn rebuild_transforms(&mut self) {
        let view_origin = self.view_rect.origin().to_vec2();
        self.document_to_view =
            Affine::translate(view_origin + self.pan) * Affine::scale(self.zoom);
        self.view_to_document = self.document_to_view.inverse();
    }

    fn clamp_to_bounds(&mut self) {
        let bounds = match self.content_bounds {
            Some(b) if b.width() > 0.0 && b.height() > 0.0 => b,
            _ => return,
        };
        let visible = self.visible_document_rect();
        if visible.width() <= 0.0 || visible.height() <= 0.0 {
            return;
        }

        let (dx, dy) = match self.clamp_mode {
            ClampMode::None => return,
            ClampMode::KeepSomeVisible => (
                keep_overlap(visible.x0, visible.x1, bounds.x0, bounds.x1),
                keep_overlap(visible.y0, visible.y1, bounds.y0, bounds.y1),
            ),
            ClampMode::Contain => (
                contain(visible.x0, visible.x1, bounds.x0, bounds.x1),
                contain(visible.y0, visible.y1, bounds.y0, bounds.y1),
            ),
        };

        if dx != 0.0 || dy != 0.0 {
            // Moving the visible rect by +d in document space moves the
            // content by -d * zoom in view space.
            self.pan -= Vec2::new(dx, dy) * self.zoom;
            self.rebuild_transforms();
        }
    }
}

/// Shift needed along one axis so `[v0, v1]` overlaps `[b0, b1]`.
fn keep_overlap(v0: f64, v1: f64, b0: f64, b1: f64) -> f64 {
    if v1 < b0 {
        b0 - v1
    } else if v0 > b1 {
        b1 - v0
    } else {
        0.0
    }
}

/// Shift needed along one axis so `[v0, v1]` stays inside `[b0, b1]`.
fn contain(v0: f64, v1: f64, b0: f64, b1: f64) -> f64 {
    if v1 - v0 >= b1 - b0 {
        (b0 + b1) * 0.5 - (v0 + v1) * 0.5
    } else if v0 < b0 {
        b0 - v0
    } else if v1 > b1 {
        b1 - v1
    } else {
        0.0
    }
}

/// Snapshot of a [`Viewport`] state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportSnapshot {
    /// Current view rectangle.
    pub view_rect: Rect,
    /// Optional content bounds used for clamping.
    pub content_bounds: Option<Rect>,
    /// Document point shown at the view origin.
    pub content_offset: Point,
    /// Current uniform zoom factor.
    pub zoom: f64,
    /// Minimum zoom factor.
    pub min_zoom: f64,
    /// Maximum zoom factor.
    pub max_zoom: f64,
    /// Clamp mode in effect.
    pub clamp_mode: ClampMode,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Vec2};

    use super::{ClampMode, FitMode, Viewport};

    fn close(a: Point, b: Point) -> bool {
        (a - b).hypot() < 1e-9
    }

    #[test]
    fn document_view_roundtrip() {
        let mut vp = Viewport::new(Rect::new(10.0, 20.0, 810.0, 620.0));
        vp.set_clamp_mode(ClampMode::None);
        vp.set_zoom(2.5);
        vp.pan_by_view(Vec2::new(-33.0, 17.0));

        let pt = Point::new(10.0, -5.0);
        let back = vp.view_to_document_point(vp.document_to_view_point(pt));
        assert!(close(back, pt));
    }

    #[test]
    fn zoom_about_anchor_keeps_anchor_fixed() {
        let view_rect = Rect::new(0.0, 0.0, 800.0, 600.0);
        let mut vp = Viewport::new(view_rect);
        vp.set_clamp_mode(ClampMode::None);

        let anchor = view_rect.center();
        let before = vp.view_to_document_point(anchor);
        vp.zoom_about_view_point(anchor, 2.0);
        let after = vp.view_to_document_point(anchor);

        assert!((vp.zoom() - 2.0).abs() < 1e-12);
        assert!(close(before, after));
    }

    #[test]
    fn zoom_limits_clamp_current_zoom() {
        let mut vp = Viewport::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        vp.set_zoom(4.0);
        vp.set_zoom_limits(2.0, 0.5);
        assert_eq!(vp.zoom_limits(), (0.5, 2.0));
        assert!((vp.zoom() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn fit_width_fills_view_width_and_aligns_top() {
        let mut vp = Viewport::new(Rect::new(0.0, 0.0, 400.0, 300.0));
        let content = Rect::new(0.0, 0.0, 200.0, 1000.0);
        vp.set_content_bounds(Some(content));
        vp.fit_width(content);

        assert!((vp.zoom() - 2.0).abs() < 1e-12);
        let visible = vp.visible_document_rect();
        assert!((visible.x0 - 0.0).abs() < 1e-9);
        assert!((visible.x1 - 200.0).abs() < 1e-9);
        assert!((visible.y0 - 0.0).abs() < 1e-9);
    }

    #[test]
    fn fit_mode_align_min_aligns_content_min_to_view_origin() {
        let view_rect = Rect::new(0.0, 0.0, 200.0, 100.0);
        let mut vp = Viewport::new(view_rect);
        vp.set_fit_mode(FitMode::AlignMin);
        vp.set_clamp_mode(ClampMode::None);

        let content = Rect::new(-50.0, -20.0, 150.0, 80.0);
        vp.fit_rect(content);

        assert!(close(vp.document_to_view_point(content.origin()), view_rect.origin()));
    }

    #[test]
    fn contain_prevents_overscroll() {
        let mut vp = Viewport::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        let content = Rect::new(0.0, 0.0, 100.0, 1000.0);
        vp.set_content_bounds(Some(content));

        // Dragging content down at the top edge does nothing.
        vp.pan_by_view(Vec2::new(0.0, 50.0));
        assert!(close(vp.content_offset(), Point::ZERO));

        vp.pan_by_view(Vec2::new(0.0, -5000.0));
        let visible = vp.visible_document_rect();
        assert!((visible.y1 - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn contain_centers_small_content() {
        let mut vp = Viewport::new(Rect::new(0.0, 0.0, 400.0, 400.0));
        let content = Rect::new(0.0, 0.0, 100.0, 100.0);
        vp.set_content_bounds(Some(content));
        vp.pan_by_view(Vec2::new(30.0, 30.0));

        let visible = vp.visible_document_rect();
        assert!(close(visible.center(), content.center()));
    }

    #[test]
    fn keep_some_visible_pulls_view_back() {
        let mut vp = Viewport::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        vp.set_clamp_mode(ClampMode::KeepSomeVisible);
        let content = Rect::new(0.0, 0.0, 50.0, 50.0);
        vp.set_content_bounds(Some(content));

        vp.pan_by_view(Vec2::new(1000.0, 1000.0));
        let visible = vp.visible_document_rect();
        assert!(visible.x1 >= content.x0 - 1e-6);
        assert!(visible.y1 >= content.y0 - 1e-6);
    }

    #[test]
    fn scroll_to_sets_content_offset() {
        let mut vp = Viewport::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        vp.set_content_bounds(Some(Rect::new(0.0, 0.0, 500.0, 500.0)));
        vp.set_zoom(2.0);
        vp.scroll_to(Point::new(40.0, 60.0));
        assert!(close(vp.content_offset(), Point::new(40.0, 60.0)));

        let snap = vp.snapshot();
        assert_eq!(snap.content_offset, vp.content_offset());
        assert_eq!(snap.clamp_mode, ClampMode::Contain);
    }
}
