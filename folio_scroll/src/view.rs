// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use folio_view::{ClampMode, Viewport};
use kurbo::{Insets, Point, Rect, Vec2};

use crate::chain::ObserverChain;
use crate::event::{ScrollEvent, ScrollState, ViewId};

/// Scroll view configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollConfig {
    /// Allow the content to be dragged partly out of view.
    ///
    /// When `false` the viewport is kept inside the content
    /// ([`ClampMode::Contain`]).
    pub bounces: bool,
    /// Restrict a drag to its dominant axis.
    pub directional_lock: bool,
    /// Minimum zoom, as a multiple of the fit‑to‑width zoom.
    pub min_zoom_factor: f64,
    /// Maximum zoom, as a multiple of the fit‑to‑width zoom.
    pub max_zoom_factor: f64,
    /// Fit the content width to the view on every [`ScrollView::layout`].
    pub auto_scales: bool,
    /// Fraction of velocity kept per millisecond while decelerating.
    pub deceleration_rate: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            bounces: false,
            directional_lock: false,
            min_zoom_factor: 0.1,
            max_zoom_factor: 5.0,
            auto_scales: true,
            deceleration_rate: 0.998,
        }
    }
}

/// Headless model of a scrollable, zoomable document view.
///
/// The host drives it with gesture and layout calls; every state change is
/// reported to the registered [`ObserverChain`] as a [`ScrollEvent`].
#[derive(Debug)]
pub struct ScrollView {
    viewport: Viewport,
    observers: ObserverChain,
    config: ScrollConfig,
    content_inset: Insets,
    dragging: bool,
    zooming: bool,
    deceleration_target: Option<Point>,
}

impl ScrollView {
    /// Creates a scroll view over `view_rect` with no content.
    #[must_use]
    pub fn new(view_rect: Rect, config: ScrollConfig) -> Self {
        let mut viewport = Viewport::new(view_rect);
        viewport.set_clamp_mode(if config.bounces {
            ClampMode::KeepSomeVisible
        } else {
            ClampMode::Contain
        });
        Self {
            viewport,
            observers: ObserverChain::new(),
            config,
            content_inset: Insets::ZERO,
            dragging: false,
            zooming: false,
            deceleration_target: None,
        }
    }

    /// The viewport driven by this scroll view.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The configuration in effect.
    #[must_use]
    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Registered observers.
    #[must_use]
    pub fn observers(&self) -> &ObserverChain {
        &self.observers
    }

    /// Registered observers, for registration and removal.
    pub fn observers_mut(&mut self) -> &mut ObserverChain {
        &mut self.observers
    }

    /// Current state as delivered with notifications.
    #[must_use]
    pub fn state(&self) -> ScrollState {
        ScrollState {
            content_offset: self.viewport.content_offset(),
            zoom: self.viewport.zoom(),
            content_inset: self.content_inset,
        }
    }

    /// Current content inset.
    #[must_use]
    pub fn content_inset(&self) -> Insets {
        self.content_inset
    }

    /// Returns `true` between [`ScrollView::begin_drag`] and [`ScrollView::end_drag`].
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Returns `true` while deceleration is pending.
    #[must_use]
    pub fn is_decelerating(&self) -> bool {
        self.deceleration_target.is_some()
    }

    /// Returns `true` between [`ScrollView::begin_zoom`] and [`ScrollView::end_zoom`].
    #[must_use]
    pub fn is_zooming(&self) -> bool {
        self.zooming
    }

    /// Sets the scrollable content bounds, in document space.
    ///
    /// Call [`ScrollView::layout`] afterwards to refresh zoom limits.
    pub fn set_content_bounds(&mut self, bounds: Rect) {
        self.transform_change(|vp| vp.set_content_bounds(Some(bounds)));
    }

    /// Lays the view out in `view_rect`.
    ///
    /// Zoom limits are recomputed from the fit‑to‑width zoom of the content;
    /// with [`ScrollConfig::auto_scales`] the content width is fitted.
    pub fn layout(&mut self, view_rect: Rect) {
        let config = self.config;
        self.transform_change(|vp| {
            vp.set_view_rect(view_rect);
            let Some(content) = vp.content_bounds() else {
                return;
            };
            let Some(fit) = vp.size_to_fit_zoom(content) else {
                return;
            };
            vp.set_zoom_limits(fit * config.min_zoom_factor, fit * config.max_zoom_factor);
            if config.auto_scales {
                vp.fit_width(content);
            }
        });
    }

    /// Scrolls the content offset by `delta` view units.
    ///
    /// Emits [`ScrollEvent::DidScroll`] if the offset changed.
    pub fn scroll_by(&mut self, delta: Vec2) {
        let delta = if self.config.directional_lock && self.dragging {
            if delta.x.abs() >= delta.y.abs() {
                Vec2::new(delta.x, 0.0)
            } else {
                Vec2::new(0.0, delta.y)
            }
        } else {
            delta
        };
        self.transform_change(|vp| vp.pan_by_view(-delta));
    }

    /// Scrolls so that `offset` (document space) is at the view origin.
    pub fn scroll_to(&mut self, offset: Point) {
        self.transform_change(|vp| vp.scroll_to(offset));
    }

    /// Zooms by `factor` around `anchor` (view space).
    ///
    /// Emits [`ScrollEvent::DidZoom`] if the zoom changed and
    /// [`ScrollEvent::DidScroll`] if the content offset moved.
    pub fn zoom_about(&mut self, anchor: Point, factor: f64) {
        self.transform_change(|vp| vp.zoom_about_view_point(anchor, factor));
    }

    /// Starts a drag gesture.
    pub fn begin_drag(&mut self) {
        self.dragging = true;
        self.deceleration_target = None;
        self.emit(ScrollEvent::WillBeginDragging);
    }

    /// Ends a drag gesture lifting off at `velocity` (offset units per second).
    ///
    /// Observers may rewrite the projected resting offset. Returns the offset
    /// deceleration will settle at.
    pub fn end_drag(&mut self, velocity: Vec2) -> Point {
        let projected = self.project(velocity);
        let answered = self.emit(ScrollEvent::WillEndDragging {
            velocity,
            target_offset: projected,
        });
        let target = match answered {
            ScrollEvent::WillEndDragging { target_offset, .. } => target_offset,
            _ => projected,
        };

        self.dragging = false;
        let will_decelerate = velocity != Vec2::ZERO;
        self.emit(ScrollEvent::DidEndDragging { will_decelerate });
        if will_decelerate {
            self.deceleration_target = Some(target);
            self.emit(ScrollEvent::WillBeginDecelerating);
        }
        target
    }

    /// Ends deceleration, settling at the target chosen in [`ScrollView::end_drag`].
    pub fn end_decelerating(&mut self) {
        if let Some(target) = self.deceleration_target.take() {
            self.scroll_to(target);
        }
        self.emit(ScrollEvent::DidEndDecelerating);
    }

    /// Reports the end of a programmatic scroll animation.
    pub fn end_scrolling_animation(&mut self) {
        self.emit(ScrollEvent::DidEndScrollingAnimation);
    }

    /// Starts a zoom gesture.
    ///
    /// Asks the observers which view to scale; returns `None` (and does not
    /// start zooming) if nobody answers.
    pub fn begin_zoom(&mut self) -> Option<ViewId> {
        let target = match self.emit(ScrollEvent::ZoomTarget { target: None }) {
            ScrollEvent::ZoomTarget { target } => target,
            _ => None,
        };
        if target.is_some() {
            self.zooming = true;
            self.emit(ScrollEvent::WillBeginZooming);
        }
        target
    }

    /// Ends a zoom gesture.
    pub fn end_zoom(&mut self) {
        if !self.zooming {
            return;
        }
        self.zooming = false;
        let scale = self.viewport.zoom();
        self.emit(ScrollEvent::DidEndZooming { scale });
    }

    /// Handles a scroll‑to‑top request.
    ///
    /// Observers decide; the request is refused unless one of them allows it.
    /// Returns whether the view scrolled to the top.
    pub fn scroll_to_top(&mut self) -> bool {
        let allow = matches!(
            self.emit(ScrollEvent::ShouldScrollToTop { allow: false }),
            ScrollEvent::ShouldScrollToTop { allow: true }
        );
        if !allow {
            return false;
        }
        let offset = self.viewport.content_offset();
        let top = self
            .viewport
            .content_bounds()
            .map_or(offset.y, |bounds| bounds.y0);
        self.scroll_to(Point::new(offset.x, top));
        self.emit(ScrollEvent::DidScrollToTop);
        true
    }

    /// Sets the content inset.
    pub fn set_content_inset(&mut self, inset: Insets) {
        if self.content_inset == inset {
            return;
        }
        self.content_inset = inset;
        self.emit(ScrollEvent::DidChangeContentInset);
    }

    fn project(&self, velocity: Vec2) -> Point {
        let rate = self.config.deceleration_rate;
        let distance = if rate > 0.0 && rate < 1.0 {
            velocity / 1000.0 * rate / (1.0 - rate)
        } else {
            Vec2::ZERO
        };
        let mut probe = self.viewport.clone();
        probe.pan_by_view(-distance);
        probe.content_offset()
    }

    fn transform_change(&mut self, change: impl FnOnce(&mut Viewport)) {
        let before = (self.viewport.content_offset(), self.viewport.zoom());
        change(&mut self.viewport);
        let (offset, zoom) = (self.viewport.content_offset(), self.viewport.zoom());
        if zoom != before.1 {
            self.emit(ScrollEvent::DidZoom);
        }
        if offset != before.0 {
            self.emit(ScrollEvent::DidScroll);
        }
    }

    fn emit(&mut self, mut event: ScrollEvent) -> ScrollEvent {
        let state = self.state();
        self.observers.dispatch(&mut event, &state);
        event
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use kurbo::{Insets, Point, Rect, Vec2};

    use super::{ScrollConfig, ScrollView};
    use crate::event::{ScrollEvent, ScrollEventKind, ScrollState, ViewId};

    fn recording_view() -> (ScrollView, Rc<RefCell<Vec<ScrollEventKind>>>) {
        let mut view = ScrollView::new(Rect::new(0.0, 0.0, 100.0, 100.0), ScrollConfig::default());
        view.set_content_bounds(Rect::new(0.0, 0.0, 200.0, 1000.0));
        view.layout(Rect::new(0.0, 0.0, 100.0, 100.0));
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        view.observers_mut()
            .push(Box::new(move |event: &mut ScrollEvent, _: &ScrollState| {
                sink.borrow_mut().push(event.kind());
            }));
        (view, log)
    }

    #[test]
    fn layout_fits_width_and_sets_limits() {
        let (view, _) = recording_view();
        let vp = view.viewport();
        assert!((vp.zoom() - 0.5).abs() < 1e-9);
        let (min, max) = vp.zoom_limits();
        assert!((min - 0.05).abs() < 1e-9);
        assert!((max - 2.5).abs() < 1e-9);
    }

    #[test]
    fn scroll_emits_only_on_change() {
        let (mut view, log) = recording_view();
        view.scroll_by(Vec2::new(0.0, 40.0));
        assert_eq!(*log.borrow(), [ScrollEventKind::DidScroll]);
        assert!((view.state().content_offset.y - 80.0).abs() < 1e-9);

        // Pinned at the top; nothing moves.
        log.borrow_mut().clear();
        view.scroll_to(Point::ZERO);
        view.scroll_by(Vec2::new(0.0, -10.0));
        assert_eq!(*log.borrow(), [ScrollEventKind::DidScroll]);
    }

    #[test]
    fn zoom_reports_zoom_and_scroll() {
        let (mut view, log) = recording_view();
        view.scroll_by(Vec2::new(0.0, 100.0));
        log.borrow_mut().clear();

        view.zoom_about(Point::new(50.0, 50.0), 2.0);
        assert_eq!(
            *log.borrow(),
            [ScrollEventKind::DidZoom, ScrollEventKind::DidScroll]
        );
        assert!((view.viewport().zoom() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn drag_lifecycle_with_deceleration() {
        let (mut view, log) = recording_view();
        view.begin_drag();
        assert!(view.is_dragging());
        let target = view.end_drag(Vec2::new(0.0, 100.0));
        assert!(view.is_decelerating());
        assert!(target.y > 0.0);
        view.end_decelerating();
        assert!((view.state().content_offset.y - target.y).abs() < 1e-9);

        assert_eq!(
            *log.borrow(),
            [
                ScrollEventKind::WillBeginDragging,
                ScrollEventKind::WillEndDragging,
                ScrollEventKind::DidEndDragging,
                ScrollEventKind::WillBeginDecelerating,
                ScrollEventKind::DidScroll,
                ScrollEventKind::DidEndDecelerating,
            ]
        );
    }

    #[test]
    fn observers_can_rewrite_drag_target() {
        let (mut view, _) = recording_view();
        view.observers_mut()
            .push(Box::new(|event: &mut ScrollEvent, _: &ScrollState| {
                if let ScrollEvent::WillEndDragging { target_offset, .. } = event {
                    *target_offset = Point::new(0.0, 20.0);
                }
            }));
        view.begin_drag();
        assert_eq!(view.end_drag(Vec2::new(0.0, 500.0)), Point::new(0.0, 20.0));
    }

    #[test]
    fn scroll_to_top_needs_permission() {
        let (mut view, log) = recording_view();
        view.scroll_by(Vec2::new(0.0, 50.0));
        log.borrow_mut().clear();

        assert!(!view.scroll_to_top());
        assert_eq!(*log.borrow(), [ScrollEventKind::ShouldScrollToTop]);

        view.observers_mut()
            .push(Box::new(|event: &mut ScrollEvent, _: &ScrollState| {
                if let ScrollEvent::ShouldScrollToTop { allow } = event {
                    *allow = true;
                }
            }));
        assert!(view.scroll_to_top());
        assert_eq!(view.state().content_offset.y, 0.0);
        assert_eq!(log.borrow().last(), Some(&ScrollEventKind::DidScrollToTop));
    }

    #[test]
    fn zoom_gesture_requires_target() {
        let (mut view, log) = recording_view();
        assert_eq!(view.begin_zoom(), None);
        assert!(!view.is_zooming());
        view.end_zoom();
        assert_eq!(*log.borrow(), [ScrollEventKind::ZoomTarget]);

        view.observers_mut()
            .insert_front(Box::new(|event: &mut ScrollEvent, _: &ScrollState| {
                if let ScrollEvent::ZoomTarget { target } = event {
                    *target = Some(ViewId(7));
                }
            }));
        assert_eq!(view.begin_zoom(), Some(ViewId(7)));
        view.end_zoom();
        assert_eq!(
            log.borrow()[1..],
            [
                ScrollEventKind::ZoomTarget,
                ScrollEventKind::WillBeginZooming,
                ScrollEventKind::DidEndZooming,
            ]
        );
    }

    #[test]
    fn content_inset_change_is_reported_once() {
        let (mut view, log) = recording_view();
        view.set_content_inset(Insets::uniform(4.0));
        view.set_content_inset(Insets::uniform(4.0));
        assert_eq!(*log.borrow(), [ScrollEventKind::DidChangeContentInset]);
        assert_eq!(view.state().content_inset, Insets::uniform(4.0));
    }

    #[test]
    fn directional_lock_keeps_dominant_axis() {
        let config = ScrollConfig {
            directional_lock: true,
            ..ScrollConfig::default()
        };
        let mut view = ScrollView::new(Rect::new(0.0, 0.0, 100.0, 100.0), config);
        view.set_content_bounds(Rect::new(0.0, 0.0, 1000.0, 1000.0));
        view.layout(Rect::new(0.0, 0.0, 100.0, 100.0));
        view.zoom_about(Point::ZERO, 10.0);
        view.begin_drag();
        view.scroll_by(Vec2::new(3.0, 20.0));
        let offset = view.state().content_offset;
        assert_eq!(offset.x, 0.0);
        assert!(offset.y > 0.0);
    }
}
