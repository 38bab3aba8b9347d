// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Insets, Point, Vec2};

/// Opaque identifier of a view that can be scaled by a zoom gesture.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ViewId(pub u32);

/// Scroll view state delivered alongside every notification.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollState {
    /// Document point shown at the view origin.
    pub content_offset: Point,
    /// Current zoom factor.
    pub zoom: f64,
    /// Content inset reported by the host.
    pub content_inset: Insets,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            content_offset: Point::ZERO,
            zoom: 1.0,
            content_inset: Insets::ZERO,
        }
    }
}

/// A scroll view lifecycle notification.
///
/// The three query variants carry an answer slot that observers may rewrite
/// during dispatch.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ScrollEvent {
    /// The content offset changed.
    DidScroll,
    /// The zoom factor changed.
    DidZoom,
    /// A drag gesture is about to start scrolling.
    WillBeginDragging,
    /// A drag gesture ended; `target_offset` is where deceleration will stop.
    WillEndDragging {
        /// Lift‑off velocity in view units per second.
        velocity: Vec2,
        /// Projected resting offset, in document space. Observers may rewrite it.
        target_offset: Point,
    },
    /// A drag gesture ended.
    DidEndDragging {
        /// Whether scrolling continues with deceleration.
        will_decelerate: bool,
    },
    /// Deceleration is about to start.
    WillBeginDecelerating,
    /// Deceleration finished.
    DidEndDecelerating,
    /// A programmatic scroll animation finished.
    DidEndScrollingAnimation,
    /// Asks which view a zoom gesture should scale.
    ZoomTarget {
        /// The answer; `None` means zooming is not supported.
        target: Option<ViewId>,
    },
    /// A zoom gesture is about to start.
    WillBeginZooming,
    /// A zoom gesture ended at `scale`.
    DidEndZooming {
        /// Final zoom factor.
        scale: f64,
    },
    /// Asks whether a scroll‑to‑top request should be honored.
    ShouldScrollToTop {
        /// The answer.
        allow: bool,
    },
    /// The view scrolled to the top after a scroll‑to‑top request.
    DidScrollToTop,
    /// The content inset changed.
    DidChangeContentInset,
}

/// Discriminant of a [`ScrollEvent`], without payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScrollEventKind {
    /// [`ScrollEvent::DidScroll`].
    DidScroll,
    /// [`ScrollEvent::DidZoom`].
    DidZoom,
    /// [`ScrollEvent::WillBeginDragging`].
    WillBeginDragging,
    /// [`ScrollEvent::WillEndDragging`].
    WillEndDragging,
    /// [`ScrollEvent::DidEndDragging`].
    DidEndDragging,
    /// [`ScrollEvent::WillBeginDecelerating`].
    WillBeginDecelerating,
    /// [`ScrollEvent::DidEndDecelerating`].
    DidEndDecelerating,
    /// [`ScrollEvent::DidEndScrollingAnimation`].
    DidEndScrollingAnimation,
    /// [`ScrollEvent::ZoomTarget`].
    ZoomTarget,
    /// [`ScrollEvent::WillBeginZooming`].
    WillBeginZooming,
    /// [`ScrollEvent::DidEndZooming`].
    DidEndZooming,
    /// [`ScrollEvent::ShouldScrollToTop`].
    ShouldScrollToTop,
    /// [`ScrollEvent::DidScrollToTop`].
    DidScrollToTop,
    /// [`ScrollEvent::DidChangeContentInset`].
    DidChangeContentInset,
}

impl ScrollEventKind {
    /// Every kind, in lifecycle order.
    pub const ALL: [Self; 14] = [
        Self::DidScroll,
        Self::DidZoom,
        Self::WillBeginDragging,
        Self::WillEndDragging,
        Self::DidEndDragging,
        Self::WillBeginDecelerating,
        Self::DidEndDecelerating,
        Self::DidEndScrollingAnimation,
        Self::ZoomTarget,
        Self::WillBeginZooming,
        Self::DidEndZooming,
        Self::ShouldScrollToTop,
        Self::DidScrollToTop,
        Self::DidChangeContentInset,
    ];
}

impl ScrollEvent {
    /// The payload‑free kind of this event.
    #[must_use]
    pub fn kind(&self) -> ScrollEventKind {
        match self {
            Self::DidScroll => ScrollEventKind::DidScroll,
            Self::DidZoom => ScrollEventKind::DidZoom,
            Self::WillBeginDragging => ScrollEventKind::WillBeginDragging,
            Self::WillEndDragging { .. } => ScrollEventKind::WillEndDragging,
            Self::DidEndDragging { .. } => ScrollEventKind::DidEndDragging,
            Self::WillBeginDecelerating => ScrollEventKind::WillBeginDecelerating,
            Self::DidEndDecelerating => ScrollEventKind::DidEndDecelerating,
            Self::DidEndScrollingAnimation => ScrollEventKind::DidEndScrollingAnimation,
            Self::ZoomTarget { .. } => ScrollEventKind::ZoomTarget,
            Self::WillBeginZooming => ScrollEventKind::WillBeginZooming,
            Self::DidEndZooming { .. } => ScrollEventKind::DidEndZooming,
            Self::ShouldScrollToTop { .. } => ScrollEventKind::ShouldScrollToTop,
            Self::DidScrollToTop => ScrollEventKind::DidScrollToTop,
            Self::DidChangeContentInset => ScrollEventKind::DidChangeContentInset,
        }
    }

    /// A representative event of `kind`, with neutral payload.
    ///
    /// Query slots start out unanswered (`None` / `false`).
    #[must_use]
    pub fn sample(kind: ScrollEventKind) -> Self {
        match kind {
            ScrollEventKind::DidScroll => Self::DidScroll,
            ScrollEventKind::DidZoom => Self::DidZoom,
            ScrollEventKind::WillBeginDragging => Self::WillBeginDragging,
            ScrollEventKind::WillEndDragging => Self::WillEndDragging {
                velocity: Vec2::ZERO,
                target_offset: Point::ZERO,
            },
            ScrollEventKind::DidEndDragging => Self::DidEndDragging {
                will_decelerate: false,
            },
            ScrollEventKind::WillBeginDecelerating => Self::WillBeginDecelerating,
            ScrollEventKind::DidEndDecelerating => Self::DidEndDecelerating,
            ScrollEventKind::DidEndScrollingAnimation => Self::DidEndScrollingAnimation,
            ScrollEventKind::ZoomTarget => Self::ZoomTarget { target: None },
            ScrollEventKind::WillBeginZooming => Self::WillBeginZooming,
            ScrollEventKind::DidEndZooming => Self::DidEndZooming { scale: 1.0 },
            ScrollEventKind::ShouldScrollToTop => Self::ShouldScrollToTop { allow: false },
            ScrollEventKind::DidScrollToTop => Self::DidScrollToTop,
            ScrollEventKind::DidChangeContentInset => Self::DidChangeContentInset,
        }
    }

    /// Returns `true` for the notifications that move or scale the content.
    #[must_use]
    pub fn changes_transform(&self) -> bool {
        matches!(self, Self::DidScroll | Self::DidZoom)
    }
}
