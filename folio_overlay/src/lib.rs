// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Overlay: page‑anchored annotation shapes drawn over a document view.
//!
//! ## Overview
//!
//! - [`AnnotationShape`]: a closed polygon in one page's local space, with a
//!   [`ShapeStyle`]. [`default_shapes`] builds one centered quadrilateral per
//!   page.
//! - [`OverlayRenderer`]: paints shapes through a
//!   [`PageGeometry`](folio_view::PageGeometry) into any
//!   [`ImagingBackend`](folio_imaging::ImagingBackend). Points are projected
//!   on every paint; nothing is cached between frames.
//! - [`RedrawHandle`]: the overlay's pending‑redraw flag, shared between the
//!   renderer and whoever requests repaints.
//! - [`ScrollSyncBridge`]: a [`ScrollObserver`](folio_scroll::ScrollObserver)
//!   that requests a redraw on scroll and zoom and forwards every notification
//!   to the observers it displaced.
//! - [`CompositeView`]: stacks the overlay layer above the document layer.
//!
//! ## Example
//!
//! ```
//! use folio_imaging_ref::RefBackend;
//! use folio_overlay::{OverlayRenderer, ScrollSyncBridge};
//! use folio_scroll::{ScrollConfig, ScrollView};
//! use folio_view::{LayoutConfig, PageLayout, ViewportGeometry};
//! use kurbo::{Rect, Size, Vec2};
//!
//! let layout = PageLayout::from_sizes([Size::new(300.0, 600.0)], LayoutConfig::default());
//! let view_rect = Rect::new(0.0, 0.0, 316.0, 400.0);
//! let mut scroll = ScrollView::new(view_rect, ScrollConfig::default());
//! scroll.set_content_bounds(layout.content_bounds());
//! scroll.layout(view_rect);
//!
//! let mut overlay = OverlayRenderer::with_pages(layout.pages());
//! ScrollSyncBridge::install(scroll.observers_mut(), overlay.redraw_handle());
//!
//! scroll.scroll_by(Vec2::new(0.0, 50.0));
//! assert!(overlay.needs_paint());
//!
//! let mut backend = RefBackend::default();
//! let geometry = ViewportGeometry::new(&layout, scroll.viewport());
//! assert_eq!(overlay.paint(&geometry, &mut backend), 1);
//! assert!(!overlay.needs_paint());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod bridge;
mod composite;
mod redraw;
mod renderer;
mod shape;

pub use bridge::ScrollSyncBridge;
pub use composite::{CompositeView, LayerKind, LayerSlot};
pub use redraw::RedrawHandle;
pub use renderer::OverlayRenderer;
pub use shape::{AnnotationShape, ShapeError, ShapeStyle, default_shapes, validate_shapes};
