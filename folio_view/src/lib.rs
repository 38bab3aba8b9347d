// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio View: pages, page layout, and a pan/zoom viewport over a document.
//!
//! This crate provides small, headless models of a paged document as shown in
//! a scrollable, zoomable viewer. It focuses on:
//! - Page identity and size ([`Page`], [`PageIndex`]).
//! - Laying pages out in a shared document plane ([`PageLayout`]).
//! - Viewport state (pan + zoom) and conversion between document and view
//!   space ([`Viewport`]).
//! - The [`PageGeometry`] capability: list pages and convert points between a
//!   page's local space and the view.
//!
//! It does **not** rasterize documents or own any widget. Callers are
//! expected to:
//! - Load page sizes from a document backend (see `folio_document`).
//! - Drive [`Viewport`] from their scroll/zoom input (see `folio_scroll`).
//! - Build a fresh [`ViewportGeometry`] for every paint pass, so conversions
//!   always reflect the current pan and zoom.
//!
//! ## Coordinate spaces
//!
//! - **Page‑local** space follows PDF user space: origin at the bottom‑left of
//!   the page, x to the right, y up.
//! - **Document** space is the plane the pages are stacked in: y down, pages in
//!   document order from top to bottom.
//! - **View** space is the visible surface: y down, origin at the top‑left of
//!   the view rect.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use folio_view::{
//!     ConvertDirection, LayoutConfig, PageGeometry, PageIndex, PageLayout, Viewport,
//!     ViewportGeometry,
//! };
//!
//! let layout = PageLayout::from_sizes([Size::new(300.0, 600.0)], LayoutConfig::default());
//! let mut viewport = Viewport::new(Rect::new(0.0, 0.0, 400.0, 800.0));
//! viewport.set_content_bounds(Some(layout.content_bounds()));
//! viewport.fit_width(layout.content_bounds());
//!
//! let geometry = ViewportGeometry::new(&layout, &viewport);
//! let corner = Point::new(100.0, 200.0);
//! let on_screen = geometry.convert(corner, PageIndex(0), ConvertDirection::FromPage);
//! let back = geometry.convert(on_screen, PageIndex(0), ConvertDirection::ToPage);
//! assert!((back - Point::new(100.0, 200.0)).hypot() < 1e-9);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod geometry;
mod layout;
mod modes;
mod page;
mod viewport;

pub use geometry::{ConvertDirection, PageGeometry, ViewportGeometry, checked_convert};
pub use layout::{LayoutConfig, PageLayout};
pub use modes::{ClampMode, FitMode};
pub use page::{Page, PageIndex};
pub use viewport::{Viewport, ViewportSnapshot};
