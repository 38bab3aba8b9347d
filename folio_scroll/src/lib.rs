// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Scroll: scroll/zoom notifications and an ordered observer chain.
//!
//! ## Overview
//!
//! A scrollable document view reports its lifecycle (scrolling, dragging,
//! decelerating, zooming, inset changes, scroll‑to‑top requests) as
//! [`ScrollEvent`]s. Interested parties implement [`ScrollObserver`] and
//! register in an [`ObserverChain`]: an ordered list in which every observer
//! sees every event exactly once per dispatch, front to back.
//!
//! Query‑style events carry an answer slot that observers may fill in place:
//! [`ScrollEvent::WillEndDragging`] (`target_offset`),
//! [`ScrollEvent::ZoomTarget`] (`target`) and
//! [`ScrollEvent::ShouldScrollToTop`] (`allow`). The chain never stops
//! propagation; an observer that wants to wrap others owns them in an inner
//! chain and forwards.
//!
//! [`ScrollView`] is a headless model of the platform scroll widget: it owns a
//! [`folio_view::Viewport`] and an [`ObserverChain`] and emits the matching
//! notifications as the host drives it.
//!
//! ## Example
//!
//! ```
//! use folio_scroll::{ObserverChain, ScrollEvent, ScrollState};
//!
//! let mut chain = ObserverChain::new();
//! chain.push(Box::new(|event: &mut ScrollEvent, _: &ScrollState| {
//!     if let ScrollEvent::ShouldScrollToTop { allow } = event {
//!         *allow = true;
//!     }
//! }));
//!
//! let mut ask = ScrollEvent::ShouldScrollToTop { allow: false };
//! chain.dispatch(&mut ask, &ScrollState::default());
//! assert_eq!(ask, ScrollEvent::ShouldScrollToTop { allow: true });
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod chain;
mod event;
mod view;

pub use chain::{ObserverChain, ObserverId, ScrollObserver};
pub use event::{ScrollEvent, ScrollEventKind, ScrollState, ViewId};
pub use view::{ScrollConfig, ScrollView};
