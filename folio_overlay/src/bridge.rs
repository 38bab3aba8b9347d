// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;

use folio_scroll::{ObserverChain, ObserverId, ScrollEvent, ScrollObserver, ScrollState};

use crate::redraw::RedrawHandle;

/// Keeps an overlay in step with a scroll view.
///
/// On [`ScrollEvent::DidScroll`] and [`ScrollEvent::DidZoom`] the bridge
/// requests a redraw. Every event, including those it does not act on, is
/// then forwarded to the observers that were registered before the bridge
/// was installed, so their answers to query events still reach the scroll
/// view.
#[derive(Debug)]
pub struct ScrollSyncBridge {
    downstream: ObserverChain,
    redraw: RedrawHandle,
}

impl ScrollSyncBridge {
    /// Creates a bridge forwarding to `downstream`.
    #[must_use]
    pub fn new(downstream: ObserverChain, redraw: RedrawHandle) -> Self {
        Self { downstream, redraw }
    }

    /// Installs a bridge into `chain`.
    ///
    /// The observers currently in `chain` move behind the bridge and keep
    /// their order; the bridge becomes the chain's only direct observer.
    pub fn install(chain: &mut ObserverChain, redraw: RedrawHandle) -> ObserverId {
        let downstream = chain.take();
        log::debug!(
            "installing scroll sync bridge over {} observer(s)",
            downstream.len()
        );
        chain.push(Box::new(Self::new(downstream, redraw)))
    }

    /// The observers this bridge forwards to.
    #[must_use]
    pub fn downstream(&self) -> &ObserverChain {
        &self.downstream
    }

    /// The redraw state this bridge drives.
    #[must_use]
    pub fn redraw_handle(&self) -> &RedrawHandle {
        &self.redraw
    }
}

impl ScrollObserver for ScrollSyncBridge {
    fn on_scroll_event(&mut self, event: &mut ScrollEvent, state: &ScrollState) {
        if event.changes_transform() {
            self.redraw.request();
        }
        self.downstream.dispatch(event, state);
    }
}
