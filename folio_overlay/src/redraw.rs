// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::Rc;
use core::cell::Cell;

/// Shared handle onto an overlay's pending‑redraw state.
///
/// The state is a dirty flag, not a queue: requests made before the next
/// paint pass collapse into one repaint. Counters record how many requests
/// and completed paint passes there have been, for hosts and tests that need
/// to observe the traffic.
///
/// Clones share the same state. The handle is single‑threaded (`!Send`).
#[derive(Clone, Debug, Default)]
pub struct RedrawHandle {
    state: Rc<RedrawState>,
}

#[derive(Debug, Default)]
struct RedrawState {
    pending: Cell<bool>,
    requests: Cell<u64>,
    paints: Cell<u64>,
}

impl RedrawHandle {
    /// Creates an idle handle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a repaint on the next paint pass.
    pub fn request(&self) {
        self.state.pending.set(true);
        self.state.requests.set(self.state.requests.get() + 1);
    }

    /// Returns `true` if a repaint has been requested and not yet performed.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.state.pending.get()
    }

    /// Marks a paint pass as done, returning to idle.
    pub fn complete(&self) {
        self.state.pending.set(false);
        self.state.paints.set(self.state.paints.get() + 1);
    }

    /// Total number of requests made through any clone of this handle.
    #[must_use]
    pub fn requests(&self) -> u64 {
        self.state.requests.get()
    }

    /// Total number of completed paint passes.
    #[must_use]
    pub fn paints(&self) -> u64 {
        self.state.paints.get()
    }

    /// Returns `true` if `other` shares this handle's state.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}
