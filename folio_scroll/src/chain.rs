// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::event::{ScrollEvent, ScrollState};

/// Receives scroll view notifications.
///
/// Query events ([`ScrollEvent::WillEndDragging`], [`ScrollEvent::ZoomTarget`],
/// [`ScrollEvent::ShouldScrollToTop`]) are answered by writing into the event.
///
/// Closures of the shape `FnMut(&mut ScrollEvent, &ScrollState)` are observers.
pub trait ScrollObserver {
    /// Handles one notification.
    fn on_scroll_event(&mut self, event: &mut ScrollEvent, state: &ScrollState);
}

impl<F> ScrollObserver for F
where
    F: FnMut(&mut ScrollEvent, &ScrollState),
{
    fn on_scroll_event(&mut self, event: &mut ScrollEvent, state: &ScrollState) {
        self(event, state);
    }
}

/// Identifier of an observer registration.
///
/// Issued by the chain the observer was registered with. A chain created by
/// [`ObserverChain::take`] carries the counter along, so ids registered on the
/// source chain afterwards never collide with the ones that moved.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u32);

/// Ordered list of scroll observers.
///
/// [`ObserverChain::dispatch`] delivers an event to every observer exactly
/// once, front to back. Later observers see answers written by earlier ones.
#[derive(Default)]
pub struct ObserverChain {
    observers: Vec<(ObserverId, Box<dyn ScrollObserver>)>,
    next_id: u32,
}

impl ObserverChain {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `observer` behind all current observers.
    pub fn push(&mut self, observer: Box<dyn ScrollObserver>) -> ObserverId {
        let id = self.issue_id();
        self.observers.push((id, observer));
        id
    }

    /// Registers `observer` in front of all current observers.
    pub fn insert_front(&mut self, observer: Box<dyn ScrollObserver>) -> ObserverId {
        let id = self.issue_id();
        self.observers.insert(0, (id, observer));
        id
    }

    /// Removes the observer registered as `id` and returns it.
    pub fn remove(&mut self, id: ObserverId) -> Option<Box<dyn ScrollObserver>> {
        let index = self.observers.iter().position(|(i, _)| *i == id)?;
        Some(self.observers.remove(index).1)
    }

    /// Returns `true` if `id` is registered in this chain.
    #[must_use]
    pub fn contains(&self, id: ObserverId) -> bool {
        self.observers.iter().any(|(i, _)| *i == id)
    }

    /// Registration ids, in dispatch order.
    pub fn ids(&self) -> impl Iterator<Item = ObserverId> + '_ {
        self.observers.iter().map(|(id, _)| *id)
    }

    /// Number of registered observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Returns `true` if no observer is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Moves every observer out into a new chain, leaving this one empty.
    ///
    /// Registration ids are preserved.
    #[must_use]
    pub fn take(&mut self) -> Self {
        Self {
            observers: core::mem::take(&mut self.observers),
            next_id: self.next_id,
        }
    }

    /// Delivers `event` to every observer in order.
    pub fn dispatch(&mut self, event: &mut ScrollEvent, state: &ScrollState) {
        for (id, observer) in &mut self.observers {
            log::trace!("dispatch {:?} to observer {:?}", event.kind(), id);
            observer.on_scroll_event(event, state);
        }
    }
}

impl ObserverChain {
    fn issue_id(&mut self) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }
}

impl fmt::Debug for ObserverChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverChain")
            .field("ids", &self.observers.iter().map(|(id, _)| id).collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
