// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Imaging Reference Backend.
//!
//! This crate provides a small, stateful implementation of
//! [`ImagingBackend`] and [`ResourceBackend`] for **IR recording and state
//! tracing**.
//!
//! It does **not** rasterize to pixels. It is intended for tests, debugging,
//! and the headless demo, which want to assert on emitted ops, the imaging
//! state at the time each op was applied, and resource lifetimes.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use folio_imaging::{
    Affine, DrawOp, FillRule, ImagingBackend, ImagingOp, LayerOp, PaintDesc, PaintId, PathDesc,
    PathId, ResourceBackend, StateOp, StrokeStyle,
};

/// Snapshot of the current imaging state inside the backend.
#[derive(Clone, Debug, PartialEq)]
pub struct StateSnapshot {
    /// Current transform.
    pub transform: Affine,
    /// Number of active layers on the layer stack.
    pub layer_stack_depth: u32,
    /// The most recently pushed layer op, if any.
    pub layer_top: Option<LayerOp>,
    /// Current paint, if set.
    pub paint: Option<PaintId>,
    /// Current stroke style, if set.
    pub stroke: Option<StrokeStyle>,
    /// Current fill rule used for filling paths.
    pub fill_rule: FillRule,
}

impl Default for StateSnapshot {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            layer_stack_depth: 0,
            layer_top: None,
            paint: None,
            stroke: None,
            fill_rule: FillRule::NonZero,
        }
    }
}

/// Event recorded by the reference backend.
#[derive(Clone, Debug)]
pub enum Event {
    /// State operation and the resulting state snapshot.
    State {
        /// State operation that was applied.
        op: StateOp,
        /// Snapshot after applying the state operation.
        state: StateSnapshot,
    },
    /// Draw operation and the state snapshot used for drawing.
    Draw {
        /// Draw operation that was applied.
        op: DrawOp,
        /// Snapshot at the time of drawing.
        state: StateSnapshot,
    },
}

/// Simple reference implementation of the imaging backend.
///
/// This backend:
/// - Stores resource descriptors in vectors keyed by their IDs,
/// - Tracks current imaging state,
/// - Records high-level [`Event`]s as state and draw operations are applied.
#[derive(Default, Debug)]
pub struct RefBackend {
    /// Descriptors by id, with a liveness flag; destroyed entries are kept for
    /// inspection.
    paths: Vec<(PathDesc, bool)>,
    paints: Vec<(PaintDesc, bool)>,

    /// Log of events in the order they were applied.
    events: Vec<Event>,
    /// Underlying imaging ops.
    ops: Vec<ImagingOp>,
    /// Current imaging state.
    state: StateSnapshot,
    layer_stack: Vec<LayerOp>,
}

impl RefBackend {
    /// Returns a slice of recorded events.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns a slice of raw imaging operations.
    pub fn ops(&self) -> &[ImagingOp] {
        &self.ops
    }

    /// Iterates over the draw operations only, with the state they were drawn under.
    pub fn draws(&self) -> impl Iterator<Item = (&DrawOp, &StateSnapshot)> {
        self.events.iter().filter_map(|event| match event {
            Event::Draw { op, state } => Some((op, state)),
            Event::State { .. } => None,
        })
    }

    /// Returns the descriptor of a live path.
    pub fn path(&self, id: PathId) -> Option<&PathDesc> {
        self.paths
            .get(id.0 as usize)
            .and_then(|(desc, live)| live.then_some(desc))
    }

    /// Returns the descriptor of a live paint.
    pub fn paint(&self, id: PaintId) -> Option<&PaintDesc> {
        self.paints
            .get(id.0 as usize)
            .and_then(|(desc, live)| live.then_some(desc))
    }

    /// Returns the descriptor `id` was created with, even if since destroyed.
    pub fn created_path(&self, id: PathId) -> Option<&PathDesc> {
        self.paths.get(id.0 as usize).map(|(desc, _)| desc)
    }

    /// Returns the descriptor `id` was created with, even if since destroyed.
    pub fn created_paint(&self, id: PaintId) -> Option<&PaintDesc> {
        self.paints.get(id.0 as usize).map(|(desc, _)| desc)
    }

    /// Number of paths created and not yet destroyed.
    pub fn live_paths(&self) -> usize {
        self.paths.iter().filter(|(_, live)| *live).count()
    }

    /// Number of paints created and not yet destroyed.
    pub fn live_paints(&self) -> usize {
        self.paints.iter().filter(|(_, live)| *live).count()
    }

    /// Current depth of the layer stack.
    pub fn layer_depth(&self) -> usize {
        self.layer_stack.len()
    }

    /// Clears all recorded events and ops but keeps resources.
    pub fn clear_events(&mut self) {
        self.events.clear();
        self.ops.clear();
    }

    fn sync_layer_state(&mut self) {
        self.state.layer_stack_depth = u32::try_from(self.layer_stack.len())
            .expect("RefBackend: too many layer stack entries for u32");
        self.state.layer_top = self.layer_stack.last().cloned();
    }
}

impl ResourceBackend for RefBackend {
    fn create_path(&mut self, desc: PathDesc) -> PathId {
        let id =
            u32::try_from(self.paths.len()).expect("RefBackend: too many paths for u32 PathId");
        self.paths.push((desc, true));
        PathId(id)
    }

    fn destroy_path(&mut self, id: PathId) {
        if let Some((_, live)) = self.paths.get_mut(id.0 as usize) {
            *live = false;
        }
    }

    fn create_paint(&mut self, desc: PaintDesc) -> PaintId {
        let id =
            u32::try_from(self.paints.len()).expect("RefBackend: too many paints for u32 PaintId");
        self.paints.push((desc, true));
        PaintId(id)
    }

    fn destroy_paint(&mut self, id: PaintId) {
        if let Some((_, live)) = self.paints.get_mut(id.0 as usize) {
            *live = false;
        }
    }
}

impl ImagingBackend for RefBackend {
    fn state(&mut self, op: StateOp) {
        match &op {
            StateOp::SetTransform(tx) => self.state.transform = *tx,
            StateOp::PushLayer(layer) => {
                self.layer_stack.push(layer.clone());
                self.sync_layer_state();
            }
            StateOp::PopLayer => {
                self.layer_stack.pop();
                self.sync_layer_state();
            }
            StateOp::SetPaint(id) => self.state.paint = Some(*id),
            StateOp::SetStroke(style) => self.state.stroke = Some(style.clone()),
            StateOp::SetFillRule(rule) => self.state.fill_rule = *rule,
        }

        self.ops.push(ImagingOp::State(op.clone()));
        self.events.push(Event::State {
            op,
            state: self.state.clone(),
        });
    }

    fn draw(&mut self, op: DrawOp) {
        self.ops.push(ImagingOp::Draw(op.clone()));
        self.events.push(Event::Draw {
            op,
            state: self.state.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Point, Rect};
    use peniko::{Brush, Color};

    fn square() -> PathDesc {
        PathDesc::polygon(&[
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ])
    }

    #[test]
    fn basic_state_and_draw() {
        let mut backend = RefBackend::default();

        let paint = backend.create_paint(PaintDesc {
            brush: Brush::Solid(Color::WHITE),
        });
        let path = backend.create_path(square());

        backend.state(StateOp::SetPaint(paint));
        backend.draw(DrawOp::FillPath(path));

        assert_eq!(backend.events().len(), 2);
        assert_eq!(backend.ops().len(), 2);

        let (op, state) = backend.draws().next().expect("one draw");
        assert_eq!(op, &DrawOp::FillPath(path));
        assert_eq!(state.paint, Some(paint));
    }

    #[test]
    fn state_snapshot_tracks_layers() {
        let mut backend = RefBackend::default();

        backend.state(StateOp::SetTransform(Affine::scale(2.0)));
        backend.layer_push(LayerOp::clip_rect(Rect::new(0.0, 0.0, 10.0, 10.0)));

        let last = backend.events().last().expect("at least one event");
        let Event::State { state, .. } = last else {
            panic!("expected final event to be State");
        };
        assert_eq!(state.transform, Affine::scale(2.0));
        assert_eq!(state.layer_stack_depth, 1);
        assert!(state.layer_top.is_some());

        backend.layer_pop();
        assert_eq!(backend.layer_depth(), 0);
    }

    #[test]
    fn clear_events_keeps_resources_usable() {
        let mut backend = RefBackend::default();

        let paint = backend.create_paint(PaintDesc {
            brush: Brush::Solid(Color::WHITE),
        });
        let path = backend.create_path(square());

        backend.state(StateOp::SetPaint(paint));
        backend.draw(DrawOp::FillPath(path));
        backend.clear_events();
        assert!(backend.events().is_empty());
        assert!(backend.ops().is_empty());

        backend.state(StateOp::SetPaint(paint));
        backend.draw(DrawOp::FillPath(path));
        assert_eq!(backend.events().len(), 2);
        assert_eq!(backend.path(path), Some(&square()));
    }

    #[test]
    fn resource_destroy_is_tolerant() {
        let mut backend = RefBackend::default();

        let path = backend.create_path(square());
        let paint = backend.create_paint(PaintDesc {
            brush: Brush::Solid(Color::WHITE),
        });
        assert_eq!((backend.live_paths(), backend.live_paints()), (1, 1));

        backend.destroy_path(path);
        backend.destroy_paint(paint);
        assert_eq!((backend.live_paths(), backend.live_paints()), (0, 0));
        assert!(backend.path(path).is_none());
        assert!(backend.paint(paint).is_none());
        assert_eq!(backend.created_path(path), Some(&square()));
        assert!(backend.created_paint(paint).is_some());

        // Double-destroy should not panic.
        backend.destroy_path(path);
        backend.destroy_paint(paint);
    }
}
