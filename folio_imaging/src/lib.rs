// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Imaging: backend-agnostic imaging IR and backend traits.
//!
//! This crate defines the small, plain‑old‑data imaging vocabulary that
//! Folio's layers paint with, and the traits a paint backend implements to
//! consume it. It sits between the overlay/composite layers and whatever
//! actually produces pixels (a GPU renderer, a CPU rasterizer, or the
//! recording backend in `folio_imaging_ref`).
//!
//! # Core concepts
//!
//! - **Resources**: opaque handles ([`PathId`], [`PaintId`]) whose lifetimes
//!   are managed via [`ResourceBackend`].
//! - **Imaging operations**: [`StateOp`] (mutate state) and [`DrawOp`]
//!   (produce pixels), combined into [`ImagingOp`] for logging and replay.
//! - **Layers**: [`LayerOp`] scopes clipping and opacity; every
//!   [`StateOp::PushLayer`] must be matched by a [`StateOp::PopLayer`].
//!   [`ImagingBackendExt::with_layer`] keeps the pairing balanced.
//!
//! # Example
//!
//! ```
//! use folio_imaging::{DrawOp, ImagingBackend, PaintDesc, PathDesc, StateOp};
//! use kurbo::Point;
//! use peniko::{Brush, Color};
//!
//! fn paint_triangle(backend: &mut impl ImagingBackend) {
//!     let path = backend.create_path(PathDesc::polygon(&[
//!         Point::new(0.0, 0.0),
//!         Point::new(10.0, 0.0),
//!         Point::new(5.0, 8.0),
//!     ]));
//!     let paint = backend.create_paint(PaintDesc {
//!         brush: Brush::Solid(Color::WHITE),
//!     });
//!     backend.state(StateOp::SetPaint(paint));
//!     backend.draw(DrawOp::FillPath(path));
//!     backend.destroy_paint(paint);
//!     backend.destroy_path(path);
//! }
//! ```

#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;

use kurbo::Point;
use peniko::Brush;
pub use peniko::Fill as FillRule;

/// Identifier for a path resource.
///
/// Stable for the lifetime of the resource.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PathId(pub u32);

/// Identifier for a paint resource.
///
/// Stable for the lifetime of the resource.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PaintId(pub u32);

/// Affine transform type used by the imaging IR.
pub type Affine = kurbo::Affine;

/// A simple axis-aligned rectangle in f32 coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RectF {
    /// Minimum X coordinate.
    pub x0: f32,
    /// Minimum Y coordinate.
    pub y0: f32,
    /// Maximum X coordinate.
    pub x1: f32,
    /// Maximum Y coordinate.
    pub y1: f32,
}

impl RectF {
    /// Create a new rectangle from min/max corners.
    #[inline]
    pub const fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Narrow a kurbo rectangle to f32 coordinates.
    #[inline]
    pub fn from_kurbo(rect: kurbo::Rect) -> Self {
        Self::new(
            f64_to_f32(rect.x0),
            f64_to_f32(rect.y0),
            f64_to_f32(rect.x1),
            f64_to_f32(rect.y1),
        )
    }

    /// Convert to kurbo's rectangle type.
    #[inline]
    pub fn to_kurbo(self) -> kurbo::Rect {
        kurbo::Rect::new(
            f64::from(self.x0),
            f64::from(self.y0),
            f64::from(self.x1),
            f64::from(self.y1),
        )
    }
}

/// Layer scope pushed with [`StateOp::PushLayer`].
#[derive(Clone, Debug, PartialEq, Default)]
pub struct LayerOp {
    /// Optional rectangular clip, in local coordinates.
    pub clip: Option<RectF>,
    /// Optional group opacity in `[0, 1]`.
    pub opacity: Option<f32>,
}

impl LayerOp {
    /// A layer that only clips to `rect`.
    #[inline]
    pub fn clip_rect(rect: kurbo::Rect) -> Self {
        Self {
            clip: Some(RectF::from_kurbo(rect)),
            opacity: None,
        }
    }

    /// Returns `true` if this layer neither clips nor changes opacity.
    #[inline]
    pub fn is_noop(&self) -> bool {
        self.clip.is_none() && self.opacity.is_none_or(|o| o >= 1.0)
    }
}

/// Stroke style used for stroking paths.
///
/// This is a re-export of [`kurbo::Stroke`].
pub type StrokeStyle = kurbo::Stroke;

/// State operations that mutate the current imaging state.
#[derive(Clone, Debug, PartialEq)]
pub enum StateOp {
    /// Set the current transform matrix.
    SetTransform(Affine),
    /// Push a new layer onto the layer stack.
    PushLayer(LayerOp),
    /// Pop the most recently pushed layer.
    PopLayer,
    /// Set the current paint resource.
    SetPaint(PaintId),
    /// Set the current stroke style.
    SetStroke(StrokeStyle),
    /// Set the fill rule used by [`DrawOp::FillPath`].
    ///
    /// The default fill rule is [`FillRule::NonZero`].
    SetFillRule(FillRule),
}

/// Draw operations that produce pixels given the current state.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Fill the given path with the current paint.
    FillPath(PathId),
    /// Stroke the given path with the current stroke and paint.
    StrokePath(PathId),
    /// Fill an axis-aligned rectangle with the current paint.
    FillRect(RectF),
}

/// Path command, in f32 coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PathCmd {
    /// Move the current point without drawing.
    MoveTo {
        /// X coordinate of the new point.
        x: f32,
        /// Y coordinate of the new point.
        y: f32,
    },
    /// Draw a line from the current point to the given point.
    LineTo {
        /// X coordinate of the line end.
        x: f32,
        /// Y coordinate of the line end.
        y: f32,
    },
    /// Close the current subpath.
    Close,
}

/// Description of a path resource.
#[derive(Clone, Debug, PartialEq)]
pub struct PathDesc {
    /// Command buffer describing the path geometry.
    pub commands: Box<[PathCmd]>,
}

impl PathDesc {
    /// A closed polygon through `points`, in order.
    ///
    /// An empty slice produces an empty path.
    pub fn polygon(points: &[Point]) -> Self {
        let mut commands = Vec::with_capacity(points.len() + 1);
        let mut iter = points.iter();
        if let Some(first) = iter.next() {
            commands.push(PathCmd::MoveTo {
                x: f64_to_f32(first.x),
                y: f64_to_f32(first.y),
            });
            commands.extend(iter.map(|p| PathCmd::LineTo {
                x: f64_to_f32(p.x),
                y: f64_to_f32(p.y),
            }));
            commands.push(PathCmd::Close);
        }
        Self {
            commands: commands.into_boxed_slice(),
        }
    }
}

/// Description of a paint resource.
#[derive(Clone, Debug, PartialEq)]
pub struct PaintDesc {
    /// Brush used when rendering (solid color, gradient, image, etc.).
    pub brush: Brush,
}

/// Resource lifetime interface.
///
/// IDs must remain valid and refer to the same logical resource until the
/// corresponding `destroy_*` function is called. Destroying an unknown or
/// already destroyed ID must be tolerated.
pub trait ResourceBackend {
    /// Create a path resource.
    fn create_path(&mut self, desc: PathDesc) -> PathId;
    /// Destroy a previously created path.
    fn destroy_path(&mut self, id: PathId);

    /// Create a paint resource.
    fn create_paint(&mut self, desc: PaintDesc) -> PaintId;
    /// Destroy a previously created paint.
    fn destroy_paint(&mut self, id: PaintId);
}

/// A single imaging operation.
#[derive(Clone, Debug, PartialEq)]
pub enum ImagingOp {
    /// State change.
    State(StateOp),
    /// Draw call.
    Draw(DrawOp),
}

/// Minimal imaging backend trait.
pub trait ImagingBackend: ResourceBackend {
    /// Apply a state operation.
    fn state(&mut self, op: StateOp);

    /// Apply a draw operation.
    fn draw(&mut self, op: DrawOp);

    /// Push a new layer onto the layer stack.
    ///
    /// This is equivalent to `self.state(StateOp::PushLayer(op))`.
    #[inline]
    fn layer_push(&mut self, op: LayerOp) {
        self.state(StateOp::PushLayer(op));
    }

    /// Pop the most recently pushed layer.
    ///
    /// This is equivalent to `self.state(StateOp::PopLayer)`.
    #[inline]
    fn layer_pop(&mut self) {
        self.state(StateOp::PopLayer);
    }
}

/// Convenience helpers for `ImagingBackend` implementations and callers.
///
/// This is separate from [`ImagingBackend`] so that methods can accept closures and return values
/// without complicating trait object usage (`&mut dyn ImagingBackend`).
pub trait ImagingBackendExt: ImagingBackend {
    /// Run `f` inside a layer scope, popping the layer afterwards.
    fn with_layer<R>(&mut self, op: LayerOp, f: impl FnOnce(&mut Self) -> R) -> R {
        self.layer_push(op);
        let result = f(self);
        self.layer_pop();
        result
    }

    /// Run `f` with a paint created from `brush`, destroying it afterwards.
    fn with_paint<R>(&mut self, brush: Brush, f: impl FnOnce(&mut Self, PaintId) -> R) -> R {
        let paint = self.create_paint(PaintDesc { brush });
        let result = f(self, paint);
        self.destroy_paint(paint);
        result
    }
}

impl<B: ImagingBackend + ?Sized> ImagingBackendExt for B {}

#[allow(
    clippy::cast_possible_truncation,
    reason = "the imaging IR consumes f32; truncation from f64 geometry is acceptable"
)]
fn f64_to_f32(v: f64) -> f32 {
    v as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use peniko::Color;

    /// Trivial in-memory backend that records operations for testing.
    #[derive(Default)]
    struct RecordingBackend {
        next_path: u32,
        next_paint: u32,
        live_paints: Vec<PaintId>,
        ops: Vec<ImagingOp>,
    }

    impl ResourceBackend for RecordingBackend {
        fn create_path(&mut self, _desc: PathDesc) -> PathId {
            let id = self.next_path;
            self.next_path += 1;
            PathId(id)
        }

        fn destroy_path(&mut self, _id: PathId) {}

        fn create_paint(&mut self, _desc: PaintDesc) -> PaintId {
            let id = PaintId(self.next_paint);
            self.next_paint += 1;
            self.live_paints.push(id);
            id
        }

        fn destroy_paint(&mut self, id: PaintId) {
            self.live_paints.retain(|p| *p != id);
        }
    }

    impl ImagingBackend for RecordingBackend {
        fn state(&mut self, op: StateOp) {
            self.ops.push(ImagingOp::State(op));
        }

        fn draw(&mut self, op: DrawOp) {
            self.ops.push(ImagingOp::Draw(op));
        }
    }

    #[test]
    fn polygon_is_closed() {
        let desc = PathDesc::polygon(&[
            Point::new(1.0, 2.0),
            Point::new(3.0, 4.0),
            Point::new(5.0, 6.0),
        ]);
        assert_eq!(
            &*desc.commands,
            &[
                PathCmd::MoveTo { x: 1.0, y: 2.0 },
                PathCmd::LineTo { x: 3.0, y: 4.0 },
                PathCmd::LineTo { x: 5.0, y: 6.0 },
                PathCmd::Close,
            ]
        );
    }

    #[test]
    fn empty_polygon_has_no_commands() {
        assert!(PathDesc::polygon(&[]).commands.is_empty());
    }

    #[test]
    fn with_layer_balances_push_and_pop() {
        let mut backend = RecordingBackend::default();
        let path = backend.create_path(PathDesc::polygon(&[Point::ZERO]));

        let clip = LayerOp::clip_rect(kurbo::Rect::new(0.0, 0.0, 8.0, 8.0));
        let drawn = backend.with_layer(clip, |b| {
            b.draw(DrawOp::FillPath(path));
            true
        });

        assert!(drawn);
        assert_eq!(backend.ops.len(), 3);
        assert!(matches!(
            backend.ops[0],
            ImagingOp::State(StateOp::PushLayer(LayerOp { clip: Some(_), opacity: None }))
        ));
        assert_eq!(backend.ops[2], ImagingOp::State(StateOp::PopLayer));
    }

    #[test]
    fn with_paint_destroys_paint() {
        let mut backend = RecordingBackend::default();
        backend.with_paint(Brush::Solid(Color::WHITE), |b, paint| {
            b.state(StateOp::SetPaint(paint));
            assert_eq!(b.live_paints, [paint]);
        });
        assert!(backend.live_paints.is_empty());
        assert_eq!(backend.ops.len(), 1);
    }

    #[test]
    fn layer_noop_detection() {
        assert!(LayerOp::default().is_noop());
        assert!(!LayerOp::clip_rect(kurbo::Rect::new(0.0, 0.0, 1.0, 1.0)).is_noop());
        assert!(
            !LayerOp {
                clip: None,
                opacity: Some(0.5)
            }
            .is_noop()
        );
    }

    #[test]
    fn rect_narrowing_keeps_page_coordinates() {
        let rect = kurbo::Rect::new(8.0, 8.0, 308.0, 608.5);
        assert_eq!(RectF::from_kurbo(rect).to_kurbo(), rect);
    }
}
