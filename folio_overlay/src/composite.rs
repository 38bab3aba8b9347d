// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use folio_imaging::{ImagingBackend, ImagingBackendExt, LayerOp};
use kurbo::{Point, Rect};

/// Which surface a [`LayerSlot`] holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LayerKind {
    /// The document view (page content).
    Document,
    /// The annotation overlay.
    Overlay,
}

/// A positioned layer in a [`CompositeView`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayerSlot {
    /// Surface kind.
    pub kind: LayerKind,
    /// Frame in container coordinates.
    pub frame: Rect,
    /// Paint order; higher paints later.
    pub z_index: i32,
}

impl LayerSlot {
    /// Returns `true` if pointer input should reach this layer.
    ///
    /// The overlay is display‑only; input passes through to the document.
    #[must_use]
    pub fn accepts_input(&self) -> bool {
        self.kind != LayerKind::Overlay
    }
}

/// Container stacking the overlay above the document view.
///
/// Both layers always fill the container bounds.
#[derive(Clone, Debug)]
pub struct CompositeView {
    bounds: Rect,
    layers: [LayerSlot; 2],
}

impl CompositeView {
    /// Creates a container with both layers filling `bounds`.
    #[must_use]
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            layers: [
                LayerSlot {
                    kind: LayerKind::Document,
                    frame: bounds,
                    z_index: 0,
                },
                LayerSlot {
                    kind: LayerKind::Overlay,
                    frame: bounds,
                    z_index: i32::MAX,
                },
            ],
        }
    }

    /// Container bounds.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Resizes the container; both layers follow.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        for layer in &mut self.layers {
            layer.frame = bounds;
        }
    }

    /// Layers, in paint order.
    #[must_use]
    pub fn layers(&self) -> &[LayerSlot] {
        &self.layers
    }

    /// The slot holding `kind`.
    #[must_use]
    pub fn layer(&self, kind: LayerKind) -> &LayerSlot {
        match kind {
            LayerKind::Document => &self.layers[0],
            LayerKind::Overlay => &self.layers[1],
        }
    }

    /// Topmost layer under `point` that accepts input.
    #[must_use]
    pub fn hit_layer(&self, point: Point) -> Option<LayerKind> {
        self.layers
            .iter()
            .rev()
            .find(|l| l.accepts_input() && l.frame.contains(point))
            .map(|l| l.kind)
    }

    /// Paints each layer bottom to top, clipped to its frame.
    ///
    /// `paint` is called once per layer inside a balanced layer scope.
    pub fn paint_layers<B, F>(&self, backend: &mut B, mut paint: F)
    where
        B: ImagingBackend + ?Sized,
        F: FnMut(LayerKind, &mut B),
    {
        for layer in &self.layers {
            backend.with_layer(LayerOp::clip_rect(layer.frame), |b| paint(layer.kind, b));
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::{CompositeView, LayerKind};

    #[test]
    fn layers_follow_bounds() {
        let mut view = CompositeView::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        let bounds = Rect::new(0.0, 0.0, 320.0, 480.0);
        view.set_bounds(bounds);
        assert_eq!(view.bounds(), bounds);
        assert!(view.layers().iter().all(|l| l.frame == bounds));
        assert!(view.layer(LayerKind::Overlay).z_index > view.layer(LayerKind::Document).z_index);
    }

    #[test]
    fn input_passes_through_overlay() {
        let view = CompositeView::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert!(!view.layer(LayerKind::Overlay).accepts_input());
        assert_eq!(view.hit_layer(Point::new(50.0, 50.0)), Some(LayerKind::Document));
        assert_eq!(view.hit_layer(Point::new(150.0, 50.0)), None);
    }
}
