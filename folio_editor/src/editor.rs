// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use folio_document::{Document, DocumentError};
use folio_imaging::{Affine, DrawOp, ImagingBackend, ImagingBackendExt, RectF, StateOp};
use folio_overlay::{
    CompositeView, LayerKind, OverlayRenderer, ScrollSyncBridge, ShapeStyle, default_shapes,
};
use folio_scroll::{ScrollConfig, ScrollView};
use folio_view::{LayoutConfig, PageLayout, ViewportGeometry};
use kurbo::Rect;
use peniko::{Brush, Color};

/// Configuration for an [`AnnotationEditor`].
#[derive(Clone, Debug, PartialEq)]
pub struct EditorConfig {
    /// Page spacing in document space.
    pub layout: LayoutConfig,
    /// Scroll view behavior.
    pub scroll: ScrollConfig,
    /// Style applied to the generated annotation shapes.
    pub shape_style: ShapeStyle,
    /// Brush painted behind each page on the document layer.
    pub page_backdrop: Brush,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            scroll: ScrollConfig::default(),
            shape_style: ShapeStyle::default(),
            page_backdrop: Brush::Solid(Color::WHITE),
        }
    }
}

/// A document view with an annotation overlay kept in sync with scrolling.
///
/// Owns the loaded [`Document`], its [`PageLayout`], the [`ScrollView`] the
/// host drives, and an [`OverlayRenderer`] whose redraws are triggered by a
/// [`ScrollSyncBridge`] installed on the scroll view. Painting goes through a
/// [`CompositeView`]: pages first, overlay on top.
#[derive(Debug)]
pub struct AnnotationEditor {
    document: Document,
    layout: PageLayout,
    scroll: ScrollView,
    overlay: OverlayRenderer,
    composite: CompositeView,
    page_backdrop: Brush,
}

impl AnnotationEditor {
    /// Builds an editor over an already loaded document.
    ///
    /// Every page gets one default annotation shape. The first paint pass
    /// draws the overlay.
    #[must_use]
    pub fn new(document: Document, bounds: Rect, config: EditorConfig) -> Self {
        let layout = document.layout(config.layout);

        let mut scroll = ScrollView::new(bounds, config.scroll);
        scroll.set_content_bounds(layout.content_bounds());
        scroll.layout(bounds);

        let shapes = default_shapes(layout.pages())
            .into_iter()
            .map(|shape| shape.with_style(config.shape_style.clone()))
            .collect();
        let overlay = OverlayRenderer::new(shapes);
        ScrollSyncBridge::install(scroll.observers_mut(), overlay.redraw_handle());
        overlay.redraw();

        Self {
            document,
            layout,
            scroll,
            overlay,
            composite: CompositeView::new(bounds),
            page_backdrop: config.page_backdrop,
        }
    }

    /// Loads a document from `bytes` and builds an editor over it.
    pub fn from_bytes(
        bytes: &[u8],
        bounds: Rect,
        config: EditorConfig,
    ) -> Result<Self, DocumentError> {
        let document = Document::from_bytes(bytes)?;
        Ok(Self::new(document, bounds, config))
    }

    /// The loaded document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Page placement in document space.
    #[must_use]
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// The scroll view.
    #[must_use]
    pub fn scroll_view(&self) -> &ScrollView {
        &self.scroll
    }

    /// The scroll view, for driving gestures and registering observers.
    ///
    /// Observers pushed here run after the overlay's bridge.
    pub fn scroll_view_mut(&mut self) -> &mut ScrollView {
        &mut self.scroll
    }

    /// The annotation overlay.
    #[must_use]
    pub fn overlay(&self) -> &OverlayRenderer {
        &self.overlay
    }

    /// The layer container.
    #[must_use]
    pub fn composite(&self) -> &CompositeView {
        &self.composite
    }

    /// Current page geometry, reflecting the scroll view's viewport.
    #[must_use]
    pub fn geometry(&self) -> ViewportGeometry<'_> {
        ViewportGeometry::new(&self.layout, self.scroll.viewport())
    }

    /// Resizes the editor to `bounds`.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.composite.set_bounds(bounds);
        self.scroll.layout(bounds);
        self.overlay.redraw();
    }

    /// Runs one paint pass.
    ///
    /// Both layers are painted every pass, pages first and the overlay on
    /// top. Returns whether a redraw had been requested since the previous
    /// pass.
    pub fn paint<B: ImagingBackend + ?Sized>(&mut self, backend: &mut B) -> bool {
        let geometry = ViewportGeometry::new(&self.layout, self.scroll.viewport());
        let overlay = &mut self.overlay;
        let backdrop = &self.page_backdrop;
        let requested = overlay.needs_paint();

        self.composite.paint_layers(backend, |kind, b| match kind {
            LayerKind::Document => paint_page_backdrops(b, &geometry, backdrop),
            LayerKind::Overlay => {
                overlay.paint(&geometry, b);
            }
        });
        requested
    }
}

/// Fills every visible page frame, standing in for page rasterization.
fn paint_page_backdrops<B: ImagingBackend + ?Sized>(
    backend: &mut B,
    geometry: &ViewportGeometry<'_>,
    backdrop: &Brush,
) {
    let viewport = geometry.viewport();
    let visible = viewport.visible_document_rect();
    let layout = geometry.layout();
    backend.state(StateOp::SetTransform(Affine::IDENTITY));
    backend.with_paint(backdrop.clone(), |b, paint| {
        b.state(StateOp::SetPaint(paint));
        for page in layout.pages() {
            let Some(frame) = layout.page_frame(page.index) else {
                continue;
            };
            if frame.intersect(visible).is_zero_area() {
                continue;
            }
            let rect = viewport.document_to_view_rect(frame);
            b.draw(DrawOp::FillRect(RectF::from_kurbo(rect)));
        }
    });
}
