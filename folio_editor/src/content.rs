// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use folio_document::DocumentError;
use folio_imaging::{Affine, DrawOp, ImagingBackend, ImagingBackendExt, RectF, StateOp};
use kurbo::Rect;
use peniko::{Brush, Color};

use crate::editor::{AnnotationEditor, EditorConfig};

/// Message shown in place of a document that failed to load.
pub const LOAD_ERROR_MESSAGE: &str = "Error loading file";

/// Stand‑in view for a document that could not be loaded.
#[derive(Debug)]
pub struct ErrorPlaceholder {
    bounds: Rect,
    error: DocumentError,
}

impl ErrorPlaceholder {
    /// Creates a placeholder covering `bounds` for `error`.
    #[must_use]
    pub fn new(bounds: Rect, error: DocumentError) -> Self {
        Self { bounds, error }
    }

    /// User‑facing message.
    #[must_use]
    pub fn message(&self) -> &'static str {
        LOAD_ERROR_MESSAGE
    }

    /// The load failure.
    #[must_use]
    pub fn error(&self) -> &DocumentError {
        &self.error
    }

    /// Area covered by the placeholder.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Resizes the placeholder.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Paints the placeholder background.
    ///
    /// Text is left to the host.
    pub fn paint<B: ImagingBackend + ?Sized>(&self, backend: &mut B) {
        backend.state(StateOp::SetTransform(Affine::IDENTITY));
        backend.with_paint(Brush::Solid(Color::new([0.9, 0.9, 0.9, 1.0])), |b, paint| {
            b.state(StateOp::SetPaint(paint));
            b.draw(DrawOp::FillRect(RectF::from_kurbo(self.bounds)));
        });
    }
}

/// What a document slot shows: a working editor or the load error.
#[derive(Debug)]
pub enum EditorContent {
    /// The document loaded.
    Editor(Box<AnnotationEditor>),
    /// The document failed to load.
    Placeholder(ErrorPlaceholder),
}

impl EditorContent {
    /// Loads `bytes`, falling back to an [`ErrorPlaceholder`] on failure.
    #[must_use]
    pub fn load(bytes: &[u8], bounds: Rect, config: EditorConfig) -> Self {
        match AnnotationEditor::from_bytes(bytes, bounds, config) {
            Ok(editor) => Self::Editor(Box::new(editor)),
            Err(err) => {
                log::warn!("failed to load document: {err}");
                Self::Placeholder(ErrorPlaceholder::new(bounds, err))
            }
        }
    }

    /// The editor, if the document loaded.
    #[must_use]
    pub fn editor(&self) -> Option<&AnnotationEditor> {
        match self {
            Self::Editor(editor) => Some(&**editor),
            Self::Placeholder(_) => None,
        }
    }

    /// The editor, mutably, if the document loaded.
    pub fn editor_mut(&mut self) -> Option<&mut AnnotationEditor> {
        match self {
            Self::Editor(editor) => Some(&mut **editor),
            Self::Placeholder(_) => None,
        }
    }

    /// The placeholder, if the document failed to load.
    #[must_use]
    pub fn placeholder(&self) -> Option<&ErrorPlaceholder> {
        match self {
            Self::Editor(_) => None,
            Self::Placeholder(placeholder) => Some(placeholder),
        }
    }

    /// Resizes whichever view is shown.
    pub fn set_bounds(&mut self, bounds: Rect) {
        match self {
            Self::Editor(editor) => editor.set_bounds(bounds),
            Self::Placeholder(placeholder) => placeholder.set_bounds(bounds),
        }
    }

    /// Runs one paint pass; returns whether an overlay redraw was requested.
    pub fn paint<B: ImagingBackend + ?Sized>(&mut self, backend: &mut B) -> bool {
        match self {
            Self::Editor(editor) => editor.paint(backend),
            Self::Placeholder(placeholder) => {
                placeholder.paint(backend);
                false
            }
        }
    }
}
