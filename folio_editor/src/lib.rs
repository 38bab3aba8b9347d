// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Editor: a document view with a page‑anchored annotation overlay.
//!
//! [`AnnotationEditor`] wires the pieces of Folio together:
//!
//! 1. [`folio_document`] loads the blob and reports page sizes.
//! 2. [`folio_view`] stacks the pages into a document plane.
//! 3. [`folio_scroll::ScrollView`] scrolls and zooms over that plane.
//! 4. [`folio_overlay`] paints one annotation per page and, through a
//!    [`ScrollSyncBridge`](folio_overlay::ScrollSyncBridge), repaints it
//!    whenever the view scrolls or zooms.
//!
//! [`EditorContent::load`] is the entry point for hosts: it never fails, and
//! shows an [`ErrorPlaceholder`] reading [`LOAD_ERROR_MESSAGE`] when the
//! document cannot be loaded.
//!
//! ```
//! use folio_document::blank_pdf;
//! use folio_editor::{EditorConfig, EditorContent};
//! use folio_imaging_ref::RefBackend;
//! use kurbo::{Rect, Size, Vec2};
//!
//! let bytes = blank_pdf([Size::new(300.0, 600.0)]).unwrap();
//! let bounds = Rect::new(0.0, 0.0, 316.0, 400.0);
//! let mut content = EditorContent::load(&bytes, bounds, EditorConfig::default());
//!
//! let mut backend = RefBackend::default();
//! assert!(content.paint(&mut backend));
//! assert!(!content.paint(&mut backend));
//!
//! let editor = content.editor_mut().unwrap();
//! editor.scroll_view_mut().scroll_by(Vec2::new(0.0, 20.0));
//! assert!(content.paint(&mut backend));
//! ```

mod content;
mod editor;

pub use content::{EditorContent, ErrorPlaceholder, LOAD_ERROR_MESSAGE};
pub use editor::{AnnotationEditor, EditorConfig};
