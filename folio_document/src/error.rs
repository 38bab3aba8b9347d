// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Errors produced while loading or writing a document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The bytes look like a PDF but could not be parsed.
    #[error("failed to parse PDF: {0}")]
    Parse(#[from] lopdf::Error),
    /// The PDF is encrypted.
    #[error("encrypted PDFs are not supported")]
    Encrypted,
    /// The bytes are neither a PDF nor a recognized raster image.
    #[error("unsupported document format")]
    UnsupportedFormat,
    /// A page declares a page box that is malformed or has no area.
    #[error("page {page} has an invalid page box")]
    InvalidPageBox {
        /// Zero‑based index of the page.
        page: usize,
    },
    /// Serializing a PDF failed.
    #[error("failed to write PDF: {0}")]
    Write(#[from] std::io::Error),
}
