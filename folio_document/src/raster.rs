// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

use crate::DocumentError;

/// Pixel size of a raster image blob, if `imagesize` recognizes it.
pub(crate) fn image_size(bytes: &[u8]) -> Result<Size, DocumentError> {
    let kind = imagesize::image_type(bytes).map_err(|_| DocumentError::UnsupportedFormat)?;
    let size = imagesize::blob_size(bytes).map_err(|err| {
        log::debug!("{kind:?} header unreadable: {err}");
        DocumentError::UnsupportedFormat
    })?;
    if size.width == 0 || size.height == 0 {
        return Err(DocumentError::InvalidPageBox { page: 0 });
    }
    Ok(Size::new(to_f64(size.width), to_f64(size.height)))
}

#[allow(
    clippy::cast_precision_loss,
    reason = "image dimensions are far below 2^52"
)]
fn to_f64(v: usize) -> f64 {
    v as f64
}
