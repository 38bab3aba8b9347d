// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;
use lopdf::{Dictionary, Document, Object, ObjectId, dictionary};

use crate::DocumentError;

/// Page size used when no page box is declared anywhere in the page tree.
pub(crate) const US_LETTER: Size = Size::new(612.0, 792.0);

/// Guards against `Parent` cycles in malformed page trees.
const MAX_TREE_DEPTH: usize = 64;

/// Returns `true` if `bytes` carry a PDF header near the start.
pub(crate) fn sniff(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(1024)];
    head.windows(5).any(|w| w == b"%PDF-")
}

/// Page sizes of a PDF, in document order.
pub(crate) fn page_sizes(bytes: &[u8]) -> Result<Vec<Size>, DocumentError> {
    if bytes.windows(b"/Encrypt".len()).any(|w| w == b"/Encrypt") {
        return Err(DocumentError::Encrypted);
    }

    let doc = Document::load_mem(bytes)?;
    if doc.trailer.get(b"Encrypt").is_ok() {
        return Err(DocumentError::Encrypted);
    }

    let pages = doc.get_pages();
    let mut sizes = Vec::with_capacity(pages.len());
    for (index, (_, page_id)) in pages.into_iter().enumerate() {
        sizes.push(page_size(&doc, page_id, index)?);
    }
    Ok(sizes)
}

/// Size of one page, following `Parent` links for an inherited `MediaBox`.
fn page_size(doc: &Document, page_id: ObjectId, index: usize) -> Result<Size, DocumentError> {
    let mut current = Some(page_id);
    for _ in 0..MAX_TREE_DEPTH {
        let Some(id) = current else {
            break;
        };
        let dict = doc.get_dictionary(id)?;
        if let Ok(raw) = dict.get(b"MediaBox") {
            return media_box_size(doc, raw).ok_or(DocumentError::InvalidPageBox { page: index });
        }
        current = dict.get(b"Parent").and_then(|p| p.as_reference()).ok();
    }
    log::debug!("page {index} declares no MediaBox; using US Letter");
    Ok(US_LETTER)
}

fn media_box_size(doc: &Document, raw: &Object) -> Option<Size> {
    let resolved = match raw {
        Object::Reference(id) => doc.get_object(*id).ok()?,
        other => other,
    };
    let array = resolved.as_array().ok()?;
    if array.len() != 4 {
        return None;
    }
    let mut coords = [0.0; 4];
    for (slot, obj) in coords.iter_mut().zip(array) {
        *slot = f64::from(obj.as_float().ok()?);
    }
    let [x0, y0, x1, y1] = coords;
    let size = Size::new((x1 - x0).abs(), (y1 - y0).abs());
    (size.width > 0.0 && size.height > 0.0).then_some(size)
}

/// Writes a PDF with one empty page per entry of `sizes`.
///
/// Pages inherit nothing; each carries its own `MediaBox`.
pub fn blank_pdf(sizes: impl IntoIterator<Item = Size>) -> Result<Vec<u8>, DocumentError> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let kids: Vec<Object> = sizes
        .into_iter()
        .map(|size| {
            let page = dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![
                    0.into(),
                    0.into(),
                    Object::Real(to_real(size.width)),
                    Object::Real(to_real(size.height)),
                ],
            };
            Object::Reference(doc.add_object(page))
        })
        .collect();

    let count = i64::try_from(kids.len()).unwrap_or(i64::MAX);
    let pages: Dictionary = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)?;
    Ok(buffer)
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "PDF reals are single precision; page dimensions fit comfortably"
)]
fn to_real(v: f64) -> f32 {
    v as f32
}
