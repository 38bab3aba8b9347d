// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `folio_document` crate.
//!
//! PDFs are assembled in memory with `lopdf` so that page tree shapes the
//! writer in this crate never produces (inherited boxes, broken boxes,
//! encryption markers) are covered too.

use folio_document::{Document, DocumentError, DocumentFormat, blank_pdf};
use folio_view::LayoutConfig;
use kurbo::{Rect, Size};
use lopdf::{Object, dictionary};

/// Builds a PDF whose page tree root carries `root_box` and whose pages carry
/// the given optional boxes.
fn pdf_with_boxes(root_box: Option<Object>, page_boxes: Vec<Option<Object>>) -> Vec<u8> {
    let mut doc = lopdf::Document::with_version("1.7");
    let pages_id = doc.new_object_id();
    let kids: Vec<Object> = page_boxes
        .into_iter()
        .map(|media_box| {
            let mut page = dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
            };
            if let Some(media_box) = media_box {
                page.set("MediaBox", media_box);
            }
            Object::Reference(doc.add_object(page))
        })
        .collect();
    let count = i64::try_from(kids.len()).expect("small page count");
    let mut pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
    };
    if let Some(root_box) = root_box {
        pages.set("MediaBox", root_box);
    }
    doc.objects.insert(pages_id, Object::Dictionary(pages));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("serialize test PDF");
    bytes
}

fn rect_box(x0: i64, y0: i64, x1: i64, y1: i64) -> Object {
    Object::Array(vec![x0.into(), y0.into(), x1.into(), y1.into()])
}

/// Minimal PNG: signature plus an IHDR chunk.
fn png_header(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = b"\x89PNG\r\n\x1a\n".to_vec();
    bytes.extend_from_slice(&13_u32.to_be_bytes());
    bytes.extend_from_slice(b"IHDR");
    bytes.extend_from_slice(&width.to_be_bytes());
    bytes.extend_from_slice(&height.to_be_bytes());
    bytes.extend_from_slice(&[8, 6, 0, 0, 0]);
    bytes.extend_from_slice(&[0, 0, 0, 0]);
    bytes
}

#[test]
fn pdf_pages_use_media_box_sizes() {
    let bytes = pdf_with_boxes(
        None,
        vec![Some(rect_box(0, 0, 300, 600)), Some(rect_box(0, 0, 612, 792))],
    );
    let doc = Document::from_bytes(&bytes).expect("valid PDF");
    assert_eq!(doc.format(), DocumentFormat::Pdf);
    assert_eq!(doc.page_count(), 2);
    assert_eq!(doc.pages()[0].size, Size::new(300.0, 600.0));
    assert_eq!(doc.pages()[1].size, Size::new(612.0, 792.0));
}

#[test]
fn media_box_with_offset_origin_uses_extent() {
    let bytes = pdf_with_boxes(None, vec![Some(rect_box(100, 50, -200, 650))]);
    let doc = Document::from_bytes(&bytes).expect("valid PDF");
    assert_eq!(doc.pages()[0].size, Size::new(300.0, 600.0));
}

#[test]
fn media_box_is_inherited_from_page_tree() {
    let bytes = pdf_with_boxes(
        Some(rect_box(0, 0, 420, 595)),
        vec![None, Some(rect_box(0, 0, 100, 100))],
    );
    let doc = Document::from_bytes(&bytes).expect("valid PDF");
    assert_eq!(doc.pages()[0].size, Size::new(420.0, 595.0));
    assert_eq!(doc.pages()[1].size, Size::new(100.0, 100.0));
}

#[test]
fn missing_media_box_defaults_to_letter() {
    let bytes = pdf_with_boxes(None, vec![None]);
    let doc = Document::from_bytes(&bytes).expect("valid PDF");
    assert_eq!(doc.pages()[0].size, Size::new(612.0, 792.0));
}

#[test]
fn malformed_media_box_is_rejected() {
    let bytes = pdf_with_boxes(
        None,
        vec![
            Some(rect_box(0, 0, 10, 10)),
            Some(Object::Array(vec![0.into(), 0.into(), 10.into()])),
        ],
    );
    let err = Document::from_bytes(&bytes).expect_err("three-element box");
    assert!(matches!(err, DocumentError::InvalidPageBox { page: 1 }));

    let flat = pdf_with_boxes(None, vec![Some(rect_box(0, 0, 10, 0))]);
    let err = Document::from_bytes(&flat).expect_err("zero-height box");
    assert!(matches!(err, DocumentError::InvalidPageBox { page: 0 }));
}

#[test]
fn pdf_without_pages_is_empty() {
    let bytes = pdf_with_boxes(None, Vec::new());
    let doc = Document::from_bytes(&bytes).expect("valid PDF");
    assert_eq!(doc.page_count(), 0);
    assert_eq!(doc.layout(LayoutConfig::default()).content_bounds(), Rect::ZERO);
}

#[test]
fn encrypted_pdf_is_rejected() {
    let mut bytes = blank_pdf([Size::new(100.0, 100.0)]).expect("write");
    bytes.extend_from_slice(b"\ntrailer\n<< /Encrypt 9 0 R >>\n");
    let err = Document::from_bytes(&bytes).expect_err("encrypted");
    assert!(matches!(err, DocumentError::Encrypted));
}

#[test]
fn truncated_pdf_is_a_parse_error() {
    let err = Document::from_bytes(b"%PDF-1.7\n1 0 obj\n<<").expect_err("truncated");
    assert!(matches!(err, DocumentError::Parse(_)));
}

#[test]
fn garbage_is_unsupported() {
    let err = Document::from_bytes(b"definitely not a document").expect_err("garbage");
    assert!(matches!(err, DocumentError::UnsupportedFormat));
    assert!(matches!(
        Document::from_bytes(&[]),
        Err(DocumentError::UnsupportedFormat)
    ));
}

#[test]
fn png_becomes_single_page() {
    let doc = Document::from_bytes(&png_header(640, 480)).expect("valid PNG header");
    assert_eq!(doc.format(), DocumentFormat::Image);
    assert_eq!(doc.page_count(), 1);
    assert_eq!(doc.pages()[0].size, Size::new(640.0, 480.0));
}

#[test]
fn layout_stacks_loaded_pages() {
    let bytes = blank_pdf([Size::new(300.0, 600.0), Size::new(200.0, 100.0)]).expect("write");
    let doc = Document::from_bytes(&bytes).expect("valid PDF");
    let layout = doc.layout(LayoutConfig::default());
    assert_eq!(layout.len(), 2);
    assert_eq!(layout.content_bounds(), Rect::new(0.0, 0.0, 316.0, 724.0));
}
