// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless Folio demo.
//!
//! Loads a document (or a built‑in one‑page 300×600 PDF), scrolls and zooms
//! the editor, and prints what every paint pass recorded.

mod summary;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use folio_document::blank_pdf;
use folio_editor::{EditorConfig, EditorContent};
use folio_imaging_ref::RefBackend;
use kurbo::{Point, Rect, Size, Vec2};
use log::{LevelFilter, info};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use crate::summary::FrameSummary;

#[derive(Debug, Parser)]
#[command(name = "folio-demo", version, about = "Paint a Folio annotation overlay headlessly")]
struct Args {
    /// PDF or raster image to open. Defaults to a built-in one-page PDF.
    file: Option<PathBuf>,
    /// View width.
    #[arg(long, default_value_t = 316.0)]
    width: f64,
    /// View height.
    #[arg(long, default_value_t = 400.0)]
    height: f64,
    /// Number of scroll steps to simulate.
    #[arg(long, default_value_t = 3)]
    scroll_steps: u32,
    /// Zoom factor applied around the view center after scrolling.
    #[arg(long, default_value_t = 1.5)]
    zoom: f64,
    /// Log level (off, error, warn, info, debug, trace).
    #[arg(long, default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let args = Args::parse();
    TermLogger::init(
        args.log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let bytes = match &args.file {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("reading {}", path.display()))?
        }
        None => blank_pdf([Size::new(300.0, 600.0)]).context("building sample PDF")?,
    };
    let bounds = Rect::new(0.0, 0.0, args.width, args.height);
    let mut content = EditorContent::load(&bytes, bounds, EditorConfig::default());
    let mut backend = RefBackend::default();

    if let Some(placeholder) = content.placeholder() {
        println!("{}: {}", placeholder.message(), placeholder.error());
        content.paint(&mut backend);
        println!("{}", FrameSummary::capture("placeholder", &backend, false));
        return Ok(());
    }

    let mut frames = Vec::new();
    let mut frame = |label: String, content: &mut EditorContent| {
        backend.clear_events();
        let requested = content.paint(&mut backend);
        frames.push(FrameSummary::capture(label, &backend, requested));
    };

    frame("initial".into(), &mut content);
    frame("idle".into(), &mut content);

    let step = Vec2::new(0.0, args.height / 4.0);
    for i in 1..=args.scroll_steps {
        if let Some(editor) = content.editor_mut() {
            editor.scroll_view_mut().scroll_by(step);
        }
        frame(format!("scroll {i}"), &mut content);
    }

    if let Some(editor) = content.editor_mut() {
        let center = Point::new(args.width / 2.0, args.height / 2.0);
        editor.scroll_view_mut().zoom_about(center, args.zoom);
        info!("zoomed to {:.3}", editor.scroll_view().viewport().zoom());
    }
    frame("zoom".into(), &mut content);

    if let Some(editor) = content.editor_mut() {
        let honored = editor.scroll_view_mut().scroll_to_top();
        info!("scroll to top {}", if honored { "honored" } else { "refused" });
    }
    frame("scroll to top".into(), &mut content);

    if let Some(editor) = content.editor() {
        let doc = editor.document();
        println!("{:?} document, {} page(s)", doc.format(), doc.page_count());
    }
    for summary in &frames {
        println!("{summary}");
    }
    Ok(())
}
