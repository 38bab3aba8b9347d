// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;

use folio_imaging::{DrawOp, ImagingOp, PathCmd, StateOp};
use folio_imaging_ref::RefBackend;

/// What one paint pass recorded.
#[derive(Debug, Default)]
pub(crate) struct FrameSummary {
    pub(crate) label: String,
    pub(crate) redraw_requested: bool,
    pub(crate) layers: usize,
    pub(crate) page_rects: usize,
    pub(crate) fills: usize,
    pub(crate) strokes: usize,
    /// First vertex of the first annotation, in view space.
    pub(crate) first_corner: Option<(f32, f32)>,
}

impl FrameSummary {
    pub(crate) fn capture(label: impl Into<String>, backend: &RefBackend, requested: bool) -> Self {
        let mut summary = Self {
            label: label.into(),
            redraw_requested: requested,
            ..Self::default()
        };
        for op in backend.ops() {
            match op {
                ImagingOp::State(StateOp::PushLayer(_)) => summary.layers += 1,
                ImagingOp::Draw(DrawOp::FillRect(_)) => summary.page_rects += 1,
                ImagingOp::Draw(DrawOp::FillPath(path)) => {
                    summary.fills += 1;
                    if summary.first_corner.is_none() {
                        summary.first_corner = backend
                            .created_path(*path)
                            .and_then(|desc| match desc.commands.first() {
                                Some(PathCmd::MoveTo { x, y }) => Some((*x, *y)),
                                _ => None,
                            });
                    }
                }
                ImagingOp::Draw(DrawOp::StrokePath(_)) => summary.strokes += 1,
                _ => {}
            }
        }
        summary
    }
}

impl fmt::Display for FrameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<14} layers={} pages={} fills={} strokes={} redraw={}",
            self.label,
            self.layers,
            self.page_rects,
            self.fills,
            self.strokes,
            if self.redraw_requested { "requested" } else { "idle" },
        )?;
        if let Some((x, y)) = self.first_corner {
            write!(f, " corner=({x:.1}, {y:.1})")?;
        }
        Ok(())
    }
}
