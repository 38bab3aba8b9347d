// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Clamp behavior for panning and zooming relative to the content bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ClampMode {
    /// Do not apply any clamping; the view may move/zoom freely.
    None,
    /// Clamp so that the view never moves completely outside the content.
    KeepSomeVisible,
    /// Keep the visible rect inside the content bounds (no overscroll).
    ///
    /// When the content is smaller than the view along an axis, it is
    /// centered along that axis instead.
    #[default]
    Contain,
}

/// How fitted content should be positioned inside the view.
///
/// This mode is consulted by [`crate::Viewport::fit_rect`].
/// [`crate::Viewport::fit_width`] always aligns the content top with the
/// view top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FitMode {
    /// Center the fitted content within the view rect.
    #[default]
    Center,
    /// Align the minimum corner of the fitted content with the view origin.
    AlignMin,
}
