//! Fits a glyph grid into an arbitrary container box.
//!
//! The solver picks the largest font size whose rendered block fits both
//! axes of the container, preserving the character cell aspect ratio given
//! by the font metrics. It is stateless; resize handling is the caller
//! re-invoking it with a fresh box.

use crate::AsciiArtError;

/// Available container dimensions in device pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutBox {
    pub width: f32,
    pub height: f32,
}

impl LayoutBox {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Character cell shape expressed in em units of the font size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontMetrics {
    /// Monospace glyph advance as a fraction of the font size.
    pub glyph_aspect_em: f32,
    /// Extra horizontal spacing applied between characters.
    pub letter_spacing_em: f32,
    /// Vertical advance per text row.
    pub line_height_em: f32,
}

impl FontMetrics {
    pub fn width_per_char_em(&self) -> f32 {
        self.glyph_aspect_em + self.letter_spacing_em
    }

    pub fn height_per_char_em(&self) -> f32 {
        self.line_height_em
    }
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self { glyph_aspect_em: 0.5, letter_spacing_em: 0.1, line_height_em: 1.2 }
    }
}

/// Solved text sizing for one container box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizingResult {
    pub font_size_px: f32,
    /// Width the glyph block occupies at `font_size_px`.
    pub block_width_px: f32,
    /// Height the glyph block occupies at `font_size_px`.
    pub block_height_px: f32,
}

/// Largest font size whose `columns x rows` glyph block fits inside `container`.
///
/// One axis is exactly filled (the binding constraint); residual space on
/// the other axis is the caller's to distribute. A collapsed container is a
/// legitimate transient and solves to a zero font size; a zero-cell grid is
/// an error.
pub fn solve_font_size(
    container: LayoutBox,
    columns: u16,
    rows: u16,
    metrics: FontMetrics,
) -> Result<SizingResult, AsciiArtError> {
    if columns == 0 || rows == 0 {
        return Err(AsciiArtError::DegenerateGrid);
    }

    let block_width_em = f32::from(columns) * metrics.width_per_char_em();
    let block_height_em = f32::from(rows) * metrics.height_per_char_em();

    let fit_by_width = container.width / block_width_em;
    let fit_by_height = container.height / block_height_em;
    let font_size_px = fit_by_width.min(fit_by_height).max(0.0);

    Ok(SizingResult {
        font_size_px,
        block_width_px: block_width_em * font_size_px,
        block_height_px: block_height_em * font_size_px,
    })
}
