use log::debug;

use crate::image_pipeline::geometry::GridResolution;
use crate::image_pipeline::sample::PixelBuffer;
use crate::{AsciiArtError, RenderMode};

use super::grid::{GlyphCell, GlyphGrid};
use super::ramp::GlyphRamp;

/// Default alpha below which a pixel renders as a blank glyph.
pub const DEFAULT_OPACITY_THRESHOLD: u8 = 8;

/// Maps a pre-downsampled pixel buffer to a glyph grid, one pixel per cell.
///
/// The ramp is injected at construction so callers (and tests) can supply
/// arbitrary ramps; the mapper holds no other state and `convert` is a pure
/// function of its inputs.
pub struct GlyphMapper {
    ramp: GlyphRamp,
    opacity_threshold: u8,
}

impl GlyphMapper {
    pub fn new(ramp: GlyphRamp) -> Self {
        Self { ramp, opacity_threshold: DEFAULT_OPACITY_THRESHOLD }
    }

    pub fn with_opacity_threshold(mut self, threshold: u8) -> Self {
        self.opacity_threshold = threshold;
        self
    }

    /// Converts `buffer` into a glyph grid of exactly `resolution` cells.
    ///
    /// The buffer must already be downsampled to the grid resolution; a
    /// size disagreement is an error, never a crop or a pad.
    pub fn convert(
        &self,
        buffer: &PixelBuffer,
        resolution: GridResolution,
        mode: RenderMode,
    ) -> Result<GlyphGrid, AsciiArtError> {
        if (buffer.width(), buffer.height()) != (resolution.columns, resolution.rows) {
            return Err(AsciiArtError::DimensionMismatch {
                columns: resolution.columns,
                rows: resolution.rows,
                actual_width: buffer.width(),
                actual_height: buffer.height(),
            });
        }

        let mut cells = Vec::with_capacity(resolution.cell_count());
        for [r, g, b, a] in buffer.pixels() {
            if a < self.opacity_threshold {
                cells.push(GlyphCell::plain(' '));
                continue;
            }

            let ch = self.ramp.glyph_for(luminance(r, g, b));
            cells.push(match mode {
                RenderMode::Colored => GlyphCell::colored(ch, [r, g, b]),
                RenderMode::Plain | RenderMode::ImageMasked => GlyphCell::plain(ch),
            });
        }

        debug!(
            "mapped {}x{} buffer to glyphs ({:?} mode, ramp of {})",
            buffer.width(),
            buffer.height(),
            mode,
            self.ramp.len()
        );

        Ok(GlyphGrid::new(resolution.columns, resolution.rows, cells))
    }
}

/// Perceptual luminance of an RGB sample, normalized to `[0, 1]`.
pub fn luminance(r: u8, g: u8, b: u8) -> f32 {
    (0.299 * f32::from(r) + 0.587 * f32::from(g) + 0.114 * f32::from(b)) / 255.0
}
