mod ascii;
mod image_pipeline;
mod layout;

use std::path::Path;

use image::{DynamicImage, GenericImageView};
use log::debug;

pub use ascii::{
    grid::{GlyphCell, GlyphGrid},
    mapping::{luminance, GlyphMapper, DEFAULT_OPACITY_THRESHOLD},
    ramp::{GlyphRamp, RampDirection},
};
pub use image_pipeline::{geometry::GridResolution, sample::PixelBuffer};
pub use layout::{solve_font_size, FontMetrics, LayoutBox, SizingResult};

#[derive(Debug, thiserror::Error)]
pub enum AsciiArtError {
    #[error("failed to load image: {0}")]
    Image(#[from] image::ImageError),
    #[error(
        "pixel buffer is {actual_width}x{actual_height} but a {columns}x{rows} grid was requested"
    )]
    DimensionMismatch { columns: u16, rows: u16, actual_width: u16, actual_height: u16 },
    #[error("glyph grid must have at least one row and one column")]
    DegenerateGrid,
    #[error("glyph ramp has no entries")]
    EmptyRamp,
}

/// How glyph cells are annotated for the caller's renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    /// Characters only, for a uniform foreground/background color pair.
    Plain,
    /// Each glyph carries its source pixel's RGB.
    Colored,
    /// Same glyphs as `Plain`, plus a snapshot of the sampled surface for
    /// the caller to clip behind the text.
    ImageMasked,
}

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub ramp: GlyphRamp,
    pub mode: RenderMode,
    /// Alpha below which a pixel renders as a blank glyph.
    pub opacity_threshold: u8,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            ramp: GlyphRamp::detailed(),
            mode: RenderMode::Plain,
            opacity_threshold: DEFAULT_OPACITY_THRESHOLD,
        }
    }
}

#[derive(Clone, Debug)]
pub struct RenderOutput {
    pub grid: GlyphGrid,
    pub resolution: GridResolution,
    /// PNG data URL of the sampled surface, present in image-masked mode.
    pub background: Option<String>,
}

/// Facade tying the sampling and mapping steps together for callers that
/// start from a decoded image rather than a raw pixel buffer.
#[derive(Default)]
pub struct ImageAsciiRenderer;

impl ImageAsciiRenderer {
    pub fn render_path<P: AsRef<Path>>(
        &self,
        path: P,
        resolution: GridResolution,
        options: &RenderOptions,
    ) -> Result<RenderOutput, AsciiArtError> {
        let image = image::open(path)?;
        self.render_image(&image, resolution, options)
    }

    pub fn render_image(
        &self,
        image: &DynamicImage,
        resolution: GridResolution,
        options: &RenderOptions,
    ) -> Result<RenderOutput, AsciiArtError> {
        let (width, height) = image.dimensions();
        debug!(
            "rendering {width}x{height} image at {}x{}",
            resolution.columns, resolution.rows
        );

        let buffer = PixelBuffer::from_image(image, resolution);
        let mapper = GlyphMapper::new(options.ramp.clone())
            .with_opacity_threshold(options.opacity_threshold);
        let grid = mapper.convert(&buffer, resolution, options.mode)?;

        let background = match options.mode {
            RenderMode::ImageMasked => Some(buffer.snapshot_data_url()?),
            RenderMode::Plain | RenderMode::Colored => None,
        };

        Ok(RenderOutput { grid, resolution, background })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    fn white_image(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            width,
            height,
            image::Rgba([255, 255, 255, 255]),
        ))
    }

    #[test]
    fn plain_render_has_no_background() {
        let renderer = ImageAsciiRenderer;
        let output = renderer
            .render_image(&white_image(40, 20), GridResolution::new(10, 5), &RenderOptions::default())
            .unwrap();
        assert_eq!(output.resolution, GridResolution::new(10, 5));
        assert_eq!(output.grid.rows().count(), 5);
        assert!(output.background.is_none());
    }

    #[test]
    fn masked_render_exposes_a_snapshot() {
        let renderer = ImageAsciiRenderer;
        let options = RenderOptions { mode: RenderMode::ImageMasked, ..Default::default() };
        let output = renderer
            .render_image(&white_image(40, 20), GridResolution::new(10, 5), &options)
            .unwrap();
        let background = output.background.expect("masked mode must carry a snapshot");
        assert!(background.starts_with("data:image/png;base64,"));
        // Glyph selection is unchanged from plain mode.
        assert!(output.grid.cells.iter().all(|cell| cell.color.is_none()));
    }

    #[test]
    fn white_image_renders_as_lightest_glyph() {
        let renderer = ImageAsciiRenderer;
        let options = RenderOptions {
            ramp: GlyphRamp::new(" #", RampDirection::LightToDark).unwrap(),
            ..Default::default()
        };
        let output = renderer
            .render_image(&white_image(8, 4), GridResolution::new(4, 2), &options)
            .unwrap();
        assert_eq!(output.grid.to_text(), "    \n    ");
    }
}
