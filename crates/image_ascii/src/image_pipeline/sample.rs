use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ImageEncoder};

use crate::AsciiArtError;

use super::geometry::GridResolution;

/// Immutable RGBA8 pixel buffer, row-major, one pixel per eventual glyph
/// cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u16,
    height: u16,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u16, height: u16, data: Vec<u8>) -> Self {
        assert_eq!(usize::from(width) * usize::from(height) * 4, data.len());
        Self { width, height, data }
    }

    /// Downsamples `image` to the grid resolution and reads back its pixels.
    ///
    /// This is the resolution-reduction step the glyph mapper deliberately
    /// does not perform itself: exactly one sample per cell, resampled with
    /// Catmull-Rom filtering.
    pub fn from_image(image: &DynamicImage, resolution: GridResolution) -> Self {
        let resized = image.resize_exact(
            u32::from(resolution.columns),
            u32::from(resolution.rows),
            image::imageops::FilterType::CatmullRom,
        );
        Self::new(resolution.columns, resolution.rows, resized.into_rgba8().into_raw())
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn pixels(&self) -> impl Iterator<Item = [u8; 4]> + '_ {
        self.data.chunks_exact(4).map(|px| [px[0], px[1], px[2], px[3]])
    }

    /// PNG snapshot of the buffer as a `data:` URL, for the image-masked
    /// rendering mode where the caller clips the image behind the glyphs.
    pub fn snapshot_data_url(&self) -> Result<String, AsciiArtError> {
        let mut png = Vec::new();
        PngEncoder::new(&mut png).write_image(
            &self.data,
            u32::from(self.width),
            u32::from(self.height),
            image::ColorType::Rgba8,
        )?;
        Ok(format!("data:image/png;base64,{}", STANDARD.encode(png)))
    }
}
