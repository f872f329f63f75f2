use crate::AsciiArtError;

/// Which luminance extreme the first ramp character stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RampDirection {
    /// `chars[0]` is the densest glyph, rendered for the darkest pixels.
    DarkToLight,
    /// `chars[0]` is the sparsest glyph, rendered for the lightest pixels.
    LightToDark,
}

/// Ordered intensity-to-glyph lookup table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphRamp {
    chars: Vec<char>,
    direction: RampDirection,
}

impl GlyphRamp {
    pub fn new(
        chars: impl Into<String>,
        direction: RampDirection,
    ) -> Result<Self, AsciiArtError> {
        let chars: Vec<char> = chars.into().chars().collect();
        if chars.is_empty() {
            return Err(AsciiArtError::EmptyRamp);
        }
        Ok(Self { chars, direction })
    }

    pub fn detailed() -> Self {
        Self::new(
            "$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+~<>i!lI;:,\"^`'. ",
            RampDirection::DarkToLight,
        )
        .unwrap()
    }

    pub fn standard() -> Self {
        Self::new("@%#*+=-:. ", RampDirection::DarkToLight).unwrap()
    }

    pub fn blocks() -> Self {
        Self::new("█▓▒░ ", RampDirection::DarkToLight).unwrap()
    }

    pub fn binary() -> Self {
        Self::new("01", RampDirection::DarkToLight).unwrap()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn direction(&self) -> RampDirection {
        self.direction
    }

    /// Same characters, opposite traversal direction.
    pub fn flipped(&self) -> Self {
        let direction = match self.direction {
            RampDirection::DarkToLight => RampDirection::LightToDark,
            RampDirection::LightToDark => RampDirection::DarkToLight,
        };
        Self { chars: self.chars.clone(), direction }
    }

    /// Index for a normalized luminance in `[0, 1]`.
    ///
    /// Uses `floor(luminance * (len - 1))` after orienting the luminance to
    /// the ramp direction, so every character covers an equal luminance band
    /// and the mapping is monotonic.
    pub fn index_for(&self, luminance: f32) -> usize {
        let oriented = match self.direction {
            RampDirection::DarkToLight => luminance,
            RampDirection::LightToDark => 1.0 - luminance,
        };
        let max_index = self.chars.len() - 1;
        let index = (oriented.clamp(0.0, 1.0) * max_index as f32).floor() as usize;
        index.min(max_index)
    }

    pub fn glyph_for(&self, luminance: f32) -> char {
        self.chars[self.index_for(luminance)]
    }
}
