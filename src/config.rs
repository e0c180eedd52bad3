use crate::color::Palette;
use crate::window::PixelFormat;

/// Main engine configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Colors the frame filler cycles through
    pub palette: Palette,
    /// Pixel format negotiated with the window when one appears
    pub format: PixelFormat,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            format: PixelFormat::Rgb565,
        }
    }
}
