use crate::errors::EngineError;

/// Size of a surface in pixels. It's a simple struct to hold width and height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

/// Pixel layouts a window can be configured with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelFormat {
    Rgba8888,
    Rgbx8888,
    Rgb565,
}

/// Borrowed, exclusively held view of a window's pixel storage.
///
/// `stride` counts pixels between row starts and may exceed `width`; only
/// columns `0..width` of each row are visible. The view is valid for a single
/// fill: the borrow ends before the window publishes the pixels.
pub struct WindowBuffer<'a> {
    pub width: u32,
    pub height: u32,
    pub stride: u32,
    pub pixels: &'a mut [u16],
}

impl<'a> WindowBuffer<'a> {
    /// Wraps a raw pixel region.
    pub fn from_raw(pixels: &'a mut [u16], width: u32, height: u32, stride: u32) -> Self {
        assert!(stride >= width, "stride must cover the visible width");

        // The last row only needs the visible width, not a full stride.
        let needed = if height == 0 {
            0
        } else {
            (height as usize - 1) * stride as usize + width as usize
        };
        assert!(
            pixels.len() >= needed,
            "pixel slice too small for buffer dimensions"
        );

        Self {
            width,
            height,
            stride,
            pixels,
        }
    }
}

impl std::fmt::Debug for WindowBuffer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("stride", &self.stride)
            .field("len", &self.pixels.len())
            .finish()
    }
}

/// Host window the driver renders into. Calls occur on the driver's thread.
///
/// Locking grants exclusive write access for exactly one fill; the returned
/// view borrows the window, so the pixels must be dropped before
/// [`unlock_and_post`](NativeWindow::unlock_and_post) can publish them.
pub trait NativeWindow {
    /// Current size of the window surface.
    fn size(&self) -> SurfaceSize;

    /// Pixel format the window is currently configured with.
    fn format(&self) -> PixelFormat;

    /// Reconfigure the window's buffer geometry and pixel format.
    fn set_buffers_geometry(&mut self, size: SurfaceSize, format: PixelFormat);

    /// Acquire exclusive write access to the backing pixels for one frame.
    fn lock(&mut self) -> Result<WindowBuffer<'_>, EngineError>;

    /// Publish the previously locked pixels back to the window system.
    fn unlock_and_post(&mut self);
}
