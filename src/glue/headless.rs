use std::collections::VecDeque;

use crate::errors::EngineError;
use crate::event::{AppEvent, PollTimeout, Polled};
use crate::glue::AppGlue;
use crate::window::{NativeWindow, PixelFormat, SurfaceSize, WindowBuffer};

/// In-memory window backed by a plain pixel vector.
///
/// Stands in for a real window system in tests and demos: it honors the same
/// lock/post bracket, counts posted frames, and can be told to refuse locks.
pub struct HeadlessWindow {
    size: SurfaceSize,
    stride: u32,
    format: PixelFormat,
    pixels: Vec<u16>,
    frames_posted: u64,
    refuse_locks: u32,
}

impl HeadlessWindow {
    /// Creates a window with no row padding.
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Self {
        Self::with_stride(width, height, width, format)
    }

    /// Creates a window whose rows start `stride` pixels apart.
    pub fn with_stride(width: u32, height: u32, stride: u32, format: PixelFormat) -> Self {
        assert!(stride >= width, "stride must cover the visible width");

        Self {
            size: SurfaceSize { width, height },
            stride,
            format,
            pixels: vec![0; stride as usize * height as usize],
            frames_posted: 0,
            refuse_locks: 0,
        }
    }

    /// Makes the next `count` lock attempts fail.
    pub fn refuse_next_locks(&mut self, count: u32) {
        self.refuse_locks = count;
    }

    /// Number of frames published so far.
    pub fn frames_posted(&self) -> u64 {
        self.frames_posted
    }

    /// Row stride in pixels.
    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// Read access to the backing pixels.
    pub fn pixels(&self) -> &[u16] {
        &self.pixels
    }
}

impl NativeWindow for HeadlessWindow {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn format(&self) -> PixelFormat {
        self.format
    }

    fn set_buffers_geometry(&mut self, size: SurfaceSize, format: PixelFormat) {
        if size != self.size {
            self.size = size;
            self.stride = self.stride.max(size.width);
            self.pixels = vec![0; self.stride as usize * size.height as usize];
        }
        self.format = format;
    }

    fn lock(&mut self) -> Result<WindowBuffer<'_>, EngineError> {
        if self.refuse_locks > 0 {
            self.refuse_locks -= 1;
            return Err(EngineError::BufferLockFailed);
        }

        Ok(WindowBuffer::from_raw(
            &mut self.pixels,
            self.size.width,
            self.size.height,
            self.stride,
        ))
    }

    fn unlock_and_post(&mut self) {
        self.frames_posted += 1;
    }
}

/// Scripted glue: a queue of events and an optional headless window.
///
/// Once the script runs dry the glue reports [`Polled::Disconnected`], so
/// driver loops terminate instead of blocking on a queue that can never fill
/// again. [`allow_empty_polls`](HeadlessGlue::allow_empty_polls) delays that
/// for a number of immediate polls, which lets an animating driver produce
/// frames after the script ends.
pub struct HeadlessGlue {
    events: VecDeque<AppEvent>,
    window: Option<HeadlessWindow>,
    empty_polls_left: u32,
}

impl HeadlessGlue {
    pub fn new(window: Option<HeadlessWindow>) -> Self {
        Self {
            events: VecDeque::new(),
            window,
            empty_polls_left: 0,
        }
    }

    /// Queues one event for the driver to pick up.
    pub fn push_event(&mut self, event: AppEvent) {
        self.events.push_back(event);
    }

    /// Queues a whole script of events in order.
    pub fn push_events(&mut self, events: impl IntoIterator<Item = AppEvent>) {
        self.events.extend(events);
    }

    /// Lets `count` immediate polls report an empty queue after the script
    /// is exhausted, before the glue disconnects.
    pub fn allow_empty_polls(&mut self, count: u32) {
        self.empty_polls_left = count;
    }

    /// Read access to the window, if one is attached.
    pub fn window_ref(&self) -> Option<&HeadlessWindow> {
        self.window.as_ref()
    }

    /// Detaches the window, as a host would after surface teardown.
    pub fn take_window(&mut self) -> Option<HeadlessWindow> {
        self.window.take()
    }
}

impl AppGlue for HeadlessGlue {
    type Window = HeadlessWindow;

    fn poll_event(&mut self, timeout: PollTimeout) -> Polled {
        if let Some(event) = self.events.pop_front() {
            return Polled::Event(event);
        }

        match timeout {
            // Blocking on a finished script would never wake up.
            PollTimeout::Block => Polled::Disconnected,
            PollTimeout::Immediate => {
                if self.empty_polls_left > 0 {
                    self.empty_polls_left -= 1;
                    Polled::Empty
                } else {
                    Polled::Disconnected
                }
            }
        }
    }

    fn window(&mut self) -> Option<&mut HeadlessWindow> {
        self.window.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::LifecycleEvent;

    #[test]
    fn events_drain_in_script_order_then_disconnect() {
        let mut glue = HeadlessGlue::new(None);
        glue.push_events([
            AppEvent::Lifecycle(LifecycleEvent::WindowCreated),
            AppEvent::Lifecycle(LifecycleEvent::FocusLost),
        ]);

        assert_eq!(
            glue.poll_event(PollTimeout::Block),
            Polled::Event(AppEvent::Lifecycle(LifecycleEvent::WindowCreated))
        );
        assert_eq!(
            glue.poll_event(PollTimeout::Immediate),
            Polled::Event(AppEvent::Lifecycle(LifecycleEvent::FocusLost))
        );
        assert_eq!(glue.poll_event(PollTimeout::Block), Polled::Disconnected);
    }

    #[test]
    fn empty_poll_allowance_is_spent_before_disconnecting() {
        let mut glue = HeadlessGlue::new(None);
        glue.allow_empty_polls(2);

        assert_eq!(glue.poll_event(PollTimeout::Immediate), Polled::Empty);
        assert_eq!(glue.poll_event(PollTimeout::Immediate), Polled::Empty);
        assert_eq!(glue.poll_event(PollTimeout::Immediate), Polled::Disconnected);
    }

    #[test]
    fn geometry_changes_reallocate_the_backing_pixels() {
        let mut window = HeadlessWindow::new(4, 4, PixelFormat::Rgb565);

        window.set_buffers_geometry(SurfaceSize { width: 8, height: 2 }, PixelFormat::Rgbx8888);

        assert_eq!(window.format(), PixelFormat::Rgbx8888);
        assert_eq!(window.pixels().len(), 16);
    }

    #[test]
    fn lock_refusals_are_consumed_one_by_one() {
        let mut window = HeadlessWindow::new(4, 4, PixelFormat::Rgb565);
        window.refuse_next_locks(1);

        assert!(window.lock().is_err());
        assert!(window.lock().is_ok());
    }
}
