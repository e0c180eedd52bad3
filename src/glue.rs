pub mod headless;

use crate::event::{PollTimeout, Polled};
use crate::window::NativeWindow;

/// Host application glue the driver runs against.
///
/// The glue owns the event queue and the window surface; the driver only
/// borrows the window between polls and never outlives a single frame with
/// it.
pub trait AppGlue {
    /// Window type this glue hands out.
    type Window: NativeWindow;

    /// Fetches the next pending event, honoring `timeout` when the queue is
    /// empty.
    fn poll_event(&mut self, timeout: PollTimeout) -> Polled;

    /// Current window surface, if one exists.
    fn window(&mut self) -> Option<&mut Self::Window>;
}
