use log::{info, warn};

use crate::config::EngineConfig;
use crate::errors::EngineError;
use crate::event::{AppEvent, InputEvent, LifecycleEvent, PollTimeout, Polled};
use crate::fill::{fill_frame, BandSource, RandomBands};
use crate::glue::AppGlue;
use crate::window::{NativeWindow, PixelFormat, WindowBuffer};

/// What the loop should do after an event was dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Animation driver.
///
/// Sits between a host glue layer and its window surface: lifecycle and
/// input events come in through [`AppGlue::poll_event`], color-band frames
/// go out through the window's lock/post bracket. The driver is either idle
/// (blocked on the queue, zero CPU) or animating (one frame per queue
/// drain).
pub struct Engine<B: BandSource = RandomBands> {
    config: EngineConfig,
    bands: B,
    /// Render a frame after every queue drain?
    animating: bool,
    /// Format the window had before we switched it, restored at teardown.
    initial_format: Option<PixelFormat>,
}

impl Engine<RandomBands> {
    /// Creates a driver with random band picks.
    ///
    /// If `config` is `None`, [`EngineConfig::default`] is used.
    pub fn new(config: Option<EngineConfig>) -> Self {
        Self::with_bands(config, RandomBands)
    }
}

impl<B: BandSource> Engine<B> {
    /// Creates a driver with a caller-supplied band source.
    pub fn with_bands(config: Option<EngineConfig>, bands: B) -> Self {
        Self {
            config: config.unwrap_or_default(),
            bands,
            animating: false,
            initial_format: None,
        }
    }

    /// Whether the driver renders a frame after each queue drain.
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Forces the animation flag, for hosts that run their own lifecycle
    /// dispatch instead of [`run`](Engine::run).
    pub fn set_animating(&mut self, animating: bool) {
        self.animating = animating;
    }

    /// Runs the driver loop until the host asks for shutdown or the queue
    /// disconnects.
    ///
    /// While idle the loop blocks on the glue's queue; while animating it
    /// drains whatever is pending and renders one frame per pass. The
    /// timeout is re-chosen on every poll, so a motion event flips the loop
    /// into free-running mode mid-drain.
    pub fn run<G: AppGlue>(&mut self, glue: &mut G) {
        loop {
            loop {
                let timeout = if self.animating {
                    PollTimeout::Immediate
                } else {
                    PollTimeout::Block
                };

                match glue.poll_event(timeout) {
                    Polled::Event(event) => {
                        if self.dispatch(event, glue) == Flow::Exit {
                            info!("driver shutdown requested");
                            self.animating = false;
                            return;
                        }
                    }
                    Polled::Empty => break,
                    Polled::Disconnected => {
                        info!("host event queue disconnected, shutting down");
                        self.animating = false;
                        return;
                    }
                }
            }

            if self.animating {
                // Failures are already logged; a skipped frame is retried on
                // the next pass.
                let _ = self.draw_frame(glue.window());
            }
        }
    }

    fn dispatch<G: AppGlue>(&mut self, event: AppEvent, glue: &mut G) -> Flow {
        match event {
            AppEvent::Lifecycle(lifecycle) => self.handle_lifecycle(lifecycle, glue),
            AppEvent::Input(input) => {
                self.handle_input(input);
                Flow::Continue
            }
        }
    }

    fn handle_lifecycle<G: AppGlue>(&mut self, lifecycle: LifecycleEvent, glue: &mut G) -> Flow {
        match lifecycle {
            LifecycleEvent::WindowCreated => {
                if let Some(window) = glue.window() {
                    self.initial_format = Some(window.format());
                    window.set_buffers_geometry(window.size(), self.config.format);
                    let _ = self.draw_frame(Some(window));
                }
            }
            LifecycleEvent::WindowDestroyed => {
                self.animating = false;
                if let Some(format) = self.initial_format.take() {
                    if let Some(window) = glue.window() {
                        window.set_buffers_geometry(window.size(), format);
                    }
                }
            }
            LifecycleEvent::FocusLost => {
                // One final snapshot before the surface goes quiet.
                self.animating = false;
                let _ = self.draw_frame(glue.window());
            }
            LifecycleEvent::DestroyRequested => return Flow::Exit,
        }

        Flow::Continue
    }

    /// Handles one input event, returning whether it was consumed.
    ///
    /// Motion starts the animation and is consumed; key events are logged
    /// for diagnostics and handed back to the host.
    pub fn handle_input(&mut self, input: InputEvent) -> bool {
        match input {
            InputEvent::Motion { .. } => {
                self.animating = true;
                true
            }
            InputEvent::Key {
                action,
                code,
                modifiers,
            } => {
                info!(
                    "key event: action={:?} code={} modifiers={}",
                    action, code, modifiers
                );
                false
            }
        }
    }

    /// Renders one frame into `window`, if there is one.
    ///
    /// Both failure kinds are non-fatal: they are logged as warnings, the
    /// frame is skipped, and the driver state is left untouched. When the
    /// lock itself fails no unlock is attempted.
    pub fn draw_frame<W: NativeWindow>(
        &mut self,
        window: Option<&mut W>,
    ) -> Result<(), EngineError> {
        let window = match window {
            Some(window) => window,
            None => {
                warn!("no window to draw into");
                return Err(EngineError::NoWindow);
            }
        };

        let mut buffer = match window.lock() {
            Ok(buffer) => buffer,
            Err(e) => {
                warn!("could not lock the window buffer: {}", e);
                return Err(e);
            }
        };

        fill_frame(&mut buffer, &self.config.palette, &mut self.bands);
        window.unlock_and_post();

        Ok(())
    }

    /// Paints one frame into an already-locked buffer.
    pub fn fill_into(&mut self, buffer: &mut WindowBuffer<'_>) {
        fill_frame(buffer, &self.config.palette, &mut self.bands);
    }
}
