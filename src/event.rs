use bitflags::bitflags;
use std::fmt::Display;

bitflags! {
    /// Modifier keys held while a key event fired.
    pub struct Modifiers: u32 {
        const SHIFT   = 0b0001;
        const CONTROL = 0b0010;
        const ALT     = 0b0100;
        const META    = 0b1000;
    }
}

impl Display for Modifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::new();

        if self.contains(Modifiers::SHIFT) {
            parts.push("Shift");
        }
        if self.contains(Modifiers::CONTROL) {
            parts.push("Control");
        }
        if self.contains(Modifiers::ALT) {
            parts.push("Alt");
        }
        if self.contains(Modifiers::META) {
            parts.push("Meta");
        }

        if parts.is_empty() {
            write!(f, "None")
        } else {
            write!(f, "{}", parts.join("+"))
        }
    }
}

/// Whether a key was pressed or released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Down,
    Up,
}

/// User input delivered by the host glue.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer or touch motion anywhere on the surface.
    Motion {
        /// The x coordinate of the pointer position
        x: f32,
        /// The y coordinate of the pointer position
        y: f32,
    },
    /// A key changed state.
    Key {
        /// Press or release
        action: KeyAction,
        /// Platform key code
        code: u32,
        /// Modifier keys held at the time
        modifiers: Modifiers,
    },
}

/// Window lifecycle notifications delivered by the host glue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// A window surface became available and can be drawn to
    WindowCreated,
    /// The window surface is about to go away
    WindowDestroyed,
    /// The surface lost input focus
    FocusLost,
    /// The host asked the driver loop to shut down
    DestroyRequested,
}

/// Any event the host glue can hand to the driver.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Lifecycle(LifecycleEvent),
    Input(InputEvent),
}

/// How long a poll call may wait for the next event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollTimeout {
    /// Wait indefinitely until an event arrives
    Block,
    /// Return right away when the queue is empty
    Immediate,
}

/// Outcome of a single poll call.
#[derive(Debug, Clone, PartialEq)]
pub enum Polled {
    /// An event was ready
    Event(AppEvent),
    /// Nothing pending right now (only seen with [`PollTimeout::Immediate`])
    Empty,
    /// The host side of the queue is gone; no further events will arrive
    Disconnected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifiers_display_joins_held_keys() {
        let mods = Modifiers::SHIFT | Modifiers::ALT;
        assert_eq!(mods.to_string(), "Shift+Alt");
    }

    #[test]
    fn empty_modifiers_display_as_none() {
        assert_eq!(Modifiers::empty().to_string(), "None");
    }
}
