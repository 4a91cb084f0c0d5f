// Input module - Controller buttons, edge detection, and analog sticks
//
// The console consumes controller state once per update drain and keeps a
// previous/current bitmask pair for edge detection: `btn` checks the current
// mask, `btnp` checks for a rising edge.

pub mod gamepad;
pub mod keyboard;

pub use gamepad::{GamepadHandler, PadState, MAX_PADS};
pub use keyboard::KeyboardMapping;

use bitflags::bitflags;

bitflags! {
    /// Controller button bitmask
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Buttons: u16 {
        const LEFT  = 1 << 0;
        const RIGHT = 1 << 1;
        const UP    = 1 << 2;
        const DOWN  = 1 << 3;
        /// Primary action button (PICO-8 "O")
        const O     = 1 << 4;
        /// Secondary action button (PICO-8 "X")
        const X     = 1 << 5;
        const START = 1 << 6;
    }
}

/// Stick axis magnitude corresponding to full deflection
const AXIS_SCALE: f32 = 128.0;

/// Button state with previous/current masks for edge detection
///
/// Keyboard input is kept as a separate mask and merged with the gamepad
/// mask on every refresh, so both sources drive the same buttons.
#[derive(Debug, Default)]
pub struct InputState {
    current: Buttons,
    previous: Buttons,
    keyboard: Buttons,
    stick: (i8, i8),
}

impl InputState {
    /// Create an input state with nothing pressed
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a keyboard press or release for a mapped button
    pub fn key_event(&mut self, button: Buttons, pressed: bool) {
        if pressed {
            self.keyboard.insert(button);
        } else {
            self.keyboard.remove(button);
        }
    }

    /// Advance one input frame from freshly polled controller state
    pub fn advance(&mut self, pad_buttons: Buttons, stick: (i8, i8)) {
        self.previous = self.current;
        self.current = pad_buttons | self.keyboard;
        self.stick = stick;
    }

    /// Whether a button is currently held
    pub fn btn(&self, button: Buttons) -> bool {
        self.current.intersects(button)
    }

    /// Whether a button was just pressed this frame
    pub fn btnp(&self, button: Buttons) -> bool {
        self.current.intersects(button) && !self.previous.intersects(button)
    }

    /// Analog stick position in [-1.0, 1.0] with a deadzone
    ///
    /// The Y axis is inverted to match screen coordinates (positive = down
    /// on the stick reads as negative here).
    pub fn stick(&self, deadzone: f32) -> (f32, f32) {
        let mut x = self.stick.0 as f32 / AXIS_SCALE;
        let mut y = -(self.stick.1 as f32) / AXIS_SCALE;

        if x.abs() < deadzone {
            x = 0.0;
        }
        if y.abs() < deadzone {
            y = 0.0;
        }

        (x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0))
    }
}
