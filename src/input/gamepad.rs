// Gamepad input - gilrs-backed controller polling
//
// Maintains a fixed array of per-controller states. Each state exposes
// presence, the held-button bitmask, and the analog stick axes as signed
// bytes; the console layer derives btn/btnp edges from these once per update.

use super::Buttons;
use gilrs::{Axis, Button as GilrsButton, Event, EventType, GamepadId, Gilrs};
use std::collections::HashMap;

/// Maximum number of controller ports
pub const MAX_PADS: usize = 4;

/// Gamepad-to-console button mapping
#[derive(Debug, Clone)]
pub struct GamepadMapping {
    pub up: GilrsButton,
    pub down: GilrsButton,
    pub left: GilrsButton,
    pub right: GilrsButton,
    pub button_o: GilrsButton,
    pub button_x: GilrsButton,
    pub start: GilrsButton,
}

impl GamepadMapping {
    /// Standard layout: D-pad for directions, South = O, East = X
    pub fn default_mapping() -> Self {
        Self {
            up: GilrsButton::DPadUp,
            down: GilrsButton::DPadDown,
            left: GilrsButton::DPadLeft,
            right: GilrsButton::DPadRight,
            button_o: GilrsButton::South,
            button_x: GilrsButton::East,
            start: GilrsButton::Start,
        }
    }

    /// The console button for a gamepad button, if mapped
    fn button_for(&self, button: GilrsButton) -> Option<Buttons> {
        if button == self.up {
            Some(Buttons::UP)
        } else if button == self.down {
            Some(Buttons::DOWN)
        } else if button == self.left {
            Some(Buttons::LEFT)
        } else if button == self.right {
            Some(Buttons::RIGHT)
        } else if button == self.button_o {
            Some(Buttons::O)
        } else if button == self.button_x {
            Some(Buttons::X)
        } else if button == self.start {
            Some(Buttons::START)
        } else {
            None
        }
    }
}

impl Default for GamepadMapping {
    fn default() -> Self {
        Self::default_mapping()
    }
}

/// Observable state of one controller port
#[derive(Debug, Clone, Copy, Default)]
pub struct PadState {
    present: bool,
    buttons: Buttons,
    stick_x: i8,
    stick_y: i8,
}

impl PadState {
    /// Whether a controller is connected to this port
    pub fn present(&self) -> bool {
        self.present
    }

    /// Bitmask of currently held buttons
    pub fn down(&self) -> Buttons {
        self.buttons
    }

    /// Analog stick axes as signed bytes
    pub fn stick(&self) -> (i8, i8) {
        (self.stick_x, self.stick_y)
    }
}

/// Polls gamepad events and maintains per-port state
pub struct GamepadHandler {
    gilrs: Gilrs,
    mapping: GamepadMapping,
    states: [PadState; MAX_PADS],
    assignments: HashMap<GamepadId, usize>,
}

impl GamepadHandler {
    /// Create a handler with the default mapping
    pub fn new() -> Result<Self, gilrs::Error> {
        let gilrs = Gilrs::new()?;
        Ok(Self {
            gilrs,
            mapping: GamepadMapping::default_mapping(),
            states: [PadState::default(); MAX_PADS],
            assignments: HashMap::new(),
        })
    }

    /// Drain pending gamepad events and update port states
    pub fn poll(&mut self) {
        while let Some(Event { id, event, .. }) = self.gilrs.next_event() {
            let port = self.port_for(id);
            let Some(port) = port else {
                continue;
            };
            // Resolve the mapping before borrowing the port state.
            let mapped = match event {
                EventType::ButtonPressed(button, _) | EventType::ButtonReleased(button, _) => {
                    self.mapping.button_for(button)
                }
                _ => None,
            };
            let state = &mut self.states[port];
            match event {
                EventType::Connected => state.present = true,
                EventType::Disconnected => {
                    *state = PadState::default();
                }
                EventType::ButtonPressed(..) => {
                    state.present = true;
                    if let Some(b) = mapped {
                        state.buttons.insert(b);
                    }
                }
                EventType::ButtonReleased(..) => {
                    if let Some(b) = mapped {
                        state.buttons.remove(b);
                    }
                }
                EventType::AxisChanged(Axis::LeftStickX, value, _) => {
                    state.present = true;
                    state.stick_x = axis_to_byte(value);
                }
                EventType::AxisChanged(Axis::LeftStickY, value, _) => {
                    state.present = true;
                    state.stick_y = axis_to_byte(value);
                }
                _ => {}
            }
        }
    }

    /// Assign a gamepad to the first free port
    fn port_for(&mut self, id: GamepadId) -> Option<usize> {
        if let Some(&port) = self.assignments.get(&id) {
            return Some(port);
        }
        let port = (0..MAX_PADS).find(|p| !self.assignments.values().any(|&v| v == *p))?;
        self.assignments.insert(id, port);
        Some(port)
    }

    /// State of a controller port
    pub fn state(&self, port: usize) -> &PadState {
        &self.states[port.min(MAX_PADS - 1)]
    }

    /// State of the first controller port
    pub fn primary(&self) -> &PadState {
        &self.states[0]
    }
}

/// Convert a gilrs axis value (-1.0..=1.0) to a signed byte
fn axis_to_byte(value: f32) -> i8 {
    (value.clamp(-1.0, 1.0) * 127.0) as i8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mapping_covers_all_buttons() {
        let mapping = GamepadMapping::default_mapping();
        assert_eq!(mapping.button_for(GilrsButton::DPadUp), Some(Buttons::UP));
        assert_eq!(
            mapping.button_for(GilrsButton::DPadDown),
            Some(Buttons::DOWN)
        );
        assert_eq!(mapping.button_for(GilrsButton::South), Some(Buttons::O));
        assert_eq!(mapping.button_for(GilrsButton::East), Some(Buttons::X));
        assert_eq!(mapping.button_for(GilrsButton::Start), Some(Buttons::START));
        assert_eq!(mapping.button_for(GilrsButton::North), None);
    }

    #[test]
    fn test_axis_to_byte_range() {
        assert_eq!(axis_to_byte(0.0), 0);
        assert_eq!(axis_to_byte(1.0), 127);
        assert_eq!(axis_to_byte(-1.0), -127);
        assert_eq!(axis_to_byte(2.0), 127);
        assert_eq!(axis_to_byte(-2.0), -127);
    }

    #[test]
    fn test_pad_state_defaults() {
        let state = PadState::default();
        assert!(!state.present());
        assert!(state.down().is_empty());
        assert_eq!(state.stick(), (0, 0));
    }
}
