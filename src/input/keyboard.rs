// Keyboard input - winit key codes mapped to console buttons
//
// Lets the desktop build play without a gamepad: arrow keys for directions,
// Z/X for the action buttons, Enter for start.

use super::Buttons;
use winit::keyboard::{KeyCode, PhysicalKey};

/// Keyboard-to-console button mapping
#[derive(Debug, Clone)]
pub struct KeyboardMapping {
    pub up: KeyCode,
    pub down: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
    pub button_o: KeyCode,
    pub button_x: KeyCode,
    pub start: KeyCode,
}

impl KeyboardMapping {
    /// Default layout: arrows + Z/X + Enter
    pub fn default_mapping() -> Self {
        Self {
            up: KeyCode::ArrowUp,
            down: KeyCode::ArrowDown,
            left: KeyCode::ArrowLeft,
            right: KeyCode::ArrowRight,
            button_o: KeyCode::KeyZ,
            button_x: KeyCode::KeyX,
            start: KeyCode::Enter,
        }
    }

    /// The console button for a physical key, if mapped
    pub fn button_for(&self, key: PhysicalKey) -> Option<Buttons> {
        let PhysicalKey::Code(code) = key else {
            return None;
        };
        if code == self.up {
            Some(Buttons::UP)
        } else if code == self.down {
            Some(Buttons::DOWN)
        } else if code == self.left {
            Some(Buttons::LEFT)
        } else if code == self.right {
            Some(Buttons::RIGHT)
        } else if code == self.button_o {
            Some(Buttons::O)
        } else if code == self.button_x {
            Some(Buttons::X)
        } else if code == self.start {
            Some(Buttons::START)
        } else {
            None
        }
    }
}

impl Default for KeyboardMapping {
    fn default() -> Self {
        Self::default_mapping()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mapping() {
        let mapping = KeyboardMapping::default_mapping();
        assert_eq!(
            mapping.button_for(PhysicalKey::Code(KeyCode::ArrowLeft)),
            Some(Buttons::LEFT)
        );
        assert_eq!(
            mapping.button_for(PhysicalKey::Code(KeyCode::KeyZ)),
            Some(Buttons::O)
        );
        assert_eq!(
            mapping.button_for(PhysicalKey::Code(KeyCode::Enter)),
            Some(Buttons::START)
        );
        assert_eq!(mapping.button_for(PhysicalKey::Code(KeyCode::KeyQ)), None);
    }
}
