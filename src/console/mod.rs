// Console module - The fantasy console itself
//
// Owns the single active screen and its lifecycle (Uninitialized -> Ready ->
// Drawing -> Ready -> ...), the controller input state, and the configuration.
// Every drawing call is guarded: before video initialization it is a logged
// no-op, never a crash, because one failed frame must not abort the session.

pub mod config;
pub mod game_loop;
pub mod math;
pub mod screenshot;

pub use config::ConsoleConfig;
pub use game_loop::{run_frame, FrameClock, Game};
pub use screenshot::{save_screenshot, ScreenshotError};

use crate::display::video::VideoPreset;
use crate::gfx::screen::{round_coord, Screen};
use crate::gfx::text;
use crate::input::{Buttons, GamepadHandler, InputState};
use log::warn;
use std::path::PathBuf;
use winit::keyboard::PhysicalKey;

/// The console: screen lifecycle, input, and configuration
///
/// All drawing primitives live here as readiness-guarded wrappers around the
/// active [`Screen`]; games talk to the console only.
pub struct Console {
    config: ConsoleConfig,
    screen: Option<Screen>,
    gamepad: Option<GamepadHandler>,
    keyboard: crate::input::KeyboardMapping,
    input: InputState,
}

impl Console {
    /// Create a console with the given configuration
    ///
    /// Gamepad support failing to initialize (e.g. headless CI) is a logged
    /// warning; keyboard input still works.
    pub fn new(config: ConsoleConfig) -> Self {
        let gamepad = match GamepadHandler::new() {
            Ok(handler) => Some(handler),
            Err(e) => {
                warn!("Gamepad support unavailable: {}", e);
                None
            }
        };
        Self {
            config,
            screen: None,
            gamepad,
            keyboard: crate::input::KeyboardMapping::default_mapping(),
            input: InputState::new(),
        }
    }

    /// Create a console with default configuration and no gamepad polling
    ///
    /// Intended for tests and headless use.
    pub fn headless() -> Self {
        Self {
            config: ConsoleConfig::new(),
            screen: None,
            gamepad: None,
            keyboard: crate::input::KeyboardMapping::default_mapping(),
            input: InputState::new(),
        }
    }

    /// The active configuration
    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Whether the display has been initialized
    pub fn is_ready(&self) -> bool {
        self.screen.is_some()
    }

    /// Borrow the active screen, if initialized
    pub fn screen(&self) -> Option<&Screen> {
        self.screen.as_ref()
    }

    /// One-time video setup for a preset
    ///
    /// Allocates the framebuffer pair, the screen, and its pixel buffer.
    /// Calling again while initialized is a logged no-op; nothing is
    /// reallocated.
    pub fn init_video(&mut self, preset: VideoPreset) {
        if self.screen.is_some() {
            warn!("init_video() called twice, keeping the existing screen");
            return;
        }
        self.screen = Some(Screen::new(preset, self.config.video.overscan_x));
    }

    /// Replace the screen wholesale for a new video preset
    ///
    /// The pixel buffer and framebuffer pair are swapped together, so their
    /// dimensions can never disagree.
    pub fn change_video_preset(&mut self, preset: VideoPreset) {
        self.screen = Some(Screen::new(preset, self.config.video.overscan_x));
    }

    /// Begin a frame: swap to the back framebuffer
    pub fn begin_frame(&mut self) {
        match self.screen.as_mut() {
            Some(screen) => screen.begin_frame(),
            None => warn!("begin_frame() called before the screen was ready"),
        }
    }

    /// End a frame: flush accumulated rasterizer commands
    pub fn end_frame(&mut self) {
        match self.screen.as_mut() {
            Some(screen) => screen.end_frame(),
            None => warn!("end_frame() called before the screen was ready"),
        }
    }

    // --- Drawing primitives -------------------------------------------------

    /// Clear the screen (see [`Screen::cls`])
    pub fn cls(&mut self, color: Option<u8>) {
        match self.screen.as_mut() {
            Some(screen) => screen.cls(color),
            None => warn!("cls() called before the screen was ready"),
        }
    }

    /// Set a single pixel (see [`Screen::pset`])
    pub fn pset(&mut self, x: f32, y: f32, color: Option<u8>) {
        match self.screen.as_mut() {
            Some(screen) => screen.pset(x, y, color),
            None => warn!("pset() called before the screen was ready"),
        }
    }

    /// Read a pixel's color index; 0 when uninitialized or out of bounds
    pub fn pget(&self, x: f32, y: f32) -> u8 {
        match self.screen.as_ref() {
            Some(screen) => screen.pget(x, y),
            None => {
                warn!("pget() called before the screen was ready");
                0
            }
        }
    }

    /// Draw a rectangle outline (see [`Screen::rect`])
    pub fn rect(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Option<u8>) {
        match self.screen.as_mut() {
            Some(screen) => screen.rect(x1, y1, x2, y2, color),
            None => warn!("rect() called before the screen was ready"),
        }
    }

    /// Draw a filled rectangle (see [`Screen::rectfill`])
    pub fn rectfill(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Option<u8>) {
        match self.screen.as_mut() {
            Some(screen) => screen.rectfill(x1, y1, x2, y2, color),
            None => warn!("rectfill() called before the screen was ready"),
        }
    }

    /// Draw a line (see [`Screen::line`])
    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Option<u8>) {
        match self.screen.as_mut() {
            Some(screen) => screen.line(x1, y1, x2, y2, color),
            None => warn!("line() called before the screen was ready"),
        }
    }

    /// Draw a circle outline (see [`Screen::circ`])
    pub fn circ(&mut self, cx: f32, cy: f32, radius: f32, color: Option<u8>) {
        match self.screen.as_mut() {
            Some(screen) => screen.circ(cx, cy, radius, color),
            None => warn!("circ() called before the screen was ready"),
        }
    }

    /// Draw a filled circle (see [`Screen::circfill`])
    pub fn circfill(&mut self, cx: f32, cy: f32, radius: f32, color: Option<u8>) {
        match self.screen.as_mut() {
            Some(screen) => screen.circfill(cx, cy, radius, color),
            None => warn!("circfill() called before the screen was ready"),
        }
    }

    /// Set the current draw color
    pub fn set_color(&mut self, color: u8) {
        match self.screen.as_mut() {
            Some(screen) => screen.set_color(color),
            None => warn!("set_color() called before the screen was ready"),
        }
    }

    // --- Text ---------------------------------------------------------------

    /// Print at the cursor with the cursor color
    pub fn print(&mut self, text: &str) -> (i32, i32) {
        match self.screen.as_mut() {
            Some(screen) => screen.print(text),
            None => self.layout_without_screen(text, None),
        }
    }

    /// Print at the cursor with an explicit color
    pub fn print_colored(&mut self, text: &str, color: u8) -> (i32, i32) {
        match self.screen.as_mut() {
            Some(screen) => screen.print_colored(text, color),
            None => self.layout_without_screen(text, None),
        }
    }

    /// Print at an explicit position with the cursor color
    pub fn print_at(&mut self, text: &str, x: f32, y: f32) -> (i32, i32) {
        match self.screen.as_mut() {
            Some(screen) => screen.print_at(text, x, y),
            None => self.layout_without_screen(text, Some((x, y))),
        }
    }

    /// Print at an explicit position with an explicit color
    pub fn print_at_colored(&mut self, text: &str, x: f32, y: f32, color: u8) -> (i32, i32) {
        match self.screen.as_mut() {
            Some(screen) => screen.print_at_colored(text, x, y, color),
            None => self.layout_without_screen(text, Some((x, y))),
        }
    }

    /// End-coordinate math for print calls made before the screen exists
    ///
    /// Lets callers lay out text before the display is ready: the would-be
    /// end coordinates come back, but neither hardware nor cursor state is
    /// touched.
    fn layout_without_screen(&self, text: &str, position: Option<(f32, f32)>) -> (i32, i32) {
        warn!("print() called before the screen was ready");
        let (x, y) = match position {
            Some((px, py)) => (round_coord(px), round_coord(py)),
            None => (0, 0),
        };
        text::layout(text, x, y)
    }

    /// Move the text cursor
    pub fn set_cursor(&mut self, x: f32, y: f32) {
        match self.screen.as_mut() {
            Some(screen) => screen.set_cursor(x, y),
            None => warn!("set_cursor() called before the screen was ready"),
        }
    }

    /// Move the text cursor and set its color
    pub fn set_cursor_colored(&mut self, x: f32, y: f32, color: u8) {
        match self.screen.as_mut() {
            Some(screen) => screen.set_cursor_colored(x, y, color),
            None => warn!("set_cursor() called before the screen was ready"),
        }
    }

    /// Reset the text cursor to the origin
    pub fn reset_cursor(&mut self) {
        match self.screen.as_mut() {
            Some(screen) => screen.reset_cursor(),
            None => warn!("reset_cursor() called before the screen was ready"),
        }
    }

    // --- Input --------------------------------------------------------------

    /// Poll the controller and advance the previous/current button masks
    ///
    /// Called once per update drain by the game loop driver.
    pub fn refresh_input(&mut self) {
        let (buttons, stick) = match self.gamepad.as_mut() {
            Some(handler) => {
                handler.poll();
                let pad = handler.primary();
                if pad.present() {
                    (pad.down(), pad.stick())
                } else {
                    (Buttons::empty(), (0, 0))
                }
            }
            None => (Buttons::empty(), (0, 0)),
        };
        self.input.advance(buttons, stick);
    }

    /// Whether a button is currently held
    pub fn btn(&self, button: Buttons) -> bool {
        self.input.btn(button)
    }

    /// Whether a button was just pressed this frame
    pub fn btnp(&self, button: Buttons) -> bool {
        self.input.btnp(button)
    }

    /// Analog stick position in [-1.0, 1.0] after a deadzone
    pub fn stick(&self, deadzone: f32) -> (f32, f32) {
        self.input.stick(deadzone)
    }

    /// Feed a window keyboard event into the button state
    pub fn handle_key(&mut self, key: PhysicalKey, pressed: bool) {
        if let Some(button) = self.keyboard.button_for(key) {
            self.input.key_event(button, pressed);
        }
    }

    // --- Misc ---------------------------------------------------------------

    /// Save a PNG screenshot of the visible framebuffer
    pub fn save_screenshot(&self) -> Result<PathBuf, ScreenshotError> {
        let screen = self.screen.as_ref().ok_or(ScreenshotError::NotReady)?;
        save_screenshot(
            screen.visible_framebuffer(),
            &self.config.screenshot.directory,
            self.config.screenshot.include_timestamp,
        )
    }
}
