// Sprite64 Library
// A PICO-8 style fantasy console: 16-color drawing primitives on a
// double-buffered 2D framebuffer, with a fixed-timestep game loop.

// Public modules
pub mod console;
pub mod display;
pub mod gfx;
pub mod input;

// Re-export main types for convenience
pub use console::{
    run_frame, save_screenshot, Console, ConsoleConfig, FrameClock, Game, ScreenshotError,
};
pub use display::{
    run_game, ColorDepth, Display, Framebuffer, FramebufferId, VideoMode, VideoPreset,
    WindowConfig,
};
pub use gfx::{palette, PixelBuffer, Screen};
pub use input::{Buttons, GamepadHandler, InputState, KeyboardMapping};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_components() {
        // Test that the main components can be instantiated
        let _screen = Screen::new(VideoPreset::LowRes, 0);
        let _console = Console::headless();
        let _config = ConsoleConfig::new();
        let _input = InputState::new();
        let _clock = FrameClock::new(60);
    }
}
