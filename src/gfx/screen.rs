// Screen - The single active rendering target
//
// Owns the framebuffer pair, the rasterizer adapter, the software pixel
// buffer, the text cursor, and the current draw color. Created once by video
// initialization and replaced wholesale on a resolution change, so the pixel
// buffer and framebuffer dimensions can never disagree.

use super::palette;
use super::pixel_buffer::PixelBuffer;
use super::raster::Rasterizer;
use crate::display::framebuffer::{Display, Framebuffer};
use crate::display::video::{VideoMode, VideoPreset};
use log::warn;

/// Initial draw color: white, since black is transparent by default
pub const DEFAULT_DRAW_COLOR: u8 = palette::WHITE;

/// Initial cursor color for text drawing
pub const DEFAULT_CURSOR_COLOR: u8 = palette::WHITE;

/// Round a coordinate to the pixel grid, half away from zero
#[inline]
pub(crate) fn round_coord(v: f32) -> i32 {
    v.round() as i32
}

/// Implicit text cursor state
#[derive(Debug, Clone, Copy)]
pub struct Cursor {
    pub x: i32,
    pub y: i32,
    pub color: u8,
}

impl Cursor {
    fn new() -> Self {
        Self {
            x: 0,
            y: 0,
            color: DEFAULT_CURSOR_COLOR,
        }
    }
}

/// The active drawing surface and its state
pub struct Screen {
    mode: VideoMode,
    display: Display,
    pub(crate) raster: Rasterizer,
    pub(crate) pixels: PixelBuffer,
    pub(crate) cursor: Cursor,
    pub(crate) draw_color: u8,
}

impl Screen {
    /// Allocate a screen for a video preset
    ///
    /// Creates the framebuffer pair, binds the initial draw target, and sizes
    /// the pixel buffer to the mode's resolution.
    pub fn new(preset: VideoPreset, overscan_x: i32) -> Self {
        let mode = preset.mode();
        let display = Display::new(&mode);
        let mut raster = Rasterizer::new(overscan_x);
        raster.bind(display.draw_target());

        Self {
            mode,
            pixels: PixelBuffer::new(mode.width, mode.height),
            display,
            raster,
            cursor: Cursor::new(),
            draw_color: DEFAULT_DRAW_COLOR,
        }
    }

    /// Begin a frame: swap to the back framebuffer and bind it
    ///
    /// This is the only point at which the target surface changes; all
    /// drawing until `end_frame` targets this one surface.
    pub fn begin_frame(&mut self) {
        let fb = self.display.swap();
        self.raster.bind(fb);
    }

    /// End a frame: flush the rasterizer's accumulated commands
    pub fn end_frame(&mut self) {
        self.raster.flush(&mut self.display);
    }

    /// Logical screen width in pixels
    pub fn width(&self) -> i32 {
        self.mode.width as i32
    }

    /// Logical screen height in pixels
    pub fn height(&self) -> i32 {
        self.mode.height as i32
    }

    /// The active video mode
    pub fn mode(&self) -> &VideoMode {
        &self.mode
    }

    /// The framebuffer currently visible to the display
    pub fn visible_framebuffer(&self) -> &Framebuffer {
        self.display.visible()
    }

    /// The framebuffer currently bound for drawing
    pub fn back_framebuffer(&self) -> &Framebuffer {
        self.display.framebuffer(self.display.draw_target())
    }

    /// The software shadow pixel buffer
    pub fn pixel_buffer(&self) -> &PixelBuffer {
        &self.pixels
    }

    /// Current cursor position
    pub fn cursor(&self) -> (i32, i32) {
        (self.cursor.x, self.cursor.y)
    }

    /// Current cursor color
    pub fn cursor_color(&self) -> u8 {
        self.cursor.color
    }

    /// Current draw color
    pub fn draw_color(&self) -> u8 {
        self.draw_color
    }

    /// Set the current draw color, clamping into the palette range
    pub fn set_color(&mut self, color: u8) {
        self.draw_color = color.min(palette::PALETTE_SIZE as u8 - 1);
    }

    /// Resolve an optional color argument against the current draw color
    ///
    /// Invalid explicit indices warn and fall back to the draw color; `pset`
    /// deliberately does not use this path (it no-ops instead).
    pub(crate) fn resolve_color(&self, color: Option<u8>, primitive: &str) -> u8 {
        match color {
            Some(c) if palette::is_valid(c) => c,
            Some(c) => {
                warn!(
                    "{}() called with invalid color index {}, using draw color {}",
                    primitive, c, self.draw_color
                );
                self.draw_color
            }
            None => self.draw_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_screen_matches_preset() {
        let screen = Screen::new(VideoPreset::LowRes, 0);
        assert_eq!(screen.width(), 320);
        assert_eq!(screen.height(), 240);
        assert_eq!(screen.pixel_buffer().width(), 320);
        assert_eq!(screen.pixel_buffer().height(), 240);
    }

    #[test]
    fn test_initial_state() {
        let screen = Screen::new(VideoPreset::LowRes, 0);
        assert_eq!(screen.cursor(), (0, 0));
        assert_eq!(screen.cursor_color(), DEFAULT_CURSOR_COLOR);
        assert_eq!(screen.draw_color(), DEFAULT_DRAW_COLOR);
    }

    #[test]
    fn test_set_color_clamps() {
        let mut screen = Screen::new(VideoPreset::LowRes, 0);
        screen.set_color(200);
        assert_eq!(screen.draw_color(), 15);
        screen.set_color(3);
        assert_eq!(screen.draw_color(), 3);
    }

    #[test]
    fn test_resolve_color_falls_back_on_invalid() {
        let mut screen = Screen::new(VideoPreset::LowRes, 0);
        screen.set_color(9);
        assert_eq!(screen.resolve_color(Some(4), "rect"), 4);
        assert_eq!(screen.resolve_color(Some(99), "rect"), 9);
        assert_eq!(screen.resolve_color(None, "rect"), 9);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_coord(2.5), 3);
        assert_eq!(round_coord(-2.5), -3);
        assert_eq!(round_coord(2.4), 2);
        assert_eq!(round_coord(-2.4), -2);
    }
}
