// Text Renderer - Monospace glyph strings and the implicit cursor
//
// Text renders through the rasterizer adapter's hardware text operation and
// advances the implicit cursor. The four position/color combinations are
// explicit methods rather than argument-count dispatch.

use super::palette;
use super::screen::{round_coord, Screen};
use crate::display::font::{FONT_HEIGHT, GLYPH_WIDTH};
use log::warn;

/// Compute the end coordinates a print call would produce
///
/// Shared with the console so layout can be computed before the screen
/// exists.
pub(crate) fn layout(text: &str, x: i32, y: i32) -> (i32, i32) {
    let end_x = x + GLYPH_WIDTH * text.chars().count() as i32;
    let end_y = y + FONT_HEIGHT;
    (end_x, end_y)
}

impl Screen {
    /// Print at the cursor position with the cursor color
    pub fn print(&mut self, text: &str) -> (i32, i32) {
        self.print_impl(text, None, None)
    }

    /// Print at the cursor position with an explicit color
    pub fn print_colored(&mut self, text: &str, color: u8) -> (i32, i32) {
        self.print_impl(text, None, Some(color))
    }

    /// Print at an explicit position with the cursor color
    pub fn print_at(&mut self, text: &str, x: f32, y: f32) -> (i32, i32) {
        self.print_impl(text, Some((x, y)), None)
    }

    /// Print at an explicit position with an explicit color
    pub fn print_at_colored(&mut self, text: &str, x: f32, y: f32, color: u8) -> (i32, i32) {
        self.print_impl(text, Some((x, y)), Some(color))
    }

    /// Shared print path
    ///
    /// Returns `(end_x, end_y)`. The cursor x is updated only when an
    /// explicit position was given; the cursor y always advances to the next
    /// line.
    fn print_impl(
        &mut self,
        text: &str,
        position: Option<(f32, f32)>,
        color: Option<u8>,
    ) -> (i32, i32) {
        let (x, y, explicit_position) = match position {
            Some((px, py)) => (round_coord(px), round_coord(py), true),
            None => (self.cursor.x, self.cursor.y, false),
        };
        let index = match color {
            Some(c) if palette::is_valid(c) => c,
            Some(c) => {
                warn!(
                    "print() called with invalid color index {}, using cursor color {}",
                    c, self.cursor.color
                );
                self.cursor.color
            }
            None => self.cursor.color,
        };

        self.raster
            .draw_text(x, y, palette::palette_to_rgba(index), text);

        let (end_x, end_y) = layout(text, x, y);
        if explicit_position {
            self.cursor.x = x;
        }
        self.cursor.y = end_y;
        (end_x, end_y)
    }

    /// Move the cursor to a position, keeping its color
    pub fn set_cursor(&mut self, x: f32, y: f32) {
        self.cursor.x = round_coord(x);
        self.cursor.y = round_coord(y);
    }

    /// Move the cursor and set its color
    ///
    /// An invalid color warns and leaves the current cursor color in place;
    /// the position is still applied.
    pub fn set_cursor_colored(&mut self, x: f32, y: f32, color: u8) {
        self.set_cursor(x, y);
        if palette::is_valid(color) {
            self.cursor.color = color;
        } else {
            warn!(
                "cursor() called with invalid color index {}, keeping color {}",
                color, self.cursor.color
            );
        }
    }

    /// Reset the cursor to the origin, leaving its color untouched
    pub fn reset_cursor(&mut self) {
        self.cursor.x = 0;
        self.cursor.y = 0;
    }
}
