// Primitive Drawer - Lines, rectangles, circles, pixels
//
// Every primitive decomposes into pixel-buffer writes plus rasterizer blits
// through two helpers (`plot` and `fill_region`), so the software pixel state
// and the hardware-rendered pixels never diverge. Clipping happens in logical
// space before anything reaches the hardware.
//
// Public coordinates are f32 and are rounded half away from zero to the pixel
// grid before any algorithm runs.

use super::palette;
use super::raster::LogicalRect;
use super::screen::{round_coord, Screen};
use log::warn;

impl Screen {
    /// Write one pixel to the shadow buffer and the hardware, clipped
    pub(crate) fn plot(&mut self, x: i32, y: i32, color: u8) {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return;
        }
        self.pixels.set(x, y, color as i8);
        self.raster
            .blit_rect(LogicalRect::pixel(x, y), palette::palette_to_rgba(color));
    }

    /// Fill a normalized rectangle via one hardware blit, clipped
    ///
    /// Mirrors every covered pixel into the shadow buffer.
    pub(crate) fn fill_region(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: u8) {
        let x1 = x1.max(0);
        let y1 = y1.max(0);
        let x2 = x2.min(self.width() - 1);
        let y2 = y2.min(self.height() - 1);
        if x1 > x2 || y1 > y2 {
            return;
        }
        for y in y1..=y2 {
            for x in x1..=x2 {
                self.pixels.set(x, y, color as i8);
            }
        }
        self.raster.blit_rect(
            LogicalRect { x1, y1, x2, y2 },
            palette::palette_to_rgba(color),
        );
    }

    /// Clear the screen with a palette color
    ///
    /// `None` clears to black; an invalid index warns and clears to black as
    /// well. Resets the text cursor to the origin (draw color untouched).
    pub fn cls(&mut self, color: Option<u8>) {
        let index = match color {
            None => palette::BLACK,
            Some(c) if palette::is_valid(c) => c,
            Some(c) => {
                warn!(
                    "cls() called with invalid color index {}, defaulting to black",
                    c
                );
                palette::BLACK
            }
        };

        self.raster.blit_full(
            self.width(),
            self.height(),
            palette::palette_to_rgba(index),
        );
        self.pixels.fill(index as i8);
        self.cursor.x = 0;
        self.cursor.y = 0;
    }

    /// Set a single pixel
    ///
    /// Honors the transparency mask: a transparent resolved color is a
    /// complete no-op. An invalid explicit color warns and no-ops rather than
    /// substituting a default, to avoid surprising visual results.
    pub fn pset(&mut self, x: f32, y: f32, color: Option<u8>) {
        let index = match color {
            Some(c) if !palette::is_valid(c) => {
                warn!("pset() called with invalid color index {}, ignoring", c);
                return;
            }
            Some(c) => c,
            None => self.draw_color,
        };
        if palette::is_transparent(index) {
            return;
        }
        self.plot(round_coord(x), round_coord(y), index);
    }

    /// Read the color index at a pixel
    ///
    /// Out-of-bounds and never-drawn pixels read as 0 (black).
    pub fn pget(&self, x: f32, y: f32) -> u8 {
        let value = self.pixels.get(round_coord(x), round_coord(y));
        if value < 0 {
            0
        } else {
            value as u8
        }
    }

    /// Draw a rectangle outline from two corner points
    ///
    /// Corner order does not matter. The four edges are sized so no corner
    /// pixel is drawn twice; rectangles of height <= 1 collapse to a single
    /// horizontal span.
    pub fn rect(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Option<u8>) {
        let index = self.resolve_color(color, "rect");
        let (x1, y1, x2, y2) = normalize_corners(x1, y1, x2, y2);

        // Top edge, full width.
        self.fill_region(x1, y1, x2, y1, index);
        if y2 > y1 {
            self.fill_region(x1, y2, x2, y2, index);
        }
        // Side edges skip the corner rows.
        if y2 - y1 >= 2 {
            self.fill_region(x1, y1 + 1, x1, y2 - 1, index);
            if x2 > x1 {
                self.fill_region(x2, y1 + 1, x2, y2 - 1, index);
            }
        }
    }

    /// Draw a filled rectangle from two corner points
    ///
    /// Corner order does not matter; the fill is one hardware blit.
    pub fn rectfill(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Option<u8>) {
        let index = self.resolve_color(color, "rectfill");
        let (x1, y1, x2, y2) = normalize_corners(x1, y1, x2, y2);
        self.fill_region(x1, y1, x2, y2, index);
    }

    /// Draw a line between two points with Bresenham's algorithm
    ///
    /// Symmetric in all four octants; both endpoints are always included,
    /// with exactly one pixel write per step.
    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Option<u8>) {
        let index = self.resolve_color(color, "line");
        let (mut x, mut y) = (round_coord(x1), round_coord(y1));
        let (end_x, end_y) = (round_coord(x2), round_coord(y2));

        let dx = (end_x - x).abs();
        let dy = (end_y - y).abs();
        let sx = if x < end_x { 1 } else { -1 };
        let sy = if y < end_y { 1 } else { -1 };
        let mut err = dx - dy;

        loop {
            self.plot(x, y, index);
            if x == end_x && y == end_y {
                break;
            }
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += sx;
            }
            if e2 < dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Draw a circle outline with the midpoint algorithm
    ///
    /// Eight-way symmetric. The radius rounds to the pixel grid; a negative
    /// radius clamps to 0, and radius 0 draws a single pixel.
    pub fn circ(&mut self, cx: f32, cy: f32, radius: f32, color: Option<u8>) {
        let index = self.resolve_color(color, "circ");
        let (cx, cy) = (round_coord(cx), round_coord(cy));
        let radius = round_coord(radius).max(0);

        let mut x = radius;
        let mut y = 0;
        let mut err = 1 - radius;
        while x >= y {
            self.plot(cx + x, cy + y, index);
            self.plot(cx - x, cy + y, index);
            self.plot(cx + x, cy - y, index);
            self.plot(cx - x, cy - y, index);
            self.plot(cx + y, cy + x, index);
            self.plot(cx - y, cy + x, index);
            self.plot(cx + y, cy - x, index);
            self.plot(cx - y, cy - x, index);

            y += 1;
            if err < 0 {
                err += 2 * y + 1;
            } else {
                x -= 1;
                err += 2 * (y - x) + 1;
            }
        }
    }

    /// Draw a filled circle with the midpoint algorithm
    ///
    /// Each boundary offset pair becomes a horizontal blit span, bounding the
    /// hardware call count to O(radius) rather than O(radius^2).
    pub fn circfill(&mut self, cx: f32, cy: f32, radius: f32, color: Option<u8>) {
        let index = self.resolve_color(color, "circfill");
        let (cx, cy) = (round_coord(cx), round_coord(cy));
        let radius = round_coord(radius).max(0);

        let mut x = radius;
        let mut y = 0;
        let mut err = 1 - radius;
        while x >= y {
            self.fill_region(cx - x, cy + y, cx + x, cy + y, index);
            if y != 0 {
                self.fill_region(cx - x, cy - y, cx + x, cy - y, index);
            }
            if x != y {
                self.fill_region(cx - y, cy + x, cx + y, cy + x, index);
                if x != 0 {
                    self.fill_region(cx - y, cy - x, cx + y, cy - x, index);
                }
            }

            y += 1;
            if err < 0 {
                err += 2 * y + 1;
            } else {
                x -= 1;
                err += 2 * (y - x) + 1;
            }
        }
    }
}

/// Order two corner points so (x1, y1) is top-left
fn normalize_corners(x1: f32, y1: f32, x2: f32, y2: f32) -> (i32, i32, i32, i32) {
    let (mut x1, mut y1) = (round_coord(x1), round_coord(y1));
    let (mut x2, mut y2) = (round_coord(x2), round_coord(y2));
    if x1 > x2 {
        std::mem::swap(&mut x1, &mut x2);
    }
    if y1 > y2 {
        std::mem::swap(&mut y1, &mut y2);
    }
    (x1, y1, x2, y2)
}
