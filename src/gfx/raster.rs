// Rasterizer adapter - The logical/physical coordinate boundary
//
// Drawing primitives work in logical space: the coordinates the game author
// sees, and the space `pget`/`pset` and the pixel buffer operate in. The
// physical display is shifted horizontally by an overscan offset to align the
// drawing area with the visible area. This adapter is the single point where
// that conversion happens; shifted coordinates never leak back into logical
// space.

use crate::display::framebuffer::{Display, FramebufferId};
use crate::display::renderer::{PhysicalRect, Renderer};

/// An axis-aligned rectangle in logical (game) coordinates
///
/// Corners are inclusive and assumed normalized (x1 <= x2, y1 <= y2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogicalRect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl LogicalRect {
    /// Rectangle covering a single pixel
    pub fn pixel(x: i32, y: i32) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x,
            y2: y,
        }
    }
}

/// Adapter from drawing requests to hardware rectangle blits
pub struct Rasterizer {
    renderer: Renderer,
    overscan_x: i32,
}

impl Rasterizer {
    /// Create an adapter with the given horizontal overscan offset
    pub fn new(overscan_x: i32) -> Self {
        Self {
            renderer: Renderer::new(),
            overscan_x,
        }
    }

    /// The horizontal overscan offset in pixels
    pub fn overscan_x(&self) -> i32 {
        self.overscan_x
    }

    /// Convert a logical rectangle to physical space
    fn to_physical(&self, rect: LogicalRect) -> PhysicalRect {
        PhysicalRect {
            x1: rect.x1 + self.overscan_x,
            y1: rect.y1,
            x2: rect.x2 + self.overscan_x,
            y2: rect.y2,
        }
    }

    /// Blit a uniform-colored rectangle into the bound framebuffer
    ///
    /// The only hardware write primitive; every shape decomposes into calls
    /// to this plus the matching pixel-buffer writes.
    pub fn blit_rect(&mut self, rect: LogicalRect, color: [u8; 4]) {
        self.renderer.draw(self.to_physical(rect), color);
    }

    /// Blit the full physical surface, offset not applied
    ///
    /// Used by screen clears, which must cover the whole framebuffer
    /// including the overscan margin.
    pub fn blit_full(&mut self, width: i32, height: i32, color: [u8; 4]) {
        self.renderer.draw(
            PhysicalRect {
                x1: 0,
                y1: 0,
                x2: width - 1 + self.overscan_x.max(0),
                y2: height - 1,
            },
            color,
        );
    }

    /// Queue a text run at a logical position
    pub fn draw_text(&mut self, x: i32, y: i32, color: [u8; 4], text: &str) {
        self.renderer.draw_text(x + self.overscan_x, y, color, text);
    }

    /// Bind the framebuffer that receives subsequent blits
    pub fn bind(&mut self, id: FramebufferId) {
        self.renderer.set_framebuffer(id);
    }

    /// Flush accumulated commands into the bound framebuffer
    pub fn flush(&mut self, display: &mut Display) {
        self.renderer.flush(display);
    }

    /// Number of commands waiting to be flushed
    pub fn pending(&self) -> usize {
        self.renderer.pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::video::VideoPreset;

    #[test]
    fn test_overscan_shifts_x_only() {
        let raster = Rasterizer::new(8);
        let physical = raster.to_physical(LogicalRect {
            x1: 10,
            y1: 20,
            x2: 30,
            y2: 40,
        });
        assert_eq!(physical.x1, 18);
        assert_eq!(physical.x2, 38);
        assert_eq!(physical.y1, 20);
        assert_eq!(physical.y2, 40);
    }

    #[test]
    fn test_blit_lands_at_shifted_position() {
        let mode = VideoPreset::LowRes.mode();
        let mut display = Display::new(&mode);
        let mut raster = Rasterizer::new(8);
        let target = display.draw_target();
        raster.bind(target);

        raster.blit_rect(LogicalRect::pixel(0, 0), [255, 0, 77, 255]);
        raster.flush(&mut display);

        let fb = display.framebuffer(target);
        assert_eq!(fb.pixel(8, 0), Some([255, 0, 77, 255]));
        assert_eq!(fb.pixel(0, 0), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_zero_offset_is_identity() {
        let raster = Rasterizer::new(0);
        let rect = LogicalRect {
            x1: 1,
            y1: 2,
            x2: 3,
            y2: 4,
        };
        let physical = raster.to_physical(rect);
        assert_eq!((physical.x1, physical.y1), (1, 2));
        assert_eq!((physical.x2, physical.y2), (3, 4));
    }
}
