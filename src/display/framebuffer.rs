// Framebuffer - The hardware framebuffer pair
//
// Models the display hardware's two swappable RGBA surfaces. The renderer
// only ever writes uniform-colored rectangles (and hardware text) into the
// buffer that is currently bound; the other buffer is what the window
// presents. Coordinates here are physical (overscan-shifted) space.

use super::video::VideoMode;

/// Handle to one of the two hardware framebuffers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramebufferId(pub(crate) usize);

/// A single RGBA framebuffer surface
pub struct Framebuffer {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Framebuffer {
    /// Create a framebuffer initialized to opaque black
    pub fn new(width: usize, height: usize) -> Self {
        let mut pixels = vec![0; width * height * 4];
        for alpha in pixels.iter_mut().skip(3).step_by(4) {
            *alpha = 255;
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Surface width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Surface height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Fill an axis-aligned rectangle with a solid color
    ///
    /// Corners are inclusive and clipped to the surface; a rectangle entirely
    /// off the surface writes nothing.
    pub fn fill_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: [u8; 4]) {
        let x1 = x1.max(0);
        let y1 = y1.max(0);
        let x2 = x2.min(self.width as i32 - 1);
        let y2 = y2.min(self.height as i32 - 1);
        if x1 > x2 || y1 > y2 {
            return;
        }
        for y in y1..=y2 {
            let row = y as usize * self.width;
            for x in x1..=x2 {
                let offset = (row + x as usize) * 4;
                self.pixels[offset..offset + 4].copy_from_slice(&color);
            }
        }
    }

    /// Write a single pixel, clipped to the surface
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: [u8; 4]) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let offset = (y as usize * self.width + x as usize) * 4;
        self.pixels[offset..offset + 4].copy_from_slice(&color);
    }

    /// Read a single pixel, or `None` if out of bounds
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        let offset = (y as usize * self.width + x as usize) * 4;
        let mut color = [0; 4];
        color.copy_from_slice(&self.pixels[offset..offset + 4]);
        Some(color)
    }

    /// Raw RGBA pixel data
    pub fn as_slice(&self) -> &[u8] {
        &self.pixels
    }
}

/// The double-buffered display: two framebuffers and the active draw target
///
/// `swap` flips which buffer receives rendering and returns a handle to the
/// new draw target; the previously drawn buffer becomes visible.
pub struct Display {
    buffers: [Framebuffer; 2],
    draw_index: usize,
}

impl Display {
    /// Allocate the framebuffer pair for a video mode
    pub fn new(mode: &VideoMode) -> Self {
        Self {
            buffers: [
                Framebuffer::new(mode.width, mode.height),
                Framebuffer::new(mode.width, mode.height),
            ],
            draw_index: 0,
        }
    }

    /// Swap buffers and return the new back (draw) framebuffer handle
    pub fn swap(&mut self) -> FramebufferId {
        self.draw_index = 1 - self.draw_index;
        FramebufferId(self.draw_index)
    }

    /// Handle of the current draw target
    pub fn draw_target(&self) -> FramebufferId {
        FramebufferId(self.draw_index)
    }

    /// The framebuffer currently visible to the display
    pub fn visible(&self) -> &Framebuffer {
        &self.buffers[1 - self.draw_index]
    }

    /// Borrow a framebuffer by handle
    pub fn framebuffer(&self, id: FramebufferId) -> &Framebuffer {
        &self.buffers[id.0]
    }

    /// Mutably borrow a framebuffer by handle
    pub fn framebuffer_mut(&mut self, id: FramebufferId) -> &mut Framebuffer {
        &mut self.buffers[id.0]
    }

    /// Display width in pixels
    pub fn width(&self) -> usize {
        self.buffers[0].width()
    }

    /// Display height in pixels
    pub fn height(&self) -> usize {
        self.buffers[0].height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::video::VideoPreset;

    #[test]
    fn test_new_framebuffer_is_black() {
        let fb = Framebuffer::new(4, 4);
        assert_eq!(fb.pixel(0, 0), Some([0, 0, 0, 255]));
        assert_eq!(fb.pixel(3, 3), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_fill_rect_inclusive_corners() {
        let mut fb = Framebuffer::new(8, 8);
        fb.fill_rect(2, 2, 4, 4, [255, 0, 77, 255]);
        assert_eq!(fb.pixel(2, 2), Some([255, 0, 77, 255]));
        assert_eq!(fb.pixel(4, 4), Some([255, 0, 77, 255]));
        assert_eq!(fb.pixel(5, 5), Some([0, 0, 0, 255]));
        assert_eq!(fb.pixel(1, 2), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_fill_rect_clips_to_surface() {
        let mut fb = Framebuffer::new(4, 4);
        fb.fill_rect(-10, -10, 1, 1, [255, 241, 232, 255]);
        assert_eq!(fb.pixel(0, 0), Some([255, 241, 232, 255]));
        fb.fill_rect(100, 100, 200, 200, [255, 0, 77, 255]);
        assert_eq!(fb.pixel(3, 3), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_set_pixel_out_of_bounds_is_noop() {
        let mut fb = Framebuffer::new(4, 4);
        fb.set_pixel(-1, 0, [255, 255, 255, 255]);
        fb.set_pixel(4, 0, [255, 255, 255, 255]);
        assert_eq!(fb.pixel(0, 0), Some([0, 0, 0, 255]));
        assert!(fb.pixel(4, 0).is_none());
    }

    #[test]
    fn test_display_swap_alternates_targets() {
        let mode = VideoPreset::LowRes.mode();
        let mut display = Display::new(&mode);
        let first = display.draw_target();
        let second = display.swap();
        assert_ne!(first, second);
        let third = display.swap();
        assert_eq!(first, third);
    }

    #[test]
    fn test_visible_is_not_draw_target() {
        let mode = VideoPreset::LowRes.mode();
        let mut display = Display::new(&mode);
        let target = display.swap();
        display
            .framebuffer_mut(target)
            .fill_rect(0, 0, 0, 0, [255, 0, 77, 255]);
        // The visible buffer must not see writes to the draw target.
        assert_eq!(display.visible().pixel(0, 0), Some([0, 0, 0, 255]));
    }
}
