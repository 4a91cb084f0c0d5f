// Pixel Buffer - Software shadow copy of the screen's color-index state
//
// The hardware only understands rectangle blits and cannot be read back, so
// every drawing primitive mirrors its writes into this buffer. `pget` and all
// internal shape bookkeeping read from here, always in logical (unshifted)
// coordinates.

/// Sentinel for a pixel no drawing call has touched yet
pub const UNSET: i8 = -1;

/// Logical grid of palette indices backing pixel readback
///
/// Entries are `UNSET` (-1) or a palette index (0-15). The buffer is owned by
/// the active screen and recreated whenever the video mode changes.
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<i8>,
}

impl PixelBuffer {
    /// Create a buffer of the given dimensions with every pixel unset
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![UNSET; width * height],
        }
    }

    /// Buffer width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Buffer height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read the color index at (x, y)
    ///
    /// Out-of-bounds coordinates return 0 (black) instead of failing, for
    /// PICO-8 compatibility.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> i8 {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return 0;
        }
        self.pixels[y as usize * self.width + x as usize]
    }

    /// Write a color index at (x, y)
    ///
    /// Out-of-bounds coordinates are a silent no-op; games routinely draw
    /// past the visible edge and that must never crash.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: i8) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        self.pixels[y as usize * self.width + x as usize] = color;
    }

    /// Reset every pixel to the given color index
    pub fn fill(&mut self, color: i8) {
        self.pixels.fill(color);
    }

    /// Raw pixel data as palette indices
    pub fn as_slice(&self) -> &[i8] {
        &self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_unset() {
        let buffer = PixelBuffer::new(8, 8);
        assert_eq!(buffer.as_slice().len(), 64);
        assert!(buffer.as_slice().iter().all(|&p| p == UNSET));
    }

    #[test]
    fn test_set_get_round_trip() {
        let mut buffer = PixelBuffer::new(16, 16);
        buffer.set(3, 5, 12);
        assert_eq!(buffer.get(3, 5), 12);
    }

    #[test]
    fn test_out_of_bounds_get_returns_black() {
        let buffer = PixelBuffer::new(4, 4);
        assert_eq!(buffer.get(-1, 0), 0);
        assert_eq!(buffer.get(0, -1), 0);
        assert_eq!(buffer.get(4, 0), 0);
        assert_eq!(buffer.get(0, 4), 0);
        assert_eq!(buffer.get(400, 400), 0);
    }

    #[test]
    fn test_out_of_bounds_set_is_noop() {
        let mut buffer = PixelBuffer::new(4, 4);
        buffer.set(-1, 2, 7);
        buffer.set(2, -1, 7);
        buffer.set(4, 2, 7);
        buffer.set(2, 4, 7);
        assert!(buffer.as_slice().iter().all(|&p| p == UNSET));
    }

    #[test]
    fn test_fill() {
        let mut buffer = PixelBuffer::new(4, 4);
        buffer.set(1, 1, 9);
        buffer.fill(3);
        assert!(buffer.as_slice().iter().all(|&p| p == 3));
    }
}
