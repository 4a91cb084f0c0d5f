// Renderer - Command-buffer model of the hardware rasterizer
//
// The hardware understands exactly two operations: blit a uniform color into
// a rectangle of the bound framebuffer, and rasterize a text run with the
// built-in font. Draw calls accumulate into a command list and are applied to
// the bound framebuffer on flush, at end of frame.
//
// All coordinates here are physical (overscan-shifted) space; the rasterizer
// adapter in `gfx::raster` is the only place logical coordinates are
// converted.

use super::font;
use super::framebuffer::{Display, FramebufferId};
use log::warn;

/// An axis-aligned rectangle in physical (hardware) coordinates
///
/// Corners are inclusive. Produced only by the rasterizer adapter's
/// logical-to-physical conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicalRect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

/// A single accumulated hardware command
#[derive(Debug, Clone)]
enum RenderCommand {
    /// Solid-color rectangle blit
    Blit { rect: PhysicalRect, color: [u8; 4] },
    /// Text run rasterized with the built-in font
    Text {
        x: i32,
        y: i32,
        color: [u8; 4],
        text: String,
    },
}

/// The rectangle rasterizer bound to one framebuffer of the pair
pub struct Renderer {
    target: Option<FramebufferId>,
    commands: Vec<RenderCommand>,
}

impl Renderer {
    /// Create a renderer with no bound framebuffer
    pub fn new() -> Self {
        Self {
            target: None,
            commands: Vec::new(),
        }
    }

    /// Bind the framebuffer that subsequent commands target
    ///
    /// This is the only point at which the target surface changes.
    pub fn set_framebuffer(&mut self, id: FramebufferId) {
        self.target = Some(id);
    }

    /// Queue a uniform-colored rectangle blit
    pub fn draw(&mut self, rect: PhysicalRect, color: [u8; 4]) {
        self.commands.push(RenderCommand::Blit { rect, color });
    }

    /// Queue a text run
    pub fn draw_text(&mut self, x: i32, y: i32, color: [u8; 4], text: &str) {
        self.commands.push(RenderCommand::Text {
            x,
            y,
            color,
            text: text.to_string(),
        });
    }

    /// Number of commands waiting to be flushed
    pub fn pending(&self) -> usize {
        self.commands.len()
    }

    /// Apply all accumulated commands to the bound framebuffer
    pub fn flush(&mut self, display: &mut Display) {
        let Some(target) = self.target else {
            warn!("Renderer flushed with no framebuffer bound, dropping commands");
            self.commands.clear();
            return;
        };
        let fb = display.framebuffer_mut(target);
        for command in self.commands.drain(..) {
            match command {
                RenderCommand::Blit { rect, color } => {
                    fb.fill_rect(rect.x1, rect.y1, rect.x2, rect.y2, color);
                }
                RenderCommand::Text {
                    x,
                    y,
                    color,
                    text,
                } => {
                    let mut pen_x = x;
                    for ch in text.chars() {
                        let bitmap = font::glyph(ch);
                        for (row, &bits) in bitmap.iter().enumerate() {
                            for col in 0..font::GLYPH_COLS {
                                if bits & (1 << (font::GLYPH_COLS - 1 - col)) != 0 {
                                    fb.set_pixel(pen_x + col as i32, y + row as i32, color);
                                }
                            }
                        }
                        pen_x += font::GLYPH_WIDTH;
                    }
                }
            }
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::video::VideoPreset;

    fn test_display() -> Display {
        Display::new(&VideoPreset::LowRes.mode())
    }

    #[test]
    fn test_commands_accumulate_until_flush() {
        let mut display = test_display();
        let mut renderer = Renderer::new();
        renderer.set_framebuffer(display.draw_target());

        let rect = PhysicalRect {
            x1: 0,
            y1: 0,
            x2: 3,
            y2: 3,
        };
        renderer.draw(rect, [255, 0, 77, 255]);
        assert_eq!(renderer.pending(), 1);

        // Nothing lands in the framebuffer before flush.
        let target = display.draw_target();
        assert_eq!(display.framebuffer(target).pixel(0, 0), Some([0, 0, 0, 255]));

        renderer.flush(&mut display);
        assert_eq!(renderer.pending(), 0);
        assert_eq!(
            display.framebuffer(target).pixel(0, 0),
            Some([255, 0, 77, 255])
        );
    }

    #[test]
    fn test_flush_without_binding_drops_commands() {
        let mut display = test_display();
        let mut renderer = Renderer::new();
        renderer.draw(
            PhysicalRect {
                x1: 0,
                y1: 0,
                x2: 1,
                y2: 1,
            },
            [255, 241, 232, 255],
        );
        renderer.flush(&mut display);
        assert_eq!(renderer.pending(), 0);
        assert_eq!(display.visible().pixel(0, 0), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_text_rasterizes_glyph_pixels() {
        let mut display = test_display();
        let mut renderer = Renderer::new();
        let target = display.draw_target();
        renderer.set_framebuffer(target);

        // 'I' has a solid top row across all three columns.
        renderer.draw_text(10, 10, [255, 241, 232, 255], "I");
        renderer.flush(&mut display);

        let fb = display.framebuffer(target);
        assert_eq!(fb.pixel(10, 10), Some([255, 241, 232, 255]));
        assert_eq!(fb.pixel(11, 10), Some([255, 241, 232, 255]));
        assert_eq!(fb.pixel(12, 10), Some([255, 241, 232, 255]));
        // Spacing column stays untouched.
        assert_eq!(fb.pixel(13, 10), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_text_advances_per_character() {
        let mut display = test_display();
        let mut renderer = Renderer::new();
        let target = display.draw_target();
        renderer.set_framebuffer(target);

        renderer.draw_text(0, 0, [255, 241, 232, 255], "II");
        renderer.flush(&mut display);

        let fb = display.framebuffer(target);
        assert_eq!(fb.pixel(font::GLYPH_WIDTH, 0), Some([255, 241, 232, 255]));
    }
}
