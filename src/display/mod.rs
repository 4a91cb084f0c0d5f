// Display module - Hardware framebuffer model, renderer, and presentation
//
// This module provides:
// - The double-buffered framebuffer pair
// - The command-buffer rectangle renderer (the "hardware" rasterizer)
// - The fixed video preset table (LowRes 320x240, HighRes 640x480)
// - The built-in bitmap font used by the hardware text operation
// - Window creation and frame presentation using winit + pixels

pub mod font;
pub mod framebuffer;
pub mod renderer;
pub mod video;
pub mod window;

pub use font::{FONT_HEIGHT, GLYPH_WIDTH};
pub use framebuffer::{Display, Framebuffer, FramebufferId};
pub use renderer::{PhysicalRect, Renderer};
pub use video::{ColorDepth, VideoMode, VideoPreset};
pub use window::{run_game, WindowConfig};
