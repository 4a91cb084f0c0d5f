// Graphics module - Palette, pixel buffer, rasterizer adapter, and the
// drawing primitives
//
// This module provides:
// - The fixed 16-color palette with transparency flags
// - The software shadow pixel buffer backing pixel readback
// - The rasterizer adapter bridging logical coordinates to hardware blits
// - The Screen and its shape/text drawing primitives

pub mod palette;
pub mod pixel_buffer;
pub mod raster;
pub mod screen;
pub mod shapes;
pub mod text;

pub use pixel_buffer::{PixelBuffer, UNSET};
pub use raster::{LogicalRect, Rasterizer};
pub use screen::{Cursor, Screen, DEFAULT_CURSOR_COLOR, DEFAULT_DRAW_COLOR};
