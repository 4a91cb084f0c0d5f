// Palette - The fixed 16-color drawing palette
//
// All drawing calls select colors by palette index (0-15). The table is the
// standard PICO-8 palette and is immutable; index 0 (black) is flagged
// transparent by default, which `pset` honors as binary transparency.

/// Number of entries in the palette
pub const PALETTE_SIZE: usize = 16;

/// Named palette indices
pub const BLACK: u8 = 0;
pub const DARK_BLUE: u8 = 1;
pub const DARK_PURPLE: u8 = 2;
pub const DARK_GREEN: u8 = 3;
pub const BROWN: u8 = 4;
pub const DARK_GRAY: u8 = 5;
pub const LIGHT_GRAY: u8 = 6;
pub const WHITE: u8 = 7;
pub const RED: u8 = 8;
pub const ORANGE: u8 = 9;
pub const YELLOW: u8 = 10;
pub const GREEN: u8 = 11;
pub const BLUE: u8 = 12;
pub const INDIGO: u8 = 13;
pub const PINK: u8 = 14;
pub const PEACH: u8 = 15;

/// The 16 palette colors as RGBA tuples, in PICO-8 index order
pub const PALETTE: [[u8; 4]; PALETTE_SIZE] = [
    [0, 0, 0, 255],       // 0 black
    [29, 43, 83, 255],    // 1 dark-blue
    [126, 37, 83, 255],   // 2 dark-purple
    [0, 135, 81, 255],    // 3 dark-green
    [171, 82, 54, 255],   // 4 brown
    [95, 87, 79, 255],    // 5 dark-gray
    [194, 195, 199, 255], // 6 light-gray
    [255, 241, 232, 255], // 7 white
    [255, 0, 77, 255],    // 8 red
    [255, 163, 0, 255],   // 9 orange
    [255, 236, 39, 255],  // 10 yellow
    [0, 228, 54, 255],    // 11 green
    [41, 173, 255, 255],  // 12 blue
    [131, 118, 156, 255], // 13 indigo
    [255, 119, 168, 255], // 14 pink
    [255, 204, 170, 255], // 15 peach
];

/// Per-index transparency flags, aligned with `PALETTE`.
///
/// Only black is transparent by default. Transparency is binary: a
/// transparent color is skipped entirely by `pset`, never blended.
pub const TRANSPARENCY: [bool; PALETTE_SIZE] = [
    true, false, false, false, false, false, false, false, false, false, false, false, false,
    false, false, false,
];

/// Check whether an index selects a valid palette entry
#[inline]
pub fn is_valid(index: u8) -> bool {
    (index as usize) < PALETTE_SIZE
}

/// Check whether a palette index is flagged transparent
///
/// Invalid indices are treated as opaque; callers validate first.
#[inline]
pub fn is_transparent(index: u8) -> bool {
    (index as usize) < PALETTE_SIZE && TRANSPARENCY[index as usize]
}

/// Look up the RGBA value for a palette index
///
/// # Arguments
/// * `index` - Palette index (0-15); out-of-range indices wrap
///
/// # Returns
/// RGBA color as `[r, g, b, a]`
#[inline]
pub fn palette_to_rgba(index: u8) -> [u8; 4] {
    PALETTE[index as usize % PALETTE_SIZE]
}
