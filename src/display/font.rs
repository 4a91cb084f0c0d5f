// Built-in font - Fixed-width 3x5 bitmap glyphs
//
// The hardware text operation rasterizes strings with this font. Each glyph
// occupies a 4x6 cell (3x5 bitmap plus one pixel of spacing on the right and
// bottom), so the text cursor advances by GLYPH_WIDTH per character and by
// FONT_HEIGHT per line.
//
// Rows are stored top to bottom; within a row, bit 2 is the leftmost column.

/// Horizontal advance per character, in pixels
pub const GLYPH_WIDTH: i32 = 4;

/// Vertical advance per line, in pixels
pub const FONT_HEIGHT: i32 = 6;

/// Bitmap rows per glyph
pub const GLYPH_ROWS: usize = 5;

/// Bitmap columns per glyph
pub const GLYPH_COLS: usize = 3;

const FIRST_GLYPH: u8 = b' ';
const LAST_GLYPH: u8 = b'_';

/// Glyph drawn for characters outside the covered range
const FALLBACK: [u8; GLYPH_ROWS] = [0b111, 0b101, 0b101, 0b101, 0b111];

/// Glyph bitmaps for ASCII 0x20 (space) through 0x5F (underscore)
const GLYPHS: [[u8; GLYPH_ROWS]; (LAST_GLYPH - FIRST_GLYPH + 1) as usize] = [
    [0b000, 0b000, 0b000, 0b000, 0b000], // space
    [0b010, 0b010, 0b010, 0b000, 0b010], // !
    [0b101, 0b101, 0b000, 0b000, 0b000], // "
    [0b101, 0b111, 0b101, 0b111, 0b101], // #
    [0b011, 0b110, 0b010, 0b011, 0b110], // $
    [0b101, 0b001, 0b010, 0b100, 0b101], // %
    [0b010, 0b101, 0b010, 0b101, 0b011], // &
    [0b010, 0b010, 0b000, 0b000, 0b000], // '
    [0b001, 0b010, 0b010, 0b010, 0b001], // (
    [0b100, 0b010, 0b010, 0b010, 0b100], // )
    [0b101, 0b010, 0b101, 0b000, 0b000], // *
    [0b000, 0b010, 0b111, 0b010, 0b000], // +
    [0b000, 0b000, 0b000, 0b010, 0b100], // ,
    [0b000, 0b000, 0b111, 0b000, 0b000], // -
    [0b000, 0b000, 0b000, 0b000, 0b010], // .
    [0b001, 0b001, 0b010, 0b100, 0b100], // /
    [0b111, 0b101, 0b101, 0b101, 0b111], // 0
    [0b010, 0b110, 0b010, 0b010, 0b111], // 1
    [0b111, 0b001, 0b111, 0b100, 0b111], // 2
    [0b111, 0b001, 0b011, 0b001, 0b111], // 3
    [0b101, 0b101, 0b111, 0b001, 0b001], // 4
    [0b111, 0b100, 0b111, 0b001, 0b111], // 5
    [0b111, 0b100, 0b111, 0b101, 0b111], // 6
    [0b111, 0b001, 0b001, 0b001, 0b001], // 7
    [0b111, 0b101, 0b111, 0b101, 0b111], // 8
    [0b111, 0b101, 0b111, 0b001, 0b111], // 9
    [0b000, 0b010, 0b000, 0b010, 0b000], // :
    [0b000, 0b010, 0b000, 0b010, 0b100], // ;
    [0b001, 0b010, 0b100, 0b010, 0b001], // <
    [0b000, 0b111, 0b000, 0b111, 0b000], // =
    [0b100, 0b010, 0b001, 0b010, 0b100], // >
    [0b111, 0b001, 0b011, 0b000, 0b010], // ?
    [0b111, 0b101, 0b101, 0b100, 0b111], // @
    [0b111, 0b101, 0b111, 0b101, 0b101], // A
    [0b110, 0b101, 0b110, 0b101, 0b110], // B
    [0b111, 0b100, 0b100, 0b100, 0b111], // C
    [0b110, 0b101, 0b101, 0b101, 0b110], // D
    [0b111, 0b100, 0b111, 0b100, 0b111], // E
    [0b111, 0b100, 0b111, 0b100, 0b100], // F
    [0b111, 0b100, 0b101, 0b101, 0b111], // G
    [0b101, 0b101, 0b111, 0b101, 0b101], // H
    [0b111, 0b010, 0b010, 0b010, 0b111], // I
    [0b011, 0b001, 0b001, 0b101, 0b111], // J
    [0b101, 0b101, 0b110, 0b101, 0b101], // K
    [0b100, 0b100, 0b100, 0b100, 0b111], // L
    [0b101, 0b111, 0b111, 0b101, 0b101], // M
    [0b110, 0b101, 0b101, 0b101, 0b101], // N
    [0b111, 0b101, 0b101, 0b101, 0b111], // O
    [0b111, 0b101, 0b111, 0b100, 0b100], // P
    [0b111, 0b101, 0b101, 0b111, 0b001], // Q
    [0b111, 0b101, 0b110, 0b101, 0b101], // R
    [0b111, 0b100, 0b111, 0b001, 0b111], // S
    [0b111, 0b010, 0b010, 0b010, 0b010], // T
    [0b101, 0b101, 0b101, 0b101, 0b111], // U
    [0b101, 0b101, 0b101, 0b101, 0b010], // V
    [0b101, 0b101, 0b111, 0b111, 0b101], // W
    [0b101, 0b101, 0b010, 0b101, 0b101], // X
    [0b101, 0b101, 0b111, 0b010, 0b010], // Y
    [0b111, 0b001, 0b010, 0b100, 0b111], // Z
    [0b011, 0b010, 0b010, 0b010, 0b011], // [
    [0b100, 0b100, 0b010, 0b001, 0b001], // \
    [0b110, 0b010, 0b010, 0b010, 0b110], // ]
    [0b010, 0b101, 0b000, 0b000, 0b000], // ^
    [0b000, 0b000, 0b000, 0b000, 0b111], // _
];

/// Look up the bitmap for a character
///
/// Lowercase letters render with the uppercase glyph; characters outside the
/// covered range render as the fallback box.
pub fn glyph(ch: char) -> &'static [u8; GLYPH_ROWS] {
    let byte = match ch {
        'a'..='z' => ch as u8 - 32,
        ch if ch.is_ascii() => ch as u8,
        _ => return &FALLBACK,
    };
    if (FIRST_GLYPH..=LAST_GLYPH).contains(&byte) {
        &GLYPHS[(byte - FIRST_GLYPH) as usize]
    } else {
        &FALLBACK
    }
}
