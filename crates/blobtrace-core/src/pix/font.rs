//! Bitmap font for overlay labels
//!
//! A fixed 5x7 glyph set covering the characters needed to print track
//! identifiers: the ten digits, `-` and `#`. Characters outside the
//! set advance the cursor without drawing.

use crate::error::{Error, Result};
use crate::geom::Point;

/// Glyph width in font cells
pub const GLYPH_WIDTH: u32 = 5;
/// Glyph height in font cells
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal gap between glyphs in font cells
pub const GLYPH_SPACING: u32 = 1;

/// One row per entry, MSB of the low 5 bits is the leftmost cell.
type Glyph = [u8; GLYPH_HEIGHT as usize];

const DIGITS: [Glyph; 10] = [
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
    [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
];

const MINUS: Glyph = [0, 0, 0, 0b11111, 0, 0, 0];
const HASH: Glyph = [0b01010, 0b01010, 0b11111, 0b01010, 0b11111, 0b01010, 0b01010];

/// Look up the glyph for a character.
pub fn glyph(ch: char) -> Option<&'static Glyph> {
    match ch {
        '0'..='9' => DIGITS.get(ch as usize - '0' as usize),
        '-' => Some(&MINUS),
        '#' => Some(&HASH),
        _ => None,
    }
}

/// Generate the lit pixels of `text` with its bottom-left corner at `origin`.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if `scale` is zero.
pub fn generate_text_pts(text: &str, origin: Point, scale: u32) -> Result<Vec<Point>> {
    if scale == 0 {
        return Err(Error::InvalidParameter(
            "font scale must be at least 1".to_string(),
        ));
    }
    let s = scale as i32;
    let top = origin.y - (GLYPH_HEIGHT as i32 * s) + 1;
    let advance = ((GLYPH_WIDTH + GLYPH_SPACING) * scale) as i32;

    let mut pts = Vec::new();
    for (i, ch) in text.chars().enumerate() {
        let Some(rows) = glyph(ch) else {
            continue;
        };
        let left = origin.x + i as i32 * advance;
        for (gy, bits) in rows.iter().enumerate() {
            for gx in 0..GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - gx)) == 0 {
                    continue;
                }
                let cx = left + gx as i32 * s;
                let cy = top + gy as i32 * s;
                for dy in 0..s {
                    for dx in 0..s {
                        pts.push(Point::new(cx + dx, cy + dy));
                    }
                }
            }
        }
    }
    Ok(pts)
}
