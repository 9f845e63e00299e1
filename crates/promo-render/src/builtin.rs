//! Builtin 5×7 bitmap glyphs, used when no font file can be loaded.
//!
//! Each glyph is five column bytes; bit 0 is the top row. Glyphs are
//! scaled by whole pixels so the result stays crisp.

use tiny_skia::{Path, PathBuilder, Rect};

/// Columns per glyph.
pub const GLYPH_COLUMNS: usize = 5;
/// Rows per glyph.
pub const GLYPH_ROWS: u32 = 7;
/// Horizontal cell width in unscaled pixels, including one column of spacing.
pub const CELL_ADVANCE: f32 = 6.0;

/// Hollow box drawn for characters outside printable ASCII.
const TOFU: [u8; GLYPH_COLUMNS] = [0x7F, 0x41, 0x41, 0x41, 0x7F];

#[rustfmt::skip]
const ASCII: [[u8; GLYPH_COLUMNS]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x00, 0x00, 0x5F, 0x00, 0x00], // !
    [0x00, 0x07, 0x00, 0x07, 0x00], // "
    [0x14, 0x7F, 0x14, 0x7F, 0x14], // #
    [0x24, 0x2A, 0x7F, 0x2A, 0x12], // $
    [0x23, 0x13, 0x08, 0x64, 0x62], // %
    [0x36, 0x49, 0x55, 0x22, 0x50], // &
    [0x00, 0x05, 0x03, 0x00, 0x00], // '
    [0x00, 0x1C, 0x22, 0x41, 0x00], // (
    [0x00, 0x41, 0x22, 0x1C, 0x00], // )
    [0x08, 0x2A, 0x1C, 0x2A, 0x08], // *
    [0x08, 0x08, 0x3E, 0x08, 0x08], // +
    [0x00, 0x50, 0x30, 0x00, 0x00], // ,
    [0x08, 0x08, 0x08, 0x08, 0x08], // -
    [0x00, 0x60, 0x60, 0x00, 0x00], // .
    [0x20, 0x10, 0x08, 0x04, 0x02], // /
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // 0
    [0x00, 0x42, 0x7F, 0x40, 0x00], // 1
    [0x42, 0x61, 0x51, 0x49, 0x46], // 2
    [0x21, 0x41, 0x45, 0x4B, 0x31], // 3
    [0x18, 0x14, 0x12, 0x7F, 0x10], // 4
    [0x27, 0x45, 0x45, 0x45, 0x39], // 5
    [0x3C, 0x4A, 0x49, 0x49, 0x30], // 6
    [0x01, 0x71, 0x09, 0x05, 0x03], // 7
    [0x36, 0x49, 0x49, 0x49, 0x36], // 8
    [0x06, 0x49, 0x49, 0x29, 0x1E], // 9
    [0x00, 0x36, 0x36, 0x00, 0x00], // :
    [0x00, 0x56, 0x36, 0x00, 0x00], // ;
    [0x08, 0x14, 0x22, 0x41, 0x00], // <
    [0x14, 0x14, 0x14, 0x14, 0x14], // =
    [0x00, 0x41, 0x22, 0x14, 0x08], // >
    [0x02, 0x01, 0x51, 0x09, 0x06], // ?
    [0x32, 0x49, 0x79, 0x41, 0x3E], // @
    [0x7E, 0x11, 0x11, 0x11, 0x7E], // A
    [0x7F, 0x49, 0x49, 0x49, 0x36], // B
    [0x3E, 0x41, 0x41, 0x41, 0x22], // C
    [0x7F, 0x41, 0x41, 0x22, 0x1C], // D
    [0x7F, 0x49, 0x49, 0x49, 0x41], // E
    [0x7F, 0x09, 0x09, 0x01, 0x01], // F
    [0x3E, 0x41, 0x41, 0x51, 0x32], // G
    [0x7F, 0x08, 0x08, 0x08, 0x7F], // H
    [0x00, 0x41, 0x7F, 0x41, 0x00], // I
    [0x20, 0x40, 0x41, 0x3F, 0x01], // J
    [0x7F, 0x08, 0x14, 0x22, 0x41], // K
    [0x7F, 0x40, 0x40, 0x40, 0x40], // L
    [0x7F, 0x02, 0x04, 0x02, 0x7F], // M
    [0x7F, 0x04, 0x08, 0x10, 0x7F], // N
    [0x3E, 0x41, 0x41, 0x41, 0x3E], // O
    [0x7F, 0x09, 0x09, 0x09, 0x06], // P
    [0x3E, 0x41, 0x51, 0x21, 0x5E], // Q
    [0x7F, 0x09, 0x19, 0x29, 0x46], // R
    [0x46, 0x49, 0x49, 0x49, 0x31], // S
    [0x01, 0x01, 0x7F, 0x01, 0x01], // T
    [0x3F, 0x40, 0x40, 0x40, 0x3F], // U
    [0x1F, 0x20, 0x40, 0x20, 0x1F], // V
    [0x7F, 0x20, 0x18, 0x20, 0x7F], // W
    [0x63, 0x14, 0x08, 0x14, 0x63], // X
    [0x03, 0x04, 0x78, 0x04, 0x03], // Y
    [0x61, 0x51, 0x49, 0x45, 0x43], // Z
    [0x00, 0x7F, 0x41, 0x41, 0x00], // [
    [0x02, 0x04, 0x08, 0x10, 0x20], // \
    [0x00, 0x41, 0x41, 0x7F, 0x00], // ]
    [0x04, 0x02, 0x01, 0x02, 0x04], // ^
    [0x40, 0x40, 0x40, 0x40, 0x40], // _
    [0x00, 0x01, 0x02, 0x04, 0x00], // `
    [0x20, 0x54, 0x54, 0x54, 0x78], // a
    [0x7F, 0x48, 0x44, 0x44, 0x38], // b
    [0x38, 0x44, 0x44, 0x44, 0x20], // c
    [0x38, 0x44, 0x44, 0x48, 0x7F], // d
    [0x38, 0x54, 0x54, 0x54, 0x18], // e
    [0x08, 0x7E, 0x09, 0x01, 0x02], // f
    [0x0C, 0x52, 0x52, 0x52, 0x3E], // g
    [0x7F, 0x08, 0x04, 0x04, 0x78], // h
    [0x00, 0x44, 0x7D, 0x40, 0x00], // i
    [0x20, 0x40, 0x44, 0x3D, 0x00], // j
    [0x7F, 0x10, 0x28, 0x44, 0x00], // k
    [0x00, 0x41, 0x7F, 0x40, 0x00], // l
    [0x7C, 0x04, 0x18, 0x04, 0x78], // m
    [0x7C, 0x08, 0x04, 0x04, 0x78], // n
    [0x38, 0x44, 0x44, 0x44, 0x38], // o
    [0x7C, 0x14, 0x14, 0x14, 0x08], // p
    [0x08, 0x14, 0x14, 0x18, 0x7C], // q
    [0x7C, 0x08, 0x04, 0x04, 0x08], // r
    [0x48, 0x54, 0x54, 0x54, 0x20], // s
    [0x04, 0x3F, 0x44, 0x40, 0x20], // t
    [0x3C, 0x40, 0x40, 0x20, 0x7C], // u
    [0x1C, 0x20, 0x40, 0x20, 0x1C], // v
    [0x3C, 0x40, 0x30, 0x40, 0x3C], // w
    [0x44, 0x28, 0x10, 0x28, 0x44], // x
    [0x0C, 0x50, 0x50, 0x50, 0x3C], // y
    [0x44, 0x64, 0x54, 0x4C, 0x44], // z
    [0x00, 0x08, 0x36, 0x41, 0x00], // {
    [0x00, 0x00, 0x7F, 0x00, 0x00], // |
    [0x00, 0x41, 0x36, 0x08, 0x00], // }
    [0x02, 0x01, 0x02, 0x04, 0x02], // ~
];

/// Column bitmap for `ch`, or the tofu box for anything unprintable.
pub fn columns(ch: char) -> &'static [u8; GLYPH_COLUMNS] {
    match ch {
        ' '..='~' => &ASCII[ch as usize - 0x20],
        _ => &TOFU,
    }
}

/// Whole-pixel scale factor for a nominal font size.
pub fn pixel_scale(size: f32) -> f32 {
    (size / 8.0).floor().max(1.0)
}

/// Pen advance for `text` at `size`.
pub fn advance(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * CELL_ADVANCE * pixel_scale(size)
}

/// Fill path for `text` with its top-left cell corner at the origin.
/// `None` when no bit is set (empty or all spaces).
pub fn glyph_path(text: &str, size: f32) -> Option<Path> {
    let scale = pixel_scale(size);
    let mut pb = PathBuilder::new();
    for (i, ch) in text.chars().enumerate() {
        let cell_x = i as f32 * CELL_ADVANCE * scale;
        for (col, bits) in columns(ch).iter().enumerate() {
            for row in 0..GLYPH_ROWS {
                if bits & (1 << row) == 0 {
                    continue;
                }
                if let Some(dot) = Rect::from_xywh(
                    cell_x + col as f32 * scale,
                    row as f32 * scale,
                    scale,
                    scale,
                ) {
                    pb.push_rect(dot);
                }
            }
        }
    }
    pb.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn table_covers_printable_ascii() {
        assert_eq!(columns('A'), &[0x7E, 0x11, 0x11, 0x11, 0x7E]);
        assert_eq!(columns('~'), &ASCII[94]);
        assert_eq!(columns(' '), &[0; 5]);
    }

    #[test]
    fn non_ascii_draws_tofu() {
        assert_eq!(columns('静'), &TOFU);
        assert_eq!(columns('\n'), &TOFU);
    }

    #[test]
    fn scale_is_whole_pixels() {
        assert_eq!(pixel_scale(7.0), 1.0);
        assert_eq!(pixel_scale(14.0), 1.0);
        assert_eq!(pixel_scale(40.0), 5.0);
        assert_eq!(pixel_scale(72.0), 9.0);
    }

    #[test]
    fn path_bounds_are_tight() {
        // 'I' occupies columns 1..=3, rows 0..=6.
        let bounds = glyph_path("I", 16.0).unwrap().bounds();
        assert_eq!(bounds.left(), 2.0);
        assert_eq!(bounds.right(), 8.0);
        assert_eq!(bounds.top(), 0.0);
        assert_eq!(bounds.bottom(), 14.0);
    }

    #[test]
    fn spaces_have_no_ink() {
        assert!(glyph_path("   ", 16.0).is_none());
        assert!(glyph_path("", 16.0).is_none());
        assert_eq!(advance("   ", 16.0), 36.0);
    }
}
