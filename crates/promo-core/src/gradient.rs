//! Vertical two-color gradient math.

use crate::model::Color;

/// Color of gradient row `row` out of `span` rows, blending `top` towards
/// `bottom` with `alpha = row / span`. Channels are truncated, not rounded.
///
/// Row 0 is exactly `top`; `bottom` itself is only reached at `row == span`.
pub fn row_color(top: Color, bottom: Color, row: u32, span: u32) -> Color {
    if span == 0 {
        return top;
    }
    let alpha = row as f64 / span as f64;
    let mix = |a: u8, b: u8| -> u8 { (a as f64 * (1.0 - alpha) + b as f64 * alpha) as u8 };
    Color::rgb(
        mix(top.r, bottom.r),
        mix(top.g, bottom.g),
        mix(top.b, bottom.b),
    )
}
