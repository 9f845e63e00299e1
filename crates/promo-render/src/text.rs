//! Text measurement and drawing.
//!
//! Text is laid out left to right on one line. The draw position is the
//! top-left of the line box: the baseline sits one ascent below it.
//! Measurement reports the tight ink box of the same layout.

use crate::builtin;
use crate::canvas::Canvas;
use crate::font::Font;
use promo_core::model::{Color, Point, TextAlign};
use tiny_skia::{Path, PathBuilder, Transform};
use ttf_parser::{GlyphId, OutlineBuilder};

/// Tight ink box of a text run, relative to its draw position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextExtent {
    pub left: f32,
    pub top: f32,
    pub width: u32,
    pub height: u32,
    /// Pen advance of the whole run.
    pub advance: f32,
}

struct PathConverter(PathBuilder);

impl OutlineBuilder for PathConverter {
    fn move_to(&mut self, x: f32, y: f32) {
        self.0.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.0.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.0.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.0.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.0.close();
    }
}

/// Glyph outlines for one line of text, positioned at the origin.
struct Run {
    path: Option<Path>,
    advance: f32,
}

fn layout(text: &str, font: &Font<'_>) -> Run {
    match font {
        Font::Builtin { size } => Run {
            path: builtin::glyph_path(text, *size),
            advance: builtin::advance(text, *size),
        },
        Font::Outline { face, size } => {
            let scale = size / face.units_per_em() as f32;
            let ascent = face.ascender() as f32 * scale;
            let mut run_builder = PathBuilder::new();
            let mut pen_x = 0.0;

            for ch in text.chars() {
                // Unmapped characters use glyph 0, the face's .notdef box.
                let glyph = face.glyph_index(ch).unwrap_or(GlyphId(0));
                let mut converter = PathConverter(PathBuilder::new());
                let transform = Transform::from_scale(scale, -scale).post_translate(pen_x, ascent);

                if face.outline_glyph(glyph, &mut converter).is_some()
                    && let Some(p) = converter.0.finish()
                    && let Some(placed) = p.transform(transform)
                {
                    run_builder.push_path(&placed);
                }

                pen_x += face.glyph_hor_advance(glyph).unwrap_or(0) as f32 * scale;
            }

            Run {
                path: run_builder.finish(),
                advance: pen_x,
            }
        }
    }
}

/// Measure the ink box `text` would cover when drawn at (0, 0).
///
/// Runs without ink (empty or whitespace) report a zero height and the pen
/// advance as width.
pub fn measure_text(text: &str, font: &Font<'_>) -> TextExtent {
    let run = layout(text, font);
    match run.path.map(|p| p.bounds()) {
        Some(b) => {
            let (left, top) = (b.left().floor(), b.top().floor());
            TextExtent {
                left,
                top,
                width: (b.right().ceil() - left).max(0.0) as u32,
                height: (b.bottom().ceil() - top).max(0.0) as u32,
                advance: run.advance,
            }
        }
        None => TextExtent {
            width: run.advance.ceil().max(0.0) as u32,
            advance: run.advance,
            ..TextExtent::default()
        },
    }
}

/// Left edge for a run of `width` pixels anchored at `anchor_x`.
///
/// `Center` uses floor division so a run on an even canvas centered at the
/// midpoint lands at `(canvas_width - width) / 2`.
pub fn aligned_x(anchor_x: f32, width: u32, align: TextAlign) -> f32 {
    let w = width as f32;
    match align {
        TextAlign::Left => anchor_x,
        TextAlign::Center => ((2.0 * anchor_x - w) / 2.0).floor(),
        TextAlign::Right => anchor_x - w,
    }
}

impl Canvas {
    /// Draw one line of `text` with its line box top-left at `position`.
    pub fn draw_text(&mut self, position: Point, text: &str, color: Color, font: &Font<'_>) {
        let Some(path) = layout(text, font).path else {
            return;
        };
        let anti_alias = !font.is_builtin();
        if let Some(placed) = path.transform(Transform::from_translate(position.x, position.y)) {
            self.fill_path(&placed, color, anti_alias);
        }
    }

    /// Draw `text` positioned by `align` relative to `anchor`.
    pub fn draw_aligned_text(
        &mut self,
        anchor: Point,
        text: &str,
        color: Color,
        font: &Font<'_>,
        align: TextAlign,
    ) {
        let x = match align {
            TextAlign::Left => anchor.x,
            _ => aligned_x(anchor.x, measure_text(text, font).width, align),
        };
        self.draw_text(Point::new(x, anchor.y), text, color, font);
    }
}
