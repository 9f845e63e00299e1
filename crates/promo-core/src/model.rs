//! Core drawing data model for store listing artwork.
//!
//! Every artifact is a flat, ordered list of `DrawCmd` values painted onto
//! a fixed-size canvas. Commands are plain data: geometry, colors, stroke and
//! font specs. Later commands paint over earlier ones.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

// ─── Colors ──────────────────────────────────────────────────────────────

/// RGBA color, 8 bits per channel. Serialized as a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Helper to parse a single hex digit.
pub fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// The same color with alpha forced to 255.
    pub const fn opaque(self) -> Self {
        Self { a: 255, ..self }
    }

    pub const fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Parse a hex color string: `#RGB`, `#RRGGBB`, `#RRGGBBAA`.
    /// The string may optionally start with `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = hex.as_bytes();
        let pair = |i: usize| -> Option<u8> { Some(hex_val(bytes[i])? << 4 | hex_val(bytes[i + 1])?) };

        match bytes.len() {
            3 => Some(Self::rgb(
                hex_val(bytes[0])? * 17,
                hex_val(bytes[1])? * 17,
                hex_val(bytes[2])? * 17,
            )),
            6 => Some(Self::rgb(pair(0)?, pair(2)?, pair(4)?)),
            8 => Some(Self::rgba(pair(0)?, pair(2)?, pair(4)?, pair(6)?)),
            _ => None,
        }
    }

    /// Emit as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(&self) -> String {
        if self.is_opaque() {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_hex()
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Color::from_hex(&s).ok_or_else(|| format!("invalid hex color {s:?}"))
    }
}

// ─── Stroke ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub width: f32,
    pub cap: StrokeCap,
    pub join: StrokeJoin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrokeCap {
    Butt,
    Round,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrokeJoin {
    Miter,
    Round,
    Bevel,
}

impl Stroke {
    pub const fn new(width: f32) -> Self {
        Self {
            width,
            cap: StrokeCap::Butt,
            join: StrokeJoin::Miter,
        }
    }

    /// Round interior joins, used for check glyphs.
    pub const fn curved(width: f32) -> Self {
        Self {
            width,
            cap: StrokeCap::Butt,
            join: StrokeJoin::Round,
        }
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Outline drawn inside a shape's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    pub color: Color,
    pub width: f32,
}

impl Outline {
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

// ─── Font / Text ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontWeight {
    Regular,
    Bold,
}

/// A font reference: weight and pixel size. Resolved to a glyph source at
/// draw time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub weight: FontWeight,
    pub size: f32,
}

impl FontSpec {
    pub const fn regular(size: f32) -> Self {
        Self {
            weight: FontWeight::Regular,
            size,
        }
    }

    pub const fn bold(size: f32) -> Self {
        Self {
            weight: FontWeight::Bold,
            size,
        }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::regular(14.0)
    }
}

/// How a text run's anchor x is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlign {
    /// Anchor is the left edge.
    #[default]
    Left,
    /// Anchor is the horizontal center of the measured ink box.
    Center,
    /// Anchor is the right edge of the measured ink box.
    Right,
}

// ─── Geometry ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build from left/top/right/bottom edges.
    pub fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    /// A `size × size` box with its top-left corner at (x, y).
    pub const fn square(x: f32, y: f32, size: f32) -> Self {
        Self::new(x, y, size, size)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// The point at fractional position (fx, fy) inside the box.
    pub fn at_fraction(&self, fx: f32, fy: f32) -> Point {
        Point::new(self.x + self.width * fx, self.y + self.height * fy)
    }

    /// Shrink every edge by `d`.
    pub fn inset(&self, d: f32) -> Self {
        Self::new(
            self.x + d,
            self.y + d,
            (self.width - 2.0 * d).max(0.0),
            (self.height - 2.0 * d).max(0.0),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

// ─── Draw commands ───────────────────────────────────────────────────────

/// A single stateless drawing operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCmd {
    /// Axis-aligned rectangle. `corner_radius` of 0 draws square corners.
    Rect {
        bounds: Bounds,
        corner_radius: f32,
        fill: Option<Color>,
        outline: Option<Outline>,
    },

    /// Ellipse inscribed in `bounds`.
    Ellipse {
        bounds: Bounds,
        fill: Option<Color>,
        outline: Option<Outline>,
    },

    /// Arc of the ellipse inscribed in `bounds`. Degrees run clockwise from
    /// three o'clock.
    Arc {
        bounds: Bounds,
        start_deg: f32,
        end_deg: f32,
        color: Color,
        width: f32,
    },

    /// Connected line segments.
    Polyline {
        points: SmallVec<[Point; 4]>,
        color: Color,
        stroke: Stroke,
    },

    /// A single line of text. `origin.y` is the top of the ascent line.
    Text {
        origin: Point,
        content: String,
        color: Color,
        font: FontSpec,
        align: TextAlign,
    },

    /// Row-by-row blend from `top` (first row) towards `bottom`.
    VerticalGradient {
        bounds: Bounds,
        top: Color,
        bottom: Color,
    },

    /// Full-frame translucent overlay composited over everything drawn so far.
    Scrim { color: Color },
}

impl DrawCmd {
    /// Short name for logging.
    pub fn kind_name(&self) -> &'static str {
        match self {
            DrawCmd::Rect { .. } => "rect",
            DrawCmd::Ellipse { .. } => "ellipse",
            DrawCmd::Arc { .. } => "arc",
            DrawCmd::Polyline { .. } => "polyline",
            DrawCmd::Text { .. } => "text",
            DrawCmd::VerticalGradient { .. } => "gradient",
            DrawCmd::Scrim { .. } => "scrim",
        }
    }

    /// Filled rectangle with square corners.
    pub fn fill_rect(bounds: Bounds, color: Color) -> Self {
        DrawCmd::Rect {
            bounds,
            corner_radius: 0.0,
            fill: Some(color),
            outline: None,
        }
    }

    /// Filled rounded rectangle.
    pub fn fill_round_rect(bounds: Bounds, radius: f32, color: Color) -> Self {
        DrawCmd::Rect {
            bounds,
            corner_radius: radius,
            fill: Some(color),
            outline: None,
        }
    }

    /// Outlined (unfilled) rectangle.
    pub fn stroke_rect(bounds: Bounds, radius: f32, outline: Outline) -> Self {
        DrawCmd::Rect {
            bounds,
            corner_radius: radius,
            fill: None,
            outline: Some(outline),
        }
    }

    pub fn line(points: &[Point], color: Color, stroke: Stroke) -> Self {
        DrawCmd::Polyline {
            points: SmallVec::from_slice(points),
            color,
            stroke,
        }
    }

    pub fn text(origin: Point, content: impl Into<String>, color: Color, font: FontSpec) -> Self {
        DrawCmd::Text {
            origin,
            content: content.into(),
            color,
            font,
            align: TextAlign::Left,
        }
    }

    /// Text horizontally centered on `center_x`.
    pub fn centered_text(
        center_x: f32,
        y: f32,
        content: impl Into<String>,
        color: Color,
        font: FontSpec,
    ) -> Self {
        DrawCmd::Text {
            origin: Point::new(center_x, y),
            content: content.into(),
            color,
            font,
            align: TextAlign::Center,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_hex_roundtrip() {
        let c = Color::from_hex("#588157").unwrap();
        assert_eq!(c, Color::rgb(88, 129, 87));
        assert_eq!(c.to_hex(), "#588157");

        let c2 = Color::from_hex("000000B4").unwrap();
        assert_eq!(c2.a, 180);
        assert_eq!(c2.to_hex(), "#000000B4");
    }

    #[test]
    fn color_hex_short_form() {
        assert_eq!(Color::from_hex("#fff"), Some(Color::rgb(255, 255, 255)));
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#zzzzzz"), None);
    }

    #[test]
    fn color_serializes_as_hex() {
        let json = serde_json::to_string(&Color::rgba(0, 0, 0, 180)).unwrap();
        assert_eq!(json, "\"#000000B4\"");
        let back: Color = serde_json::from_str("\"#588157\"").unwrap();
        assert_eq!(back, Color::rgb(88, 129, 87));
        assert!(serde_json::from_str::<Color>("\"#58815\"").is_err());
    }

    #[test]
    fn opaque_drops_alpha() {
        let c = Color::rgba(120, 120, 120, 128);
        assert!(!c.is_opaque());
        assert_eq!(c.opaque(), Color::rgb(120, 120, 120));
    }

    #[test]
    fn bounds_fraction_and_inset() {
        let b = Bounds::square(100.0, 200.0, 40.0);
        assert_eq!(b.at_fraction(0.25, 0.5), Point::new(110.0, 220.0));
        assert_eq!(b.at_fraction(0.75, 0.3).x, 130.0);

        let inner = b.inset(5.0);
        assert_eq!(inner, Bounds::new(105.0, 205.0, 30.0, 30.0));
        assert!(!inner.is_empty());
        assert!(b.inset(30.0).is_empty());
    }

    #[test]
    fn bounds_from_ltrb() {
        let b = Bounds::from_ltrb(25.6, 25.6, 486.4, 486.4);
        assert!((b.width - 460.8).abs() < 1e-3);
        assert!((b.bottom() - 486.4).abs() < 1e-3);
    }
}
