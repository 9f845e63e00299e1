//! Raster canvas and shape primitives.
//!
//! Geometry is built with `kurbo` shapes and rasterized by `tiny-skia`.
//! Outlines sit inside the shape's box: the stroke path is inset by half
//! the stroke width.

use crate::error::{Error, Result};
use kurbo::{PathEl, Shape};
use promo_core::gradient::row_color;
use promo_core::model::{Bounds, Color, Point, Stroke, StrokeCap, StrokeJoin};
use std::path::Path;
use tiny_skia::{
    FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, PixmapPaint, Rect, Transform,
};

/// Curve flattening tolerance handed to kurbo.
const TOLERANCE: f64 = 0.1;

/// How shape colors with alpha < 255 are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelMode {
    /// Opaque surface: shape alpha is ignored. Translucency only enters
    /// through `Canvas::compose`.
    #[default]
    Rgb,
    /// Shape colors blend by their alpha.
    Rgba,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    #[default]
    Png,
}

/// A fixed-size raster surface.
pub struct Canvas {
    pixmap: Pixmap,
    mode: PixelMode,
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("mode", &self.mode)
            .finish()
    }
}

impl Canvas {
    /// Allocate an opaque canvas filled with `background`.
    ///
    /// # Errors
    /// Returns `InvalidDimensions` if either side is zero.
    pub fn create(width: u32, height: u32, background: Color) -> Result<Self> {
        Self::with_mode(width, height, background, PixelMode::Rgb)
    }

    /// Allocate a canvas with an explicit pixel mode.
    ///
    /// # Errors
    /// Returns `InvalidDimensions` if either side is zero or too large.
    pub fn with_mode(width: u32, height: u32, background: Color, mode: PixelMode) -> Result<Self> {
        let mut pixmap =
            Pixmap::new(width, height).ok_or(Error::InvalidDimensions { width, height })?;
        let background = match mode {
            PixelMode::Rgb => background.opaque(),
            PixelMode::Rgba => background,
        };
        pixmap.fill(to_skia_color(background));
        Ok(Self { pixmap, mode })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Straight-alpha color at (x, y), or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::rgba(c.red(), c.green(), c.blue(), c.alpha()))
    }

    /// Apply the pixel mode to a shape color.
    fn ink(&self, color: Color) -> Color {
        match self.mode {
            PixelMode::Rgb => color.opaque(),
            PixelMode::Rgba => color,
        }
    }

    fn paint(&self, color: Color, anti_alias: bool) -> Paint<'static> {
        let c = self.ink(color);
        let mut paint = Paint::default();
        paint.set_color_rgba8(c.r, c.g, c.b, c.a);
        paint.anti_alias = anti_alias;
        paint
    }

    pub(crate) fn fill_path(&mut self, path: &tiny_skia::Path, color: Color, anti_alias: bool) {
        let paint = self.paint(color, anti_alias);
        self.pixmap
            .fill_path(path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    fn fill_shape(&mut self, shape: &impl Shape, color: Color, anti_alias: bool) {
        if let Some(path) = to_skia_path(shape) {
            self.fill_path(&path, color, anti_alias);
        }
    }

    fn stroke_shape(&mut self, shape: &impl Shape, color: Color, stroke: Stroke) {
        if stroke.width <= 0.0 {
            return;
        }
        if let Some(path) = to_skia_path(shape) {
            let paint = self.paint(color, true);
            self.pixmap
                .stroke_path(&path, &paint, &to_skia_stroke(stroke), Transform::identity(), None);
        }
    }

    // ─── Primitives ──────────────────────────────────────────────────────

    /// Paint an axis-aligned rectangle, optionally with rounded corners.
    ///
    /// No-op when both `fill` and `outline` are `None`. A radius larger than
    /// half the shorter side is clamped to it. Square-cornered fills are
    /// painted without anti-aliasing so edges land on whole pixels.
    pub fn draw_rectangle(
        &mut self,
        bounds: Bounds,
        fill: Option<Color>,
        outline: Option<Color>,
        stroke_width: f32,
        corner_radius: f32,
    ) {
        if bounds.is_empty() {
            return;
        }
        let radius = clamp_radius(bounds, corner_radius);

        if let Some(color) = fill {
            if radius > 0.0 {
                self.fill_shape(&rounded_rect(bounds, radius), color, true);
            } else {
                self.fill_shape(&to_kurbo_rect(bounds), color, false);
            }
        }

        if let Some(color) = outline {
            let half = stroke_width / 2.0;
            let inner = bounds.inset(half);
            let inner_radius = (radius - half).max(0.0);
            let stroke = Stroke::new(stroke_width);
            if inner_radius > 0.0 {
                self.stroke_shape(&rounded_rect(inner, inner_radius), color, stroke);
            } else {
                self.stroke_shape(&to_kurbo_rect(inner), color, stroke);
            }
        }
    }

    /// Paint the ellipse inscribed in `bounds`.
    pub fn draw_ellipse(
        &mut self,
        bounds: Bounds,
        fill: Option<Color>,
        outline: Option<Color>,
        stroke_width: f32,
    ) {
        if bounds.is_empty() {
            return;
        }
        if let Some(color) = fill {
            self.fill_shape(&kurbo::Ellipse::from_rect(to_kurbo_rect(bounds)), color, true);
        }
        if let Some(color) = outline {
            let inner = bounds.inset(stroke_width / 2.0);
            self.stroke_shape(
                &kurbo::Ellipse::from_rect(to_kurbo_rect(inner)),
                color,
                Stroke::new(stroke_width),
            );
        }
    }

    /// Paint an arc of the ellipse inscribed in `bounds`, from `start_deg`
    /// to `end_deg` measured clockwise from three o'clock. An end angle
    /// before the start wraps forward by whole turns.
    pub fn draw_arc(
        &mut self,
        bounds: Bounds,
        start_deg: f32,
        end_deg: f32,
        color: Color,
        width: f32,
    ) {
        let inner = bounds.inset(width / 2.0);
        let sweep = arc_sweep(start_deg, end_deg);
        if inner.is_empty() || sweep <= 0.0 {
            return;
        }
        let (cx, cy) = inner.center();
        let arc = kurbo::Arc {
            center: kurbo::Point::new(cx as f64, cy as f64),
            radii: kurbo::Vec2::new(inner.width as f64 / 2.0, inner.height as f64 / 2.0),
            start_angle: (start_deg as f64).to_radians(),
            sweep_angle: (sweep as f64).to_radians(),
            x_rotation: 0.0,
        };
        self.stroke_shape(&arc, color, Stroke::new(width));
    }

    /// Paint connected segments through `points`. Fewer than two points is
    /// a no-op.
    pub fn draw_polyline(&mut self, points: &[Point], color: Color, stroke: Stroke) {
        let [first, rest @ ..] = points else {
            return;
        };
        if rest.is_empty() {
            return;
        }
        let mut path = kurbo::BezPath::new();
        path.move_to(to_kurbo_point(*first));
        for p in rest {
            path.line_to(to_kurbo_point(*p));
        }
        self.stroke_shape(&path, color, stroke);
    }

    /// Fill `bounds` one row at a time, blending `top` into `bottom`.
    ///
    /// Row `y` gets `row_color(top, bottom, y - y0, y1 - y0)`; rows are
    /// painted without anti-aliasing.
    pub fn fill_vertical_gradient(&mut self, bounds: Bounds, top: Color, bottom: Color) {
        let y0 = bounds.y.max(0.0).floor() as u32;
        let y1 = (bounds.bottom().ceil() as u32).min(self.height());
        if y1 <= y0 {
            return;
        }
        let span = y1 - y0;
        for y in y0..y1 {
            let color = row_color(top, bottom, y - y0, span);
            if let Some(row) = Rect::from_xywh(bounds.x, y as f32, bounds.width, 1.0) {
                let paint = self.paint(color, false);
                self.pixmap
                    .fill_rect(row, &paint, Transform::identity(), None);
            }
        }
    }

    /// Alpha-blend a full-frame `overlay` onto this canvas.
    pub fn compose(&mut self, overlay: &Canvas, overlay_opacity: f32) {
        let paint = PixmapPaint {
            opacity: overlay_opacity.clamp(0.0, 1.0),
            ..PixmapPaint::default()
        };
        self.pixmap.draw_pixmap(
            0,
            0,
            overlay.pixmap.as_ref(),
            &paint,
            Transform::identity(),
            None,
        );
    }

    /// Compose a uniform `color` over the whole canvas, using its alpha as
    /// the overlay opacity.
    ///
    /// # Errors
    /// Fails only if the overlay cannot be allocated.
    pub fn scrim(&mut self, color: Color) -> Result<()> {
        let overlay = Canvas::with_mode(self.width(), self.height(), color.opaque(), PixelMode::Rgba)?;
        self.compose(&overlay, color.a as f32 / 255.0);
        Ok(())
    }

    // ─── Persistence ─────────────────────────────────────────────────────

    /// Encode and write the canvas to `path`.
    ///
    /// # Errors
    /// Returns `Io` if the destination is unwritable, `Encode` if encoding fails.
    pub fn save(&self, path: impl AsRef<Path>, format: ImageFormat) -> Result<()> {
        let path = path.as_ref();
        let bytes = match format {
            ImageFormat::Png => self.pixmap.encode_png().map_err(|e| Error::Encode {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?,
        };
        std::fs::write(path, bytes).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("saved {}x{} canvas to {}", self.width(), self.height(), path.display());
        Ok(())
    }

    /// Read a PNG written by `save`.
    ///
    /// The pixel mode is `Rgb` when every pixel is opaque.
    ///
    /// # Errors
    /// Returns `Io` if the file cannot be read, `Decode` if it is not a PNG.
    pub fn load_png(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let pixmap = Pixmap::decode_png(&bytes).map_err(|e| Error::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let mode = if pixmap.pixels().iter().all(|p| p.alpha() == 255) {
            PixelMode::Rgb
        } else {
            PixelMode::Rgba
        };
        Ok(Self { pixmap, mode })
    }
}

// ─── Conversion helpers ──────────────────────────────────────────────────

fn to_skia_color(c: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn to_skia_stroke(stroke: Stroke) -> tiny_skia::Stroke {
    tiny_skia::Stroke {
        width: stroke.width,
        line_cap: match stroke.cap {
            StrokeCap::Butt => LineCap::Butt,
            StrokeCap::Round => LineCap::Round,
            StrokeCap::Square => LineCap::Square,
        },
        line_join: match stroke.join {
            StrokeJoin::Miter => LineJoin::Miter,
            StrokeJoin::Round => LineJoin::Round,
            StrokeJoin::Bevel => LineJoin::Bevel,
        },
        ..tiny_skia::Stroke::default()
    }
}

fn to_kurbo_point(p: Point) -> kurbo::Point {
    kurbo::Point::new(p.x as f64, p.y as f64)
}

fn to_kurbo_rect(b: Bounds) -> kurbo::Rect {
    kurbo::Rect::new(
        b.x as f64,
        b.y as f64,
        b.right() as f64,
        b.bottom() as f64,
    )
}

fn rounded_rect(b: Bounds, radius: f32) -> kurbo::RoundedRect {
    kurbo::RoundedRect::from_rect(to_kurbo_rect(b), radius as f64)
}

/// Clockwise sweep in degrees from `start` to `end`, at most one turn.
/// `end` is advanced by 360 until it is not before `start`.
fn arc_sweep(start: f32, end: f32) -> f32 {
    let mut sweep = end - start;
    if sweep < 0.0 {
        sweep += 360.0 * (-sweep / 360.0).ceil();
    }
    sweep.min(360.0)
}

/// Radius limited to half the shorter side, never negative.
pub fn clamp_radius(bounds: Bounds, radius: f32) -> f32 {
    radius.min(bounds.width.min(bounds.height) / 2.0).max(0.0)
}

/// Flatten any kurbo shape into a tiny-skia path.
fn to_skia_path(shape: &impl Shape) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for el in shape.path_elements(TOLERANCE) {
        match el {
            PathEl::MoveTo(p) => pb.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => pb.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(c, p) => pb.quad_to(c.x as f32, c.y as f32, p.x as f32, p.y as f32),
            PathEl::CurveTo(c1, c2, p) => pb.cubic_to(
                c1.x as f32,
                c1.y as f32,
                c2.x as f32,
                c2.y as f32,
                p.x as f32,
                p.y as f32,
            ),
            PathEl::ClosePath => pb.close(),
        }
    }
    pb.finish()
}
