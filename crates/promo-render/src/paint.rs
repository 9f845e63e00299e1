//! Artifact script → raster canvas.
//!
//! Executes a script's commands in order against a fresh canvas. Every
//! command is stateless; later commands paint over earlier ones.

use crate::canvas::Canvas;
use crate::error::{Error, Result};
use crate::font::FontBook;
use promo_core::model::DrawCmd;
use promo_core::script::ArtifactScript;

/// Render every command of `script` onto a new canvas.
///
/// # Errors
/// Returns `InvalidDimensions` if the script's size is degenerate.
pub fn render_script(script: &ArtifactScript, fonts: &FontBook) -> Result<Canvas> {
    let mut canvas = Canvas::create(script.width, script.height, script.background)?;
    log::debug!(
        "rendering {} ({}x{}, {} commands)",
        script.name,
        script.width,
        script.height,
        script.commands.len()
    );
    for cmd in &script.commands {
        paint_command(&mut canvas, cmd, fonts)?;
    }
    Ok(canvas)
}

/// Parse a JSON script and render it.
///
/// # Errors
/// Returns `Script` on malformed JSON, otherwise as `render_script`.
pub fn render_json(text: &str, fonts: &FontBook) -> Result<Canvas> {
    let script = ArtifactScript::from_json(text).map_err(Error::Script)?;
    render_script(&script, fonts)
}

/// Execute one command.
///
/// # Errors
/// Only `Scrim` can fail, when its overlay cannot be allocated.
pub fn paint_command(canvas: &mut Canvas, cmd: &DrawCmd, fonts: &FontBook) -> Result<()> {
    log::trace!("{} {:?}", cmd.kind_name(), cmd);
    match cmd {
        DrawCmd::Rect {
            bounds,
            corner_radius,
            fill,
            outline,
        } => canvas.draw_rectangle(
            *bounds,
            *fill,
            outline.map(|o| o.color),
            outline.map_or(0.0, |o| o.width),
            *corner_radius,
        ),

        DrawCmd::Ellipse {
            bounds,
            fill,
            outline,
        } => canvas.draw_ellipse(
            *bounds,
            *fill,
            outline.map(|o| o.color),
            outline.map_or(0.0, |o| o.width),
        ),

        DrawCmd::Arc {
            bounds,
            start_deg,
            end_deg,
            color,
            width,
        } => canvas.draw_arc(*bounds, *start_deg, *end_deg, *color, *width),

        DrawCmd::Polyline {
            points,
            color,
            stroke,
        } => canvas.draw_polyline(points, *color, *stroke),

        DrawCmd::Text {
            origin,
            content,
            color,
            font,
            align,
        } => {
            let resolved = fonts.resolve(*font);
            canvas.draw_aligned_text(*origin, content, *color, &resolved, *align);
        }

        DrawCmd::VerticalGradient {
            bounds,
            top,
            bottom,
        } => canvas.fill_vertical_gradient(*bounds, *top, *bottom),

        DrawCmd::Scrim { color } => canvas.scrim(*color)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use promo_core::model::{Bounds, Color, FontSpec, Point};
    use promo_core::palette::{DARK_TEXT, LIGHT_BG, MOSS_GREEN, WHITE};
    use pretty_assertions::assert_eq;

    #[test]
    fn commands_paint_in_order() {
        let mut script = ArtifactScript::new("order", 10, 10, LIGHT_BG);
        script
            .push(DrawCmd::fill_rect(Bounds::new(0.0, 0.0, 10.0, 10.0), MOSS_GREEN))
            .push(DrawCmd::fill_rect(Bounds::new(0.0, 0.0, 5.0, 10.0), WHITE));
        let canvas = render_script(&script, &FontBook::builtin()).unwrap();
        assert_eq!(canvas.pixel(2, 5), Some(WHITE));
        assert_eq!(canvas.pixel(7, 5), Some(MOSS_GREEN));
    }

    #[test]
    fn empty_script_is_background() {
        let script = ArtifactScript::new("blank", 3, 3, LIGHT_BG);
        let canvas = render_script(&script, &FontBook::builtin()).unwrap();
        assert_eq!(canvas.pixel(1, 1), Some(LIGHT_BG));
    }

    #[test]
    fn zero_sized_script_fails() {
        let script = ArtifactScript::new("none", 0, 5, LIGHT_BG);
        assert!(matches!(
            render_script(&script, &FontBook::builtin()),
            Err(Error::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn scrim_dims_earlier_commands_only() {
        let mut script = ArtifactScript::new("scrim", 10, 10, WHITE);
        script
            .push(DrawCmd::Scrim {
                color: Color::rgba(0, 0, 0, 180),
            })
            .push(DrawCmd::fill_rect(Bounds::new(0.0, 0.0, 5.0, 10.0), WHITE));
        let canvas = render_script(&script, &FontBook::builtin()).unwrap();
        assert_eq!(canvas.pixel(2, 2), Some(WHITE));
        let dimmed = canvas.pixel(7, 2).unwrap();
        assert!(dimmed.r < 100, "got {dimmed:?}");
    }

    #[test]
    fn text_with_missing_font_still_inks() {
        let fonts = FontBook::load("/nonexistent/a.ttf", "/nonexistent/b.ttf");
        let mut script = ArtifactScript::new("text", 60, 20, WHITE);
        script.push(DrawCmd::text(
            Point::new(1.0, 1.0),
            "ok",
            DARK_TEXT,
            FontSpec::regular(14.0),
        ));
        let canvas = render_script(&script, &fonts).unwrap();
        let inked = (0..20)
            .flat_map(|y| (0..60).map(move |x| (x, y)))
            .filter(|&(x, y)| canvas.pixel(x, y) != Some(WHITE))
            .count();
        assert!(inked > 0);
    }

    #[test]
    fn render_json_rejects_garbage() {
        assert!(matches!(
            render_json("[1, 2", &FontBook::builtin()),
            Err(Error::Script(_))
        ));
    }
}
