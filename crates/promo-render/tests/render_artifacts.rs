//! Integration tests: artifact script → canvas → pixels.
//!
//! Renders the catalog with the builtin glyphs so results do not depend on
//! which fonts the host has installed.

use pretty_assertions::assert_eq;
use promo_core::artifacts::{icon_set, screenshot_set};
use promo_core::artifacts::icons::{app_icon, feature_graphic};
use promo_core::artifacts::screens::add_task_dialog_screen;
use promo_core::blocks::RowState;
use promo_core::gradient::row_color;
use promo_core::model::{Bounds, Color, DrawCmd, FontSpec, Point};
use promo_core::palette::{DARK_TEXT, LIGHT_BG, MOSS_GREEN, WHITE};
use promo_core::script::ArtifactScript;
use promo_render::{Canvas, FontBook, ImageFormat, measure_text, render_script};

fn fonts() -> FontBook {
    FontBook::builtin()
}

// ─── Icon ────────────────────────────────────────────────────────────────

#[test]
fn icon_margin_band_is_background() {
    let canvas = render_script(&app_icon(512), &fonts()).unwrap();
    for i in 0..25 {
        assert_eq!(canvas.pixel(i, 256), Some(LIGHT_BG), "left band x={i}");
        assert_eq!(canvas.pixel(256, i), Some(LIGHT_BG), "top band y={i}");
        assert_eq!(canvas.pixel(511 - i, 256), Some(LIGHT_BG), "right band");
    }
    assert_eq!(canvas.pixel(256, 60), Some(WHITE));
}

#[test]
fn icon_boxes_follow_row_policy() {
    let canvas = render_script(&app_icon(512), &fonts()).unwrap();
    let s = 512.0_f32;
    for row in 0..3 {
        let b = Bounds::square(s * 0.2, s * 0.25 + row as f32 * s * 0.2, s * 0.08);
        // Clear of both the check stroke and the outline band.
        let probe = b.at_fraction(0.8, 0.8);
        let expected = match RowState::for_index(row) {
            RowState::Completed => MOSS_GREEN,
            RowState::Pending => WHITE,
        };
        assert_eq!(
            canvas.pixel(probe.x as u32, probe.y as u32),
            Some(expected),
            "row {row}"
        );
    }
}

// ─── Gradient ────────────────────────────────────────────────────────────

#[test]
fn feature_gradient_runs_top_to_bottom() {
    let canvas = render_script(&feature_graphic(), &fonts()).unwrap();
    assert_eq!(canvas.pixel(1010, 0), Some(LIGHT_BG));
    assert_eq!(canvas.pixel(1010, 499), Some(row_color(LIGHT_BG, WHITE, 499, 500)));
    let last = canvas.pixel(1010, 499).unwrap();
    assert!(last.r >= 254 && last.g >= 254 && last.b >= 254);
}

// ─── Scrim ───────────────────────────────────────────────────────────────

#[test]
fn dialog_sits_above_dimmed_list() {
    let canvas = render_script(&add_task_dialog_screen(), &fonts()).unwrap();
    assert_eq!(canvas.pixel(900, 720), Some(WHITE));
    let dimmed = canvas.pixel(540, 1800).unwrap();
    assert!(dimmed.r < 90, "expected scrim over background, got {dimmed:?}");
    assert_eq!(dimmed.a, 255);
}

// ─── Text ────────────────────────────────────────────────────────────────

#[test]
fn centered_text_lands_on_canvas_midline() {
    let book = fonts();
    let spec = FontSpec::bold(40.0);
    let mut script = ArtifactScript::new("center", 400, 80, WHITE);
    script.push(DrawCmd::centered_text(200.0, 10.0, "WidgetTodo", DARK_TEXT, spec));
    let canvas = render_script(&script, &book).unwrap();

    let width = measure_text("WidgetTodo", &book.resolve(spec)).width;
    let left = (400 - width) / 2;
    assert!(((left + width / 2) as i64 - 200).abs() <= 1);

    let inked: Vec<u32> = (0..400)
        .filter(|&x| (0..80).any(|y| canvas.pixel(x, y) != Some(WHITE)))
        .collect();
    assert_eq!(inked.first().copied(), Some(left));
    assert_eq!(inked.last().copied(), Some(left + width - 1));
}

#[test]
fn missing_font_paths_fall_back_to_builtin() {
    let book = FontBook::load("/no/such/Regular.ttf", "/no/such/Bold.ttf");
    let mut canvas = Canvas::create(200, 60, WHITE).unwrap();
    let font = book.resolve(FontSpec::regular(24.0));
    canvas.draw_text(Point::new(4.0, 4.0), "hello 世界", DARK_TEXT, &font);
    let extent = measure_text("hello 世界", &font);
    assert!(extent.width > 0 && extent.height > 0);
    let ink = (0..60)
        .flat_map(|y| (0..200).map(move |x| (x, y)))
        .filter(|&(x, y)| canvas.pixel(x, y) == Some(DARK_TEXT))
        .count();
    assert!(ink > 0);
}

// ─── Persistence ─────────────────────────────────────────────────────────

#[test]
fn saved_png_reloads_with_same_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("icon.png");
    let canvas = render_script(&app_icon(128), &fonts()).unwrap();
    canvas.save(&path, ImageFormat::Png).unwrap();

    let back = Canvas::load_png(&path).unwrap();
    assert_eq!((back.width(), back.height()), (128, 128));
    for (x, y) in [(0, 0), (64, 20), (40, 50), (127, 127)] {
        assert_eq!(back.pixel(x, y), canvas.pixel(x, y), "pixel ({x}, {y})");
    }
}

#[test]
fn save_into_missing_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.png");
    let canvas = Canvas::create(4, 4, WHITE).unwrap();
    assert!(matches!(
        canvas.save(&path, ImageFormat::Png),
        Err(promo_render::Error::Io { .. })
    ));
}

#[test]
fn load_png_rejects_non_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fake.png");
    std::fs::write(&path, b"plain text").unwrap();
    assert!(matches!(
        Canvas::load_png(&path),
        Err(promo_render::Error::Decode { .. })
    ));
}

// ─── Catalog ─────────────────────────────────────────────────────────────

#[test]
fn every_artifact_renders_at_declared_size() {
    let book = fonts();
    for artifact in icon_set().into_iter().chain(screenshot_set()) {
        let canvas = render_script(&artifact.script, &book).unwrap();
        assert_eq!(
            (canvas.width(), canvas.height()),
            (artifact.script.width, artifact.script.height),
            "{}",
            artifact.file_name
        );
    }
}

#[test]
fn degenerate_rect_is_ignored() {
    let mut script = ArtifactScript::new("degenerate", 8, 8, WHITE);
    script.push(DrawCmd::Rect {
        bounds: Bounds::new(2.0, 2.0, 0.0, 4.0),
        corner_radius: 0.0,
        fill: Some(Color::rgb(0, 0, 0)),
        outline: None,
    });
    let canvas = render_script(&script, &fonts()).unwrap();
    assert_eq!(canvas.pixel(2, 3), Some(WHITE));
}
