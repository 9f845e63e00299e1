//! App icon, feature graphic, and promo graphic scripts.

use crate::blocks::{ChecklistBlock, Connector, checkmark};
use crate::model::{Bounds, DrawCmd, FontSpec, Outline, Point};
use crate::palette::{ACCENT_GREEN, DARK_TEXT, LIGHT_BG, MOSS_GREEN, WHITE};
use crate::script::ArtifactScript;

pub const FEATURE_WIDTH: u32 = 1024;
pub const FEATURE_HEIGHT: u32 = 500;
pub const PROMO_WIDTH: u32 = 180;
pub const PROMO_HEIGHT: u32 = 120;

/// Outer margin of the icon panel as a fraction of the icon size.
pub const ICON_MARGIN: f32 = 0.05;

/// Whole pixels, truncated.
fn px(v: f32) -> f32 {
    v.trunc()
}

/// Checklist app icon: a white rounded panel with three task rows.
pub fn app_icon(size: u32) -> ArtifactScript {
    let s = size as f32;
    let mut script = ArtifactScript::new(format!("app_icon_{size}"), size, size, LIGHT_BG);

    let margin = s * ICON_MARGIN;
    script.push(DrawCmd::fill_round_rect(
        Bounds::from_ltrb(margin, margin, s - margin, s - margin),
        s * 0.15,
        WHITE,
    ));

    let box_size = s * 0.08;
    script.extend(
        ChecklistBlock {
            origin: Point::new(s * 0.2, s * 0.25),
            rows: 3,
            box_size,
            row_spacing: s * 0.2,
            corner_radius: s * 0.02,
            outline_width: px(s * 0.01),
            outline_completed: true,
            check_width: px(s * 0.015),
            connector: Some(Connector {
                gap: s * 0.05,
                end_x: s * 0.8,
                completed_width: px(s * 0.012),
                pending_width: px(s * 0.015),
            }),
            labels: None,
        }
        .commands(),
    );

    script
}

/// 1024×500 banner: gradient, icon panel on the left, copy on the right.
pub fn feature_graphic() -> ArtifactScript {
    let (w, h) = (FEATURE_WIDTH, FEATURE_HEIGHT);
    let mut script = ArtifactScript::new("feature_graphic", w, h, LIGHT_BG);

    script.push(DrawCmd::VerticalGradient {
        bounds: Bounds::new(0.0, 0.0, w as f32, h as f32),
        top: LIGHT_BG,
        bottom: WHITE,
    });

    let icon_size = 300.0_f32;
    let icon_x = 80.0_f32;
    let icon_y = ((h as f32 - icon_size) / 2.0).floor();
    let panel = icon_size * 0.9;
    let panel_x = icon_x + ((icon_size - panel) / 2.0).floor();
    let panel_y = icon_y + ((icon_size - panel) / 2.0).floor();

    script.push(DrawCmd::Rect {
        bounds: Bounds::square(panel_x, panel_y, panel),
        corner_radius: icon_size * 0.15,
        fill: Some(WHITE),
        outline: Some(Outline::new(MOSS_GREEN, 3.0)),
    });

    script.extend(
        ChecklistBlock {
            origin: Point::new(panel_x + panel * 0.15, panel_y + panel * 0.25),
            rows: 3,
            box_size: panel * 0.1,
            row_spacing: panel * 0.25,
            corner_radius: 5.0,
            outline_width: 2.0,
            outline_completed: false,
            check_width: 3.0,
            connector: Some(Connector {
                gap: 15.0,
                end_x: panel_x + panel * 0.85,
                completed_width: 3.0,
                pending_width: 3.0,
            }),
            labels: None,
        }
        .commands(),
    );

    let title_x = 450.0;
    let title_y = 150.0;
    script.push(DrawCmd::text(
        Point::new(title_x, title_y),
        "WidgetTodo",
        MOSS_GREEN,
        FontSpec::bold(72.0),
    ));

    let subtitle_y = title_y + 100.0;
    for (i, line) in ["シンプルで禅的な", "TODOアプリ"].iter().enumerate() {
        script.push(DrawCmd::text(
            Point::new(title_x, subtitle_y + i as f32 * 45.0),
            *line,
            DARK_TEXT,
            FontSpec::regular(36.0),
        ));
    }

    let feature_y = subtitle_y + 130.0;
    for (i, feature) in ["✓ ウィジェット対応", "✓ シンプルUI", "✓ 高速動作"]
        .iter()
        .enumerate()
    {
        script.push(DrawCmd::text(
            Point::new(title_x, feature_y + i as f32 * 35.0),
            *feature,
            ACCENT_GREEN,
            FontSpec::regular(24.0),
        ));
    }

    script
}

/// 180×120 thumbnail: a white disc with a check and a caption.
pub fn promo_graphic() -> ArtifactScript {
    let (w, h) = (PROMO_WIDTH, PROMO_HEIGHT);
    let mut script = ArtifactScript::new("promo_graphic", w, h, MOSS_GREEN);

    let size = 60.0_f32;
    let x = ((w as f32 - size) / 2.0).floor();
    let y = ((h as f32 - size) / 2.0).floor() - 10.0;
    let disc = Bounds::square(x, y, size);

    script
        .push(DrawCmd::Ellipse {
            bounds: disc,
            fill: Some(WHITE),
            outline: None,
        })
        .push(checkmark(disc, MOSS_GREEN, 8.0))
        .push(DrawCmd::centered_text(
            w as f32 / 2.0,
            disc.bottom() + 5.0,
            "TODO",
            WHITE,
            FontSpec::bold(14.0),
        ));

    script
}
