//! Reusable drawing blocks shared across artifact scripts.
//!
//! Each block expands into a short run of `DrawCmd`s. Geometry is
//! proportional where the same block appears at several scales (checkmark,
//! checklist) and fixed where it mimics a phone UI at 1080 px width.

use crate::model::{Bounds, Color, DrawCmd, FontSpec, Outline, Point, Stroke};
use crate::palette::{
    ACCENT_GREEN, DARK_TEXT, DOCK_ICON, GRAY_TEXT, LIGHT_BG, MOSS_GREEN, OUTLINE, SNACKBAR_BG,
    WHITE,
};

// ─── Checkmark ───────────────────────────────────────────────────────────

/// Checkmark vertices as fractions of the containing box.
pub const CHECK_FRACTIONS: [(f32, f32); 3] = [(0.25, 0.5), (0.45, 0.7), (0.75, 0.3)];

/// The three checkmark points for a given box.
pub fn check_points(within: Bounds) -> [Point; 3] {
    CHECK_FRACTIONS.map(|(fx, fy)| within.at_fraction(fx, fy))
}

/// A short-then-long check stroke scaled to `within`.
pub fn checkmark(within: Bounds, color: Color, width: f32) -> DrawCmd {
    DrawCmd::line(&check_points(within), color, Stroke::curved(width))
}

// ─── Checklist ───────────────────────────────────────────────────────────

/// Number of leading rows drawn as completed.
pub const COMPLETED_ROWS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    Completed,
    Pending,
}

impl RowState {
    /// Rows before `COMPLETED_ROWS` are completed; the rest are pending.
    pub fn for_index(index: usize) -> Self {
        if index < COMPLETED_ROWS {
            RowState::Completed
        } else {
            RowState::Pending
        }
    }
}

/// Horizontal task line to the right of each checkbox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connector {
    /// Gap between the checkbox's right edge and the line start.
    pub gap: f32,
    /// Absolute x where the line ends.
    pub end_x: f32,
    pub completed_width: f32,
    pub pending_width: f32,
}

/// Text label to the right of each checkbox.
#[derive(Debug, Clone, PartialEq)]
pub struct RowLabels {
    pub texts: Vec<String>,
    pub gap: f32,
    /// Offset from the checkbox top to the text origin.
    pub dy: f32,
    pub font: FontSpec,
    pub color: Color,
}

/// A vertical list of checkbox rows with the fixed completed/pending policy.
#[derive(Debug, Clone, PartialEq)]
pub struct ChecklistBlock {
    /// Top-left of the first checkbox.
    pub origin: Point,
    pub rows: usize,
    pub box_size: f32,
    pub row_spacing: f32,
    pub corner_radius: f32,
    /// Outline width of pending boxes.
    pub outline_width: f32,
    /// Completed boxes also get an outline of `outline_width`.
    pub outline_completed: bool,
    pub check_width: f32,
    pub connector: Option<Connector>,
    pub labels: Option<RowLabels>,
}

impl ChecklistBlock {
    pub fn box_bounds(&self, index: usize) -> Bounds {
        Bounds::square(
            self.origin.x,
            self.origin.y + index as f32 * self.row_spacing,
            self.box_size,
        )
    }

    pub fn commands(&self) -> Vec<DrawCmd> {
        let mut out = Vec::new();
        for i in 0..self.rows {
            self.push_row(i, &mut out);
        }
        out
    }

    fn push_row(&self, index: usize, out: &mut Vec<DrawCmd>) {
        let bounds = self.box_bounds(index);
        let state = RowState::for_index(index);

        match state {
            RowState::Completed => {
                out.push(DrawCmd::Rect {
                    bounds,
                    corner_radius: self.corner_radius,
                    fill: Some(MOSS_GREEN),
                    outline: self
                        .outline_completed
                        .then(|| Outline::new(MOSS_GREEN, self.outline_width)),
                });
                out.push(checkmark(bounds, WHITE, self.check_width));
            }
            RowState::Pending => {
                out.push(DrawCmd::stroke_rect(
                    bounds,
                    self.corner_radius,
                    Outline::new(MOSS_GREEN, self.outline_width),
                ));
            }
        }

        if let Some(conn) = &self.connector {
            let y = bounds.y + self.box_size * 0.5;
            let (color, width) = match state {
                RowState::Completed => (ACCENT_GREEN, conn.completed_width),
                RowState::Pending => (MOSS_GREEN, conn.pending_width),
            };
            out.push(DrawCmd::line(
                &[
                    Point::new(bounds.right() + conn.gap, y),
                    Point::new(conn.end_x, y),
                ],
                color,
                Stroke::new(width),
            ));
        }

        if let Some(labels) = &self.labels
            && let Some(text) = labels.texts.get(index)
        {
            out.push(DrawCmd::text(
                Point::new(bounds.right() + labels.gap, bounds.y + labels.dy),
                text.clone(),
                labels.color,
                labels.font,
            ));
        }
    }
}

// ─── Floating action button ──────────────────────────────────────────────

pub const FAB_SIZE: f32 = 140.0;
pub const FAB_MARGIN: f32 = 50.0;
pub const FAB_RADIUS: f32 = 32.0;
pub const PLUS_THICKNESS: f32 = 8.0;
pub const PLUS_LENGTH: f32 = 60.0;

/// Bounds of the FAB anchored to the bottom-right corner.
pub fn fab_bounds(canvas_width: u32, canvas_height: u32) -> Bounds {
    Bounds::square(
        canvas_width as f32 - FAB_SIZE - FAB_MARGIN,
        canvas_height as f32 - FAB_SIZE - FAB_MARGIN,
        FAB_SIZE,
    )
}

/// Rounded square button with a centered plus glyph.
pub fn fab(canvas_width: u32, canvas_height: u32) -> Vec<DrawCmd> {
    let b = fab_bounds(canvas_width, canvas_height);
    let cx = b.x + (FAB_SIZE / 2.0).floor();
    let cy = b.y + (FAB_SIZE / 2.0).floor();
    let half_t = (PLUS_THICKNESS / 2.0).floor();
    let half_l = (PLUS_LENGTH / 2.0).floor();

    vec![
        DrawCmd::fill_round_rect(b, FAB_RADIUS, MOSS_GREEN),
        DrawCmd::fill_rect(
            Bounds::from_ltrb(cx - half_t, cy - half_l, cx + half_t, cy + half_l),
            WHITE,
        ),
        DrawCmd::fill_rect(
            Bounds::from_ltrb(cx - half_l, cy - half_t, cx + half_l, cy + half_t),
            WHITE,
        ),
    ]
}

// ─── Phone chrome ────────────────────────────────────────────────────────

pub const STATUS_BAR_HEIGHT: f32 = 80.0;
pub const APP_BAR_HEIGHT: f32 = 140.0;
pub const APP_TITLE: &str = "やること";
pub const VERSION_LABEL: &str = "v1.0.0 (1)";
pub const CLOCK_TEXT: &str = "10:30";

/// Status bar with clock, Wi-Fi arc and battery.
pub fn status_bar(width: u32) -> Vec<DrawCmd> {
    let w = width as f32;
    let icon_y = 30.0;
    vec![
        DrawCmd::fill_rect(Bounds::new(0.0, 0.0, w, STATUS_BAR_HEIGHT), LIGHT_BG),
        DrawCmd::text(
            Point::new(40.0, 25.0),
            CLOCK_TEXT,
            DARK_TEXT,
            FontSpec::regular(32.0),
        ),
        DrawCmd::Arc {
            bounds: Bounds::from_ltrb(w - 180.0, icon_y, w - 150.0, icon_y + 30.0),
            start_deg: 0.0,
            end_deg: 180.0,
            color: DARK_TEXT,
            width: 3.0,
        },
        DrawCmd::stroke_rect(
            Bounds::from_ltrb(w - 130.0, icon_y + 5.0, w - 80.0, icon_y + 25.0),
            0.0,
            Outline::new(DARK_TEXT, 2.0),
        ),
        DrawCmd::fill_rect(
            Bounds::from_ltrb(w - 80.0, icon_y + 10.0, w - 75.0, icon_y + 20.0),
            DARK_TEXT,
        ),
    ]
}

/// Top app bar at `y` with a centered bold title and the version label.
pub fn top_app_bar(width: u32, y: f32) -> Vec<DrawCmd> {
    let w = width as f32;
    vec![
        DrawCmd::fill_rect(Bounds::new(0.0, y, w, APP_BAR_HEIGHT), LIGHT_BG),
        DrawCmd::centered_text(w / 2.0, y + 40.0, APP_TITLE, DARK_TEXT, FontSpec::bold(56.0)),
        DrawCmd::text(
            Point::new(w - 200.0, y + 55.0),
            VERSION_LABEL,
            GRAY_TEXT,
            FontSpec::regular(24.0),
        ),
    ]
}

/// Status bar followed by the app bar. Returns the commands and the y just
/// below the app bar.
pub fn phone_header(width: u32) -> (Vec<DrawCmd>, f32) {
    let mut cmds = status_bar(width);
    cmds.extend(top_app_bar(width, STATUS_BAR_HEIGHT));
    (cmds, STATUS_BAR_HEIGHT + APP_BAR_HEIGHT)
}

pub const CARD_HEIGHT: f32 = 140.0;
const CARD_CHECK_SIZE: f32 = 80.0;

/// A todo list card with an accent stripe and an optional check circle.
pub fn todo_card(x: f32, y: f32, width: f32, title: &str, show_check: bool) -> Vec<DrawCmd> {
    let card = Bounds::new(x, y, width, CARD_HEIGHT);
    let mut cmds = vec![
        DrawCmd::fill_rect(card, WHITE),
        DrawCmd::stroke_rect(card, 0.0, Outline::new(OUTLINE, 2.0)),
        DrawCmd::fill_rect(Bounds::new(x, y, 8.0, CARD_HEIGHT), MOSS_GREEN),
        DrawCmd::text(
            Point::new(x + 40.0, y + 50.0),
            title,
            DARK_TEXT,
            FontSpec::regular(42.0),
        ),
    ];

    if show_check {
        let check = Bounds::square(
            x + width - CARD_CHECK_SIZE - 30.0,
            y + ((CARD_HEIGHT - CARD_CHECK_SIZE) / 2.0).floor(),
            CARD_CHECK_SIZE,
        );
        cmds.push(DrawCmd::Ellipse {
            bounds: check,
            fill: None,
            outline: Some(Outline::new(MOSS_GREEN, 3.0)),
        });
        cmds.push(checkmark(check, MOSS_GREEN, 6.0));
    }

    cmds
}

/// Stack of cards starting at `y`, each `CARD_HEIGHT + gap` apart.
pub fn card_list(x: f32, y: f32, width: f32, titles: &[&str], gap: f32) -> Vec<DrawCmd> {
    titles
        .iter()
        .enumerate()
        .flat_map(|(i, title)| {
            todo_card(x, y + i as f32 * (CARD_HEIGHT + gap), width, title, true)
        })
        .collect()
}

// ─── Dialog / snackbar / dock ────────────────────────────────────────────

/// Add-task dialog centered on the canvas.
pub fn add_task_dialog(canvas_width: u32, canvas_height: u32) -> Vec<DrawCmd> {
    let (dw, dh) = (900.0_f32, 500.0_f32);
    let dx = ((canvas_width as f32 - dw) / 2.0).floor();
    let dy = ((canvas_height as f32 - dh) / 2.0).floor();
    let input_y = dy + 150.0;
    let button_y = dy + dh - 120.0;

    vec![
        DrawCmd::fill_round_rect(Bounds::new(dx, dy, dw, dh), 28.0, WHITE),
        DrawCmd::text(
            Point::new(dx + 60.0, dy + 50.0),
            "新しいやること",
            DARK_TEXT,
            FontSpec::bold(52.0),
        ),
        DrawCmd::stroke_rect(
            Bounds::from_ltrb(dx + 60.0, input_y, dx + dw - 60.0, input_y + 120.0),
            16.0,
            Outline::new(MOSS_GREEN, 3.0),
        ),
        DrawCmd::text(
            Point::new(dx + 90.0, input_y + 40.0),
            "新しいタスク",
            DARK_TEXT,
            FontSpec::regular(40.0),
        ),
        DrawCmd::text(
            Point::new(dx + dw - 400.0, button_y),
            "キャンセル",
            GRAY_TEXT,
            FontSpec::regular(38.0),
        ),
        DrawCmd::text(
            Point::new(dx + dw - 150.0, button_y),
            "追加",
            MOSS_GREEN,
            FontSpec::regular(38.0),
        ),
    ]
}

/// Dark snackbar near the bottom edge with a message and an action.
pub fn snackbar(canvas_width: u32, canvas_height: u32, message: &str, action: &str) -> Vec<DrawCmd> {
    let w = canvas_width as f32;
    let margin = 50.0;
    let y = canvas_height as f32 - 200.0;

    vec![
        DrawCmd::fill_round_rect(
            Bounds::from_ltrb(margin, y, w - margin, y + 120.0),
            16.0,
            SNACKBAR_BG,
        ),
        DrawCmd::text(
            Point::new(margin + 50.0, y + 40.0),
            message,
            WHITE,
            FontSpec::regular(38.0),
        ),
        DrawCmd::text(
            Point::new(w - margin - 250.0, y + 40.0),
            action,
            ACCENT_GREEN,
            FontSpec::bold(38.0),
        ),
    ]
}

/// Row of `count` app icons centered horizontally at `y`.
pub fn dock(canvas_width: u32, y: f32, count: usize) -> Vec<DrawCmd> {
    let (size, spacing) = (140.0_f32, 40.0_f32);
    let total = count as f32 * size + count.saturating_sub(1) as f32 * spacing;
    let start_x = ((canvas_width as f32 - total) / 2.0).floor();

    (0..count)
        .map(|i| {
            DrawCmd::fill_round_rect(
                Bounds::square(start_x + i as f32 * (size + spacing), y, size),
                28.0,
                DOCK_ICON,
            )
        })
        .collect()
}
