//! Phone UI mockup screenshots at 1080×1920.

use crate::blocks::{
    ChecklistBlock, RowLabels, add_task_dialog, card_list, dock, fab, phone_header, snackbar,
    status_bar, APP_TITLE, CLOCK_TEXT, STATUS_BAR_HEIGHT,
};
use crate::model::{Bounds, DrawCmd, FontSpec, Point};
use crate::palette::{
    DARK_TEXT, DATE_TEXT, GHOST_TEXT, GRAY_TEXT, LIGHT_BG, SCRIM, WALLPAPER_BOTTOM, WALLPAPER_TOP,
    WHITE,
};
use crate::script::ArtifactScript;

pub const SCREEN_WIDTH: u32 = 1080;
pub const SCREEN_HEIGHT: u32 = 1920;

const LIST_X: f32 = 50.0;
const LIST_TOP_GAP: f32 = 40.0;
const CARD_GAP: f32 = 30.0;

pub const EMPTY_STATE_TEXT: &str = "静寂";
pub const EMPTY_STATE_HINT: &str = "+をタップしてタスクを追加";

fn list_width() -> f32 {
    SCREEN_WIDTH as f32 - 2.0 * LIST_X
}

fn screen(name: &str) -> (ArtifactScript, f32) {
    let mut script = ArtifactScript::new(name, SCREEN_WIDTH, SCREEN_HEIGHT, LIGHT_BG);
    let (header, y) = phone_header(SCREEN_WIDTH);
    script.extend(header);
    (script, y)
}

/// Main list with four tasks and the add button.
pub fn main_with_tasks() -> ArtifactScript {
    let (mut script, y) = screen("01_main_with_tasks");
    script.extend(card_list(
        LIST_X,
        y + LIST_TOP_GAP,
        list_width(),
        &["買い物に行く", "メールを返信する", "レポートを完成させる", "ジムに行く"],
        CARD_GAP,
    ));
    script.extend(fab(SCREEN_WIDTH, SCREEN_HEIGHT));
    script
}

/// Add-task dialog over a dimmed task list.
pub fn add_task_dialog_screen() -> ArtifactScript {
    let (mut script, y) = screen("02_add_task_dialog");
    script.extend(card_list(
        LIST_X,
        y + LIST_TOP_GAP,
        list_width(),
        &["タスク"; 3],
        CARD_GAP,
    ));
    script.push(DrawCmd::Scrim { color: SCRIM });
    script.extend(add_task_dialog(SCREEN_WIDTH, SCREEN_HEIGHT));
    script
}

/// Empty list with the centered zen caption.
pub fn empty_state() -> ArtifactScript {
    let (mut script, _) = screen("03_empty_state");
    let center_x = SCREEN_WIDTH as f32 / 2.0;
    let text_y = (SCREEN_HEIGHT / 2) as f32 - 200.0;

    script
        .push(DrawCmd::centered_text(
            center_x,
            text_y,
            EMPTY_STATE_TEXT,
            GHOST_TEXT,
            FontSpec::bold(120.0),
        ))
        .push(DrawCmd::centered_text(
            center_x,
            text_y + 180.0,
            EMPTY_STATE_HINT,
            GRAY_TEXT,
            FontSpec::regular(40.0),
        ));
    script.extend(fab(SCREEN_WIDTH, SCREEN_HEIGHT));
    script
}

/// Two tasks, the add button, and an undo snackbar.
pub fn undo_snackbar() -> ArtifactScript {
    let (mut script, y) = screen("04_undo_snackbar");
    script.extend(card_list(
        LIST_X,
        y + LIST_TOP_GAP,
        list_width(),
        &["買い物に行く", "メールを返信する"],
        CARD_GAP,
    ));
    script.extend(fab(SCREEN_WIDTH, SCREEN_HEIGHT));
    script.extend(snackbar(
        SCREEN_WIDTH,
        SCREEN_HEIGHT,
        "タスクを削除しました",
        "元に戻す",
    ));
    script
}

/// Home screen with wallpaper, clock, the list widget, and a dock.
pub fn widget_home() -> ArtifactScript {
    let (w, h) = (SCREEN_WIDTH, SCREEN_HEIGHT);
    let mut script = ArtifactScript::new("05_widget_home", w, h, WALLPAPER_TOP);
    let center_x = w as f32 / 2.0;

    script.extend(status_bar(w));
    script.push(DrawCmd::VerticalGradient {
        bounds: Bounds::from_ltrb(0.0, STATUS_BAR_HEIGHT, w as f32, h as f32),
        top: WALLPAPER_TOP,
        bottom: WALLPAPER_BOTTOM,
    });

    script
        .push(DrawCmd::centered_text(
            center_x,
            300.0,
            CLOCK_TEXT,
            WHITE,
            FontSpec::bold(140.0),
        ))
        .push(DrawCmd::centered_text(
            center_x,
            480.0,
            "1月14日 (火)",
            DATE_TEXT,
            FontSpec::regular(40.0),
        ));

    let widget = Bounds::new(50.0, 700.0, w as f32 - 100.0, 700.0);
    script
        .push(DrawCmd::fill_round_rect(widget, 28.0, WHITE))
        .push(DrawCmd::text(
            Point::new(widget.x + 40.0, widget.y + 40.0),
            APP_TITLE,
            DARK_TEXT,
            FontSpec::bold(48.0),
        ));

    let tasks = ["買い物に行く", "メールを返信する", "レポートを完成させる"];
    script.extend(
        ChecklistBlock {
            origin: Point::new(widget.x + 40.0, widget.y + 130.0),
            rows: tasks.len(),
            box_size: 50.0,
            row_spacing: 120.0,
            corner_radius: 8.0,
            outline_width: 3.0,
            outline_completed: false,
            check_width: 5.0,
            connector: None,
            labels: Some(RowLabels {
                texts: tasks.iter().map(|t| t.to_string()).collect(),
                gap: 30.0,
                dy: 8.0,
                font: FontSpec::regular(38.0),
                color: DARK_TEXT,
            }),
        }
        .commands(),
    );

    script.extend(dock(w, h as f32 - 250.0, 5));
    script
}
