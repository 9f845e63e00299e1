//! Integration tests: catalog → PNG files on disk → reload.

use pretty_assertions::assert_eq;
use promo_cli::{AssetConfig, ensure_dir, generate_artifact};
use promo_core::artifacts::{icon_set, screenshot_set};
use promo_render::{Canvas, FontBook};

#[test]
fn icon_set_writes_expected_files() {
    let dir = tempfile::tempdir().unwrap();
    let fonts = FontBook::builtin();
    let mut names = Vec::new();
    for artifact in icon_set() {
        let out = generate_artifact(&artifact, dir.path(), &fonts).unwrap();
        let back = Canvas::load_png(&out.path).unwrap();
        assert_eq!(
            (back.width(), back.height()),
            (artifact.script.width, artifact.script.height)
        );
        names.push(out.file_name());
    }
    assert_eq!(
        names,
        vec![
            "app_icon_512.png",
            "feature_graphic_1024x500.png",
            "promo_graphic_180x120.png",
        ]
    );
}

#[test]
fn screenshots_land_in_subdirectory() {
    let dir = tempfile::tempdir().unwrap();
    let config = AssetConfig {
        output_dir: dir.path().to_path_buf(),
        ..AssetConfig::default()
    };
    let shots = config.screenshots_dir();
    ensure_dir(&shots).unwrap();

    let fonts = FontBook::builtin();
    let first = screenshot_set().into_iter().next().unwrap();
    let out = generate_artifact(&first, &shots, &fonts).unwrap();
    assert_eq!(out.path, shots.join("01_main_with_tasks.png"));

    let back = Canvas::load_png(&out.path).unwrap();
    assert_eq!((back.width(), back.height()), (1080, 1920));
}

#[test]
fn screenshot_names_are_ordered() {
    let names: Vec<&str> = screenshot_set().iter().map(|a| a.file_name).collect();
    assert_eq!(
        names,
        vec![
            "01_main_with_tasks.png",
            "02_add_task_dialog.png",
            "03_empty_state.png",
            "04_undo_snackbar.png",
            "05_widget_home.png",
        ]
    );
}
