//! Integration tests: the artifact catalog as data.
//!
//! Every script must survive a JSON round trip, and every checklist in the
//! catalog must obey the completed/pending row policy.

use pretty_assertions::assert_eq;
use promo_core::artifacts::{icon_set, screenshot_set};
use promo_core::model::DrawCmd;
use promo_core::palette::MOSS_GREEN;
use promo_core::script::ArtifactScript;

fn catalog() -> Vec<ArtifactScript> {
    icon_set()
        .into_iter()
        .chain(screenshot_set())
        .map(|a| a.script)
        .collect()
}

#[test]
fn catalog_scripts_roundtrip_through_json() {
    for script in catalog() {
        let json = script.to_json().unwrap();
        let back = ArtifactScript::from_json(&json).unwrap();
        assert_eq!(back, script, "{}", script.name);
    }
}

#[test]
fn catalog_has_eight_uniquely_named_files() {
    let mut names: Vec<&str> = icon_set()
        .iter()
        .chain(screenshot_set().iter())
        .map(|a| a.file_name)
        .collect();
    assert_eq!(names.len(), 8);
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 8);
}

/// Checkbox fills, in order, for square moss-colored rects of `size`.
fn checkbox_fills(script: &ArtifactScript, size: f32) -> Vec<bool> {
    script
        .commands
        .iter()
        .filter_map(|c| match c {
            DrawCmd::Rect {
                bounds,
                fill,
                outline,
                ..
            } if (bounds.width - size).abs() < 1e-3
                && (bounds.height - size).abs() < 1e-3
                && (fill == &Some(MOSS_GREEN)
                    || outline.is_some_and(|o| o.color == MOSS_GREEN)) =>
            {
                Some(fill.is_some())
            }
            _ => None,
        })
        .collect()
}

#[test]
fn icon_checklist_completes_first_two_rows() {
    let icons = icon_set();
    assert_eq!(checkbox_fills(&icons[0].script, 512.0 * 0.08), vec![true, true, false]);
}

#[test]
fn feature_checklist_completes_first_two_rows() {
    let icons = icon_set();
    assert_eq!(checkbox_fills(&icons[1].script, 270.0 * 0.1), vec![true, true, false]);
}

#[test]
fn widget_checklist_completes_first_two_rows() {
    let screens = screenshot_set();
    assert_eq!(checkbox_fills(&screens[4].script, 50.0), vec![true, true, false]);
}
