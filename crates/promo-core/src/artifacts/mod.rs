//! The fixed catalog of store listing artifacts.
//!
//! Each entry pairs an output file name with the script that draws it.

pub mod icons;
pub mod screens;

use crate::script::ArtifactScript;

pub const ICON_SIZE: u32 = 512;

/// One output image: where it goes and how it is drawn.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub file_name: &'static str,
    pub description: &'static str,
    pub script: ArtifactScript,
}

/// Icon, feature graphic, and promo graphic, in generation order.
pub fn icon_set() -> Vec<Artifact> {
    vec![
        Artifact {
            file_name: "app_icon_512.png",
            description: "App icon (512x512)",
            script: icons::app_icon(ICON_SIZE),
        },
        Artifact {
            file_name: "feature_graphic_1024x500.png",
            description: "Feature graphic (1024x500)",
            script: icons::feature_graphic(),
        },
        Artifact {
            file_name: "promo_graphic_180x120.png",
            description: "Promo graphic (180x120)",
            script: icons::promo_graphic(),
        },
    ]
}

/// The five phone screenshots, in listing order.
pub fn screenshot_set() -> Vec<Artifact> {
    vec![
        Artifact {
            file_name: "01_main_with_tasks.png",
            description: "Main screen (task list)",
            script: screens::main_with_tasks(),
        },
        Artifact {
            file_name: "02_add_task_dialog.png",
            description: "Add task dialog",
            script: screens::add_task_dialog_screen(),
        },
        Artifact {
            file_name: "03_empty_state.png",
            description: "Empty state",
            script: screens::empty_state(),
        },
        Artifact {
            file_name: "04_undo_snackbar.png",
            description: "Undo snackbar",
            script: screens::undo_snackbar(),
        },
        Artifact {
            file_name: "05_widget_home.png",
            description: "Home screen widget",
            script: screens::widget_home(),
        },
    ]
}
