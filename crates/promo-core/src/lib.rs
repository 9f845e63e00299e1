pub mod artifacts;
pub mod blocks;
pub mod gradient;
pub mod model;
pub mod palette;
pub mod script;

pub use artifacts::{Artifact, icon_set, screenshot_set};
pub use blocks::{ChecklistBlock, RowState};
pub use model::*;
pub use script::ArtifactScript;
