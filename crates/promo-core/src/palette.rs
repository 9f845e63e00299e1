//! Named colors shared by every artifact script.

use crate::model::Color;

/// Primary moss green.
pub const MOSS_GREEN: Color = Color::rgb(88, 129, 87);
pub const ACCENT_GREEN: Color = Color::rgb(106, 153, 78);
pub const LIGHT_BG: Color = Color::rgb(250, 250, 245);
pub const WHITE: Color = Color::rgb(255, 255, 255);
pub const DARK_TEXT: Color = Color::rgb(60, 60, 60);
pub const GRAY_TEXT: Color = Color::rgb(120, 120, 120);
pub const OUTLINE: Color = Color::rgb(200, 200, 200);

// Screenshot-only colors.
pub const SNACKBAR_BG: Color = Color::rgb(60, 60, 60);
pub const WALLPAPER_TOP: Color = Color::rgb(100, 120, 140);
pub const WALLPAPER_BOTTOM: Color = Color::rgb(80, 100, 120);
pub const DATE_TEXT: Color = Color::rgb(220, 220, 220);
/// Painted opaque on RGB canvases.
pub const DOCK_ICON: Color = Color::rgba(200, 200, 200, 100);
/// Modal dialog backdrop.
pub const SCRIM: Color = Color::rgba(0, 0, 0, 180);
/// Empty-state caption; painted opaque on RGB canvases.
pub const GHOST_TEXT: Color = Color::rgba(120, 120, 120, 128);
