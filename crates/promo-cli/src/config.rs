//! Output and font locations, overridable from the environment.

use promo_render::FontBook;
use promo_render::font::{DEFAULT_BOLD_FONT, DEFAULT_REGULAR_FONT};
use std::ffi::OsString;
use std::path::PathBuf;

pub const OUT_DIR_VAR: &str = "PROMO_OUT_DIR";
pub const REGULAR_FONT_VAR: &str = "PROMO_FONT_REGULAR";
pub const BOLD_FONT_VAR: &str = "PROMO_FONT_BOLD";

/// Subdirectory of `output_dir` that receives the phone screenshots.
pub const SCREENSHOTS_DIR: &str = "screenshots";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetConfig {
    pub output_dir: PathBuf,
    pub regular_font: PathBuf,
    pub bold_font: PathBuf,
}

/// Directory holding the running executable, or `.` if it cannot be found.
pub fn executable_dir() -> PathBuf {
    match std::env::current_exe() {
        Ok(exe) => exe
            .parent()
            .map_or_else(|| PathBuf::from("."), PathBuf::from),
        Err(e) => {
            log::warn!("executable path unavailable ({e}); writing to the working directory");
            PathBuf::from(".")
        }
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            output_dir: executable_dir(),
            regular_font: PathBuf::from(DEFAULT_REGULAR_FONT),
            bold_font: PathBuf::from(DEFAULT_BOLD_FONT),
        }
    }
}

impl AssetConfig {
    /// Defaults, with any non-empty `PROMO_*` variables applied on top.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Like `from_env`, reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<OsString>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty()).map(PathBuf::from);
        let defaults = Self::default();
        let config = Self {
            output_dir: var(OUT_DIR_VAR).unwrap_or(defaults.output_dir),
            regular_font: var(REGULAR_FONT_VAR).unwrap_or(defaults.regular_font),
            bold_font: var(BOLD_FONT_VAR).unwrap_or(defaults.bold_font),
        };
        log::debug!("{config:?}");
        config
    }

    pub fn screenshots_dir(&self) -> PathBuf {
        self.output_dir.join(SCREENSHOTS_DIR)
    }

    /// Load the configured faces. Missing files fall back to builtin glyphs.
    pub fn font_book(&self) -> FontBook {
        FontBook::load(&self.regular_font, &self.bold_font)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<OsString> {
        let map: HashMap<String, OsString> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), OsString::from(v)))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn no_variables_gives_defaults() {
        assert_eq!(AssetConfig::from_lookup(lookup(&[])), AssetConfig::default());
    }

    #[test]
    fn variables_override_each_field() {
        let config = AssetConfig::from_lookup(lookup(&[
            (OUT_DIR_VAR, "/tmp/assets"),
            (BOLD_FONT_VAR, "/fonts/Bold.ttf"),
        ]));
        assert_eq!(config.output_dir, PathBuf::from("/tmp/assets"));
        assert_eq!(config.bold_font, PathBuf::from("/fonts/Bold.ttf"));
        assert_eq!(config.regular_font, PathBuf::from(DEFAULT_REGULAR_FONT));
        assert_eq!(
            config.screenshots_dir(),
            PathBuf::from("/tmp/assets/screenshots")
        );
    }

    #[test]
    fn empty_variable_is_ignored() {
        let config = AssetConfig::from_lookup(lookup(&[(OUT_DIR_VAR, "")]));
        assert_eq!(config.output_dir, AssetConfig::default().output_dir);
    }

    #[test]
    fn default_output_sits_beside_executable() {
        let exe = std::env::current_exe().unwrap();
        assert_eq!(AssetConfig::default().output_dir, exe.parent().unwrap());
    }
}
