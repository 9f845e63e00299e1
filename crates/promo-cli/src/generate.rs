//! Render-and-save for catalog artifacts.

use promo_core::artifacts::Artifact;
use promo_render::{Error, FontBook, ImageFormat, Result, render_script};
use std::path::{Path, PathBuf};

/// A file written by `generate_artifact`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub path: PathBuf,
    pub bytes: u64,
}

impl Generated {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Create `dir` and its parents if absent.
///
/// # Errors
/// Returns `Io` if the directory cannot be created.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|source| Error::Io {
        path: dir.to_path_buf(),
        source,
    })
}

/// Render `artifact` and write it as PNG into `dir`.
///
/// # Errors
/// Propagates render and save failures; `dir` must already exist.
pub fn generate_artifact(artifact: &Artifact, dir: &Path, fonts: &FontBook) -> Result<Generated> {
    let path = dir.join(artifact.file_name);
    let canvas = render_script(&artifact.script, fonts)?;
    canvas.save(&path, ImageFormat::Png)?;
    let bytes = std::fs::metadata(&path)
        .map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?
        .len();
    log::debug!("{} -> {} ({bytes} bytes)", artifact.script.name, path.display());
    Ok(Generated { path, bytes })
}

/// File size in kilobytes with one decimal, e.g. `12.3KB`.
pub fn format_kb(bytes: u64) -> String {
    format!("{:.1}KB", bytes as f64 / 1024.0)
}
