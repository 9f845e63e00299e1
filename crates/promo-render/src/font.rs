//! Font loading and resolution.
//!
//! A `FontBook` holds the raw bytes of the regular and bold faces. Resolving
//! a `FontSpec` never fails: a weight whose file is missing or unparseable
//! resolves to the builtin bitmap glyphs.

use promo_core::model::{FontSpec, FontWeight};
use std::path::{Path, PathBuf};
use ttf_parser::Face;

pub const DEFAULT_REGULAR_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";
pub const DEFAULT_BOLD_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";

/// A font ready for layout.
#[derive(Clone)]
pub enum Font<'a> {
    /// Parsed TrueType/OpenType face at a pixel size.
    Outline { face: Face<'a>, size: f32 },
    /// The builtin 5×7 bitmap at a nominal size.
    Builtin { size: f32 },
}

impl Font<'_> {
    pub fn size(&self) -> f32 {
        match self {
            Font::Outline { size, .. } | Font::Builtin { size } => *size,
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Font::Builtin { .. })
    }
}

impl std::fmt::Debug for Font<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Font::Outline { face, size } => f
                .debug_struct("Outline")
                .field("units_per_em", &face.units_per_em())
                .field("size", size)
                .finish(),
            Font::Builtin { size } => f.debug_struct("Builtin").field("size", size).finish(),
        }
    }
}

#[derive(Debug, Clone)]
struct FontFile {
    path: Option<PathBuf>,
    data: Option<Vec<u8>>,
}

impl FontFile {
    fn empty() -> Self {
        Self {
            path: None,
            data: None,
        }
    }

    /// Read and validate a face. Failures are logged and leave `data` empty.
    fn load(path: &Path) -> Self {
        let data = match std::fs::read(path) {
            Ok(bytes) => match Face::parse(&bytes, 0) {
                Ok(_) => Some(bytes),
                Err(e) => {
                    log::warn!("font {} is not usable ({e}); using builtin glyphs", path.display());
                    None
                }
            },
            Err(e) => {
                log::warn!("font {} not loaded ({e}); using builtin glyphs", path.display());
                None
            }
        };
        Self {
            path: Some(path.to_path_buf()),
            data,
        }
    }

    fn face(&self) -> Option<Face<'_>> {
        Face::parse(self.data.as_deref()?, 0).ok()
    }
}

/// Regular and bold faces, each optional.
#[derive(Debug, Clone)]
pub struct FontBook {
    regular: FontFile,
    bold: FontFile,
}

impl FontBook {
    /// Load both faces from disk. Missing files fall back per weight.
    pub fn load(regular: impl AsRef<Path>, bold: impl AsRef<Path>) -> Self {
        let book = Self {
            regular: FontFile::load(regular.as_ref()),
            bold: FontFile::load(bold.as_ref()),
        };
        log::debug!(
            "font book: regular={} bold={}",
            book.has_face(FontWeight::Regular),
            book.has_face(FontWeight::Bold)
        );
        book
    }

    /// The standard DejaVu Sans pair.
    pub fn system() -> Self {
        Self::load(DEFAULT_REGULAR_FONT, DEFAULT_BOLD_FONT)
    }

    /// No font files; every weight uses the builtin glyphs.
    pub fn builtin() -> Self {
        Self {
            regular: FontFile::empty(),
            bold: FontFile::empty(),
        }
    }

    fn file(&self, weight: FontWeight) -> &FontFile {
        match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
        }
    }

    /// Whether a real face is available for `weight`.
    pub fn has_face(&self, weight: FontWeight) -> bool {
        self.file(weight).data.is_some()
    }

    /// Path configured for `weight`, loaded or not.
    pub fn path(&self, weight: FontWeight) -> Option<&Path> {
        self.file(weight).path.as_deref()
    }

    /// Resolve `spec` to a concrete font: the face for its weight if loaded,
    /// otherwise the builtin glyphs at the same size.
    pub fn resolve(&self, spec: FontSpec) -> Font<'_> {
        match self.file(spec.weight).face() {
            Some(face) => Font::Outline {
                face,
                size: spec.size,
            },
            None => Font::Builtin { size: spec.size },
        }
    }
}

impl Default for FontBook {
    fn default() -> Self {
        Self::system()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_files_resolve_to_builtin() {
        let book = FontBook::load("/nonexistent/regular.ttf", "/nonexistent/bold.ttf");
        assert!(!book.has_face(FontWeight::Regular));
        assert!(!book.has_face(FontWeight::Bold));
        let font = book.resolve(FontSpec::bold(72.0));
        assert!(font.is_builtin());
        assert_eq!(font.size(), 72.0);
        assert_eq!(
            book.path(FontWeight::Bold),
            Some(Path::new("/nonexistent/bold.ttf"))
        );
    }

    #[test]
    fn garbage_file_resolves_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ttf");
        std::fs::write(&path, b"not a font").unwrap();
        let book = FontBook::load(&path, &path);
        assert!(book.resolve(FontSpec::regular(14.0)).is_builtin());
    }

    #[test]
    fn builtin_book_has_no_paths() {
        let book = FontBook::builtin();
        assert_eq!(book.path(FontWeight::Regular), None);
        assert!(book.resolve(FontSpec::default()).is_builtin());
    }
}
