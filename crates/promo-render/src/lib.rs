//! Raster renderer for artifact scripts.
//!
//! `Canvas` wraps a `tiny-skia` pixmap and exposes the drawing primitives
//! the scripts need. Text goes through `FontBook`, which falls back to
//! builtin bitmap glyphs when a font file is unavailable.

pub mod builtin;
pub mod canvas;
pub mod error;
pub mod font;
pub mod paint;
pub mod text;

pub use canvas::{Canvas, ImageFormat, PixelMode};
pub use error::{Error, Result};
pub use font::{Font, FontBook};
pub use paint::{render_json, render_script};
pub use text::{TextExtent, measure_text};
