//! Rendering module.
//!
//! Draws flavor glyphs onto square canvases and writes them as PNG.

mod asset;
mod canvas;
mod glyph;
mod png;

pub use asset::{render_adaptive_foreground, render_asset, render_launcher_icon, render_splash};
pub use canvas::{Canvas, Point};
pub use glyph::{draw_glyph, GlyphGeometry};
pub use png::{png_dimensions, write_png};
