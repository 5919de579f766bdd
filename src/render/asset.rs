//! Asset renderers: launcher icon, adaptive foreground and splash image.

use image::RgbaImage;

use crate::error::Result;
use crate::types::{AssetKind, Colour, ColourScheme, Glyph};

use super::glyph::{draw_glyph, GlyphGeometry};
use super::Canvas;

/// Render a square launcher icon: glyph in `accent` on a rounded `primary`
/// plate, transparent outside the plate.
pub fn render_launcher_icon(size: u32, scheme: &ColourScheme, glyph: Glyph) -> Result<RgbaImage> {
    let mut canvas = Canvas::new(size)?;

    let s = size as i64;
    let padding = s / 10;
    canvas.fill_rounded_rect(padding, padding, s - padding, s - padding, s / 4, scheme.primary);

    draw_glyph(&mut canvas, glyph, &GlyphGeometry::launcher(size), scheme.accent);

    Ok(canvas.into_image())
}

/// Render the adaptive-icon foreground: `primary` glyph on transparency,
/// kept inside the central safe zone.
pub fn render_adaptive_foreground(
    size: u32,
    scheme: &ColourScheme,
    glyph: Glyph,
) -> Result<RgbaImage> {
    let mut canvas = Canvas::new(size)?;

    // A third of the canvas, floored.
    let symbol = (size as u64 * 33 / 100) as u32;
    draw_glyph(&mut canvas, glyph, &GlyphGeometry::symbol(size, symbol), scheme.primary);

    Ok(canvas.into_image())
}

/// Render a square splash image: `primary` glyph on an opaque `background`.
pub fn render_splash(size: u32, scheme: &ColourScheme, glyph: Glyph) -> Result<RgbaImage> {
    let background = Colour { a: 255, ..scheme.background };
    let mut canvas = Canvas::filled(size, background)?;

    draw_glyph(&mut canvas, glyph, &GlyphGeometry::symbol(size, size / 4), scheme.primary);

    Ok(canvas.into_image())
}

/// Render any asset kind at `size`.
pub fn render_asset(
    kind: AssetKind,
    size: u32,
    scheme: &ColourScheme,
    glyph: Glyph,
) -> Result<RgbaImage> {
    match kind {
        AssetKind::Launcher => render_launcher_icon(size, scheme, glyph),
        AssetKind::AdaptiveForeground => render_adaptive_foreground(size, scheme, glyph),
        AssetKind::Splash => render_splash(size, scheme, glyph),
    }
}
