//! Glyph geometry: hearts and medical crosses built from canvas primitives.

use crate::types::{Colour, Glyph};

use super::Canvas;

/// Placement and proportions of a glyph on a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphGeometry {
    /// Centre x.
    pub cx: i64,
    /// Centre y.
    pub cy: i64,
    /// Heart size; the discs have radius `heart / 3`.
    pub heart: i64,
    /// Width of each cross bar.
    pub bar_width: i64,
    /// Distance from the centre to the end of each cross bar.
    pub bar_half_length: i64,
}

impl GlyphGeometry {
    /// Geometry for a launcher icon of side `size`.
    pub fn launcher(size: u32) -> Self {
        let size = size as i64;
        Self {
            cx: size / 2,
            cy: size / 2,
            heart: size / 3,
            bar_width: size / 6,
            bar_half_length: size / 3,
        }
    }

    /// Geometry for a free-standing symbol of side `symbol`, centred on a
    /// canvas of side `size`.
    pub fn symbol(size: u32, symbol: u32) -> Self {
        let (size, symbol) = (size as i64, symbol as i64);
        Self {
            cx: size / 2,
            cy: size / 2,
            heart: symbol,
            bar_width: symbol / 3,
            bar_half_length: symbol / 2,
        }
    }
}

/// Draw `glyph` onto `canvas` in a single colour.
pub fn draw_glyph(canvas: &mut Canvas, glyph: Glyph, geometry: &GlyphGeometry, colour: Colour) {
    match glyph {
        Glyph::Heart => draw_heart(canvas, geometry, colour),
        Glyph::Cross => draw_cross(canvas, geometry, colour),
    }
}

fn draw_heart(canvas: &mut Canvas, g: &GlyphGeometry, colour: Colour) {
    let h = g.heart;
    let radius = h / 3;
    let lobe_y = g.cy - h / 6;

    for lobe_x in [g.cx - h / 3, g.cx + h / 3] {
        canvas.fill_ellipse(
            lobe_x - radius,
            lobe_y - radius,
            lobe_x + radius,
            lobe_y + radius,
            colour,
        );
    }

    canvas.fill_triangle(
        (g.cx - h / 2 - radius / 2, lobe_y),
        (g.cx + h / 2 + radius / 2, lobe_y),
        (g.cx, g.cy + h),
        colour,
    );
}

fn draw_cross(canvas: &mut Canvas, g: &GlyphGeometry, colour: Colour) {
    let half_width = g.bar_width / 2;
    let half_length = g.bar_half_length;

    // Vertical bar
    canvas.fill_rect(
        g.cx - half_width,
        g.cy - half_length,
        g.cx + half_width,
        g.cy + half_length,
        colour,
    );
    // Horizontal bar
    canvas.fill_rect(
        g.cx - half_length,
        g.cy - half_width,
        g.cx + half_length,
        g.cy + half_width,
        colour,
    );
}
