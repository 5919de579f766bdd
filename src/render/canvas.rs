//! Square raster canvas with filled shape primitives.
//!
//! Bounds are inclusive pixel coordinates and may lie partly off-canvas;
//! drawing is clipped. A pixel is covered when its centre lies inside the
//! shape. Fills overwrite the destination pixel, alpha included.

use image::{ImageBuffer, RgbaImage};

use crate::error::{AssetError, Result};
use crate::types::Colour;

/// A point in pixel coordinates.
pub type Point = (i64, i64);

/// A square RGBA drawing surface.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create a fully transparent canvas.
    pub fn new(size: u32) -> Result<Self> {
        Self::filled(size, Colour::TRANSPARENT)
    }

    /// Create a canvas filled with `colour`.
    pub fn filled(size: u32, colour: Colour) -> Result<Self> {
        if size == 0 {
            return Err(AssetError::Render {
                message: "Canvas size must be at least 1 pixel".to_string(),
                help: None,
            });
        }
        Ok(Self {
            image: ImageBuffer::from_pixel(size, size, colour.to_pixel()),
        })
    }

    /// Side length in pixels.
    pub fn size(&self) -> u32 {
        self.image.width()
    }

    /// Colour at a pixel, or `None` outside the canvas.
    pub fn get(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.image.width() || y >= self.image.height() {
            return None;
        }
        let [r, g, b, a] = self.image.get_pixel(x, y).0;
        Some(Colour::new(r, g, b, a))
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Fill the rectangle `[x0, y0]..=[x1, y1]`.
    pub fn fill_rect(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, colour: Colour) {
        self.fill_where(x0, y0, x1, y1, colour, |_, _| true);
    }

    /// Fill the ellipse inscribed in the box `[x0, y0]..=[x1, y1]`.
    pub fn fill_ellipse(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, colour: Colour) {
        let cx = (x0 + x1 + 1) as f64 / 2.0;
        let cy = (y0 + y1 + 1) as f64 / 2.0;
        let rx = (x1 - x0 + 1) as f64 / 2.0;
        let ry = (y1 - y0 + 1) as f64 / 2.0;

        self.fill_where(x0, y0, x1, y1, colour, |px, py| {
            let dx = (px - cx) / rx;
            let dy = (py - cy) / ry;
            dx * dx + dy * dy <= 1.0
        });
    }

    /// Fill the triangle whose vertices are the centres of three pixels.
    pub fn fill_triangle(&mut self, a: Point, b: Point, c: Point, colour: Colour) {
        let x0 = a.0.min(b.0).min(c.0);
        let x1 = a.0.max(b.0).max(c.0);
        let y0 = a.1.min(b.1).min(c.1);
        let y1 = a.1.max(b.1).max(c.1);

        let centre = |p: Point| (p.0 as f64 + 0.5, p.1 as f64 + 0.5);
        let (a, b, c) = (centre(a), centre(b), centre(c));

        // Signed area of (p, q, r); zero on the edge.
        let edge = |p: (f64, f64), q: (f64, f64), r: (f64, f64)| {
            (q.0 - p.0) * (r.1 - p.1) - (q.1 - p.1) * (r.0 - p.0)
        };

        self.fill_where(x0, y0, x1, y1, colour, |px, py| {
            let p = (px, py);
            let e0 = edge(a, b, p);
            let e1 = edge(b, c, p);
            let e2 = edge(c, a, p);
            (e0 >= 0.0 && e1 >= 0.0 && e2 >= 0.0) || (e0 <= 0.0 && e1 <= 0.0 && e2 <= 0.0)
        });
    }

    /// Fill the rectangle `[x0, y0]..=[x1, y1]` with quarter-circle corners.
    ///
    /// The radius is clamped to half the shorter side.
    pub fn fill_rounded_rect(
        &mut self,
        x0: i64,
        y0: i64,
        x1: i64,
        y1: i64,
        radius: i64,
        colour: Colour,
    ) {
        let width = (x1 - x0 + 1) as f64;
        let height = (y1 - y0 + 1) as f64;
        let r = (radius.max(0) as f64).min(width / 2.0).min(height / 2.0);

        let inner_x0 = x0 as f64 + r;
        let inner_x1 = (x1 + 1) as f64 - r;
        let inner_y0 = y0 as f64 + r;
        let inner_y1 = (y1 + 1) as f64 - r;

        self.fill_where(x0, y0, x1, y1, colour, |px, py| {
            let dx = px - px.clamp(inner_x0, inner_x1);
            let dy = py - py.clamp(inner_y0, inner_y1);
            dx * dx + dy * dy <= r * r
        });
    }

    /// Paint every pixel of the clipped box whose centre passes `covers`.
    fn fill_where<F>(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, colour: Colour, covers: F)
    where
        F: Fn(f64, f64) -> bool,
    {
        let max = self.size() as i64 - 1;
        let (x0, x1) = (x0.max(0), x1.min(max));
        let (y0, y1) = (y0.max(0), y1.min(max));
        if x0 > x1 || y0 > y1 {
            return;
        }

        let pixel = colour.to_pixel();
        for y in y0..=y1 {
            for x in x0..=x1 {
                if covers(x as f64 + 0.5, y as f64 + 0.5) {
                    self.image.put_pixel(x as u32, y as u32, pixel);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Colour = Colour::rgb(255, 0, 0);

    fn count(canvas: &Canvas, colour: Colour) -> usize {
        canvas
            .clone()
            .into_image()
            .pixels()
            .filter(|p| p.0 == colour.to_rgba())
            .count()
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(Canvas::new(0).is_err());
    }

    #[test]
    fn test_new_is_transparent() {
        let canvas = Canvas::new(4).unwrap();
        assert_eq!(count(&canvas, Colour::TRANSPARENT), 16);
    }

    #[test]
    fn test_fill_rect_inclusive() {
        let mut canvas = Canvas::new(10).unwrap();
        canvas.fill_rect(2, 3, 4, 5, RED);

        assert_eq!(count(&canvas, RED), 9);
        assert_eq!(canvas.get(2, 3), Some(RED));
        assert_eq!(canvas.get(4, 5), Some(RED));
        assert_eq!(canvas.get(5, 5), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_fill_rect_clipped() {
        let mut canvas = Canvas::new(4).unwrap();
        canvas.fill_rect(-5, -5, 1, 1, RED);
        assert_eq!(count(&canvas, RED), 4);

        canvas.fill_rect(10, 10, 20, 20, Colour::WHITE);
        assert_eq!(count(&canvas, Colour::WHITE), 0);
    }

    #[test]
    fn test_fill_ellipse_is_round() {
        let mut canvas = Canvas::new(20).unwrap();
        canvas.fill_ellipse(0, 0, 19, 19, RED);

        assert_eq!(canvas.get(10, 10), Some(RED));
        assert_eq!(canvas.get(0, 10), Some(RED));
        assert_eq!(canvas.get(0, 0), Some(Colour::TRANSPARENT));
        assert_eq!(canvas.get(19, 19), Some(Colour::TRANSPARENT));

        // Area close to pi * r^2
        let area = count(&canvas, RED) as f64;
        assert!((area - std::f64::consts::PI * 100.0).abs() < 20.0);
    }

    #[test]
    fn test_fill_triangle() {
        let mut canvas = Canvas::new(11).unwrap();
        canvas.fill_triangle((0, 0), (10, 0), (5, 10), RED);

        // Top edge fully covered, apex covered, bottom corners not
        for x in 0..=10 {
            assert_eq!(canvas.get(x, 0), Some(RED));
        }
        assert_eq!(canvas.get(5, 10), Some(RED));
        assert_eq!(canvas.get(0, 10), Some(Colour::TRANSPARENT));
        assert_eq!(canvas.get(10, 10), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_fill_triangle_winding_independent() {
        let mut a = Canvas::new(11).unwrap();
        let mut b = Canvas::new(11).unwrap();
        a.fill_triangle((0, 0), (10, 0), (5, 10), RED);
        b.fill_triangle((5, 10), (10, 0), (0, 0), RED);
        assert_eq!(a.into_image(), b.into_image());
    }

    #[test]
    fn test_fill_rounded_rect_corners() {
        let mut canvas = Canvas::new(20).unwrap();
        canvas.fill_rounded_rect(2, 2, 17, 17, 5, RED);

        assert_eq!(canvas.get(2, 2), Some(Colour::TRANSPARENT));
        assert_eq!(canvas.get(17, 17), Some(Colour::TRANSPARENT));
        assert_eq!(canvas.get(10, 2), Some(RED));
        assert_eq!(canvas.get(2, 10), Some(RED));
        assert_eq!(canvas.get(10, 10), Some(RED));
        assert_eq!(canvas.get(1, 10), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_fill_rounded_rect_zero_radius_is_rect() {
        let mut rounded = Canvas::new(8).unwrap();
        let mut plain = Canvas::new(8).unwrap();
        rounded.fill_rounded_rect(1, 1, 6, 6, 0, RED);
        plain.fill_rect(1, 1, 6, 6, RED);
        assert_eq!(rounded.into_image(), plain.into_image());
    }

    #[test]
    fn test_fill_rounded_rect_radius_clamped() {
        // Radius larger than the box degrades to a disc, not a panic
        let mut canvas = Canvas::new(10).unwrap();
        canvas.fill_rounded_rect(0, 0, 9, 9, 100, RED);
        assert_eq!(canvas.get(5, 5), Some(RED));
        assert_eq!(canvas.get(0, 0), Some(Colour::TRANSPARENT));
    }
}
