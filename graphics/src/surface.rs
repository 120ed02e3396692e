//! The raster surface seam.
//!
//! [`RasterSurface`] is the contract between the drawing forwarders in
//! [`crate::draw`] and whatever actually stores pixels. [`crate::Canvas`]
//! is the real implementation; tests substitute a recording double to
//! verify that forwarders pass their arguments through unchanged.

use easel_core::Color;

use crate::canvas::Canvas;
use crate::font::Font;
use crate::shader::Shader;

/// Native methods of a drawing surface.
///
/// All coordinates are logical; implementations scale by their pixel
/// density. None of these methods validate their arguments.
pub trait RasterSurface {
    /// Logical `(width, height)` of the surface.
    fn size(&self) -> (u32, u32);

    /// Fill every pixel with `color`.
    fn fill_all(&mut self, color: Color);

    /// Reset every pixel to transparent black.
    fn clear_all(&mut self);

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);

    /// Outline an axis-aligned rectangle with the given stroke weight.
    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color, weight: f32);

    /// Draw a line segment, clipped to the surface.
    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Color, weight: f32);

    /// Fill an axis-aligned ellipse centered at `(cx, cy)` with radii
    /// `(rx, ry)`.
    fn fill_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, color: Color);

    /// Outline an axis-aligned ellipse.
    fn stroke_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, color: Color, weight: f32);

    /// Fill a triangle.
    #[allow(clippy::too_many_arguments)]
    fn fill_triangle(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        x3: f32,
        y3: f32,
        color: Color,
    );

    /// Outline a triangle.
    #[allow(clippy::too_many_arguments)]
    fn stroke_triangle(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        x3: f32,
        y3: f32,
        color: Color,
        weight: f32,
    );

    /// Write one logical pixel, skipping coordinates outside the surface.
    fn plot(&mut self, x: i32, y: i32, color: Color);

    /// Read one logical pixel, or `None` outside the surface.
    fn pixel(&self, x: i32, y: i32) -> Option<Color>;

    /// Draw a string with its baseline at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, font: &Font, color: Color);

    /// Evaluate `shader` for every pixel of a rectangular region.
    fn shade_region(&mut self, x: f32, y: f32, w: f32, h: f32, shader: &dyn Shader);

    /// Composite another canvas onto this surface at `(x, y)`.
    fn blit(&mut self, src: &Canvas, x: f32, y: f32);
}
