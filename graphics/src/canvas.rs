//! CPU raster canvas.
//!
//! A [`Canvas`] stores RGBA8 pixels for a logical `width x height` area at
//! an integer pixel density `d`: the physical buffer is `width*d` by
//! `height*d`, row-major, 4 bytes per physical pixel. Drawing methods take
//! logical coordinates and scale them so output stays crisp on
//! high-density displays.

use easel_core::Color;

use crate::font::Font;
use crate::shader::{Frag, Shader};
use crate::surface::RasterSurface;

/// Dimensionality of a canvas.
///
/// Canvas creation is fixed to [`CanvasMode::TwoD`]; the 3D variant is
/// reserved and currently never constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CanvasMode {
    /// Software-rastered 2D surface.
    #[default]
    TwoD,
    /// Reserved for a hardware-backed 3D surface.
    ThreeD,
}

/// Alpha blend a single channel.
///
/// Fast approximation of `(src*a + dst*(255-a)) / 255`.
#[inline]
fn blend_channel(src: u8, dst: u8, alpha: u16) -> u8 {
    let v = src as u16 * alpha + dst as u16 * (255 - alpha);
    ((v + 1 + (v >> 8)) >> 8) as u8
}

/// An RGBA8 pixel surface with integer pixel density.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    density: u32,
    mode: CanvasMode,
    data: Vec<u8>,
}

impl Canvas {
    /// Create a canvas at density 1.
    pub fn new(width: u32, height: u32) -> Canvas {
        Canvas::with_density(width, height, 1)
    }

    /// Create a canvas with the given pixel density.
    ///
    /// Zero dimensions and zero density are clamped to 1.
    pub fn with_density(width: u32, height: u32, density: u32) -> Canvas {
        let width = width.max(1);
        let height = height.max(1);
        let density = density.max(1);
        let len = (width * density) as usize * (height * density) as usize * 4;

        log::debug!("canvas created: {width}x{height} @{density}x");

        Canvas {
            width,
            height,
            density,
            mode: CanvasMode::TwoD,
            data: vec![0; len],
        }
    }

    /// Logical width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Logical height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel density multiplier.
    pub fn density(&self) -> u32 {
        self.density
    }

    /// Dimensionality of this canvas.
    pub fn mode(&self) -> CanvasMode {
        self.mode
    }

    /// Physical buffer width (`width * density`).
    pub fn physical_width(&self) -> u32 {
        self.width * self.density
    }

    /// Physical buffer height (`height * density`).
    pub fn physical_height(&self) -> u32 {
        self.height * self.density
    }

    /// Raw physical RGBA buffer.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw physical RGBA buffer.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    #[inline]
    fn index(&self, px: i32, py: i32) -> usize {
        4 * (py as usize * self.physical_width() as usize + px as usize)
    }

    #[inline]
    fn in_bounds(&self, px: i32, py: i32) -> bool {
        px >= 0
            && py >= 0
            && (px as u32) < self.physical_width()
            && (py as u32) < self.physical_height()
    }

    /// Write one physical pixel with source-over blending. Out-of-range
    /// coordinates are skipped.
    #[inline]
    fn put_px(&mut self, px: i32, py: i32, color: Color) {
        if !self.in_bounds(px, py) {
            return;
        }
        let i = self.index(px, py);
        if color.a == 255 {
            self.data[i..i + 4].copy_from_slice(&color.to_bytes());
        } else if color.a > 0 {
            let a = color.a as u16;
            self.data[i] = blend_channel(color.r, self.data[i], a);
            self.data[i + 1] = blend_channel(color.g, self.data[i + 1], a);
            self.data[i + 2] = blend_channel(color.b, self.data[i + 2], a);
            self.data[i + 3] = self.data[i + 3].max(color.a);
        }
    }

    /// Read one physical pixel.
    #[inline]
    fn px_at(&self, px: i32, py: i32) -> Option<Color> {
        if !self.in_bounds(px, py) {
            return None;
        }
        let i = self.index(px, py);
        Some(Color::rgba(
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ))
    }

    /// Fill a physical-coordinate rectangle, clamped to the buffer.
    fn fill_px_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let pw = self.physical_width() as i32;
        let ph = self.physical_height() as i32;
        let x0 = x0.clamp(0, pw);
        let x1 = x1.clamp(0, pw);
        let y0 = y0.clamp(0, ph);
        let y1 = y1.clamp(0, ph);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        if color.a == 255 {
            let bytes = color.to_bytes();
            for py in y0..y1 {
                let start = self.index(x0, py);
                let end = self.index(x1, py);
                for px in self.data[start..end].chunks_exact_mut(4) {
                    px.copy_from_slice(&bytes);
                }
            }
        } else {
            for py in y0..y1 {
                for px in x0..x1 {
                    self.put_px(px, py, color);
                }
            }
        }
    }

    /// Stamp a square of `side` physical pixels centered on `(px, py)`.
    fn stamp(&mut self, px: i32, py: i32, side: i32, color: Color) {
        let half = side / 2;
        self.fill_px_rect(px - half, py - half, px - half + side, py - half + side, color);
    }

    /// Blend a coverage bitmap (one byte per physical pixel) at physical
    /// offset `(ox, oy)`.
    pub(crate) fn blend_coverage(
        &mut self,
        ox: i32,
        oy: i32,
        w: usize,
        h: usize,
        coverage: &[u8],
        color: Color,
    ) {
        for row in 0..h {
            for col in 0..w {
                let cov = coverage[row * w + col] as u16;
                if cov == 0 {
                    continue;
                }
                let a = (cov * color.a as u16) / 255;
                self.put_px(
                    ox + col as i32,
                    oy + row as i32,
                    color.with_alpha(a as u8),
                );
            }
        }
    }

    #[inline]
    fn to_px(&self, v: f32) -> i32 {
        (v * self.density as f32).round() as i32
    }
}

/// Signed area of the parallelogram spanned by `ab` and `ap`.
#[inline]
fn edge(a: (f32, f32), b: (f32, f32), p: (f32, f32)) -> f32 {
    (b.0 - a.0) * (p.1 - a.1) - (b.1 - a.1) * (p.0 - a.0)
}

impl RasterSurface for Canvas {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn fill_all(&mut self, color: Color) {
        let bytes = color.to_bytes();
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&bytes);
        }
    }

    fn clear_all(&mut self) {
        self.data.fill(0);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        let x0 = self.to_px(x);
        let y0 = self.to_px(y);
        let x1 = self.to_px(x + w);
        let y1 = self.to_px(y + h);
        self.fill_px_rect(x0, y0, x1, y1, color);
    }

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color, weight: f32) {
        let half = weight / 2.0;
        // Four bands centered on the edges.
        self.fill_rect(x - half, y - half, w + weight, weight, color);
        self.fill_rect(x - half, y + h - half, w + weight, weight, color);
        self.fill_rect(x - half, y + half, weight, h - weight, color);
        self.fill_rect(x + w - half, y + half, weight, h - weight, color);
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Color, weight: f32) {
        let pw = self.physical_width() as i32;
        let ph = self.physical_height() as i32;
        let side = ((weight * self.density as f32).round() as i32).max(1);

        let a = (self.to_px(x1), self.to_px(y1));
        let b = (self.to_px(x2), self.to_px(y2));

        // Over-scan by the stamp size so thick lines entering from outside
        // still touch the edge pixels.
        let clip = match clipline::Clip::<i32>::new((-side, -side), (pw - 1 + side, ph - 1 + side))
        {
            Some(clip) => clip,
            None => return,
        };

        if let Some(seg) = clip.any_octant(a, b) {
            if side == 1 {
                seg.for_each(|(px, py)| self.put_px(px, py, color));
            } else {
                seg.for_each(|(px, py)| self.stamp(px, py, side, color));
            }
        }
    }

    fn fill_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, color: Color) {
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let d = self.density as f32;
        let (cx, cy, rx, ry) = (cx * d, cy * d, rx * d, ry * d);
        let ph = self.physical_height() as i32;

        let y0 = ((cy - ry).floor() as i32).clamp(0, ph);
        let y1 = ((cy + ry).ceil() as i32).clamp(0, ph);
        for py in y0..y1 {
            let dy = (py as f32 + 0.5 - cy) / ry;
            let t = 1.0 - dy * dy;
            if t <= 0.0 {
                continue;
            }
            let half = rx * t.sqrt();
            let x0 = (cx - half).round() as i32;
            let x1 = (cx + half).round() as i32;
            self.fill_px_rect(x0, py, x1, py + 1, color);
        }
    }

    fn stroke_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, color: Color, weight: f32) {
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        // Segment count proportional to the longer physical radius.
        let steps = ((rx.max(ry) * self.density as f32) as usize).clamp(16, 256);
        let mut prev = (cx + rx, cy);
        for i in 1..=steps {
            let angle = std::f32::consts::TAU * i as f32 / steps as f32;
            let p = (cx + rx * angle.cos(), cy + ry * angle.sin());
            self.draw_line(prev.0, prev.1, p.0, p.1, color, weight);
            prev = p;
        }
    }

    fn fill_triangle(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        x3: f32,
        y3: f32,
        color: Color,
    ) {
        let d = self.density as f32;
        let p1 = (x1 * d, y1 * d);
        let p2 = (x2 * d, y2 * d);
        let p3 = (x3 * d, y3 * d);

        let area = edge(p1, p2, p3);
        if area == 0.0 {
            return;
        }
        let sign = area.signum();

        let pw = self.physical_width() as i32;
        let ph = self.physical_height() as i32;
        let min_x = (p1.0.min(p2.0).min(p3.0).floor() as i32).clamp(0, pw);
        let max_x = (p1.0.max(p2.0).max(p3.0).ceil() as i32).clamp(0, pw);
        let min_y = (p1.1.min(p2.1).min(p3.1).floor() as i32).clamp(0, ph);
        let max_y = (p1.1.max(p2.1).max(p3.1).ceil() as i32).clamp(0, ph);

        for py in min_y..max_y {
            for px in min_x..max_x {
                let p = (px as f32 + 0.5, py as f32 + 0.5);
                let w1 = edge(p2, p3, p) * sign;
                let w2 = edge(p3, p1, p) * sign;
                let w3 = edge(p1, p2, p) * sign;
                if w1 >= 0.0 && w2 >= 0.0 && w3 >= 0.0 {
                    self.put_px(px, py, color);
                }
            }
        }
    }

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
    ) {
        self.draw_line(x1, y1, x2, y2, color, weight);
        self.draw_line(x2, y2, x3, y3, color, weight);
        self.draw_line(x3, y3, x1, y1, color, weight);
    }

    fn plot(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        let d = self.density as i32;
        for j in 0..d {
            for i in 0..d {
                self.put_px(x * d + i, y * d + j, color);
            }
        }
    }

    fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        let d = self.density as i32;
        self.px_at(x * d, y * d)
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, font: &Font, color: Color) {
        let d = self.density as f32;
        let px_size = size * d;
        let baseline = (y * d).round() as i32;
        let mut pen = x * d;

        for c in text.chars() {
            if c == '\n' {
                continue;
            }
            let glyph = font.rasterize(c, px_size);
            let ox = pen.round() as i32 + glyph.xmin;
            let oy = baseline - (glyph.ymin + glyph.height as i32);
            self.blend_coverage(ox, oy, glyph.width, glyph.height, &glyph.coverage, color);
            pen += glyph.advance;
        }
    }

    fn shade_region(&mut self, x: f32, y: f32, w: f32, h: f32, shader: &dyn Shader) {
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        let d = self.density as f32;
        let pw = self.physical_width() as i32;
        let ph = self.physical_height() as i32;
        let x0 = self.to_px(x).clamp(0, pw);
        let y0 = self.to_px(y).clamp(0, ph);
        let x1 = self.to_px(x + w).clamp(0, pw);
        let y1 = self.to_px(y + h).clamp(0, ph);

        for py in y0..y1 {
            for px in x0..x1 {
                let lx = (px as f32 + 0.5) / d;
                let ly = (py as f32 + 0.5) / d;
                let color = shader.fragment(Frag {
                    x: lx,
                    y: ly,
                    u: (lx - x) / w,
                    v: (ly - y) / h,
                });
                self.put_px(px, py, color);
            }
        }
    }

    fn blit(&mut self, src: &Canvas, x: f32, y: f32) {
        if src.density != self.density {
            log::warn!(
                "blit density mismatch: src @{}x onto dst @{}x",
                src.density,
                self.density
            );
        }
        let ox = self.to_px(x);
        let oy = self.to_px(y);
        let sw = src.physical_width() as i32;
        let sh = src.physical_height() as i32;

        for sy in 0..sh {
            for sx in 0..sw {
                if let Some(color) = src.px_at(sx, sy) {
                    if color.a > 0 {
                        self.put_px(ox + sx, oy + sy, color);
                    }
                }
            }
        }
    }
}
