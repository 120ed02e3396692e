//! Drawing state and the primitive forwarders.
//!
//! [`Draw`] is the user-facing primitive surface. Every method forwards its
//! arguments onto the underlying [`RasterSurface`] (combined with the
//! current [`DrawState`]) and returns `&mut Self` so calls chain:
//!
//! ```ignore
//! sketch.background(Color::BLACK)
//!     .stroke(Color::WHITE)
//!     .line(0.0, 0.0, 100.0, 100.0)
//!     .no_stroke()
//!     .fill(Color::RED)
//!     .rect(10.0, 10.0, 40.0, 40.0);
//! ```
//!
//! Nothing here validates arguments; out-of-range geometry is the
//! surface's concern.

use easel_core::Color;

use crate::font::Font;
use crate::shader::Shader;
use crate::surface::RasterSurface;

/// Current pen state: stroke, fill, weight, text settings, and the
/// optionally installed fragment shader.
pub struct DrawState {
    /// Stroke color, or `None` after `no_stroke`.
    pub stroke: Option<Color>,
    /// Fill color, or `None` after `no_fill`.
    pub fill: Option<Color>,
    /// Stroke weight in logical pixels.
    pub stroke_weight: f32,
    /// Text size in logical pixels.
    pub text_size: f32,
    /// Font used by `text`.
    pub font: Font,
    /// Installed fragment shader, evaluated by filled shapes.
    pub shader: Option<Box<dyn Shader>>,
}

impl Default for DrawState {
    fn default() -> DrawState {
        DrawState {
            stroke: Some(Color::BLACK),
            fill: Some(Color::WHITE),
            stroke_weight: 1.0,
            text_size: 12.0,
            font: Font::default(),
            shader: None,
        }
    }
}

/// Chainable drawing primitives over a [`RasterSurface`].
///
/// Implementors provide split access to their surface and state; all
/// primitives are supplied as default methods.
pub trait Draw: Sized {
    type Surface: RasterSurface;

    /// Split borrow of the active surface and the pen state.
    fn parts(&mut self) -> (&mut Self::Surface, &DrawState);

    /// Mutable pen state.
    fn state_mut(&mut self) -> &mut DrawState;

    // --- state ---

    /// Set the stroke color.
    fn stroke(&mut self, color: Color) -> &mut Self {
        self.state_mut().stroke = Some(color);
        self
    }

    /// Disable stroking.
    fn no_stroke(&mut self) -> &mut Self {
        self.state_mut().stroke = None;
        self
    }

    /// Set the stroke weight in logical pixels.
    fn stroke_weight(&mut self, weight: f32) -> &mut Self {
        self.state_mut().stroke_weight = weight;
        self
    }

    /// Set the fill color.
    fn fill(&mut self, color: Color) -> &mut Self {
        self.state_mut().fill = Some(color);
        self
    }

    /// Disable filling.
    fn no_fill(&mut self) -> &mut Self {
        self.state_mut().fill = None;
        self
    }

    /// Set the text size in logical pixels.
    fn text_size(&mut self, size: f32) -> &mut Self {
        self.state_mut().text_size = size;
        self
    }

    /// Set the font used by [`text`](Draw::text).
    fn text_font(&mut self, font: Font) -> &mut Self {
        self.state_mut().font = font;
        self
    }

    /// Install a fragment shader; filled shapes evaluate it per pixel
    /// until [`reset_shader`](Draw::reset_shader).
    fn create_shader<S: Shader + 'static>(&mut self, shader: S) -> &mut Self {
        self.state_mut().shader = Some(Box::new(shader));
        self
    }

    /// Remove the installed fragment shader.
    fn reset_shader(&mut self) -> &mut Self {
        self.state_mut().shader = None;
        self
    }

    // --- whole-surface ---

    /// Fill the whole surface with a color.
    fn background(&mut self, color: Color) -> &mut Self {
        let (surface, _) = self.parts();
        surface.fill_all(color);
        self
    }

    /// Reset the whole surface to transparent.
    fn clear(&mut self) -> &mut Self {
        let (surface, _) = self.parts();
        surface.clear_all();
        self
    }

    // --- shapes ---

    /// Line segment between two points.
    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> &mut Self {
        let (surface, state) = self.parts();
        if let Some(stroke) = state.stroke {
            surface.draw_line(x1, y1, x2, y2, stroke, state.stroke_weight);
        }
        self
    }

    /// A dot of the current stroke weight.
    fn point(&mut self, x: f32, y: f32) -> &mut Self {
        self.line(x, y, x, y)
    }

    /// Axis-aligned rectangle.
    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) -> &mut Self {
        let (surface, state) = self.parts();
        if let Some(shader) = state.shader.as_deref() {
            surface.shade_region(x, y, w, h, shader);
        } else if let Some(fill) = state.fill {
            surface.fill_rect(x, y, w, h, fill);
        }
        if let Some(stroke) = state.stroke {
            surface.stroke_rect(x, y, w, h, stroke, state.stroke_weight);
        }
        self
    }

    /// Square with side `s`.
    fn square(&mut self, x: f32, y: f32, s: f32) -> &mut Self {
        self.rect(x, y, s, s)
    }

    /// Axis-aligned ellipse; `w` and `h` are the axis diameters.
    fn ellipse(&mut self, cx: f32, cy: f32, w: f32, h: f32) -> &mut Self {
        let (rx, ry) = (w / 2.0, h / 2.0);
        let (surface, state) = self.parts();
        if let Some(fill) = state.fill {
            surface.fill_ellipse(cx, cy, rx, ry, fill);
        }
        if let Some(stroke) = state.stroke {
            surface.stroke_ellipse(cx, cy, rx, ry, stroke, state.stroke_weight);
        }
        self
    }

    /// Circle with diameter `d`.
    fn circle(&mut self, cx: f32, cy: f32, d: f32) -> &mut Self {
        self.ellipse(cx, cy, d, d)
    }

    /// Triangle through three points.
    #[allow(clippy::too_many_arguments)]
    fn triangle(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32) -> &mut Self {
        let (surface, state) = self.parts();
        if let Some(fill) = state.fill {
            surface.fill_triangle(x1, y1, x2, y2, x3, y3, fill);
        }
        if let Some(stroke) = state.stroke {
            surface.stroke_triangle(x1, y1, x2, y2, x3, y3, stroke, state.stroke_weight);
        }
        self
    }

    /// Draw text with its baseline at `(x, y)` using the fill color.
    fn text(&mut self, text: &str, x: f32, y: f32) -> &mut Self {
        let (surface, state) = self.parts();
        if let Some(fill) = state.fill {
            surface.draw_text(text, x, y, state.text_size, &state.font, fill);
        }
        self
    }

    // --- pixels ---

    /// Write one logical pixel through the surface's checked write.
    fn set(&mut self, x: f32, y: f32, color: Color) -> &mut Self {
        let (surface, _) = self.parts();
        surface.plot(x.round() as i32, y.round() as i32, color);
        self
    }

    /// Read one logical pixel.
    fn get(&mut self, x: f32, y: f32) -> Option<Color> {
        let (surface, _) = self.parts();
        surface.pixel(x.round() as i32, y.round() as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use crate::shader::Frag;

    /// Recorded surface call with its exact arguments.
    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        FillAll(Color),
        ClearAll,
        FillRect(f32, f32, f32, f32, Color),
        StrokeRect(f32, f32, f32, f32, Color, f32),
        DrawLine(f32, f32, f32, f32, Color, f32),
        FillEllipse(f32, f32, f32, f32, Color),
        StrokeEllipse(f32, f32, f32, f32, Color, f32),
        FillTriangle(f32, f32, f32, f32, f32, f32, Color),
        StrokeTriangle(f32, f32, f32, f32, f32, f32, Color, f32),
        Plot(i32, i32, Color),
        DrawText(String, f32, f32, f32, Color),
        ShadeRegion(f32, f32, f32, f32),
        Blit(f32, f32),
    }

    /// Test double that records every native call it receives.
    #[derive(Default)]
    struct Recording {
        calls: Vec<Call>,
    }

    impl RasterSurface for Recording {
        fn size(&self) -> (u32, u32) {
            (100, 100)
        }
        fn fill_all(&mut self, color: Color) {
            self.calls.push(Call::FillAll(color));
        }
        fn clear_all(&mut self) {
            self.calls.push(Call::ClearAll);
        }
        fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
            self.calls.push(Call::FillRect(x, y, w, h, color));
        }
        fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color, weight: f32) {
            self.calls.push(Call::StrokeRect(x, y, w, h, color, weight));
        }
        fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Color, weight: f32) {
            self.calls.push(Call::DrawLine(x1, y1, x2, y2, color, weight));
        }
        fn fill_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, color: Color) {
            self.calls.push(Call::FillEllipse(cx, cy, rx, ry, color));
        }
        fn stroke_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, color: Color, weight: f32) {
            self.calls
                .push(Call::StrokeEllipse(cx, cy, rx, ry, color, weight));
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
            self.calls
                .push(Call::FillTriangle(x1, y1, x2, y2, x3, y3, color));
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
            self.calls
                .push(Call::StrokeTriangle(x1, y1, x2, y2, x3, y3, color, weight));
        }
        fn plot(&mut self, x: i32, y: i32, color: Color) {
            self.calls.push(Call::Plot(x, y, color));
        }
        fn pixel(&self, _x: i32, _y: i32) -> Option<Color> {
            None
        }
        fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, _font: &Font, color: Color) {
            self.calls
                .push(Call::DrawText(text.to_string(), x, y, size, color));
        }
        fn shade_region(&mut self, x: f32, y: f32, w: f32, h: f32, _shader: &dyn Shader) {
            self.calls.push(Call::ShadeRegion(x, y, w, h));
        }
        fn blit(&mut self, _src: &Canvas, x: f32, y: f32) {
            self.calls.push(Call::Blit(x, y));
        }
    }

    struct Pen {
        surface: Recording,
        state: DrawState,
    }

    impl Pen {
        fn new() -> Pen {
            Pen {
                surface: Recording::default(),
                state: DrawState::default(),
            }
        }
    }

    impl Draw for Pen {
        type Surface = Recording;

        fn parts(&mut self) -> (&mut Recording, &DrawState) {
            (&mut self.surface, &self.state)
        }

        fn state_mut(&mut self) -> &mut DrawState {
            &mut self.state
        }
    }

    #[test]
    fn test_line_forwards_exact_arguments() {
        let mut pen = Pen::new();
        pen.stroke(Color::RED).line(1.5, 2.5, 3.5, 4.5);
        assert_eq!(
            pen.surface.calls,
            vec![Call::DrawLine(1.5, 2.5, 3.5, 4.5, Color::RED, 1.0)]
        );
    }

    #[test]
    fn test_rect_forwards_fill_then_stroke() {
        let mut pen = Pen::new();
        pen.fill(Color::GREEN)
            .stroke(Color::BLUE)
            .stroke_weight(3.0)
            .rect(1.0, 2.0, 30.0, 40.0);
        assert_eq!(
            pen.surface.calls,
            vec![
                Call::FillRect(1.0, 2.0, 30.0, 40.0, Color::GREEN),
                Call::StrokeRect(1.0, 2.0, 30.0, 40.0, Color::BLUE, 3.0),
            ]
        );
    }

    #[test]
    fn test_no_stroke_skips_line_entirely() {
        let mut pen = Pen::new();
        pen.no_stroke().line(0.0, 0.0, 5.0, 5.0);
        assert!(pen.surface.calls.is_empty());
    }

    #[test]
    fn test_no_fill_rect_strokes_only() {
        let mut pen = Pen::new();
        pen.no_fill().rect(0.0, 0.0, 5.0, 5.0);
        assert_eq!(
            pen.surface.calls,
            vec![Call::StrokeRect(0.0, 0.0, 5.0, 5.0, Color::BLACK, 1.0)]
        );
    }

    #[test]
    fn test_background_forwards_color() {
        let mut pen = Pen::new();
        pen.background(Color::gray(32)).clear();
        assert_eq!(
            pen.surface.calls,
            vec![Call::FillAll(Color::gray(32)), Call::ClearAll]
        );
    }

    #[test]
    fn test_point_is_zero_length_line() {
        let mut pen = Pen::new();
        pen.point(7.0, 9.0);
        assert_eq!(
            pen.surface.calls,
            vec![Call::DrawLine(7.0, 9.0, 7.0, 9.0, Color::BLACK, 1.0)]
        );
    }

    #[test]
    fn test_circle_halves_diameter() {
        let mut pen = Pen::new();
        pen.no_stroke().circle(10.0, 20.0, 8.0);
        assert_eq!(
            pen.surface.calls,
            vec![Call::FillEllipse(10.0, 20.0, 4.0, 4.0, Color::WHITE)]
        );
    }

    #[test]
    fn test_triangle_forwards_all_six_coordinates() {
        let mut pen = Pen::new();
        pen.no_stroke().triangle(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_eq!(
            pen.surface.calls,
            vec![Call::FillTriangle(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, Color::WHITE)]
        );
    }

    #[test]
    fn test_text_uses_fill_and_size() {
        let mut pen = Pen::new();
        pen.fill(Color::RED).text_size(24.0).text("hi", 5.0, 6.0);
        assert_eq!(
            pen.surface.calls,
            vec![Call::DrawText("hi".to_string(), 5.0, 6.0, 24.0, Color::RED)]
        );
    }

    #[test]
    fn test_set_rounds_coordinates() {
        let mut pen = Pen::new();
        pen.set(1.4, 2.6, Color::BLUE);
        assert_eq!(pen.surface.calls, vec![Call::Plot(1, 3, Color::BLUE)]);
    }

    #[test]
    fn test_shader_replaces_rect_fill() {
        let mut pen = Pen::new();
        pen.no_stroke()
            .create_shader(|_: Frag| Color::RED)
            .rect(0.0, 0.0, 10.0, 10.0);
        assert_eq!(pen.surface.calls, vec![Call::ShadeRegion(0.0, 0.0, 10.0, 10.0)]);

        pen.surface.calls.clear();
        pen.reset_shader().rect(0.0, 0.0, 10.0, 10.0);
        assert_eq!(
            pen.surface.calls,
            vec![Call::FillRect(0.0, 0.0, 10.0, 10.0, Color::WHITE)]
        );
    }

    #[test]
    fn test_square_expands_to_rect() {
        let mut pen = Pen::new();
        pen.no_stroke().square(2.0, 3.0, 9.0);
        assert_eq!(
            pen.surface.calls,
            vec![Call::FillRect(2.0, 3.0, 9.0, 9.0, Color::WHITE)]
        );
    }
}
