//! Standalone offscreen drawing surfaces.

use crate::canvas::Canvas;
use crate::draw::{Draw, DrawState};

/// An offscreen surface with its own canvas and pen state.
///
/// Created by a drawing context's `create_graphics`; exposes the full
/// [`Draw`] primitive set and composites onto other surfaces via
/// `image_graphics`.
pub struct Graphics {
    canvas: Canvas,
    state: DrawState,
}

impl Graphics {
    /// Create an offscreen surface.
    pub fn new(width: u32, height: u32, density: u32) -> Graphics {
        Graphics {
            canvas: Canvas::with_density(width, height, density),
            state: DrawState::default(),
        }
    }

    /// The backing canvas.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }
}

impl Draw for Graphics {
    type Surface = Canvas;

    fn parts(&mut self) -> (&mut Canvas, &DrawState) {
        (&mut self.canvas, &self.state)
    }

    fn state_mut(&mut self) -> &mut DrawState {
        &mut self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RasterSurface;
    use easel_core::Color;

    #[test]
    fn test_graphics_draws_into_own_canvas() {
        let mut g = Graphics::new(8, 8, 1);
        g.no_stroke().fill(Color::RED).rect(0.0, 0.0, 8.0, 8.0);
        assert_eq!(g.canvas().pixel(4, 4), Some(Color::RED));
    }

    #[test]
    fn test_graphics_inherits_density() {
        let g = Graphics::new(8, 8, 2);
        assert_eq!(g.canvas().physical_width(), 16);
    }
}
