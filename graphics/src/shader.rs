//! CPU fragment shaders.
//!
//! A [`Shader`] is a per-pixel color program. Once installed on a drawing
//! context, filled shapes evaluate the shader for every covered pixel
//! instead of using the flat fill color.
//!
//! Closures taking a [`Frag`] implement [`Shader`] directly:
//!
//! ```
//! use easel_graphics::{Frag, Shader};
//! use easel_core::Color;
//!
//! let checker = |frag: Frag| {
//!     if ((frag.x as i32 / 8) + (frag.y as i32 / 8)) % 2 == 0 {
//!         Color::WHITE
//!     } else {
//!         Color::BLACK
//!     }
//! };
//! assert_eq!(checker.fragment(Frag { x: 0.0, y: 0.0, u: 0.0, v: 0.0 }), Color::WHITE);
//! ```

use easel_core::Color;

/// Per-fragment inputs handed to a [`Shader`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frag {
    /// Logical x coordinate on the surface.
    pub x: f32,
    /// Logical y coordinate on the surface.
    pub y: f32,
    /// Horizontal position normalized to `[0, 1]` within the shaded region.
    pub u: f32,
    /// Vertical position normalized to `[0, 1]` within the shaded region.
    pub v: f32,
}

/// A per-pixel color program evaluated by filled shapes.
pub trait Shader {
    /// Compute the color for one fragment.
    fn fragment(&self, frag: Frag) -> Color;
}

impl<F> Shader for F
where
    F: Fn(Frag) -> Color,
{
    fn fragment(&self, frag: Frag) -> Color {
        self(frag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_shader() {
        let gradient = |frag: Frag| Color::rgb((frag.u * 255.0) as u8, 0, 0);
        let c = gradient.fragment(Frag {
            x: 5.0,
            y: 5.0,
            u: 1.0,
            v: 0.0,
        });
        assert_eq!(c, Color::rgb(255, 0, 0));
    }
}
