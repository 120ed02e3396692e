//! # Easel Graphics
//!
//! CPU raster surface and drawing primitives for Easel sketches.
//!
//! The crate is split along one seam: [`RasterSurface`] lists the native
//! methods of a pixel surface, [`Canvas`] implements them over an RGBA8
//! buffer with integer pixel density, and the [`Draw`] trait forwards the
//! user-facing primitives (shapes, text, pen state) onto whatever surface
//! a context exposes. Around that sit staged pixel access
//! ([`PixelBuffer`]), offscreen targets ([`Graphics`], [`Framebuffer`]),
//! CPU fragment shaders ([`Shader`]), and windowed presentation
//! ([`Presenter`]).

pub mod canvas;
pub mod draw;
pub mod error;
pub mod font;
pub mod framebuffer;
pub mod offscreen;
pub mod pixel_buffer;
pub mod present;
pub mod shader;
pub mod surface;

pub use canvas::{Canvas, CanvasMode};
pub use draw::{Draw, DrawState};
pub use error::GraphicsError;
pub use font::Font;
pub use framebuffer::{Framebuffer, FramebufferStore};
pub use offscreen::Graphics;
pub use pixel_buffer::PixelBuffer;
pub use present::Presenter;
pub use shader::{Frag, Shader};
pub use surface::RasterSurface;

/// Graphics library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the graphics subsystem.
pub fn init() {
    log::info!("Easel Graphics v{} initialized", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
