//! The sketch rendering context.
//!
//! A [`Sketch`] is the handle passed to the `init` and `draw` callbacks.
//! It owns the canvas, the pen state, the staged pixel buffer, the
//! framebuffer store, and the frame clock, and exposes every drawing
//! primitive through the [`Draw`] trait. Methods return `&mut Self` so
//! calls chain; queries return their value.

use easel_core::Color;
use easel_graphics::{
    Canvas, CanvasMode, Draw, DrawState, Framebuffer, FramebufferStore, Graphics, PixelBuffer,
    RasterSurface,
};

use crate::clock::FrameClock;

/// Default canvas size before `create_canvas` runs.
const DEFAULT_CANVAS: (u32, u32) = (100, 100);

/// Drawing context threaded through sketch callbacks.
pub struct Sketch {
    pub(crate) canvas: Canvas,
    state: DrawState,
    stage: PixelBuffer,
    framebuffers: FramebufferStore,
    pub(crate) clock: FrameClock,
    density: u32,
}

impl Sketch {
    /// Create a context with the default canvas at the given pixel
    /// density.
    pub(crate) fn new(density: u32) -> Sketch {
        let density = density.max(1);
        Sketch {
            canvas: Canvas::with_density(DEFAULT_CANVAS.0, DEFAULT_CANVAS.1, density),
            state: DrawState::default(),
            stage: PixelBuffer::new(),
            framebuffers: FramebufferStore::new(),
            clock: FrameClock::new(),
            density,
        }
    }

    // --- canvas ---

    /// Allocate the drawing canvas. The canvas is always two-dimensional.
    pub fn create_canvas(&mut self, width: u32, height: u32) -> &mut Self {
        self.canvas = Canvas::with_density(width, height, self.density);
        self
    }

    /// Logical canvas width.
    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    /// Logical canvas height.
    pub fn height(&self) -> u32 {
        self.canvas.height()
    }

    /// Dimensionality of the canvas.
    pub fn mode(&self) -> CanvasMode {
        self.canvas.mode()
    }

    /// The pixel density multiplier.
    pub fn pixel_density(&self) -> u32 {
        self.density
    }

    /// Change the pixel density. Reallocates the canvas, dropping its
    /// contents.
    pub fn set_pixel_density(&mut self, density: u32) -> &mut Self {
        self.density = density.max(1);
        self.canvas = Canvas::with_density(self.canvas.width(), self.canvas.height(), self.density);
        self
    }

    /// The backing canvas.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    // --- frame rate ---

    /// The measured frame rate.
    pub fn frame_rate(&self) -> f32 {
        self.clock.measured()
    }

    /// The frame rate the loop aims for.
    pub fn target_frame_rate(&self) -> f32 {
        self.clock.target()
    }

    /// Set the frame rate the loop aims for.
    pub fn set_frame_rate(&mut self, fps: f32) -> &mut Self {
        self.clock.set_target(fps);
        self
    }

    // --- raw pixels ---

    /// Snapshot the canvas into the staged pixel buffer.
    pub fn load_pixels(&mut self) -> &mut Self {
        self.stage.load_from(&self.canvas);
        self
    }

    /// Store the staged pixel buffer back into the canvas.
    pub fn update_pixels(&mut self) -> &mut Self {
        self.stage.store_into(&mut self.canvas);
        self
    }

    /// Write one logical pixel into the staged buffer as a
    /// `density x density` block.
    ///
    /// Requires a prior [`load_pixels`](Sketch::load_pixels) and a
    /// following [`update_pixels`](Sketch::update_pixels) to become
    /// visible; does neither itself.
    pub fn set_pixel(&mut self, x: f32, y: f32, width: u32, height: u32, color: Color) -> &mut Self {
        self.stage.set_pixel(x, y, width, height, color, self.density);
        self
    }

    /// The staged pixel bytes.
    pub fn pixels(&self) -> &[u8] {
        self.stage.data()
    }

    /// Mutable staged pixel bytes.
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        self.stage.data_mut()
    }

    // --- offscreen ---

    /// Create a standalone offscreen surface at the sketch's density.
    pub fn create_graphics(&self, width: u32, height: u32) -> Graphics {
        Graphics::new(width, height, self.density)
    }

    /// Composite an offscreen surface onto the current draw target.
    pub fn image_graphics(&mut self, graphics: &Graphics, x: f32, y: f32) -> &mut Self {
        let (surface, _) = self.parts();
        surface.blit(graphics.canvas(), x, y);
        self
    }

    /// Create a canvas-sized framebuffer.
    pub fn create_frame_buffer(&mut self) -> Framebuffer {
        self.framebuffers
            .create(self.canvas.width(), self.canvas.height(), self.density)
    }

    /// Redirect subsequent drawing into the framebuffer.
    pub fn begin_frame_buffer(&mut self, fb: Framebuffer) -> &mut Self {
        self.framebuffers.begin(fb);
        self
    }

    /// Stop drawing into the framebuffer, restoring the previous target.
    pub fn end_frame_buffer(&mut self, fb: Framebuffer) -> &mut Self {
        self.framebuffers.end(fb);
        self
    }

    /// Composite a framebuffer onto the current draw target.
    pub fn image_frame_buffer(&mut self, fb: Framebuffer, x: f32, y: f32) -> &mut Self {
        self.framebuffers.composite(fb, &mut self.canvas, x, y);
        self
    }
}

impl Draw for Sketch {
    type Surface = Canvas;

    fn parts(&mut self) -> (&mut Canvas, &DrawState) {
        let surface = match self.framebuffers.active_mut() {
            Some(target) => target,
            None => &mut self.canvas,
        };
        (surface, &self.state)
    }

    fn state_mut(&mut self) -> &mut DrawState {
        &mut self.state
    }
}
