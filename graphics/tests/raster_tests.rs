//! Raster integration tests for the graphics crate.
//!
//! Exercise the public drawing surface end to end: canvas allocation,
//! primitive drawing through the `Draw` forwarders, staged pixel access,
//! framebuffer redirection, shader fills, and headless presentation.
//! Everything runs on the CPU, so these tests need no display hardware.
//!
//! ```bash
//! cargo test --test raster_tests
//! ```

use rstest::rstest;

use easel_core::Color;
use easel_graphics::{
    Canvas, CanvasMode, Draw, DrawState, Frag, PixelBuffer, Presenter, RasterSurface,
};

/// A minimal drawing context over a real canvas, the way embedders
/// compose one.
struct TestContext {
    canvas: Canvas,
    state: DrawState,
}

impl TestContext {
    fn new(width: u32, height: u32, density: u32) -> TestContext {
        TestContext {
            canvas: Canvas::with_density(width, height, density),
            state: DrawState::default(),
        }
    }
}

impl Draw for TestContext {
    type Surface = Canvas;

    fn parts(&mut self) -> (&mut Canvas, &DrawState) {
        (&mut self.canvas, &self.state)
    }

    fn state_mut(&mut self) -> &mut DrawState {
        &mut self.state
    }
}

#[test]
fn test_canvas_is_two_dimensional() {
    let ctx = TestContext::new(320, 240, 1);
    assert_eq!(ctx.canvas.mode(), CanvasMode::TwoD);
    assert_eq!(ctx.canvas.size(), (320, 240));
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
fn test_full_draw_cycle_at_density(#[case] density: u32) {
    let mut ctx = TestContext::new(64, 64, density);

    ctx.background(Color::BLACK)
        .stroke(Color::WHITE)
        .line(0.0, 32.0, 63.0, 32.0)
        .no_stroke()
        .fill(Color::RED)
        .rect(8.0, 8.0, 8.0, 8.0);

    assert_eq!(ctx.canvas.pixel(32, 32), Some(Color::WHITE));
    assert_eq!(ctx.canvas.pixel(10, 10), Some(Color::RED));
    assert_eq!(ctx.canvas.pixel(50, 50), Some(Color::BLACK));
}

#[test]
fn test_staged_pixels_against_drawn_canvas() {
    let mut ctx = TestContext::new(16, 16, 1);
    ctx.background(Color::BLUE);

    let mut stage = PixelBuffer::new();
    stage.load_from(&ctx.canvas);
    stage.set_pixel(5.0, 5.0, 16, 16, Color::GREEN, 1);
    stage.store_into(&mut ctx.canvas);

    assert_eq!(ctx.canvas.pixel(5, 5), Some(Color::GREEN));
    assert_eq!(ctx.canvas.pixel(6, 5), Some(Color::BLUE));
}

#[test]
fn test_shader_fill_matches_fragment_program() {
    let mut ctx = TestContext::new(32, 32, 1);
    ctx.no_stroke()
        .create_shader(|frag: Frag| {
            Color::rgb((frag.u * 255.0) as u8, (frag.v * 255.0) as u8, 0)
        })
        .rect(0.0, 0.0, 32.0, 32.0);

    let top_left = ctx.canvas.pixel(0, 0).unwrap();
    let bottom_right = ctx.canvas.pixel(31, 31).unwrap();
    assert!(top_left.r < 30 && top_left.g < 30);
    assert!(bottom_right.r > 220 && bottom_right.g > 220);
}

#[test]
fn test_headless_presentation_of_drawn_frames() {
    let mut ctx = TestContext::new(32, 32, 2);
    let mut presenter = Presenter::headless();

    for frame in 0..3 {
        ctx.background(Color::gray(frame * 40)).no_stroke().fill(Color::WHITE).circle(
            16.0,
            16.0,
            10.0,
        );
        presenter.present(&ctx.canvas).unwrap();
    }

    assert_eq!(presenter.presented_frames(), 3);
}
