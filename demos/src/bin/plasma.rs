//! # Plasma Demo
//!
//! A fragment shader animates a plasma field, and a framebuffer holds a
//! vignette drawn once and composited over every frame.

use easel_app::{start, Sketch, SketchConfig};
use easel_core::Color;
use easel_graphics::{Draw, Frag, Framebuffer};

const WIDTH: u32 = 320;
const HEIGHT: u32 = 240;

struct Model {
    t: f32,
    vignette: Framebuffer,
}

fn init(sketch: &mut Sketch) -> Model {
    sketch.create_canvas(WIDTH, HEIGHT);

    // Draw the static vignette once, into its own target.
    let vignette = sketch.create_frame_buffer();
    sketch.begin_frame_buffer(vignette);
    sketch.no_fill().stroke(Color::rgba(0, 0, 0, 90)).stroke_weight(2.0);
    for i in 0..12 {
        let inset = i as f32;
        sketch.rect(
            inset,
            inset,
            WIDTH as f32 - inset * 2.0,
            HEIGHT as f32 - inset * 2.0,
        );
    }
    sketch.end_frame_buffer(vignette);

    Model { t: 0.0, vignette }
}

fn plasma(t: f32) -> impl Fn(Frag) -> Color {
    move |frag: Frag| {
        let v = (frag.x * 0.08 + t).sin()
            + (frag.y * 0.11 - t * 0.7).sin()
            + ((frag.x + frag.y) * 0.06 + t * 1.3).sin();
        let v = (v + 3.0) / 6.0;
        Color::rgb(
            (v * 255.0) as u8,
            ((1.0 - v) * 180.0) as u8,
            (128.0 + v * 127.0) as u8,
        )
    }
}

fn draw(sketch: &mut Sketch, model: &Model) {
    sketch
        .create_shader(plasma(model.t))
        .no_stroke()
        .rect(0.0, 0.0, WIDTH as f32, HEIGHT as f32)
        .reset_shader()
        .image_frame_buffer(model.vignette, 0.0, 0.0);
}

fn update(model: Model) -> Model {
    Model {
        t: model.t + 0.03,
        ..model
    }
}

fn main() {
    let config = SketchConfig::new(init, draw, update).with_title("plasma");

    if let Err(e) = start(config) {
        log::error!("plasma demo failed: {e}");
    }
}
