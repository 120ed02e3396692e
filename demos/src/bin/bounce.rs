//! # Bounce Demo
//!
//! A square bouncing around the canvas. Arrow keys change its speed,
//! space pauses, and the measured frame rate is drawn in the corner.

use easel_app::{start, Sketch, SketchConfig};
use easel_core::{Color, KeyCode};
use easel_graphics::Draw;

const WIDTH: f32 = 480.0;
const HEIGHT: f32 = 360.0;
const SIZE: f32 = 24.0;

struct Model {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    paused: bool,
}

fn init(sketch: &mut Sketch) -> Model {
    sketch.create_canvas(WIDTH as u32, HEIGHT as u32);
    Model {
        x: WIDTH / 2.0,
        y: HEIGHT / 2.0,
        vx: 3.0,
        vy: 2.0,
        paused: false,
    }
}

fn draw(sketch: &mut Sketch, model: &Model) {
    let fps = sketch.frame_rate();
    sketch
        .background(Color::gray(16))
        .no_stroke()
        .fill(Color::rgb(240, 90, 60))
        .square(model.x, model.y, SIZE)
        .fill(Color::gray(160))
        .text_size(12.0)
        .text(&format!("{fps:.0} fps"), 8.0, 16.0);

    if model.paused {
        sketch
            .fill(Color::WHITE)
            .text("paused", 8.0, HEIGHT - 10.0);
    }
}

fn update(model: Model) -> Model {
    if model.paused {
        return model;
    }

    let mut x = model.x + model.vx;
    let mut y = model.y + model.vy;
    let mut vx = model.vx;
    let mut vy = model.vy;

    if x < 0.0 || x + SIZE > WIDTH {
        vx = -vx;
        x = x.clamp(0.0, WIDTH - SIZE);
    }
    if y < 0.0 || y + SIZE > HEIGHT {
        vy = -vy;
        y = y.clamp(0.0, HEIGHT - SIZE);
    }

    Model { x, y, vx, vy, ..model }
}

fn key_pressed(_key: Option<char>, code: KeyCode, model: Model) -> Model {
    let speed = |v: f32, delta: f32| (v.abs() + delta).clamp(0.5, 12.0) * v.signum();
    match code {
        KeyCode::Space => Model {
            paused: !model.paused,
            ..model
        },
        KeyCode::ArrowUp => Model {
            vx: speed(model.vx, 0.5),
            vy: speed(model.vy, 0.5),
            ..model
        },
        KeyCode::ArrowDown => Model {
            vx: speed(model.vx, -0.5),
            vy: speed(model.vy, -0.5),
            ..model
        },
        _ => model,
    }
}

fn main() {
    let config = SketchConfig::new(init, draw, update)
        .with_title("bounce")
        .on_key_pressed(key_pressed);

    if let Err(e) = start(config) {
        log::error!("bounce demo failed: {e}");
    }
}
