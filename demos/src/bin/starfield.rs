//! # Starfield Demo
//!
//! Raw pixel access: stars fly past the camera, written one pixel at a
//! time through the staged pixel buffer. Moving the mouse steers the
//! field.

use easel_app::{start, Sketch, SketchConfig};
use easel_core::{map_range, Color};
use easel_graphics::Draw;

const WIDTH: u32 = 400;
const HEIGHT: u32 = 300;
const STARS: usize = 400;

#[derive(Clone, Copy)]
struct Star {
    x: f32,
    y: f32,
    z: f32,
}

struct Model {
    stars: Vec<Star>,
    drift: (f32, f32),
}

/// Deterministic scatter; good enough for a star placement.
fn scatter(seed: u32) -> f32 {
    let h = seed.wrapping_mul(2654435761);
    (h >> 8) as f32 / ((u32::MAX >> 8) as f32)
}

fn init(sketch: &mut Sketch) -> Model {
    sketch.create_canvas(WIDTH, HEIGHT).set_frame_rate(60.0);

    let stars = (0..STARS)
        .map(|i| Star {
            x: scatter(i as u32) * 2.0 - 1.0,
            y: scatter(i as u32 ^ 0x9e3779b9) * 2.0 - 1.0,
            z: scatter(i as u32 ^ 0x85ebca6b).max(0.05),
        })
        .collect();

    Model {
        stars,
        drift: (0.0, 0.0),
    }
}

fn draw(sketch: &mut Sketch, model: &Model) {
    sketch.background(Color::BLACK).load_pixels();

    for star in &model.stars {
        let sx = map_range(star.x / star.z, -1.0, 1.0, 0.0, WIDTH as f32);
        let sy = map_range(star.y / star.z, -1.0, 1.0, 0.0, HEIGHT as f32);
        if sx < 0.0 || sx >= WIDTH as f32 || sy < 0.0 || sy >= HEIGHT as f32 {
            continue;
        }
        let brightness = map_range(star.z, 0.0, 1.0, 255.0, 80.0) as u8;
        sketch.set_pixel(sx, sy, WIDTH, HEIGHT, Color::gray(brightness));
    }

    sketch.update_pixels();
}

fn update(model: Model) -> Model {
    let (dx, dy) = model.drift;
    let stars = model
        .stars
        .iter()
        .map(|star| {
            let mut star = Star {
                x: star.x + dx * star.z * 0.01,
                y: star.y + dy * star.z * 0.01,
                z: star.z - 0.004,
            };
            if star.z <= 0.05 {
                star.z = 1.0;
            }
            if star.x.abs() > 1.5 {
                star.x = -star.x.signum();
            }
            if star.y.abs() > 1.5 {
                star.y = -star.y.signum();
            }
            star
        })
        .collect();

    Model { stars, ..model }
}

fn mouse_moved(_px: f32, _py: f32, dx: f32, dy: f32, model: Model) -> Model {
    Model {
        drift: (-dx, -dy),
        ..model
    }
}

fn main() {
    let config = SketchConfig::new(init, draw, update)
        .with_title("starfield")
        .on_mouse_moved(mouse_moved);

    if let Err(e) = start(config) {
        log::error!("starfield demo failed: {e}");
    }
}
