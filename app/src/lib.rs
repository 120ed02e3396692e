//! # Easel App
//!
//! Lifecycle adapter for Easel sketches: wires an immutable
//! model-update-draw callback set into a host-driven frame loop over a
//! CPU raster canvas.
//!
//! ## Overview
//!
//! - [`SketchConfig`] - the callbacks a sketch is made of: `init`, `draw`,
//!   `update`, and optional key/mouse handlers
//! - [`Sketch`] - the drawing context threaded through callbacks
//! - [`App`] - the window, event loop, and model slot
//! - [`start`] - the all-in-one entry point
//!
//! ## Example
//!
//! ```no_run
//! use easel_app::{start, SketchConfig, Sketch};
//! use easel_core::Color;
//! use easel_graphics::Draw;
//!
//! struct Model {
//!     x: f32,
//! }
//!
//! let config = SketchConfig::new(
//!     |sketch: &mut Sketch| {
//!         sketch.create_canvas(320, 240);
//!         Model { x: 0.0 }
//!     },
//!     |sketch, model: &Model| {
//!         sketch
//!             .background(Color::BLACK)
//!             .no_stroke()
//!             .fill(Color::WHITE)
//!             .circle(model.x, 120.0, 20.0);
//!     },
//!     |model| Model {
//!         x: (model.x + 1.0) % 320.0,
//!     },
//! );
//!
//! start(config).unwrap();
//! ```

pub mod app;
pub mod clock;
pub mod config;
pub mod context;
pub mod error;
pub mod input;

pub use app::App;
pub use clock::FrameClock;
pub use config::SketchConfig;
pub use context::Sketch;
pub use error::AppError;

/// App library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the app subsystem.
pub fn init() {
    log::info!("Easel App v{} initialized", VERSION);
}

/// Run a sketch to completion.
///
/// Initializes logging, builds the [`App`], and drives it until the
/// window closes.
pub fn start<M: 'static>(config: SketchConfig<M>) -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    easel_core::init();
    easel_graphics::init();
    init();

    App::new(config).run()
}
