//! The sketch application: window, event loop, and model threading.

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use easel_core::KeyCode;
use easel_graphics::Presenter;

use crate::config::SketchConfig;
use crate::context::Sketch;
use crate::error::AppError;
use crate::input;

/// Runs a sketch: owns the window, the rendering context, and the single
/// live model value.
///
/// The model lives in one slot. Every hook reads the current value and
/// installs its replacement before returning:
///
/// - the first `resumed` runs `init` once and stores its result;
/// - every redraw runs `draw` with the current model, then replaces the
///   model with `update`'s result — draw first, update second, never
///   interleaved with other hooks;
/// - key and mouse hooks consult their optional handlers; with no handler
///   installed the event leaves the model untouched.
///
/// Handler panics are not caught; they unwind through the event loop.
pub struct App<M> {
    config: SketchConfig<M>,
    window: Option<Arc<Window>>,
    presenter: Option<Presenter>,
    sketch: Option<Sketch>,
    model: Option<M>,
    mouse: Option<(f32, f32)>,
}

impl<M: 'static> App<M> {
    /// Create an application without running it.
    pub fn new(config: SketchConfig<M>) -> App<M> {
        App {
            config,
            window: None,
            presenter: None,
            sketch: None,
            model: None,
            mouse: None,
        }
    }

    /// Run the sketch to completion.
    pub fn run(mut self) -> Result<(), AppError> {
        let event_loop = EventLoop::new().map_err(|e| AppError::EventLoopFailed(e.to_string()))?;
        event_loop
            .run_app(&mut self)
            .map_err(|e| AppError::EventLoopFailed(e.to_string()))
    }

    /// Run `init` once and store the first model.
    fn setup(&mut self, mut sketch: Sketch) {
        let model = (self.config.init)(&mut sketch);
        self.model = Some(model);
        self.sketch = Some(sketch);
        log::info!(
            "sketch initialized: {}x{} canvas",
            self.sketch.as_ref().map(|s| s.width()).unwrap_or(0),
            self.sketch.as_ref().map(|s| s.height()).unwrap_or(0),
        );
    }

    /// One frame: draw with the current model, then replace it with
    /// `update`'s result.
    fn frame(&mut self) {
        let Some(sketch) = self.sketch.as_mut() else {
            return;
        };
        let Some(model) = self.model.take() else {
            return;
        };

        (self.config.draw)(sketch, &model);
        self.model = Some((self.config.update)(model));
    }

    /// Deliver a key event to the matching handler, if installed.
    fn key_event(&mut self, pressed: bool, character: Option<char>, code: KeyCode) {
        let handler = if pressed {
            self.config.key_pressed.as_mut()
        } else {
            self.config.key_released.as_mut()
        };
        let Some(handler) = handler else {
            return;
        };
        let Some(model) = self.model.take() else {
            return;
        };
        self.model = Some(handler(character, code, model));
    }

    /// Deliver a mouse move: previous position and previous-minus-current
    /// deltas.
    fn mouse_event(&mut self, x: f32, y: f32) {
        let (px, py) = self.mouse.unwrap_or((x, y));

        if let Some(handler) = self.config.mouse_moved.as_mut() {
            if let Some(model) = self.model.take() {
                self.model = Some(handler(px, py, px - x, py - y, model));
            }
        }

        self.mouse = Some((x, y));
    }

    fn present(&mut self) {
        if let (Some(presenter), Some(sketch)) = (self.presenter.as_mut(), self.sketch.as_ref()) {
            if let Err(e) = presenter.present(sketch.canvas()) {
                log::warn!("failed to present frame: {e}");
            }
        }
    }

    #[cfg(test)]
    fn model(&self) -> Option<&M> {
        self.model.as_ref()
    }
}

impl<M: 'static> ApplicationHandler for App<M> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes().with_title(self.config.title.clone());
        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let density = (window.scale_factor().round() as u32).max(1);
        self.setup(Sketch::new(density));

        let sketch = self.sketch.as_ref().expect("sketch set by setup");
        let _ = window.request_inner_size(LogicalSize::new(sketch.width(), sketch.height()));

        match Presenter::windowed(window.clone(), sketch.canvas()) {
            Ok(presenter) => self.presenter = Some(presenter),
            Err(e) => {
                log::error!("failed to create presenter: {e}");
                event_loop.exit();
                return;
            }
        }

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("close requested");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(presenter) = self.presenter.as_mut() {
                    if let Err(e) = presenter.resize_surface(size.width, size.height) {
                        log::warn!("failed to resize surface: {e}");
                    }
                }
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                log::info!("scale factor changed to {scale_factor}");
            }

            WindowEvent::RedrawRequested => {
                self.frame();
                self.present();

                if let Some(sketch) = self.sketch.as_mut() {
                    event_loop.set_control_flow(ControlFlow::WaitUntil(sketch.clock.tick()));
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let Some((character, code)) = input::map_key_event(&event) {
                    let pressed = event.state == ElementState::Pressed;
                    self.key_event(pressed, character, code);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let scale = self
                    .window
                    .as_ref()
                    .map(|w| w.scale_factor())
                    .unwrap_or(1.0);
                let logical = position.to_logical::<f32>(scale);
                self.mouse_event(logical.x, logical.y);
            }

            _ => {}
        }
    }

    fn new_events(&mut self, _event_loop: &ActiveEventLoop, cause: StartCause) {
        if matches!(cause, StartCause::ResumeTimeReached { .. }) {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }
}
