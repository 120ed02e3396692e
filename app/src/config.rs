//! Sketch configuration.
//!
//! A [`SketchConfig`] bundles the model callbacks a sketch is made of:
//! `init` builds the first model, `draw` renders the current one, `update`
//! produces its replacement, and the optional input handlers map events to
//! replacement models. Handlers left unset never touch the model.

use easel_core::KeyCode;

use crate::context::Sketch;

/// Builds the initial model. Runs once, before the first frame.
pub type InitFn<M> = Box<dyn FnMut(&mut Sketch) -> M>;

/// Renders the current model. Runs every frame, before `update`.
pub type DrawFn<M> = Box<dyn FnMut(&mut Sketch, &M)>;

/// Produces the next model from the current one. Runs every frame, after
/// `draw`.
pub type UpdateFn<M> = Box<dyn FnMut(M) -> M>;

/// Maps a key event (character, if printable, plus key code) and the
/// current model to the next model.
pub type KeyFn<M> = Box<dyn FnMut(Option<char>, KeyCode, M) -> M>;

/// Maps a mouse move (previous position plus previous-minus-current
/// deltas) and the current model to the next model.
pub type MouseMoveFn<M> = Box<dyn FnMut(f32, f32, f32, f32, M) -> M>;

/// Callbacks and window settings for a sketch.
pub struct SketchConfig<M> {
    pub(crate) title: String,
    pub(crate) init: InitFn<M>,
    pub(crate) draw: DrawFn<M>,
    pub(crate) update: UpdateFn<M>,
    pub(crate) key_pressed: Option<KeyFn<M>>,
    pub(crate) key_released: Option<KeyFn<M>>,
    pub(crate) mouse_moved: Option<MouseMoveFn<M>>,
}

impl<M> SketchConfig<M> {
    /// A configuration from the three required callbacks. Input handlers
    /// start unset.
    pub fn new<I, D, U>(init: I, draw: D, update: U) -> SketchConfig<M>
    where
        I: FnMut(&mut Sketch) -> M + 'static,
        D: FnMut(&mut Sketch, &M) + 'static,
        U: FnMut(M) -> M + 'static,
    {
        SketchConfig {
            title: "Easel".to_string(),
            init: Box::new(init),
            draw: Box::new(draw),
            update: Box::new(update),
            key_pressed: None,
            key_released: None,
            mouse_moved: None,
        }
    }

    /// Set the window title.
    pub fn with_title<S: Into<String>>(mut self, title: S) -> SketchConfig<M> {
        self.title = title.into();
        self
    }

    /// Handle key presses.
    pub fn on_key_pressed<F>(mut self, handler: F) -> SketchConfig<M>
    where
        F: FnMut(Option<char>, KeyCode, M) -> M + 'static,
    {
        self.key_pressed = Some(Box::new(handler));
        self
    }

    /// Handle key releases.
    pub fn on_key_released<F>(mut self, handler: F) -> SketchConfig<M>
    where
        F: FnMut(Option<char>, KeyCode, M) -> M + 'static,
    {
        self.key_released = Some(Box::new(handler));
        self
    }

    /// Handle mouse movement.
    pub fn on_mouse_moved<F>(mut self, handler: F) -> SketchConfig<M>
    where
        F: FnMut(f32, f32, f32, f32, M) -> M + 'static,
    {
        self.mouse_moved = Some(Box::new(handler));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> SketchConfig<u32> {
        SketchConfig::new(|_| 0u32, |_, _| {}, |m| m)
    }

    #[test]
    fn test_handlers_start_unset() {
        let config = minimal();
        assert!(config.key_pressed.is_none());
        assert!(config.key_released.is_none());
        assert!(config.mouse_moved.is_none());
    }

    #[test]
    fn test_builder_installs_handlers() {
        let config = minimal()
            .with_title("demo")
            .on_key_pressed(|_, _, m| m + 1)
            .on_mouse_moved(|_, _, _, _, m| m);
        assert_eq!(config.title, "demo");
        assert!(config.key_pressed.is_some());
        assert!(config.key_released.is_none());
        assert!(config.mouse_moved.is_some());
    }
}
