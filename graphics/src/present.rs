//! Frame presentation.
//!
//! Uploads a canvas's physical RGBA buffer to the window through the
//! `pixels` swapchain once per frame. The headless variant drops frames
//! and only counts them; it backs tests and any embedder that drives the
//! loop without a window.

use std::sync::Arc;

use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::canvas::Canvas;
use crate::error::GraphicsError;

enum Target {
    Windowed {
        window: Arc<Window>,
        pixels: Pixels<'static>,
        buffer_size: (u32, u32),
    },
    Headless,
}

/// Presents canvas contents, either to a window or nowhere.
pub struct Presenter {
    target: Target,
    presented: u64,
}

impl Presenter {
    /// Create a presenter for a window, sized to the given canvas.
    pub fn windowed(window: Arc<Window>, canvas: &Canvas) -> Result<Presenter, GraphicsError> {
        let size = window.inner_size();
        let buffer_size = (canvas.physical_width(), canvas.physical_height());
        let surface = SurfaceTexture::new(size.width, size.height, window.clone());
        let pixels = Pixels::new(buffer_size.0, buffer_size.1, surface)
            .map_err(|e| GraphicsError::SurfaceCreationFailed(e.to_string()))?;

        log::info!(
            "presenter created: window {}x{}, buffer {}x{}",
            size.width,
            size.height,
            buffer_size.0,
            buffer_size.1
        );

        Ok(Presenter {
            target: Target::Windowed {
                window,
                pixels,
                buffer_size,
            },
            presented: 0,
        })
    }

    /// Create a presenter that drops frames.
    pub fn headless() -> Presenter {
        Presenter {
            target: Target::Headless,
            presented: 0,
        }
    }

    /// Resize the window-facing surface after a window resize.
    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), GraphicsError> {
        if let Target::Windowed { pixels, .. } = &mut self.target {
            pixels
                .resize_surface(width.max(1), height.max(1))
                .map_err(|e| GraphicsError::PresentationFailed(e.to_string()))?;
        }
        Ok(())
    }

    /// Upload and present one frame.
    pub fn present(&mut self, canvas: &Canvas) -> Result<(), GraphicsError> {
        match &mut self.target {
            Target::Windowed {
                window,
                pixels,
                buffer_size,
            } => {
                let canvas_size = (canvas.physical_width(), canvas.physical_height());
                if *buffer_size != canvas_size {
                    pixels
                        .resize_buffer(canvas_size.0, canvas_size.1)
                        .map_err(|e| GraphicsError::PresentationFailed(e.to_string()))?;
                    *buffer_size = canvas_size;
                }

                pixels.frame_mut().copy_from_slice(canvas.data());
                window.pre_present_notify();
                pixels
                    .render()
                    .map_err(|e| GraphicsError::PresentationFailed(e.to_string()))?;
            }
            Target::Headless => {}
        }

        self.presented += 1;
        Ok(())
    }

    /// Number of frames presented so far.
    pub fn presented_frames(&self) -> u64 {
        self.presented
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_counts_frames() {
        let canvas = Canvas::new(4, 4);
        let mut presenter = Presenter::headless();
        assert_eq!(presenter.presented_frames(), 0);

        presenter.present(&canvas).unwrap();
        presenter.present(&canvas).unwrap();
        assert_eq!(presenter.presented_frames(), 2);
    }

    #[test]
    fn test_headless_resize_is_a_no_op() {
        let mut presenter = Presenter::headless();
        assert!(presenter.resize_surface(100, 100).is_ok());
    }
}
