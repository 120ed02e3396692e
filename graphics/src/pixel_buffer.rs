//! Staged raw pixel access.
//!
//! `load_pixels` snapshots the canvas into a [`PixelBuffer`], `set_pixel`
//! writes into the staged bytes, and `update_pixels` stores the result
//! back. The staged layout matches the canvas: row-major RGBA8 at the
//! physical resolution (logical size times pixel density).

use easel_core::Color;

use crate::canvas::Canvas;

/// A staged copy of a canvas's physical RGBA bytes.
#[derive(Debug, Clone, Default)]
pub struct PixelBuffer {
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new() -> PixelBuffer {
        PixelBuffer::default()
    }

    /// Snapshot a canvas's physical buffer into this stage.
    pub fn load_from(&mut self, canvas: &Canvas) {
        self.data.clear();
        self.data.extend_from_slice(canvas.data());
    }

    /// Store the staged bytes back into a canvas.
    ///
    /// If the canvas was replaced or resized since the last load, the
    /// lengths no longer match and the store is skipped.
    pub fn store_into(&self, canvas: &mut Canvas) {
        let dst = canvas.data_mut();
        if dst.len() != self.data.len() {
            log::warn!(
                "stale pixel stage ({} bytes) for canvas ({} bytes); skipping store",
                self.data.len(),
                dst.len()
            );
            return;
        }
        dst.copy_from_slice(&self.data);
    }

    /// Write one logical pixel as a `density x density` block of physical
    /// subpixels.
    ///
    /// `width` is the logical row width used for addressing; the caller
    /// supplies it along with `height` and neither is validated against
    /// the staged length. Coordinates are rounded to the nearest integer.
    /// Slots that fall outside the staged bytes are silently skipped.
    /// Callers are responsible for loading beforehand and storing
    /// afterwards; this method does neither.
    pub fn set_pixel(
        &mut self,
        x: f32,
        y: f32,
        width: u32,
        _height: u32,
        color: Color,
        density: u32,
    ) {
        let d = density as i64;
        let x = x.round() as i64;
        let y = y.round() as i64;
        let bytes = color.to_bytes();

        for i in 0..d {
            for j in 0..d {
                let index = 4 * ((y * d + j) * width as i64 * d + (x * d + i));
                if index < 0 {
                    continue;
                }
                if let Some(slot) = self.data.get_mut(index as usize..index as usize + 4) {
                    slot.copy_from_slice(&bytes);
                }
            }
        }
    }

    /// Staged bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable staged bytes.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Whether anything has been loaded into the stage.
    pub fn is_loaded(&self) -> bool {
        !self.data.is_empty()
    }
}
