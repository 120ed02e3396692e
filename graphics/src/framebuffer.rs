//! Offscreen framebuffers.
//!
//! A [`Framebuffer`] is a copyable handle into a per-context
//! [`FramebufferStore`]. Between `begin` and `end`, drawing is redirected
//! into the framebuffer's canvas; `end` restores the previous target.
//! Begins nest, most-recent-first.

use crate::canvas::Canvas;

/// Handle to an offscreen render target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Framebuffer(pub(crate) usize);

/// Owns framebuffer canvases and tracks which one is receiving draws.
#[derive(Debug, Default)]
pub struct FramebufferStore {
    targets: Vec<Canvas>,
    active: Vec<usize>,
}

impl FramebufferStore {
    pub fn new() -> FramebufferStore {
        FramebufferStore::default()
    }

    /// Allocate a framebuffer with its own canvas.
    pub fn create(&mut self, width: u32, height: u32, density: u32) -> Framebuffer {
        let handle = Framebuffer(self.targets.len());
        self.targets.push(Canvas::with_density(width, height, density));
        log::debug!("framebuffer {} created: {width}x{height}", handle.0);
        handle
    }

    /// Redirect subsequent drawing into `fb`.
    pub fn begin(&mut self, fb: Framebuffer) {
        if fb.0 >= self.targets.len() {
            log::warn!("begin on unknown framebuffer {}", fb.0);
            return;
        }
        self.active.push(fb.0);
    }

    /// Stop redirecting into `fb`, restoring the previous target.
    pub fn end(&mut self, fb: Framebuffer) {
        match self.active.last() {
            Some(&top) if top == fb.0 => {
                self.active.pop();
            }
            Some(&top) => log::warn!("end on framebuffer {} while {} is active", fb.0, top),
            None => log::warn!("end on framebuffer {} with none active", fb.0),
        }
    }

    /// The canvas currently receiving redirected draws, if any.
    pub fn active_mut(&mut self) -> Option<&mut Canvas> {
        let index = *self.active.last()?;
        self.targets.get_mut(index)
    }

    /// A framebuffer's canvas.
    pub fn canvas(&self, fb: Framebuffer) -> Option<&Canvas> {
        self.targets.get(fb.0)
    }

    /// Composite `src` onto the active target, or onto `fallback` when no
    /// framebuffer is receiving draws. Compositing a framebuffer onto
    /// itself is skipped.
    pub fn composite(&mut self, src: Framebuffer, fallback: &mut Canvas, x: f32, y: f32) {
        use crate::surface::RasterSurface;

        if src.0 >= self.targets.len() {
            log::warn!("composite from unknown framebuffer {}", src.0);
            return;
        }

        match self.active.last().copied() {
            None => fallback.blit(&self.targets[src.0], x, y),
            Some(dst) if dst == src.0 => {
                log::warn!("framebuffer {} composited onto itself; skipping", src.0);
            }
            Some(dst) => {
                let (src_canvas, dst_canvas) = if src.0 < dst {
                    let (left, right) = self.targets.split_at_mut(dst);
                    (&left[src.0], &mut right[0])
                } else {
                    let (left, right) = self.targets.split_at_mut(src.0);
                    (&right[0], &mut left[dst])
                };
                dst_canvas.blit(src_canvas, x, y);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_end_redirects() {
        let mut store = FramebufferStore::new();
        let fb = store.create(8, 8, 1);

        assert!(store.active_mut().is_none());
        store.begin(fb);
        assert!(store.active_mut().is_some());
        store.end(fb);
        assert!(store.active_mut().is_none());
    }

    #[test]
    fn test_nested_begins_restore_in_order() {
        let mut store = FramebufferStore::new();
        let a = store.create(8, 8, 1);
        let b = store.create(4, 4, 1);

        store.begin(a);
        store.begin(b);
        assert_eq!(store.active_mut().unwrap().width(), 4);
        store.end(b);
        assert_eq!(store.active_mut().unwrap().width(), 8);
        store.end(a);
        assert!(store.active_mut().is_none());
    }

    #[test]
    fn test_unknown_handle_is_ignored() {
        let mut store = FramebufferStore::new();
        store.begin(Framebuffer(3));
        assert!(store.active_mut().is_none());
    }

    #[test]
    fn test_composite_targets_fallback_when_idle() {
        use crate::surface::RasterSurface;
        use easel_core::Color;

        let mut store = FramebufferStore::new();
        let fb = store.create(2, 2, 1);

        store.begin(fb);
        store.active_mut().unwrap().fill_all(Color::RED);
        store.end(fb);

        let mut main = Canvas::new(8, 8);
        store.composite(fb, &mut main, 3.0, 3.0);
        assert_eq!(main.pixel(3, 3), Some(Color::RED));
        assert_eq!(main.pixel(0, 0), Some(Color::TRANSPARENT));
    }

    #[test]
    fn test_composite_between_framebuffers() {
        use crate::surface::RasterSurface;
        use easel_core::Color;

        let mut store = FramebufferStore::new();
        let small = store.create(2, 2, 1);
        let big = store.create(8, 8, 1);

        store.begin(small);
        store.active_mut().unwrap().fill_all(Color::GREEN);
        store.end(small);

        let mut main = Canvas::new(8, 8);
        store.begin(big);
        store.composite(small, &mut main, 1.0, 1.0);
        store.end(big);

        // Landed in `big`, not in the fallback.
        assert!(main.data().iter().all(|&b| b == 0));
        assert_eq!(store.canvas(big).unwrap().pixel(1, 1), Some(Color::GREEN));
    }

    #[test]
    fn test_mismatched_end_keeps_target() {
        let mut store = FramebufferStore::new();
        let a = store.create(8, 8, 1);
        let b = store.create(4, 4, 1);

        store.begin(a);
        store.end(b);
        assert_eq!(store.active_mut().unwrap().width(), 8);
    }
}
