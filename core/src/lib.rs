//! # Easel Core
//!
//! Core crate for Easel basic types: colors, platform-agnostic input
//! identifiers, and small numeric helpers shared by every layer.

pub mod color;
pub mod input;
pub mod math;

pub use color::Color;
pub use input::KeyCode;
pub use math::{constrain, lerp, map_range};

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the core subsystem.
pub fn init() {
    log::info!("Easel Core v{} initialized", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
