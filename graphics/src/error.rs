//! Graphics error types.

use std::fmt;

/// Errors that can occur in the graphics system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphicsError {
    /// Failed to create the presentation surface.
    SurfaceCreationFailed(String),
    /// Failed to present a frame.
    PresentationFailed(String),
    /// Failed to parse or load a font.
    FontLoadFailed(String),
}

impl fmt::Display for GraphicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SurfaceCreationFailed(msg) => write!(f, "surface creation failed: {msg}"),
            Self::PresentationFailed(msg) => write!(f, "presentation failed: {msg}"),
            Self::FontLoadFailed(msg) => write!(f, "font load failed: {msg}"),
        }
    }
}

impl std::error::Error for GraphicsError {}
