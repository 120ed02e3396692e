//! Application error types.

use std::fmt;

use easel_graphics::GraphicsError;

/// Errors that can occur while running a sketch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// The event loop could not be created or exited with an error.
    EventLoopFailed(String),
    /// The window could not be created.
    WindowCreationFailed(String),
    /// A graphics-layer failure.
    Graphics(GraphicsError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoopFailed(msg) => write!(f, "event loop failed: {msg}"),
            Self::WindowCreationFailed(msg) => write!(f, "window creation failed: {msg}"),
            Self::Graphics(err) => write!(f, "graphics error: {err}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<GraphicsError> for AppError {
    fn from(err: GraphicsError) -> AppError {
        AppError::Graphics(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::EventLoopFailed("no display".to_string());
        assert_eq!(err.to_string(), "event loop failed: no display");

        let err: AppError = GraphicsError::PresentationFailed("lost".to_string()).into();
        assert_eq!(err.to_string(), "graphics error: presentation failed: lost");
    }
}
