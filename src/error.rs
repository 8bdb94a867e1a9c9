//! Error types for scoreboard rendering

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for scoreboard operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building, rendering or exporting a scoreboard
#[derive(Error, Debug)]
pub enum Error {
    /// Ranking data violates the shape a scoreboard requires
    #[error("Invalid ranking: {0}")]
    ValidationError(String),

    /// Invalid style configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Failed to draw the canvas
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// Failed to encode the canvas as PNG
    #[error("PNG encoding failed: {0}")]
    EncodeError(String),

    /// Failed to write an exported image
    #[error("Failed to write {}: {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Error::ValidationError(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Error::ConfigError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_names_the_path() {
        let err = Error::IoError {
            path: PathBuf::from("/nope/board.png"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/nope/board.png"));
        assert!(msg.contains("missing"));
    }
}
