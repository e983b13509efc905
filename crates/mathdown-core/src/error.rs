//! Error types for mathdown

use thiserror::Error;

/// Main error type for mathdown operations
#[derive(Error, Debug)]
pub enum MathdownError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Render error during output generation
    #[error("Render error: {0}")]
    Render(String),
}

/// Result type alias for mathdown operations
pub type Result<T> = std::result::Result<T, MathdownError>;
