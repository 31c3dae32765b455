//! Error types for the form controller

use thiserror::Error;

/// Result type alias for controller operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can escape the controller.
///
/// Blank submissions and unparseable size text are recovered inside the
/// controller and never show up here.
#[derive(Error, Debug)]
pub enum Error {
    /// The symbol renderer refused the request
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// A scripted event could not be decoded
    #[error("Invalid event: {0}")]
    EventError(String),

    /// I/O failure while reading config or scripts
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
