//! Unified error types for the service.

use thiserror::Error;

/// Unified error type for the service.
///
/// Only two things can fail, and both are fatal at startup: loading
/// configuration from the environment, and binding or serving the HTTP
/// listener. Request handlers are infallible at the application level.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// IO error (listener bind or serve failure).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;
