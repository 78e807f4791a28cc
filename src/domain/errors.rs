//! Domain error types
//!
//! The error hierarchy for risaplot. All errors are domain-specific and
//! don't expose third-party types; host automation failures are wrapped
//! in [`HostError`] before they reach the rest of the crate.

use thiserror::Error;

/// Main risaplot error type
///
/// This is the primary error type used throughout the application.
/// Only `Connection` (and configuration/IO failures at startup) ever
/// propagate out of a run; everything else degrades to a reported skip.
#[derive(Debug, Error)]
pub enum RisaplotError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Failed to reach the host application (fatal, no retry)
    #[error("Connection error: {0}")]
    Connection(String),

    /// No model is open in the host application
    #[error("No active model found. Please open a model in RISA 3D.")]
    NoActiveModel,

    /// Host automation call failures
    #[error("Host error: {0}")]
    Host(#[from] HostError),

    /// Export process errors
    #[error("Export error: {0}")]
    Export(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Host-automation-specific errors
///
/// Errors that occur when talking to the RISA 3D automation surface.
/// These don't expose COM or platform types.
#[derive(Debug, Error)]
pub enum HostError {
    /// Failed to connect to the host application
    #[error("Failed to connect to RISA 3D: {0}")]
    ConnectionFailed(String),

    /// The host application is not running or not automatable
    #[error("RISA 3D is not running or does not expose automation: {0}")]
    NotRunning(String),

    /// A dispatched call failed
    #[error("Host call '{operation}' failed: {message}")]
    CallFailed { operation: String, message: String },

    /// The host returned something the adapter could not interpret
    #[error("Invalid response from host: {0}")]
    InvalidResponse(String),

    /// Automation is not available on this platform
    #[error("Host automation is unavailable on this platform: {0}")]
    Unsupported(String),
}

impl HostError {
    /// Shorthand for a failed dispatch call
    pub fn call(operation: impl Into<String>, message: impl Into<String>) -> Self {
        HostError::CallFailed {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for RisaplotError {
    fn from(err: std::io::Error) -> Self {
        RisaplotError::Io(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for RisaplotError {
    fn from(err: toml::de::Error) -> Self {
        RisaplotError::Configuration(format!("TOML parse error: {err}"))
    }
}
