//! Result type alias for risaplot operations

use super::errors::RisaplotError;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, RisaplotError>;
