//! Core domain types
//!
//! This module contains the domain model for risaplot: load cases,
//! the error hierarchy, and the crate-wide result alias.

pub mod errors;
pub mod load_case;
pub mod result;

pub use errors::{HostError, RisaplotError};
pub use load_case::{LoadCase, LoadCaseCategory};
pub use result::Result;
