//! Load case types
//!
//! A load case is a named, categorized load condition defined inside the
//! open model. Risaplot never creates or mutates load cases; they are only
//! enumerated and activated.

use std::fmt;

/// Category of a load case as reported by the host
///
/// Only `Basic` is in scope for plotting; combinations and envelopes are
/// enumerated but filtered out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadCaseCategory {
    /// A single, non-combined applied-load condition
    Basic,
    /// A combination of multiple cases
    Combination,
    /// An envelope over multiple cases
    Envelope,
    /// Any category code the adapter does not recognize
    Other,
}

impl LoadCaseCategory {
    /// Maps the host's numeric category code to a category
    ///
    /// RISA reports Basic as 0; 1 and 2 are combination and envelope kinds.
    pub fn from_host_code(code: i32) -> Self {
        match code {
            0 => LoadCaseCategory::Basic,
            1 => LoadCaseCategory::Combination,
            2 => LoadCaseCategory::Envelope,
            _ => LoadCaseCategory::Other,
        }
    }

    /// Returns true for the `Basic` category
    pub fn is_basic(self) -> bool {
        self == LoadCaseCategory::Basic
    }
}

impl fmt::Display for LoadCaseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LoadCaseCategory::Basic => "Basic",
            LoadCaseCategory::Combination => "Combination",
            LoadCaseCategory::Envelope => "Envelope",
            LoadCaseCategory::Other => "Other",
        };
        write!(f, "{name}")
    }
}

/// A load case defined in the open model
///
/// `label` is the host's display name and may contain spaces; it is used
/// both for activation (the host addresses cases by label) and to derive
/// the output filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadCase {
    /// Display name as reported by the host
    pub label: String,

    /// Category reported by the host
    pub category: LoadCaseCategory,
}

impl LoadCase {
    /// Creates a new load case
    pub fn new(label: impl Into<String>, category: LoadCaseCategory) -> Self {
        Self {
            label: label.into(),
            category,
        }
    }

    /// Creates a Basic load case (test and adapter convenience)
    pub fn basic(label: impl Into<String>) -> Self {
        Self::new(label, LoadCaseCategory::Basic)
    }
}

impl fmt::Display for LoadCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.category)
    }
}
