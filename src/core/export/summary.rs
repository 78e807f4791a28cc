//! Run summary and per-item error reporting
//!
//! A run completes (and reports completion) even when individual load
//! cases fail; the summary carries every recorded failure with the
//! offending label so nothing is silently swallowed.

use std::path::PathBuf;
use std::time::Duration;

/// Summary of one plot run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Filename of the model that was plotted, when one was resolved
    pub model_file: Option<String>,

    /// Output directory for this run, once resolved
    pub output_dir: Option<PathBuf>,

    /// Number of Basic load cases enumerated at run start
    pub total_basic_cases: usize,

    /// Number of successful export attempts
    pub exported: usize,

    /// Number of load cases that failed activation or export
    pub failed: usize,

    /// Duration of the run
    pub duration: Duration,

    /// Errors recorded during the run
    pub errors: Vec<PlotError>,
}

impl RunSummary {
    /// Creates an empty summary
    pub fn new() -> Self {
        Self {
            model_file: None,
            output_dir: None,
            total_basic_cases: 0,
            exported: 0,
            failed: 0,
            duration: Duration::from_secs(0),
            errors: Vec::new(),
        }
    }

    /// Sets the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Records an error
    pub fn add_error(&mut self, error: PlotError) {
        self.errors.push(error);
    }

    /// True when every enumerated case was exported and nothing else
    /// went wrong
    pub fn is_successful(&self) -> bool {
        self.failed == 0 && self.errors.is_empty()
    }

    /// True when there was nothing to plot
    pub fn nothing_to_export(&self) -> bool {
        self.total_basic_cases == 0
    }

    /// Logs the summary
    pub fn log_summary(&self) {
        tracing::info!(
            model = self.model_file.as_deref().unwrap_or("<none>"),
            total_basic_cases = self.total_basic_cases,
            exported = self.exported,
            failed = self.failed,
            duration_secs = self.duration.as_secs(),
            "Plot run completed"
        );

        if !self.errors.is_empty() {
            tracing::warn!(error_count = self.errors.len(), "Run completed with errors");
            for error in &self.errors {
                tracing::warn!(
                    error_type = ?error.error_type,
                    label = error.label.as_deref().unwrap_or("-"),
                    message = %error.message,
                    "Plot error"
                );
            }
        }
    }
}

impl Default for RunSummary {
    fn default() -> Self {
        Self::new()
    }
}

/// Type of a recorded error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlotErrorType {
    /// No model open, or the model lookup failed
    Model,
    /// Output directory could not be created
    Filesystem,
    /// Load-case enumeration failed
    Enumeration,
    /// Global view setup failed
    View,
    /// A load case failed to activate
    Activation,
    /// A view export failed
    Export,
}

/// Error recorded during a run
#[derive(Debug, Clone)]
pub struct PlotError {
    /// Type of error
    pub error_type: PlotErrorType,

    /// Error message
    pub message: String,

    /// Label of the offending load case, when the failure is per-item
    pub label: Option<String>,
}

impl PlotError {
    /// Creates a new error record
    pub fn new(error_type: PlotErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
            label: None,
        }
    }

    /// Attaches the offending load case label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}
