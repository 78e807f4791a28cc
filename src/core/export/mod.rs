//! Export orchestration
//!
//! The batch loop that plots every Basic load case, plus output naming
//! and the run summary.

pub mod coordinator;
pub mod naming;
pub mod summary;

pub use coordinator::PlotCoordinator;
pub use summary::{PlotError, PlotErrorType, RunSummary};
