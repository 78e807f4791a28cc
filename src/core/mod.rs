//! Core business logic
//!
//! The export orchestration (batch loop, naming, summary) and the view
//! direction layer with its settle policy.

pub mod export;
pub mod view;
