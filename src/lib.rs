// Risaplot - RISA 3D Load Case ISO View Plot Automation
// Copyright (c) 2026 Risaplot Contributors
// Licensed under the MIT License

//! # Risaplot - RISA 3D Load Case ISO View Plot Automation
//!
//! Risaplot automates one repetitive task against an already-running
//! RISA 3D instance: for every Basic Load Case in the open model it
//! orients the view isometrically, enables the applied-loads overlay,
//! activates the case, and exports the rendered view as a PNG into a
//! timestamped output folder.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and the run entry point
//! - [`core`] - Orchestration (batch export, view direction, naming)
//! - [`adapters`] - Host automation behind capability traits
//! - [`domain`] - Load cases and the error hierarchy
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! The host surface is consumed through the traits in
//! [`adapters::host::traits`], so the orchestration in
//! [`core::export::PlotCoordinator`] can be exercised against a fake host
//! without RISA 3D present. The live COM adapter only exists on Windows.
//!
//! ## Failure policy
//!
//! A single load case's failure never aborts the batch: it is recorded in
//! the [`core::export::RunSummary`] with the offending label and the loop
//! continues. Only a connection failure is fatal. The session is torn
//! down on every exit path.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
