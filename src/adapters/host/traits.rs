//! Host automation capability traits
//!
//! These traits define the surface risaplot consumes from the structural
//! analysis host: connect, active-model lookup, load-case enumeration,
//! view mutations, activation, and frame export. The orchestrator only
//! ever sees these traits, so it can run against a fake host in tests.
//!
//! All host calls are synchronous and call-and-acknowledge on the wire;
//! the async signatures exist so settle waits and the rest of the crate
//! share one runtime. The whole pipeline is single-threaded (the COM
//! apartment requires it), hence `?Send` futures throughout.

use crate::domain::load_case::LoadCase;
use crate::domain::result::Result;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

/// Entry point to the host application
///
/// Implemented by the platform adapter (COM on Windows) and by the fake
/// host used in tests.
#[async_trait(?Send)]
pub trait HostApplication {
    /// Acquire a live session with the host application
    ///
    /// # Errors
    ///
    /// Returns `RisaplotError::Connection` or `RisaplotError::Host` when
    /// the host is not running or not automatable. This failure is fatal
    /// to the run; there is no retry.
    async fn connect(&self) -> Result<Box<dyn HostSession>>;
}

/// An established connection to the host application
///
/// Owned exclusively by one run and torn down exactly once at the end of
/// that run, on every exit path.
#[async_trait(?Send)]
pub trait HostSession {
    /// Look up the currently open model
    ///
    /// Returns `Ok(None)` when no model is open; that is a reported
    /// condition, not a crash.
    async fn active_model(&self) -> Result<Option<Arc<dyn HostModel>>>;

    /// Release the session
    ///
    /// Consumes the session so it cannot be used afterwards. Adapters
    /// additionally release on drop as a backstop.
    async fn disconnect(self: Box<Self>) -> Result<()>;
}

/// A handle to the currently open model
///
/// All view-state mutations are global, ordered, and acknowledged before
/// the host's render pipeline has caught up; callers must apply a settle
/// wait before any dependent export.
#[async_trait(?Send)]
pub trait HostModel {
    /// Filename of the open model, for diagnostics only
    fn file_name(&self) -> String;

    /// Enumerate all load cases in the host's native definition order
    async fn load_cases(&self) -> Result<Vec<LoadCase>>;

    /// Orient the view isometrically (idempotent)
    async fn set_isometric_view(&self) -> Result<()>;

    /// Toggle the applied-loads overlay (idempotent)
    async fn set_load_overlay(&self, visible: bool) -> Result<()>;

    /// Make the named load case the active one
    async fn activate_load_case(&self, label: &str) -> Result<()>;

    /// Export the current view as an image to `path`
    async fn export_view(&self, path: &Path) -> Result<()>;
}
