//! Shared test fixtures
//!
//! A recording fake host implementing the automation capability traits,
//! with per-call failure injection. Tests assert against the recorded
//! call sequence to pin down orchestration behavior.

use async_trait::async_trait;
use risaplot::adapters::host::{HostApplication, HostModel, HostSession};
use risaplot::domain::{HostError, LoadCase, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// One recorded host call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    ActiveModel,
    LoadCases,
    SetIsometricView,
    SetLoadOverlay(bool),
    Activate(String),
    ExportView(PathBuf),
}

#[derive(Default)]
struct FakeHostState {
    cases: Vec<LoadCase>,
    model_open: bool,
    file_name: String,
    fail_connect: bool,
    fail_enumeration: bool,
    fail_view_setup: bool,
    fail_activation: HashSet<String>,
    fail_export: HashSet<String>,
    calls: Mutex<Vec<HostCall>>,
    disconnects: Mutex<usize>,
}

impl FakeHostState {
    fn record(&self, call: HostCall) {
        self.calls.lock().unwrap().push(call);
    }
}

/// Recording fake implementation of the host application
pub struct FakeHost {
    state: Arc<FakeHostState>,
}

impl FakeHost {
    /// A host with an open model containing the given load cases
    pub fn with_cases(cases: Vec<LoadCase>) -> Self {
        Self {
            state: Arc::new(FakeHostState {
                cases,
                model_open: true,
                file_name: "Tower.r3d".to_string(),
                ..Default::default()
            }),
        }
    }

    /// A host with no open model
    pub fn without_model() -> Self {
        let mut host = Self::with_cases(Vec::new());
        Arc::get_mut(&mut host.state).unwrap().model_open = false;
        host
    }

    /// Make `connect` fail
    pub fn failing_connect(mut self) -> Self {
        Arc::get_mut(&mut self.state).unwrap().fail_connect = true;
        self
    }

    /// Make load-case enumeration fail
    pub fn failing_enumeration(mut self) -> Self {
        Arc::get_mut(&mut self.state).unwrap().fail_enumeration = true;
        self
    }

    /// Make the isometric-view command fail
    pub fn failing_view_setup(mut self) -> Self {
        Arc::get_mut(&mut self.state).unwrap().fail_view_setup = true;
        self
    }

    /// Make activation of the given label fail
    pub fn failing_activation(mut self, label: &str) -> Self {
        Arc::get_mut(&mut self.state)
            .unwrap()
            .fail_activation
            .insert(label.to_string());
        self
    }

    /// Make export after the given label fail
    pub fn failing_export(mut self, label: &str) -> Self {
        Arc::get_mut(&mut self.state)
            .unwrap()
            .fail_export
            .insert(label.to_string());
        self
    }

    /// All calls recorded so far, in order
    pub fn calls(&self) -> Vec<HostCall> {
        self.state.calls.lock().unwrap().clone()
    }

    /// Recorded export target paths, in order
    pub fn export_paths(&self) -> Vec<PathBuf> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                HostCall::ExportView(path) => Some(path),
                _ => None,
            })
            .collect()
    }

    /// Recorded activation labels, in order
    pub fn activated_labels(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                HostCall::Activate(label) => Some(label),
                _ => None,
            })
            .collect()
    }

    /// How many times the session was released
    pub fn disconnect_count(&self) -> usize {
        *self.state.disconnects.lock().unwrap()
    }
}

#[async_trait(?Send)]
impl HostApplication for FakeHost {
    async fn connect(&self) -> Result<Box<dyn HostSession>> {
        if self.state.fail_connect {
            return Err(HostError::ConnectionFailed("host not running".to_string()).into());
        }
        Ok(Box::new(FakeSession {
            state: self.state.clone(),
        }))
    }
}

struct FakeSession {
    state: Arc<FakeHostState>,
}

#[async_trait(?Send)]
impl HostSession for FakeSession {
    async fn active_model(&self) -> Result<Option<Arc<dyn HostModel>>> {
        self.state.record(HostCall::ActiveModel);
        if !self.state.model_open {
            return Ok(None);
        }
        Ok(Some(Arc::new(FakeModel {
            state: self.state.clone(),
        })))
    }

    async fn disconnect(self: Box<Self>) -> Result<()> {
        *self.state.disconnects.lock().unwrap() += 1;
        Ok(())
    }
}

struct FakeModel {
    state: Arc<FakeHostState>,
}

#[async_trait(?Send)]
impl HostModel for FakeModel {
    fn file_name(&self) -> String {
        self.state.file_name.clone()
    }

    async fn load_cases(&self) -> Result<Vec<LoadCase>> {
        self.state.record(HostCall::LoadCases);
        if self.state.fail_enumeration {
            return Err(HostError::call("GetLoadCases", "collection unavailable").into());
        }
        Ok(self.state.cases.clone())
    }

    async fn set_isometric_view(&self) -> Result<()> {
        self.state.record(HostCall::SetIsometricView);
        if self.state.fail_view_setup {
            return Err(HostError::call("SetIsometricView", "view busy").into());
        }
        Ok(())
    }

    async fn set_load_overlay(&self, visible: bool) -> Result<()> {
        self.state.record(HostCall::SetLoadOverlay(visible));
        Ok(())
    }

    async fn activate_load_case(&self, label: &str) -> Result<()> {
        self.state.record(HostCall::Activate(label.to_string()));
        if self.state.fail_activation.contains(label) {
            return Err(HostError::call("SetCurrentLoadCase", "label not found").into());
        }
        Ok(())
    }

    async fn export_view(&self, path: &Path) -> Result<()> {
        // Record first: an export attempt was issued either way.
        self.state.record(HostCall::ExportView(path.to_path_buf()));
        let stem = path.file_name().unwrap().to_string_lossy().to_string();
        if self
            .state
            .fail_export
            .iter()
            .any(|label| stem.starts_with(&label.replace(' ', "_")))
        {
            return Err(HostError::call("ExportView", "render failed").into());
        }
        Ok(())
    }
}
