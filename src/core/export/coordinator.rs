//! Plot coordinator - main orchestrator for the batch export
//!
//! One run walks the state machine Disconnected -> Connected ->
//! ModelResolved -> ViewPrepared -> Exporting(i) -> Done, with teardown
//! reachable from every state. Only connection failure propagates out;
//! everything else degrades to a recorded skip and the run still reports
//! completion.

use crate::adapters::host::{HostApplication, HostModel, HostSession};
use crate::config::RisaplotConfig;
use crate::core::export::naming;
use crate::core::export::summary::{PlotError, PlotErrorType, RunSummary};
use crate::core::view::{FixedDelay, SettleStrategy, ViewDirector};
use crate::domain::load_case::LoadCase;
use crate::domain::result::Result;
use chrono::Local;
use std::path::Path;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;

/// Plot coordinator
pub struct PlotCoordinator {
    config: RisaplotConfig,
    host: Arc<dyn HostApplication>,
    director: ViewDirector,
}

impl PlotCoordinator {
    /// Creates a coordinator with the configured fixed-delay settle policy
    pub fn new(config: RisaplotConfig, host: Arc<dyn HostApplication>) -> Self {
        let settle: Rc<dyn SettleStrategy> = Rc::new(FixedDelay::from_config(&config.host));
        Self::with_settle(config, host, settle)
    }

    /// Creates a coordinator with an explicit settle policy
    pub fn with_settle(
        config: RisaplotConfig,
        host: Arc<dyn HostApplication>,
        settle: Rc<dyn SettleStrategy>,
    ) -> Self {
        Self {
            config,
            host,
            director: ViewDirector::new(settle),
        }
    }

    /// Executes one plot run
    ///
    /// Connects, runs the batch, and tears the session down on every exit
    /// path. Per-item failures are recorded in the summary and never abort
    /// the batch.
    ///
    /// # Errors
    ///
    /// Returns an error only when the connection itself fails.
    pub async fn execute(&self) -> Result<RunSummary> {
        let start = Instant::now();
        let mut summary = RunSummary::new();

        tracing::info!("Starting plot run");

        // Fatal on failure, no retry, nothing to tear down.
        let session = self.host.connect().await?;

        self.run_batch(session.as_ref(), &mut summary).await;

        if let Err(e) = session.disconnect().await {
            tracing::warn!(error = %e, "Failed to release host session");
        }

        let summary = summary.with_duration(start.elapsed());
        summary.log_summary();
        Ok(summary)
    }

    /// Runs the batch against an established session
    ///
    /// Records every failure in the summary instead of returning it, so
    /// the caller's teardown path stays unconditional.
    async fn run_batch(&self, session: &dyn HostSession, summary: &mut RunSummary) {
        // Resolve the open model.
        let model = match session.active_model().await {
            Ok(Some(model)) => model,
            Ok(None) => {
                tracing::warn!("No active model found. Please open a model in RISA 3D.");
                summary.add_error(PlotError::new(PlotErrorType::Model, "no active model"));
                return;
            }
            Err(e) => {
                tracing::error!(error = %e, "Error accessing active model");
                summary.add_error(PlotError::new(PlotErrorType::Model, e.to_string()));
                return;
            }
        };

        let model_file = model.file_name();
        tracing::info!(model = %model_file, "Active model");
        summary.model_file = Some(model_file);

        // Resolve and create the output directory. The timestamp is fixed
        // here, once per run.
        let output_dir = naming::resolve_output_dir(
            Path::new(&self.config.export.output_root),
            Local::now(),
        );
        if !self.config.export.dry_run {
            if let Err(e) = std::fs::create_dir_all(&output_dir) {
                tracing::error!(
                    path = %output_dir.display(),
                    error = %e,
                    "Failed to create output directory"
                );
                summary.add_error(PlotError::new(PlotErrorType::Filesystem, e.to_string()));
                return;
            }
        }
        summary.output_dir = Some(output_dir.clone());

        // Enumerate once; the case list is immutable for the run.
        let cases = match model.load_cases().await {
            Ok(cases) => cases,
            Err(e) => {
                tracing::error!(error = %e, "Error retrieving load cases");
                summary.add_error(PlotError::new(PlotErrorType::Enumeration, e.to_string()));
                return;
            }
        };

        let basic: Vec<LoadCase> = cases
            .into_iter()
            .filter(|lc| lc.category.is_basic())
            .collect();
        summary.total_basic_cases = basic.len();
        tracing::info!(count = basic.len(), "Found Basic Load Cases");

        if basic.is_empty() {
            tracing::info!("No Basic Load Cases defined, nothing to export");
            return;
        }

        // Global view setup, once per run. Failures are reported but the
        // batch still proceeds, matching the host's forgiving scripting
        // surface.
        if let Err(e) = self.director.prepare_view(model.as_ref()).await {
            tracing::error!(error = %e, "Error setting up view");
            summary.add_error(PlotError::new(PlotErrorType::View, e.to_string()));
        }

        self.export_cases(model.as_ref(), &basic, &output_dir, summary)
            .await;

        tracing::info!(
            exported = summary.exported,
            failed = summary.failed,
            "Plot generation complete"
        );
    }

    /// Exports each case in enumeration order, isolating failures per item
    async fn export_cases(
        &self,
        model: &dyn HostModel,
        cases: &[LoadCase],
        output_dir: &Path,
        summary: &mut RunSummary,
    ) {
        for case in cases {
            let path = output_dir.join(naming::plot_file_name(&case.label));
            tracing::info!(label = %case.label, "Processing load case");

            if let Err(e) = self.director.activate(model, case).await {
                tracing::warn!(label = %case.label, error = %e, "Failed to activate load case");
                summary.add_error(
                    PlotError::new(PlotErrorType::Activation, e.to_string())
                        .with_label(&case.label),
                );
                summary.failed += 1;
                continue;
            }

            if self.config.export.dry_run {
                tracing::info!(label = %case.label, path = %path.display(), "Dry run, skipping export");
            } else if let Err(e) = model.export_view(&path).await {
                tracing::warn!(label = %case.label, error = %e, "Failed to export view");
                summary.add_error(
                    PlotError::new(PlotErrorType::Export, e.to_string()).with_label(&case.label),
                );
                summary.failed += 1;
                continue;
            }

            tracing::info!(path = %path.display(), "Exported");
            summary.exported += 1;
        }
    }
}
