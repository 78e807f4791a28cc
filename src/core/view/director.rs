//! View director
//!
//! Issues the ordered sequence of view-state mutations the export loop
//! depends on. Every mutation is followed by the settle wait before the
//! caller may issue a dependent read or export.

use crate::adapters::host::HostModel;
use crate::core::view::settle::SettleStrategy;
use crate::domain::load_case::LoadCase;
use crate::domain::result::Result;
use std::rc::Rc;

/// Directs whole-model view state on the host
pub struct ViewDirector {
    settle: Rc<dyn SettleStrategy>,
}

impl ViewDirector {
    /// Creates a director with the given settle policy
    pub fn new(settle: Rc<dyn SettleStrategy>) -> Self {
        Self { settle }
    }

    /// Applies the global view preconditions for exporting
    ///
    /// Isometric orientation, then the applied-loads overlay. These are
    /// whole-model properties unaffected by load-case activation, so the
    /// coordinator calls this once per run rather than once per case.
    pub async fn prepare_view(&self, model: &dyn HostModel) -> Result<()> {
        model.set_isometric_view().await?;
        self.settle.view_settled().await;
        tracing::info!("Set to ISO view");

        model.set_load_overlay(true).await?;
        self.settle.view_settled().await;
        tracing::info!("Applied loads display: on");

        Ok(())
    }

    /// Activates a load case and waits for the render to settle
    pub async fn activate(&self, model: &dyn HostModel, case: &LoadCase) -> Result<()> {
        model.activate_load_case(&case.label).await?;
        self.settle.activation_settled().await;
        tracing::debug!(label = %case.label, "Load case activated");
        Ok(())
    }
}
