//! Host application adapters
//!
//! The live adapter drives RISA 3D over COM automation and only exists on
//! Windows. Everywhere else the factory hands back an adapter whose
//! `connect` reports the platform gap, keeping the rest of the crate
//! portable and testable.

pub mod traits;

#[cfg(windows)]
pub mod com;

pub use traits::{HostApplication, HostModel, HostSession};

use crate::config::HostConfig;
use std::sync::Arc;

/// Creates the platform host adapter
pub fn create_host(config: &HostConfig) -> Arc<dyn HostApplication> {
    #[cfg(windows)]
    {
        Arc::new(com::ComHostApplication::new(config.prog_id.clone()))
    }

    #[cfg(not(windows))]
    {
        Arc::new(UnsupportedHost {
            prog_id: config.prog_id.clone(),
        })
    }
}

/// Stand-in adapter for platforms without COM automation
#[cfg(not(windows))]
struct UnsupportedHost {
    prog_id: String,
}

#[cfg(not(windows))]
#[async_trait::async_trait(?Send)]
impl HostApplication for UnsupportedHost {
    async fn connect(&self) -> crate::domain::Result<Box<dyn HostSession>> {
        Err(crate::domain::HostError::Unsupported(format!(
            "automating '{}' requires Windows COM",
            self.prog_id
        ))
        .into())
    }
}
