//! Configuration management
//!
//! TOML-based configuration with environment variable substitution and
//! `RISAPLOT_*` overrides. The configuration file is optional; defaults
//! cover a standard RISA 3D installation.

pub mod loader;
pub mod schema;

pub use loader::load_config;
pub use schema::{ExportConfig, HostConfig, LoggingConfig, RisaplotConfig};
