//! Configuration schema
//!
//! Typed configuration structures deserialized from `risaplot.toml`.
//! Every field carries a serde default so a partial (or absent) file is
//! valid.

use serde::Deserialize;
use std::time::Duration;

/// Root configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RisaplotConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Host automation settings
    #[serde(default)]
    pub host: HostConfig,

    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Application-level settings
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Host automation settings
#[derive(Debug, Clone, Deserialize)]
pub struct HostConfig {
    /// COM ProgID of the host application
    #[serde(default = "default_prog_id")]
    pub prog_id: String,

    /// Settle delay after a view-state mutation, in milliseconds
    ///
    /// The host acknowledges view commands before the screen has finished
    /// updating; this is the coarse synchronization substitute for a
    /// completion callback. Zero is permitted (used by tests).
    #[serde(default = "default_view_settle_ms")]
    pub view_settle_ms: u64,

    /// Settle delay after activating a load case, in milliseconds
    #[serde(default = "default_activation_settle_ms")]
    pub activation_settle_ms: u64,
}

impl HostConfig {
    /// View settle delay as a `Duration`
    pub fn view_settle(&self) -> Duration {
        Duration::from_millis(self.view_settle_ms)
    }

    /// Activation settle delay as a `Duration`
    pub fn activation_settle(&self) -> Duration {
        Duration::from_millis(self.activation_settle_ms)
    }
}

/// Export settings
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Directory under which the timestamped output folder is created
    #[serde(default = "default_output_root")]
    pub output_root: String,

    /// Drive the host and enumerate cases without writing image files
    #[serde(default)]
    pub dry_run: bool,
}

/// Logging settings
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Enable rolling file logging in addition to console output
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Rotation policy: "daily" or "hourly"
    #[serde(default = "default_log_rotation")]
    pub local_rotation: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_prog_id() -> String {
    "RISA3D.Application".to_string()
}

fn default_view_settle_ms() -> u64 {
    500
}

fn default_activation_settle_ms() -> u64 {
    1000
}

fn default_output_root() -> String {
    ".".to_string()
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            prog_id: default_prog_id(),
            view_settle_ms: default_view_settle_ms(),
            activation_settle_ms: default_activation_settle_ms(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_root: default_output_root(),
            dry_run: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_log_rotation(),
        }
    }
}

impl RisaplotConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns a human-readable message for the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        match self.application.log_level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(format!(
                    "Invalid log level: {other}. Must be one of: trace, debug, info, warn, error"
                ));
            }
        }

        if self.host.prog_id.trim().is_empty() {
            return Err("host.prog_id must not be empty".to_string());
        }

        if self.export.output_root.trim().is_empty() {
            return Err("export.output_root must not be empty".to_string());
        }

        match self.logging.local_rotation.as_str() {
            "daily" | "hourly" => {}
            other => {
                return Err(format!(
                    "Invalid log rotation: {other}. Must be 'daily' or 'hourly'"
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = RisaplotConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.host.prog_id, "RISA3D.Application");
        assert_eq!(config.host.view_settle_ms, 500);
        assert_eq!(config.host.activation_settle_ms, 1000);
        assert_eq!(config.export.output_root, ".");
        assert!(!config.export.dry_run);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: RisaplotConfig = toml::from_str(
            r#"
[host]
view_settle_ms = 250
"#,
        )
        .unwrap();

        assert_eq!(config.host.view_settle_ms, 250);
        assert_eq!(config.host.activation_settle_ms, 1000);
        assert_eq!(config.application.log_level, "info");
    }

    #[test]
    fn test_settle_durations() {
        let config = RisaplotConfig::default();
        assert_eq!(config.host.view_settle(), Duration::from_millis(500));
        assert_eq!(config.host.activation_settle(), Duration::from_millis(1000));
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut config = RisaplotConfig::default();
        config.application.log_level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_prog_id_rejected() {
        let mut config = RisaplotConfig::default();
        config.host.prog_id = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_rotation_rejected() {
        let mut config = RisaplotConfig::default();
        config.logging.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());
    }
}
