//! Configuration loader with TOML parsing and environment variable overrides
//!
//! Loading order: read the file (if present), substitute `${VAR}`
//! placeholders, parse, apply `RISAPLOT_*` overrides, validate. A missing
//! file is not an error; defaults are used instead so the tool runs with
//! zero setup.

use super::schema::RisaplotConfig;
use crate::domain::errors::RisaplotError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file, falling back to defaults
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed, if a
/// referenced environment variable is unset, or if validation fails.
pub fn load_config(path: impl AsRef<Path>) -> Result<RisaplotConfig> {
    let path = path.as_ref();

    let mut config = if path.exists() {
        let contents = fs::read_to_string(path).map_err(|e| {
            RisaplotError::Configuration(format!(
                "Failed to read configuration file {}: {}",
                path.display(),
                e
            ))
        })?;

        let contents = substitute_env_vars(&contents)?;

        toml::from_str(&contents)
            .map_err(|e| RisaplotError::Configuration(format!("Failed to parse TOML: {e}")))?
    } else {
        tracing::debug!(
            path = %path.display(),
            "Configuration file not found, using defaults"
        );
        RisaplotConfig::default()
    };

    apply_env_overrides(&mut config);

    config
        .validate()
        .map_err(|e| RisaplotError::Configuration(format!("Configuration validation failed: {e}")))?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(RisaplotError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the RISAPLOT_* prefix
///
/// Pattern: RISAPLOT_<SECTION>_<KEY>, e.g. RISAPLOT_HOST_PROG_ID or
/// RISAPLOT_EXPORT_OUTPUT_ROOT.
fn apply_env_overrides(config: &mut RisaplotConfig) {
    if let Ok(val) = std::env::var("RISAPLOT_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("RISAPLOT_HOST_PROG_ID") {
        config.host.prog_id = val;
    }
    if let Ok(val) = std::env::var("RISAPLOT_HOST_VIEW_SETTLE_MS") {
        if let Ok(ms) = val.parse() {
            config.host.view_settle_ms = ms;
        }
    }
    if let Ok(val) = std::env::var("RISAPLOT_HOST_ACTIVATION_SETTLE_MS") {
        if let Ok(ms) = val.parse() {
            config.host.activation_settle_ms = ms;
        }
    }

    if let Ok(val) = std::env::var("RISAPLOT_EXPORT_OUTPUT_ROOT") {
        config.export.output_root = val;
    }
    if let Ok(val) = std::env::var("RISAPLOT_EXPORT_DRY_RUN") {
        config.export.dry_run = val.parse().unwrap_or(false);
    }

    if let Ok(val) = std::env::var("RISAPLOT_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("RISAPLOT_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
