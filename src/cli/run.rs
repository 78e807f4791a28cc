//! Run command implementation
//!
//! Loads configuration, applies CLI overrides, and drives one plot run
//! to completion. Per-item failures never change the exit status; only
//! configuration and connection failures do.

use crate::adapters::host::create_host;
use crate::cli::Cli;
use crate::config::load_config;
use crate::core::export::PlotCoordinator;
use crate::domain::RisaplotError;
use crate::logging::init_logging;

/// Executes a plot run and returns the process exit code
///
/// Exit codes: 0 completed run (even with per-item failures), 2
/// configuration error, 4 connection failure, 5 unexpected fatal error.
pub async fn execute(cli: &Cli) -> anyhow::Result<i32> {
    let mut config = match load_config(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return Ok(2);
        }
    };

    // Apply CLI overrides.
    if let Some(level) = &cli.log_level {
        config.application.log_level = level.clone();
    }
    if let Some(root) = &cli.output_root {
        config.export.output_root = root.clone();
    }
    if cli.dry_run {
        config.export.dry_run = true;
    }

    if let Err(e) = config.validate() {
        eprintln!("Configuration validation failed: {e}");
        return Ok(2);
    }

    let _logging_guard = match init_logging(&config.application.log_level, &config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return Ok(5);
        }
    };

    println!("{}", "=".repeat(50));
    println!("RISA 3D Load Case ISO View Plot Automation");
    println!("{}", "=".repeat(50));
    println!("Plot outputs will be saved under: {}", config.export.output_root);
    if config.export.dry_run {
        println!("DRY RUN - no image files will be written");
    }
    println!();

    let host = create_host(&config.host);
    let coordinator = PlotCoordinator::new(config, host);

    let summary = match coordinator.execute().await {
        Ok(summary) => summary,
        Err(e @ (RisaplotError::Connection(_) | RisaplotError::Host(_))) => {
            tracing::error!(error = %e, "Failed to connect to RISA 3D");
            eprintln!("Failed to connect to RISA 3D: {e}");
            return Ok(4);
        }
        Err(e) => {
            tracing::error!(error = %e, "Plot run failed");
            eprintln!("Plot run failed: {e}");
            return Ok(5);
        }
    };

    // Display summary.
    println!();
    println!("Plot Run Summary:");
    if let Some(model) = &summary.model_file {
        println!("  Model: {model}");
    }
    if let Some(dir) = &summary.output_dir {
        println!("  Output: {}", dir.display());
    }
    println!("  Basic Load Cases: {}", summary.total_basic_cases);
    println!("  Exported: {}", summary.exported);
    println!("  Failed: {}", summary.failed);
    println!("  Duration: {:.2}s", summary.duration.as_secs_f64());

    if !summary.errors.is_empty() {
        println!();
        println!("Errors encountered:");
        for error in &summary.errors {
            match &error.label {
                Some(label) => println!("  - {:?} [{}]: {}", error.error_type, label, error.message),
                None => println!("  - {:?}: {}", error.error_type, error.message),
            }
        }
    }

    println!();
    if summary.nothing_to_export() {
        println!("Nothing to export.");
    } else if summary.is_successful() {
        println!("Plot generation complete! All plots saved.");
    } else {
        println!("Plot generation complete with failures; see errors above.");
    }

    // Per-item failures do not change the exit status.
    Ok(0)
}
