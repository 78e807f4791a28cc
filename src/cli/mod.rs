//! CLI interface and argument parsing
//!
//! Risaplot has a single run-to-completion entry point, so there are no
//! subcommands; the flags only override configuration.

pub mod run;

use clap::Parser;

/// Risaplot - RISA 3D Load Case ISO View Plot Automation
#[derive(Parser, Debug)]
#[command(name = "risaplot")]
#[command(version, about, long_about = None)]
#[command(author = "Risaplot Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "risaplot.toml", env = "RISAPLOT_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RISAPLOT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Directory under which the timestamped output folder is created
    #[arg(short, long)]
    pub output_root: Option<String>,

    /// Enumerate load cases and drive the view without writing image files
    #[arg(long)]
    pub dry_run: bool,
}
