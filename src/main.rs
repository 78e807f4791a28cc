// Risaplot - RISA 3D Load Case ISO View Plot Automation
// Copyright (c) 2026 Risaplot Contributors
// Licensed under the MIT License

use clap::Parser;
use risaplot::cli::{run, Cli};
use std::process;

// Current-thread runtime: the host is a single stateful resource and the
// COM apartment is tied to the connecting thread.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Optional .env file; silently ignored when absent.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let exit_code = match run::execute(&cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            5
        }
    };

    process::exit(exit_code);
}
