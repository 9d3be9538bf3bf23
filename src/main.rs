//! Runs the payroll demonstration on the console.
//!
//! Usage: `solid-payroll [CONFIG.yaml]`
//!
//! Notifications go to stdout. Logs go to stderr and are filtered with
//! `RUST_LOG` (default: `info`).

use std::io;
use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use solid_payroll::config::DemoConfig;
use solid_payroll::demo;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let result = DemoConfig::load_or_default(std::env::args_os().nth(1)).and_then(|config| {
        let stdout = io::stdout();
        let stdin = io::stdin();
        demo::run(&config, &mut stdout.lock(), &mut stdin.lock())
    });

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Payroll demonstration failed");
            ExitCode::FAILURE
        }
    }
}
