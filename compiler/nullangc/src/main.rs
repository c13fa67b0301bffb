//! Nullang CLI

use std::process::ExitCode;

use nullangc::commands::{self, exit};
use nullangc::config::{Config, USAGE};

/// Log filter variables, checked in order.
const LOG_ENV_VARS: [&str; 2] = ["NULLANG_LOG", "RUST_LOG"];

/// Install a stderr subscriber when a log filter is set. Silent otherwise.
fn init_tracing() {
    use tracing_subscriber::{prelude::*, EnvFilter};

    let Some(filter) = LOG_ENV_VARS
        .iter()
        .find_map(|var| std::env::var(var).ok())
    else {
        return;
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(filter))
        .with(
            tracing_tree::HierarchicalLayer::new(2)
                .with_targets(true)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprint!("{USAGE}");
            return ExitCode::from(exit::FAILURE);
        }
    };

    tracing::debug!(command = ?config.command, "starting");
    ExitCode::from(commands::execute(&config))
}
