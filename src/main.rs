//! MenuNav - Browse a folder hierarchy from a menu

use std::env;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use menunav::app::{run, Config};
use menunav::output::exit_code;

fn main() -> ExitCode {
    // Logging comes up before argument parsing so config file warnings show
    let verbose = env::args().any(|a| a == "-v" || a == "--verbose");
    init_logging(verbose);

    // Parse config first to return INVALID exit code for argument errors
    let config = match Config::from_args() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(exit_code::INVALID as u8);
        }
    };

    match run(&config) {
        Ok(_) => ExitCode::from(exit_code::SUCCESS as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(exit_code::ERROR as u8)
        }
    }
}

/// Log to stderr, filtered by `MENUNAV_LOG` (default: warn, or debug with -v)
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("MENUNAV_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
