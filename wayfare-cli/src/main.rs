//! Entry point for the `wayfare` binary.
#![forbid(unsafe_code)]

use std::io;

use tracing_subscriber::EnvFilter;
use wayfare_cli::CliError;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
    {
        eprintln!("wayfare: logging disabled: {err}");
    }

    match wayfare_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("wayfare: {err}");
            std::process::exit(1);
        }
    }
}
