//! Generation run: writes a fresh dungeon into the current directory.

use std::path::Path;
use std::process::ExitCode;

use delve::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match generate_into(
        Path::new("."),
        &GraphConfig::default(),
        &FormatConfig::default(),
        &mut rand::rng(),
    ) {
        Ok(dir) => {
            println!("{}", dir.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("delve-build: {e}");
            ExitCode::FAILURE
        }
    }
}
