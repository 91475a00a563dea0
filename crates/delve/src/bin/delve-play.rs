//! Play run: explores the newest dungeon in the current directory.

use std::path::Path;
use std::process::ExitCode;

use delve::prelude::*;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

const CLOCK_FILE: &str = "currentTime.txt";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match play().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("delve-play: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn play() -> Result<(), DelveError> {
    let clock = ClockConfig {
        mirror_path: Some(CLOCK_FILE.into()),
        ..ClockConfig::default()
    };
    let engine = start_play(Path::new("."), &FormatConfig::default(), clock).await?;
    let input = BufReader::new(tokio::io::stdin());
    run_session(engine, input, tokio::io::stdout()).await?;
    Ok(())
}
