//! Binary crate for the `metaweather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Logging setup
//! - Printing the report or a one-line failure message

use std::{io, process::ExitCode};

use anyhow::anyhow;
use metaweather_core::{Failure, ServiceConfig, WeatherClient};
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(err) = init_tracing() {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(failure) => {
            eprintln!("{failure}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Failure> {
    cli::execute(
        std::env::args_os(),
        || WeatherClient::http(ServiceConfig::default()),
        &mut io::stdout(),
    )
    .await
}

/// Diagnostics go to stderr; only errors unless `RUST_LOG` says otherwise.
fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))
}
