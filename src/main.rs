//! Issuewatch CLI entrypoint for polling GitHub issues and issue events.

use std::io::{self, Write};
use std::process::ExitCode;

use issuewatch::config::OperationMode;
use issuewatch::{FetchError, IssueWatchConfig};
use ortho_config::OrthoConfig;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), FetchError> {
    let config = load_config()?;

    match config.operation_mode() {
        OperationMode::FetchIssues => cli::fetch_issues::run(&config).await,
        OperationMode::FetchEvents => cli::fetch_events::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`FetchError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<IssueWatchConfig, FetchError> {
    IssueWatchConfig::load().map_err(|error| FetchError::Configuration {
        message: error.to_string(),
    })
}

/// Sends diagnostics to stderr so stdout carries only results and progress.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _already_set = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .try_init();
}
