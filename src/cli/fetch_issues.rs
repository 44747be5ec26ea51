//! Issue listing operation.
//!
//! Stdout carries two kinds of lines: the progress trace, printed while pages
//! download, followed by one JSON document per result once the fetch has
//! finished. Consumers wanting only JSON should skip lines that do not start
//! with `{`.

use std::io;

use issuewatch::github::{Issue, IssueGateway};
use issuewatch::progress::{ProgressSink, StdoutProgressSink};
use issuewatch::{FetchError, IssueFetcher, IssueWatchConfig};

use super::build_gateway;
use super::output::write_json_lines;

/// Fetches every issue updated since the configured time and writes each one
/// as a JSON line.
///
/// # Errors
///
/// Returns [`FetchError::Configuration`] for invalid configuration, the
/// first request error, or [`FetchError::Io`] when output fails.
pub async fn run(config: &IssueWatchConfig) -> Result<(), FetchError> {
    let gateway = build_gateway(config)?;
    let issues = fetch(config, &gateway, &StdoutProgressSink).await?;

    let mut stdout = io::stdout().lock();
    write_json_lines(&mut stdout, &issues)
}

/// Fetches issues through `gateway`, reporting progress to `progress`.
///
/// This function is exposed for testing with scripted gateways.
pub async fn fetch<G>(
    config: &IssueWatchConfig,
    gateway: &G,
    progress: &dyn ProgressSink,
) -> Result<Vec<Issue>, FetchError>
where
    G: IssueGateway,
{
    let since = config.since()?;
    tracing::info!(
        "fetching issues for {}/{} updated since {since}",
        config.organization,
        config.project
    );

    IssueFetcher::new(gateway)
        .with_progress(progress)
        .fetch_issues(since)
        .await
}
