//! Issue event listing operation.
//!
//! Stdout carries two kinds of lines: the progress trace, printed while pages
//! download, followed by one JSON document per result once the fetch has
//! finished. Consumers wanting only JSON should skip lines that do not start
//! with `{`.

use std::io;

use issuewatch::github::{IssueEvent, IssueGateway};
use issuewatch::progress::{ProgressSink, StdoutProgressSink};
use issuewatch::{FetchError, IssueFetcher, IssueWatchConfig, find_events};

use super::build_gateway;
use super::event_filter::event_matcher;
use super::output::write_json_lines;

/// Fetches the repository's issue events, keeps those matching the configured
/// filters, and writes each one as a JSON line.
///
/// # Errors
///
/// Returns [`FetchError::Configuration`] for invalid configuration, a token
/// file error, or [`FetchError::Io`] when output fails.
pub async fn run(config: &IssueWatchConfig) -> Result<(), FetchError> {
    let gateway = build_gateway(config)?;
    let events = fetch_matching(config, &gateway, &StdoutProgressSink).await?;

    let mut stdout = io::stdout().lock();
    write_json_lines(&mut stdout, &events)
}

/// Fetches events through `gateway` and returns the ones the configured
/// filters keep, in service order.
///
/// This function is exposed for testing with scripted gateways.
pub async fn fetch_matching<G>(
    config: &IssueWatchConfig,
    gateway: &G,
    progress: &dyn ProgressSink,
) -> Result<Vec<IssueEvent>, FetchError>
where
    G: IssueGateway,
{
    let matcher = event_matcher(config)?;
    let events = IssueFetcher::new(gateway)
        .with_progress(progress)
        .fetch_issue_events(config.latest_event_id)
        .await?;

    let matching: Vec<IssueEvent> = find_events(&events, &matcher).into_iter().cloned().collect();
    tracing::info!(
        "{} of {} fetched events matched the filters",
        matching.len(),
        events.len()
    );
    Ok(matching)
}
