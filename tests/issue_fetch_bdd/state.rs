//! Scenario state and fetch drivers for the issue fetch BDD tests.

use camino::Utf8PathBuf;
use chrono::{DateTime, Utc};
use issuewatch::github::{Issue, IssueEvent};
use issuewatch::{
    FetchError, FetchPolicy, IssueFetcher, OctocrabIssueGateway, RepositoryLocator, TokenSource,
};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use tempfile::TempDir;
use wiremock::{Mock, MockServer};

use super::runtime::{SharedRuntime, ensure_runtime_and_server};

#[derive(ScenarioState, Default)]
pub(crate) struct FetchState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) token_dir: Slot<TempDir>,
    pub(crate) token_file: Slot<Utf8PathBuf>,
    pub(crate) issues: Slot<Vec<Issue>>,
    pub(crate) events: Slot<Vec<IssueEvent>>,
    pub(crate) error: Slot<FetchError>,
}

/// Mounts `mock` on the scenario's server, starting it if needed.
pub(crate) fn mount(fetch_state: &FetchState, mock: Mock) {
    let runtime = runtime(fetch_state);
    fetch_state
        .server
        .with_ref(|server| runtime.block_on(mock.mount(server)))
        .unwrap_or_else(|| panic!("mock server not initialised"));
}

/// URI of the scenario's server, starting it if needed.
pub(crate) fn server_uri(fetch_state: &FetchState) -> String {
    let _runtime = runtime(fetch_state);
    fetch_state
        .server
        .with_ref(MockServer::uri)
        .unwrap_or_else(|| panic!("mock server URL missing"))
}

fn runtime(fetch_state: &FetchState) -> SharedRuntime {
    ensure_runtime_and_server(&fetch_state.runtime, &fetch_state.server)
        .unwrap_or_else(|error| panic!("failed to start runtime: {error}"))
}

fn gateway(fetch_state: &FetchState) -> OctocrabIssueGateway {
    let locator = RepositoryLocator::new("kubernetes", "kubernetes", Some(&server_uri(fetch_state)))
        .unwrap_or_else(|error| panic!("invalid locator: {error}"));
    OctocrabIssueGateway::new(locator, TokenSource::new(None, fetch_state.token_file.get()))
}

fn record<T>(fetch_state: &FetchState, result: Result<T, FetchError>, slot: &Slot<T>) {
    match result {
        Ok(value) => {
            let _had_previous_error = fetch_state.error.take().is_some();
            slot.set(value);
        }
        Err(error) => fetch_state.error.set(error),
    }
}

/// Fetches issues through the real gateway with zero back-off delays.
pub(crate) fn run_issue_fetch(fetch_state: &FetchState, since: DateTime<Utc>) {
    let runtime = runtime(fetch_state);
    let gateway = gateway(fetch_state);
    let result = runtime.block_on(async {
        IssueFetcher::new(&gateway)
            .with_policy(FetchPolicy::without_delays())
            .fetch_issues(since)
            .await
    });
    record(fetch_state, result, &fetch_state.issues);
}

/// Fetches issue events through the real gateway with zero back-off delays.
pub(crate) fn run_event_fetch(fetch_state: &FetchState, latest: Option<u64>) {
    let runtime = runtime(fetch_state);
    let gateway = gateway(fetch_state);
    let result = runtime.block_on(async {
        IssueFetcher::new(&gateway)
            .with_policy(FetchPolicy::without_delays())
            .fetch_issue_events(latest)
            .await
    });
    record(fetch_state, result, &fetch_state.events);
}
