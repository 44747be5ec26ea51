//! Paginated, rate-limit aware fetch loops.
//!
//! [`IssueFetcher`] drives an [`IssueGateway`] page by page. Before every
//! page request it probes the `core` rate limit and sleeps until the window
//! resets when the remaining quota is below the policy floor. The two loops
//! differ in how they treat request failures:
//!
//! - [`IssueFetcher::fetch_issues`] aborts on the first failure and returns no
//!   partial result.
//! - [`IssueFetcher::fetch_issue_events`] logs the failure, waits the retry
//!   delay, and requests the same page again, without limit.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::progress::{NoopProgressSink, ProgressEvent, ProgressSink};

use super::error::FetchError;
use super::gateway::{IssueGateway, ListEventsParams, ListIssuesParams};
use super::models::{Issue, IssueEvent, contains_event_id};

/// Requests stop this far from the API limit.
pub const DEFAULT_QUOTA_FLOOR: u32 = 50;

/// Largest page size GitHub accepts for issue events.
pub const EVENTS_PER_PAGE: u8 = 100;

/// Delays and thresholds applied by the fetch loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchPolicy {
    /// Pause until the rate limit resets when fewer requests remain.
    pub quota_floor: u32,
    /// Pause applied when the rate limit probe itself fails.
    pub probe_failure_delay: Duration,
    /// Pause before retrying a failed issue-event page.
    pub retry_delay: Duration,
    /// Page size for issue-event requests.
    pub events_per_page: u8,
}

impl Default for FetchPolicy {
    fn default() -> Self {
        Self {
            quota_floor: DEFAULT_QUOTA_FLOOR,
            probe_failure_delay: Duration::from_secs(60),
            retry_delay: Duration::from_secs(1),
            events_per_page: EVENTS_PER_PAGE,
        }
    }
}

impl FetchPolicy {
    /// Policy with the default floor and page size but no delays.
    #[must_use]
    pub const fn without_delays() -> Self {
        Self {
            quota_floor: DEFAULT_QUOTA_FLOOR,
            probe_failure_delay: Duration::ZERO,
            retry_delay: Duration::ZERO,
            events_per_page: EVENTS_PER_PAGE,
        }
    }
}

/// Fetches every issue or issue event of one repository through a gateway.
pub struct IssueFetcher<'client, Gateway>
where
    Gateway: IssueGateway,
{
    gateway: &'client Gateway,
    policy: FetchPolicy,
    progress: &'client dyn ProgressSink,
}

impl<'client, Gateway> IssueFetcher<'client, Gateway>
where
    Gateway: IssueGateway,
{
    /// Creates a fetcher with the default policy and no progress output.
    #[must_use]
    pub fn new(gateway: &'client Gateway) -> Self {
        Self {
            gateway,
            policy: FetchPolicy::default(),
            progress: &NoopProgressSink,
        }
    }

    /// Replaces the fetch policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: FetchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Routes progress events to `progress`.
    #[must_use]
    pub fn with_progress(mut self, progress: &'client dyn ProgressSink) -> Self {
        self.progress = progress;
        self
    }

    /// Fetches every issue updated since `since`, across all states, oldest
    /// update first.
    ///
    /// # Errors
    ///
    /// Returns the first gateway error. Pages fetched before the failure are
    /// discarded.
    pub async fn fetch_issues(&self, since: DateTime<Utc>) -> Result<Vec<Issue>, FetchError> {
        self.gateway.prepare().await?;

        let mut all_issues = Vec::new();
        let mut page = 1;
        loop {
            self.wait_for_quota().await;

            let result = self
                .gateway
                .list_issues(&ListIssuesParams { since, page })
                .await?;

            for issue in &result.items {
                self.progress.record(ProgressEvent::IssueFetched {
                    number: issue.number,
                    updated_at: issue.updated_at,
                });
            }

            let next_page = result.page_info.next_page();
            all_issues.extend(result.items);
            match next_page {
                Some(next) => page = next,
                None => break,
            }
        }

        Ok(all_issues)
    }

    /// Fetches the repository's issue events in service order.
    ///
    /// With `latest` set, fetching stops after the page containing that
    /// event identifier. The whole page is kept, so callers refreshing
    /// incrementally see an overlap with what they already hold.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::TokenFile`] when the client cannot be prepared.
    /// Page request failures are retried and never returned.
    pub async fn fetch_issue_events(
        &self,
        latest: Option<u64>,
    ) -> Result<Vec<IssueEvent>, FetchError> {
        self.gateway.prepare().await?;

        let mut all_events = Vec::new();
        let mut page = 1;
        loop {
            self.wait_for_quota().await;

            self.progress
                .record(ProgressEvent::EventPageRequested { page });
            let params = ListEventsParams {
                page,
                per_page: self.policy.events_per_page,
            };
            let result = match self.gateway.list_issue_events(&params).await {
                Ok(result) => result,
                Err(error) => {
                    tracing::error!("request for events page {page} failed, retrying: {error}");
                    pause(self.policy.retry_delay).await;
                    continue;
                }
            };

            let reached_latest =
                latest.is_some_and(|latest_id| contains_event_id(&result.items, latest_id));
            let next_page = result.page_info.next_page();
            all_events.extend(result.items);
            match next_page {
                Some(next) if !reached_latest => page = next,
                _ => break,
            }
        }

        Ok(all_events)
    }

    async fn wait_for_quota(&self) {
        let delay = match self.gateway.core_rate_limit().await {
            Ok(info) if info.is_below(self.policy.quota_floor) => {
                let until_reset = info.until_reset();
                tracing::info!(
                    "rate limit reached ({} remaining), sleeping for {until_reset:?}",
                    info.remaining()
                );
                until_reset
            }
            Ok(_) => Duration::ZERO,
            Err(error) => {
                tracing::error!("failed to get rate limits: {error}");
                self.policy.probe_failure_delay
            }
        };

        pause(delay).await;
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
