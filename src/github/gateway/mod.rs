//! Gateways for reading issues, issue events, and rate limits from GitHub.
//!
//! The [`IssueGateway`] trait isolates single requests so the paging and
//! back-off logic in [`crate::github::fetcher`] can be tested with mocks,
//! while [`OctocrabIssueGateway`] performs the real HTTP calls.

mod client;
mod error_mapping;
mod issues;

pub use issues::OctocrabIssueGateway;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::github::error::FetchError;
use crate::github::models::{Issue, IssueEvent};
use crate::github::pagination::Paginated;
use crate::github::rate_limit::RateLimitInfo;

/// Parameters for one page of the issue listing.
///
/// The listing always covers every state, sorted ascending by update time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListIssuesParams {
    /// Only issues updated at or after this time are returned.
    pub since: DateTime<Utc>,
    /// Page number to fetch (1-based).
    pub page: u32,
}

/// Parameters for one page of the repository issue-event listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListEventsParams {
    /// Page number to fetch (1-based).
    pub page: u32,
    /// Items per page (max 100).
    pub per_page: u8,
}

/// Gateway that can read a single repository's issue data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IssueGateway: Send + Sync {
    /// Ensures the underlying client is ready, loading credentials if needed.
    async fn prepare(&self) -> Result<(), FetchError>;

    /// Fetch the rate limit status of the `core` resource.
    async fn core_rate_limit(&self) -> Result<RateLimitInfo, FetchError>;

    /// Fetch one page of issues.
    async fn list_issues(&self, params: &ListIssuesParams)
    -> Result<Paginated<Issue>, FetchError>;

    /// Fetch one page of issue events.
    async fn list_issue_events(
        &self,
        params: &ListEventsParams,
    ) -> Result<Paginated<IssueEvent>, FetchError>;
}
