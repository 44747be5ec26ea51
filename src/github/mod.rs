//! GitHub issue and issue-event retrieval.
//!
//! This module wraps Octocrab to list a repository's issues and issue events
//! one page at a time, and layers the paging, rate-limit back-off, and retry
//! rules on top in [`fetcher`]. Octocrab failures are mapped into
//! [`FetchError`] variants so callers never see Octocrab internals.

pub mod error;
pub mod fetcher;
pub mod gateway;
pub mod locator;
pub mod models;
pub mod pagination;
pub mod rate_limit;
pub mod token;

pub use error::FetchError;
pub use fetcher::{FetchPolicy, IssueFetcher};
pub use gateway::{IssueGateway, ListEventsParams, ListIssuesParams, OctocrabIssueGateway};
pub use locator::{Organization, Project, RepositoryLocator};
pub use models::{Issue, IssueComment, IssueEvent, Label, ReviewComment, User};
pub use pagination::{PageInfo, Paginated};
pub use rate_limit::RateLimitInfo;
pub use token::{PersonalAccessToken, TokenSource};

#[cfg(test)]
pub use gateway::MockIssueGateway;
