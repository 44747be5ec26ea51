//! Issuewatch library crate for polling GitHub issue activity.
//!
//! The library fetches a repository's issues and issue events through
//! Octocrab, with paging and rate-limit back-off, and narrows the results
//! with composable [`matchers`] such as "labeled `kind/*` by one of these
//! users after this time".

pub mod config;
pub mod filter;
pub mod github;
pub mod matchers;
pub mod progress;

pub use config::IssueWatchConfig;
pub use filter::{find_comments, find_events, find_review_comments};
pub use github::{
    FetchError, FetchPolicy, IssueFetcher, OctocrabIssueGateway, RepositoryLocator, TokenSource,
};
pub use matchers::{Matcher, MatcherExt};
