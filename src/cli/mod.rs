//! CLI operation mode handlers.
//!
//! This module contains the implementations for the two operation modes:
//! - [`fetch_issues`]: List issues updated since a point in time
//! - [`fetch_events`]: List issue events and keep those matching the
//!   configured filters
//!
//! Filter construction lives in [`event_filter`] and JSON line output in
//! [`output`].

use issuewatch::{FetchError, IssueWatchConfig, OctocrabIssueGateway};

pub mod event_filter;
pub mod fetch_events;
pub mod fetch_issues;
pub mod output;

#[cfg(test)]
pub mod test_utils;

/// Builds the Octocrab-backed gateway for the configured repository.
///
/// The token is not read until the first request.
pub fn build_gateway(config: &IssueWatchConfig) -> Result<OctocrabIssueGateway, FetchError> {
    let locator = config.repository_locator()?;
    Ok(OctocrabIssueGateway::new(locator, config.token_source()))
}
