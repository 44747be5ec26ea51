//! Octocrab-backed issue gateway.

use std::sync::OnceLock;

use async_trait::async_trait;
use octocrab::{Octocrab, Page};

use crate::github::error::FetchError;
use crate::github::locator::RepositoryLocator;
use crate::github::models::{Issue, IssueEvent};
use crate::github::pagination::{PageInfo, Paginated};
use crate::github::rate_limit::RateLimitInfo;
use crate::github::token::TokenSource;

use super::client::build_octocrab_client;
use super::error_mapping::map_octocrab_error;
use super::{IssueGateway, ListEventsParams, ListIssuesParams};

/// Octocrab-backed gateway for one repository.
///
/// The authenticated client is built on first use and reused afterwards.
/// Initialisation goes through a [`OnceLock`], so concurrent first calls
/// settle on a single client.
pub struct OctocrabIssueGateway {
    locator: RepositoryLocator,
    token_source: TokenSource,
    client: OnceLock<Octocrab>,
}

impl OctocrabIssueGateway {
    /// Creates a gateway that will authenticate with `token_source` on first
    /// use.
    #[must_use]
    pub const fn new(locator: RepositoryLocator, token_source: TokenSource) -> Self {
        Self {
            locator,
            token_source,
            client: OnceLock::new(),
        }
    }

    fn client(&self) -> Result<&Octocrab, FetchError> {
        if let Some(existing) = self.client.get() {
            return Ok(existing);
        }

        let token = self.token_source.resolve()?;
        let built = build_octocrab_client(token.as_ref(), self.locator.api_base().as_str())?;
        Ok(self.client.get_or_init(|| built))
    }
}

#[async_trait]
impl IssueGateway for OctocrabIssueGateway {
    async fn prepare(&self) -> Result<(), FetchError> {
        self.client().map(|_| ())
    }

    async fn core_rate_limit(&self) -> Result<RateLimitInfo, FetchError> {
        let rate_limit = self
            .client()?
            .ratelimit()
            .get()
            .await
            .map_err(|error| map_octocrab_error("rate limit", &error))?;

        let core = rate_limit.resources.core;
        let limit = u32::try_from(core.limit).unwrap_or(u32::MAX);
        let remaining = u32::try_from(core.remaining).unwrap_or(u32::MAX);
        Ok(RateLimitInfo::new(limit, remaining, core.reset))
    }

    async fn list_issues(
        &self,
        params: &ListIssuesParams,
    ) -> Result<Paginated<Issue>, FetchError> {
        let since = params.since.to_rfc3339();
        let page = params.page.to_string();
        let query_params = [
            ("since", since.as_str()),
            ("sort", "updated"),
            ("state", "all"),
            ("direction", "asc"),
            ("page", page.as_str()),
        ];

        tracing::debug!(
            "requesting issues page {} of {}/{}",
            params.page,
            self.locator.organization().as_str(),
            self.locator.project().as_str()
        );
        let page_result: Page<Issue> = self
            .client()?
            .get(self.locator.issues_path(), Some(&query_params))
            .await
            .map_err(|error| map_octocrab_error("list issues", &error))?;

        Ok(Paginated {
            page_info: PageInfo::new(params.page).with_has_next(page_result.next.is_some()),
            items: page_result.items,
        })
    }

    async fn list_issue_events(
        &self,
        params: &ListEventsParams,
    ) -> Result<Paginated<IssueEvent>, FetchError> {
        let page = params.page.to_string();
        let per_page = params.per_page.to_string();
        let query_params = [("per_page", per_page.as_str()), ("page", page.as_str())];

        tracing::debug!(
            "requesting issue events page {} of {}/{}",
            params.page,
            self.locator.organization().as_str(),
            self.locator.project().as_str()
        );
        let page_result: Page<IssueEvent> = self
            .client()?
            .get(self.locator.issue_events_path(), Some(&query_params))
            .await
            .map_err(|error| map_octocrab_error("list issue events", &error))?;

        Ok(Paginated {
            page_info: PageInfo::new(params.page).with_has_next(page_result.next.is_some()),
            items: page_result.items,
        })
    }
}

#[cfg(test)]
mod tests;
