//! Scripted gateway shared by the CLI handler tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use issuewatch::FetchError;
use issuewatch::github::{
    Issue, IssueEvent, IssueGateway, ListEventsParams, ListIssuesParams, PageInfo, Paginated,
    RateLimitInfo,
};

/// Gateway that replays queued pages and records the pages requested.
#[derive(Debug, Default)]
pub struct ScriptedGateway {
    issue_pages: Mutex<VecDeque<Result<Vec<Issue>, FetchError>>>,
    event_pages: Mutex<VecDeque<Vec<IssueEvent>>>,
    requested_event_pages: Mutex<Vec<u32>>,
}

impl ScriptedGateway {
    /// Queues one issue page; the last queued page reports no next page.
    pub fn with_issue_page(self, page: Result<Vec<Issue>, FetchError>) -> Self {
        self.issue_pages
            .lock()
            .expect("issue pages mutex should be available")
            .push_back(page);
        self
    }

    /// Queues one event page; the last queued page reports no next page.
    pub fn with_event_page(self, page: Vec<IssueEvent>) -> Self {
        self.event_pages
            .lock()
            .expect("event pages mutex should be available")
            .push_back(page);
        self
    }

    /// Event page numbers requested so far.
    pub fn requested_event_pages(&self) -> Vec<u32> {
        self.requested_event_pages
            .lock()
            .expect("requested pages mutex should be available")
            .clone()
    }
}

#[async_trait]
impl IssueGateway for ScriptedGateway {
    async fn prepare(&self) -> Result<(), FetchError> {
        Ok(())
    }

    async fn core_rate_limit(&self) -> Result<RateLimitInfo, FetchError> {
        Ok(RateLimitInfo::new(5000, 5000, 0))
    }

    async fn list_issues(
        &self,
        params: &ListIssuesParams,
    ) -> Result<Paginated<Issue>, FetchError> {
        let mut pages = self
            .issue_pages
            .lock()
            .expect("issue pages mutex should be available");
        let items = pages.pop_front().unwrap_or_else(|| Ok(Vec::new()))?;
        Ok(Paginated {
            items,
            page_info: PageInfo::new(params.page).with_has_next(!pages.is_empty()),
        })
    }

    async fn list_issue_events(
        &self,
        params: &ListEventsParams,
    ) -> Result<Paginated<IssueEvent>, FetchError> {
        self.requested_event_pages
            .lock()
            .expect("requested pages mutex should be available")
            .push(params.page);
        let mut pages = self
            .event_pages
            .lock()
            .expect("event pages mutex should be available");
        let items = pages.pop_front().unwrap_or_default();
        Ok(Paginated {
            items,
            page_info: PageInfo::new(params.page).with_has_next(!pages.is_empty()),
        })
    }
}
