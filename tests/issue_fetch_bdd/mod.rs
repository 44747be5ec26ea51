//! Support modules for the issue fetch BDD tests.

pub(crate) mod harness;
#[path = "../support/runtime.rs"]
pub(crate) mod runtime;
pub(crate) mod state;

pub(crate) use harness::{
    EVENTS_PATH, ISSUES_PATH, event_page_body, issue_page_body, next_link, rate_limit_body,
};
pub(crate) use state::{FetchState, mount, run_event_fetch, run_issue_fetch, server_uri};
