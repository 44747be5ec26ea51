//! Response bodies and routes for the issue fetch BDD tests.

use serde_json::{Value, json};

pub(crate) const ISSUES_PATH: &str = "/repos/kubernetes/kubernetes/issues";
pub(crate) const EVENTS_PATH: &str = "/repos/kubernetes/kubernetes/issues/events";

const ISSUES_PER_PAGE: u64 = 2;
const EVENTS_PER_PAGE: u64 = 3;

/// Issues numbered consecutively across pages.
pub(crate) fn issue_page_body(page: u64) -> Value {
    let first = (page - 1) * ISSUES_PER_PAGE + 1;
    let issues: Vec<Value> = (first..first + ISSUES_PER_PAGE)
        .map(|number| {
            json!({
                "number": number,
                "title": format!("Issue #{number}"),
                "state": "open",
                "user": { "login": "contributor" },
                "created_at": "2016-01-02T00:00:00Z",
                "updated_at": format!("2016-02-{:02}T00:00:00Z", number)
            })
        })
        .collect();
    Value::Array(issues)
}

/// Events whose identifiers encode the page: page 2 holds 201 to 203.
pub(crate) fn event_page_body(page: u64) -> Value {
    let events: Vec<Value> = (1..=EVENTS_PER_PAGE)
        .map(|offset| {
            json!({
                "id": page * 100 + offset,
                "event": "labeled",
                "label": { "name": "kind/bug", "color": "ee0701" },
                "actor": { "login": "bot", "id": 1 },
                "created_at": "2016-03-01T00:00:00Z",
                "issue": { "number": offset }
            })
        })
        .collect();
    Value::Array(events)
}

/// Body of `GET /rate_limit` reporting `remaining` core requests.
pub(crate) fn rate_limit_body(remaining: u64) -> Value {
    let window = json!({
        "limit": 5000,
        "used": 5000 - remaining,
        "remaining": remaining,
        "reset": 1_700_000_000_u64
    });
    json!({
        "resources": {
            "core": window,
            "search": { "limit": 30, "used": 0, "remaining": 30, "reset": 1_700_000_000_u64 }
        },
        "rate": window
    })
}

/// `Link` header pointing at `page` of `route`.
pub(crate) fn next_link(server_uri: &str, route: &str, page: u64) -> String {
    format!("<{server_uri}{route}?page={page}>; rel=\"next\"")
}
