//! Tests for the Octocrab issue gateway against a mock GitHub server.

use chrono::{TimeZone, Utc};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::OctocrabIssueGateway;
use crate::github::error::FetchError;
use crate::github::gateway::{IssueGateway, ListEventsParams, ListIssuesParams};
use crate::github::locator::RepositoryLocator;
use crate::github::token::TokenSource;

const ISSUES_PATH: &str = "/repos/octo/repo/issues";
const EVENTS_PATH: &str = "/repos/octo/repo/issues/events";

fn gateway_for(server: &MockServer, token_source: TokenSource) -> OctocrabIssueGateway {
    let locator = RepositoryLocator::new("octo", "repo", Some(&server.uri()))
        .expect("should create repository locator");
    OctocrabIssueGateway::new(locator, token_source)
}

fn next_link(server: &MockServer, route: &str, page: u32) -> String {
    format!(
        "<{server_uri}{route}?page={page}>; rel=\"next\"",
        server_uri = server.uri()
    )
}

#[tokio::test]
async fn list_issues_sends_listing_parameters_and_reads_next_link() {
    let server = MockServer::start().await;
    let gateway = gateway_for(&server, TokenSource::anonymous());
    let since = Utc
        .with_ymd_and_hms(2016, 1, 1, 0, 0, 0)
        .single()
        .expect("fixed timestamp should be valid");

    let response = ResponseTemplate::new(200)
        .set_body_json(json!([{
            "number": 7,
            "title": "Flaky test",
            "state": "open",
            "labels": [{ "name": "kind/flake" }],
            "updated_at": "2016-02-01T00:00:00Z"
        }]))
        .insert_header("Link", next_link(&server, ISSUES_PATH, 3).as_str());

    Mock::given(method("GET"))
        .and(path(ISSUES_PATH))
        .and(query_param("since", since.to_rfc3339()))
        .and(query_param("sort", "updated"))
        .and(query_param("state", "all"))
        .and(query_param("direction", "asc"))
        .and(query_param("page", "2"))
        .respond_with(response)
        .mount(&server)
        .await;

    let result = gateway
        .list_issues(&ListIssuesParams { since, page: 2 })
        .await
        .expect("request should succeed");

    assert_eq!(result.items.len(), 1, "expected one issue");
    let first = result.items.first().expect("should have first issue");
    assert_eq!(first.number, 7);
    assert_eq!(result.page_info.current_page(), 2);
    assert!(result.page_info.has_next());
}

#[tokio::test]
async fn list_issue_events_requests_page_size_and_detects_last_page() {
    let server = MockServer::start().await;
    let gateway = gateway_for(&server, TokenSource::anonymous());

    let response = ResponseTemplate::new(200).set_body_json(json!([
        {
            "id": 11,
            "event": "labeled",
            "label": { "name": "kind/bug" },
            "actor": { "login": "alice" },
            "created_at": "2016-03-01T00:00:00Z",
            "issue": { "number": 7 }
        },
        { "id": 10, "event": "closed", "actor": null }
    ]));

    Mock::given(method("GET"))
        .and(path(EVENTS_PATH))
        .and(query_param("per_page", "100"))
        .and(query_param("page", "1"))
        .respond_with(response)
        .mount(&server)
        .await;

    let result = gateway
        .list_issue_events(&ListEventsParams {
            page: 1,
            per_page: 100,
        })
        .await
        .expect("request should succeed");

    let ids: Vec<u64> = result.items.iter().map(|event| event.id).collect();
    assert_eq!(ids, vec![11, 10]);
    assert!(!result.page_info.has_next());
    assert_eq!(result.page_info.current_page(), 1);
}

#[tokio::test]
async fn core_rate_limit_reads_core_resource() {
    const EXPECTED_RESET_AT: u64 = 1_700_000_000;

    let server = MockServer::start().await;
    let gateway = gateway_for(&server, TokenSource::anonymous());

    let response = ResponseTemplate::new(200).set_body_json(json!({
        "resources": {
            "core": { "limit": 5000, "used": 4970, "remaining": 30, "reset": EXPECTED_RESET_AT },
            "search": { "limit": 30, "used": 0, "remaining": 30, "reset": EXPECTED_RESET_AT }
        },
        "rate": { "limit": 5000, "used": 4970, "remaining": 30, "reset": EXPECTED_RESET_AT }
    }));
    Mock::given(method("GET"))
        .and(path("/rate_limit"))
        .respond_with(response)
        .mount(&server)
        .await;

    let info = gateway
        .core_rate_limit()
        .await
        .expect("rate limit lookup should succeed");

    assert_eq!(info.limit(), 5000);
    assert_eq!(info.remaining(), 30);
    assert_eq!(info.reset_at(), EXPECTED_RESET_AT);
}

#[tokio::test]
async fn token_is_sent_as_authorization_header() {
    let server = MockServer::start().await;
    let gateway = gateway_for(
        &server,
        TokenSource::new(Some(" ghp_example ".to_owned()), None),
    );

    Mock::given(method("GET"))
        .and(path(EVENTS_PATH))
        .and(header("authorization", "Bearer ghp_example"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let result = gateway
        .list_issue_events(&ListEventsParams {
            page: 1,
            per_page: 100,
        })
        .await
        .expect("authenticated request should succeed");

    assert!(result.items.is_empty());
}

#[tokio::test]
async fn rejected_token_maps_to_authentication_error() {
    let server = MockServer::start().await;
    let gateway = gateway_for(
        &server,
        TokenSource::new(Some("bad-token".to_owned()), None),
    );

    Mock::given(method("GET"))
        .and(path(ISSUES_PATH))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "Bad credentials" })),
        )
        .mount(&server)
        .await;

    let error = gateway
        .list_issues(&ListIssuesParams {
            since: Utc::now(),
            page: 1,
        })
        .await
        .expect_err("request should fail");

    match error {
        FetchError::Authentication { message } => assert!(
            message.contains("Bad credentials"),
            "unexpected message: {message}"
        ),
        other => panic!("expected Authentication, got {other:?}"),
    }
}

#[tokio::test]
async fn server_error_maps_to_api_error() {
    let server = MockServer::start().await;
    let gateway = gateway_for(&server, TokenSource::anonymous());

    Mock::given(method("GET"))
        .and(path(EVENTS_PATH))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "message": "Server Error" })),
        )
        .mount(&server)
        .await;

    let error = gateway
        .list_issue_events(&ListEventsParams {
            page: 1,
            per_page: 100,
        })
        .await
        .expect_err("request should fail");

    assert!(
        matches!(error, FetchError::Api { .. }),
        "expected Api, got {error:?}"
    );
}

#[tokio::test]
async fn prepare_surfaces_unreadable_token_file() {
    let server = MockServer::start().await;
    let dir = tempfile::TempDir::new().expect("temporary directory should be created");
    let missing = camino::Utf8PathBuf::from_path_buf(dir.path().join("absent-token"))
        .expect("temporary path should be UTF-8");
    let gateway = gateway_for(&server, TokenSource::new(None, Some(missing)));

    let error = gateway.prepare().await.expect_err("prepare should fail");

    assert!(
        matches!(error, FetchError::TokenFile { .. }),
        "expected TokenFile, got {error:?}"
    );
}
