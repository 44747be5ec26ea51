//! Data models for issues, issue events, and comments.
//!
//! These are immutable snapshots of the records returned by the GitHub REST
//! API. Every field GitHub may omit or send as `null` is an `Option`, which is
//! what lets the matchers treat missing data as a definitive non-match.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// A GitHub account referenced by a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Login name, if GitHub supplied one.
    #[serde(default)]
    pub login: Option<String>,
    /// Numeric account identifier.
    #[serde(default)]
    pub id: Option<u64>,
}

impl User {
    /// Creates a user reference with the given login.
    #[must_use]
    pub fn with_login(login: &str) -> Self {
        Self {
            login: Some(login.to_owned()),
            id: None,
        }
    }
}

/// A label attached to an issue or referenced by a label event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Label name (e.g. `kind/bug`).
    #[serde(default)]
    pub name: Option<String>,
    /// Hex colour without the leading `#`.
    #[serde(default)]
    pub color: Option<String>,
}

impl Label {
    /// Creates a label with the given name.
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_owned()),
            color: None,
        }
    }
}

/// An issue (or pull request, which GitHub lists as an issue).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Issue number within the repository.
    pub number: u64,
    /// Issue title.
    #[serde(default)]
    pub title: Option<String>,
    /// State (`open` or `closed`).
    #[serde(default)]
    pub state: Option<String>,
    /// Labels currently applied to the issue.
    #[serde(default)]
    pub labels: Vec<Label>,
    /// Author of the issue.
    #[serde(default)]
    pub user: Option<User>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Minimal reference to the issue an event belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueReference {
    /// Issue number within the repository.
    pub number: u64,
}

/// An entry from the repository issue-events timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueEvent {
    /// Event identifier.
    pub id: u64,
    /// Event type tag (e.g. `labeled`, `closed`).
    #[serde(default)]
    pub event: Option<String>,
    /// Label added or removed, for label events.
    #[serde(default)]
    pub label: Option<Label>,
    /// Account that triggered the event.
    #[serde(default)]
    pub actor: Option<User>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Issue the event was recorded against.
    #[serde(default)]
    pub issue: Option<IssueReference>,
}

/// A discussion comment on an issue or pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueComment {
    /// Comment identifier.
    pub id: u64,
    /// Comment author.
    #[serde(default)]
    pub user: Option<User>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Comment body.
    #[serde(default)]
    pub body: Option<String>,
}

/// A pull request review comment attached to a line of the diff.
///
/// Review comments are distinct from issue comments, which are general
/// discussion on the issue or pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewComment {
    /// Comment identifier.
    pub id: u64,
    /// Comment author.
    #[serde(default)]
    pub user: Option<User>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Comment body.
    #[serde(default)]
    pub body: Option<String>,
    /// File path the comment is attached to.
    #[serde(default)]
    pub path: Option<String>,
}

/// Returns true when an event with the given identifier is in `events`.
#[must_use]
pub fn contains_event_id(events: &[IssueEvent], id: u64) -> bool {
    events.iter().any(|event| event.id == id)
}
