//! Builders for constructing record fixtures in tests.
//!
//! # Examples
//!
//! ```
//! use issuewatch::github::models::test_support::{comment_by, label_event};
//!
//! let event = label_event(1, "alice", "kind/bug");
//! assert_eq!(event.event.as_deref(), Some("labeled"));
//!
//! let comment = comment_by(2, "bob");
//! assert_eq!(comment.user.and_then(|user| user.login).as_deref(), Some("bob"));
//! ```

use chrono::{DateTime, Utc};

use super::{IssueComment, IssueEvent, Label, ReviewComment, User};

/// Constructs an event of type `event` triggered by `login`, with no label
/// and no timestamp.
#[must_use]
pub fn event_by(id: u64, login: &str, event: &str) -> IssueEvent {
    IssueEvent {
        id,
        event: Some(event.to_owned()),
        actor: Some(User::with_login(login)),
        ..IssueEvent::default()
    }
}

/// Constructs a `labeled` event adding `label` by `login`.
#[must_use]
pub fn label_event(id: u64, login: &str, label: &str) -> IssueEvent {
    IssueEvent {
        label: Some(Label::named(label)),
        ..event_by(id, login, "labeled")
    }
}

/// Constructs an event with only an identifier and creation time set.
#[must_use]
pub fn event_at(id: u64, created_at: DateTime<Utc>) -> IssueEvent {
    IssueEvent {
        id,
        created_at: Some(created_at),
        ..IssueEvent::default()
    }
}

/// Constructs an issue comment authored by `login`.
#[must_use]
pub fn comment_by(id: u64, login: &str) -> IssueComment {
    IssueComment {
        id,
        user: Some(User::with_login(login)),
        body: Some(format!("Comment {id}")),
        ..IssueComment::default()
    }
}

/// Constructs a review comment authored by `login`.
#[must_use]
pub fn review_comment_by(id: u64, login: &str) -> ReviewComment {
    ReviewComment {
        id,
        user: Some(User::with_login(login)),
        body: Some(format!("Review comment {id}")),
        ..ReviewComment::default()
    }
}
