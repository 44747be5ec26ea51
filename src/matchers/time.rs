//! Creation-time bounds. Both comparisons are strict.

use chrono::{DateTime, Utc};

use crate::github::models::{IssueComment, IssueEvent, ReviewComment};

use super::Matcher;

/// Matches records created strictly after a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatedAfter(pub DateTime<Utc>);

impl CreatedAfter {
    fn matches(self, created_at: Option<DateTime<Utc>>) -> bool {
        created_at.is_some_and(|created| created > self.0)
    }
}

impl Matcher for CreatedAfter {
    fn match_event(&self, event: &IssueEvent) -> bool {
        self.matches(event.created_at)
    }

    fn match_comment(&self, comment: &IssueComment) -> bool {
        self.matches(comment.created_at)
    }

    fn match_review_comment(&self, review: &ReviewComment) -> bool {
        self.matches(review.created_at)
    }
}

/// Matches records created strictly before a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatedBefore(pub DateTime<Utc>);

impl CreatedBefore {
    fn matches(self, created_at: Option<DateTime<Utc>>) -> bool {
        created_at.is_some_and(|created| created < self.0)
    }
}

impl Matcher for CreatedBefore {
    fn match_event(&self, event: &IssueEvent) -> bool {
        self.matches(event.created_at)
    }

    fn match_comment(&self, comment: &IssueComment) -> bool {
        self.matches(comment.created_at)
    }

    fn match_review_comment(&self, review: &ReviewComment) -> bool {
        self.matches(review.created_at)
    }
}
