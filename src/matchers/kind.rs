//! Record-shape discriminators.
//!
//! Each matcher accepts every record of its own shape and nothing else, so
//! `And(CommentType, AuthorLogin(..))` only ever applies to issue comments.

use crate::github::models::{IssueComment, IssueEvent, ReviewComment};

use super::Matcher;

/// Matches any issue event, with no further condition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventType;

impl Matcher for EventType {
    fn match_event(&self, _event: &IssueEvent) -> bool {
        true
    }

    fn match_comment(&self, _comment: &IssueComment) -> bool {
        false
    }

    fn match_review_comment(&self, _review: &ReviewComment) -> bool {
        false
    }
}

/// Matches any issue comment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommentType;

impl Matcher for CommentType {
    fn match_event(&self, _event: &IssueEvent) -> bool {
        false
    }

    fn match_comment(&self, _comment: &IssueComment) -> bool {
        true
    }

    fn match_review_comment(&self, _review: &ReviewComment) -> bool {
        false
    }
}

/// Matches any review comment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReviewCommentType;

impl Matcher for ReviewCommentType {
    fn match_event(&self, _event: &IssueEvent) -> bool {
        false
    }

    fn match_comment(&self, _comment: &IssueComment) -> bool {
        false
    }

    fn match_review_comment(&self, _review: &ReviewComment) -> bool {
        true
    }
}
