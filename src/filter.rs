//! Narrowing fetched records down to those a matcher accepts.
//!
//! Every filter preserves input order, keeps duplicates, and returns an empty
//! vector when nothing matches.

use crate::github::models::{IssueComment, IssueEvent, ReviewComment};
use crate::matchers::Matcher;

/// Returns the events accepted by `matcher`, in input order.
#[must_use]
pub fn find_events<'event, M>(events: &'event [IssueEvent], matcher: &M) -> Vec<&'event IssueEvent>
where
    M: Matcher + ?Sized,
{
    events
        .iter()
        .filter(|event| matcher.match_event(event))
        .collect()
}

/// Returns the issue comments accepted by `matcher`, in input order.
#[must_use]
pub fn find_comments<'comment, M>(
    comments: &'comment [IssueComment],
    matcher: &M,
) -> Vec<&'comment IssueComment>
where
    M: Matcher + ?Sized,
{
    comments
        .iter()
        .filter(|comment| matcher.match_comment(comment))
        .collect()
}

/// Returns the review comments accepted by `matcher`, in input order.
#[must_use]
pub fn find_review_comments<'review, M>(
    reviews: &'review [ReviewComment],
    matcher: &M,
) -> Vec<&'review ReviewComment>
where
    M: Matcher + ?Sized,
{
    reviews
        .iter()
        .filter(|review| matcher.match_review_comment(review))
        .collect()
}
