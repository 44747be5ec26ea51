//! Label event matchers. Comments never carry labels, so these never match
//! issue comments or review comments.

use crate::github::models::{IssueComment, IssueEvent, ReviewComment};

use super::Matcher;

const LABELED_EVENT: &str = "labeled";

/// Matches `labeled` events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddLabel;

impl Matcher for AddLabel {
    fn match_event(&self, event: &IssueEvent) -> bool {
        event.event.as_deref() == Some(LABELED_EVENT)
    }

    fn match_comment(&self, _comment: &IssueComment) -> bool {
        false
    }

    fn match_review_comment(&self, _review: &ReviewComment) -> bool {
        false
    }
}

/// Matches events whose label name starts with a literal, case-sensitive
/// prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelPrefix {
    prefix: String,
}

impl LabelPrefix {
    /// Creates a matcher for label names starting with `prefix`.
    #[must_use]
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_owned(),
        }
    }
}

impl Matcher for LabelPrefix {
    fn match_event(&self, event: &IssueEvent) -> bool {
        event
            .label
            .as_ref()
            .and_then(|label| label.name.as_deref())
            .is_some_and(|name| name.starts_with(self.prefix.as_str()))
    }

    fn match_comment(&self, _comment: &IssueComment) -> bool {
        false
    }

    fn match_review_comment(&self, _review: &ReviewComment) -> bool {
        false
    }
}
