//! Boolean combinators over child matchers.

use crate::github::models::{IssueComment, IssueEvent, ReviewComment};

use super::Matcher;

/// Matches when every child matches. An empty conjunction matches.
#[derive(Debug, Default)]
pub struct And(Vec<Box<dyn Matcher>>);

impl And {
    /// Creates a conjunction over `children`.
    #[must_use]
    pub const fn new(children: Vec<Box<dyn Matcher>>) -> Self {
        Self(children)
    }

    /// Appends another child.
    #[must_use]
    pub fn with(mut self, child: Box<dyn Matcher>) -> Self {
        self.0.push(child);
        self
    }

    /// Returns the number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when there are no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Matcher for And {
    fn match_event(&self, event: &IssueEvent) -> bool {
        self.0.iter().all(|matcher| matcher.match_event(event))
    }

    fn match_comment(&self, comment: &IssueComment) -> bool {
        self.0.iter().all(|matcher| matcher.match_comment(comment))
    }

    fn match_review_comment(&self, review: &ReviewComment) -> bool {
        self.0.iter().all(|matcher| matcher.match_review_comment(review))
    }
}

/// Matches when any child matches. An empty disjunction never matches.
#[derive(Debug, Default)]
pub struct Or(Vec<Box<dyn Matcher>>);

impl Or {
    /// Creates a disjunction over `children`.
    #[must_use]
    pub const fn new(children: Vec<Box<dyn Matcher>>) -> Self {
        Self(children)
    }

    /// Appends another child.
    #[must_use]
    pub fn with(mut self, child: Box<dyn Matcher>) -> Self {
        self.0.push(child);
        self
    }

    /// Returns the number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when there are no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Matcher for Or {
    fn match_event(&self, event: &IssueEvent) -> bool {
        self.0.iter().any(|matcher| matcher.match_event(event))
    }

    fn match_comment(&self, comment: &IssueComment) -> bool {
        self.0.iter().any(|matcher| matcher.match_comment(comment))
    }

    fn match_review_comment(&self, review: &ReviewComment) -> bool {
        self.0.iter().any(|matcher| matcher.match_review_comment(review))
    }
}

/// Negates its child for every record shape.
#[derive(Debug)]
pub struct Not(Box<dyn Matcher>);

impl Not {
    /// Creates the negation of `child`.
    #[must_use]
    pub const fn new(child: Box<dyn Matcher>) -> Self {
        Self(child)
    }
}

impl Matcher for Not {
    fn match_event(&self, event: &IssueEvent) -> bool {
        !self.0.match_event(event)
    }

    fn match_comment(&self, comment: &IssueComment) -> bool {
        !self.0.match_comment(comment)
    }

    fn match_review_comment(&self, review: &ReviewComment) -> bool {
        !self.0.match_review_comment(review)
    }
}
