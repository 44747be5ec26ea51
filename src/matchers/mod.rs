//! Composable predicates over issue events, issue comments, and review
//! comments.
//!
//! A [`Matcher`] answers "does this record match?" separately for each of
//! the three record shapes GitHub returns. Leaf matchers inspect record fields
//! directly; [`And`], [`Or`], and [`Not`] combine other matchers into a tree.
//!
//! Every leaf treats a missing field as a non-match. A predicate written for
//! one shape (e.g. [`AddLabel`]) can therefore be evaluated against another
//! shape that cannot satisfy it, and the answer is simply `false`.
//!
//! # Example
//!
//! ```
//! use issuewatch::github::models::{IssueEvent, Label, User};
//! use issuewatch::matchers::{AddLabel, AuthorLogin, LabelPrefix, Matcher, MatcherExt};
//!
//! let matcher = AddLabel
//!     .and(LabelPrefix::new("kind/"))
//!     .and(AuthorLogin::new("Alice"));
//!
//! let event = IssueEvent {
//!     id: 1,
//!     event: Some("labeled".to_owned()),
//!     label: Some(Label::named("kind/bug")),
//!     actor: Some(User::with_login("alice")),
//!     ..IssueEvent::default()
//! };
//! assert!(matcher.match_event(&event));
//! ```

use std::fmt::Debug;

use crate::github::models::{IssueComment, IssueEvent, ReviewComment};

mod author;
mod combinators;
mod kind;
mod label;
mod time;

pub use author::{AuthorLogin, ValidAuthor, author_logins, author_users};
pub use combinators::{And, Not, Or};
pub use kind::{CommentType, EventType, ReviewCommentType};
pub use label::{AddLabel, LabelPrefix};
pub use time::{CreatedAfter, CreatedBefore};

/// A side-effect free predicate over the three record shapes.
pub trait Matcher: Debug + Send + Sync {
    /// Returns true when the issue event matches.
    fn match_event(&self, event: &IssueEvent) -> bool;

    /// Returns true when the issue comment matches.
    fn match_comment(&self, comment: &IssueComment) -> bool;

    /// Returns true when the review comment matches.
    fn match_review_comment(&self, review: &ReviewComment) -> bool;
}

impl<M> Matcher for Box<M>
where
    M: Matcher + ?Sized,
{
    fn match_event(&self, event: &IssueEvent) -> bool {
        (**self).match_event(event)
    }

    fn match_comment(&self, comment: &IssueComment) -> bool {
        (**self).match_comment(comment)
    }

    fn match_review_comment(&self, review: &ReviewComment) -> bool {
        (**self).match_review_comment(review)
    }
}

/// Fluent construction helpers available on every sized matcher.
pub trait MatcherExt: Matcher + Sized + 'static {
    /// Boxes the matcher so it can be stored in a combinator.
    fn boxed(self) -> Box<dyn Matcher> {
        Box::new(self)
    }

    /// Conjunction of `self` and `other`.
    fn and<M>(self, other: M) -> And
    where
        M: Matcher + 'static,
    {
        And::new(vec![self.boxed(), Box::new(other)])
    }

    /// Disjunction of `self` and `other`.
    fn or<M>(self, other: M) -> Or
    where
        M: Matcher + 'static,
    {
        Or::new(vec![self.boxed(), Box::new(other)])
    }

    /// Negation of `self`.
    fn negate(self) -> Not {
        Not::new(self.boxed())
    }
}

impl<M> MatcherExt for M where M: Matcher + Sized + 'static {}
