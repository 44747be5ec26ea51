//! Author identity matchers.

use crate::github::models::{IssueComment, IssueEvent, ReviewComment, User};

use super::{Matcher, Or};

fn valid_login(user: Option<&User>) -> Option<&str> {
    user.and_then(|author| author.login.as_deref())
}

/// Matches records whose author and author login are both present.
///
/// Use it as a guard before identity comparisons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidAuthor;

impl Matcher for ValidAuthor {
    fn match_event(&self, event: &IssueEvent) -> bool {
        valid_login(event.actor.as_ref()).is_some()
    }

    fn match_comment(&self, comment: &IssueComment) -> bool {
        valid_login(comment.user.as_ref()).is_some()
    }

    fn match_review_comment(&self, review: &ReviewComment) -> bool {
        valid_login(review.user.as_ref()).is_some()
    }
}

/// Matches records authored by a given login, compared case-insensitively.
///
/// For events the author is the actor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorLogin {
    login: String,
}

impl AuthorLogin {
    /// Creates a matcher for `login`.
    #[must_use]
    pub fn new(login: &str) -> Self {
        Self {
            login: login.to_lowercase(),
        }
    }

    fn matches(&self, user: Option<&User>) -> bool {
        valid_login(user).is_some_and(|login| login.to_lowercase() == self.login)
    }
}

impl Matcher for AuthorLogin {
    fn match_event(&self, event: &IssueEvent) -> bool {
        self.matches(event.actor.as_ref())
    }

    fn match_comment(&self, comment: &IssueComment) -> bool {
        self.matches(comment.user.as_ref())
    }

    fn match_review_comment(&self, review: &ReviewComment) -> bool {
        self.matches(review.user.as_ref())
    }
}

/// Builds a matcher accepting records authored by any of `logins`.
///
/// An empty list yields an empty [`Or`], which matches nothing.
#[must_use]
pub fn author_logins<I, S>(logins: I) -> Or
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Or::new(
        logins
            .into_iter()
            .map(|login| -> Box<dyn Matcher> { Box::new(AuthorLogin::new(login.as_ref())) })
            .collect(),
    )
}

/// Builds a matcher accepting records authored by any of `users`.
///
/// Users without a login are skipped.
#[must_use]
pub fn author_users<'user, I>(users: I) -> Or
where
    I: IntoIterator<Item = &'user User>,
{
    author_logins(users.into_iter().filter_map(|user| user.login.as_deref()))
}
