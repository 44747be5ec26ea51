//! Builds the event matcher described by the configuration.

use issuewatch::matchers::{AddLabel, And, CreatedAfter, CreatedBefore, LabelPrefix, author_logins};
use issuewatch::{FetchError, IssueWatchConfig, MatcherExt};

/// Conjunction of every filter the configuration enables.
///
/// With no filters configured the conjunction is empty and keeps every
/// event.
///
/// # Errors
///
/// Returns [`FetchError::Configuration`] when a time bound is not RFC 3339.
pub fn event_matcher(config: &IssueWatchConfig) -> Result<And, FetchError> {
    let mut matcher = And::default();

    let authors = config.author_list();
    if !authors.is_empty() {
        matcher = matcher.with(author_logins(&authors).boxed());
    }
    if config.labeled_only {
        matcher = matcher.with(AddLabel.boxed());
    }
    if let Some(prefix) = config.label_prefix.as_deref() {
        matcher = matcher.with(LabelPrefix::new(prefix).boxed());
    }
    if let Some(after) = config.created_after()? {
        matcher = matcher.with(CreatedAfter(after).boxed());
    }
    if let Some(before) = config.created_before()? {
        matcher = matcher.with(CreatedBefore(before).boxed());
    }

    Ok(matcher)
}
