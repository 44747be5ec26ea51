//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.issuewatch.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `ISSUEWATCH_TOKEN`, `ISSUEWATCH_PROJECT`, …
//! 4. **Command-line arguments** – `--token`/`-t`, `--project`/`-p`, …
//!
//! # Configuration File
//!
//! ```toml
//! organization = "kubernetes"
//! project = "kubernetes"
//! token_file = "/etc/github/token"
//! events = true
//! authors = "alice,bob"
//! label_prefix = "kind/"
//! labeled_only = true
//! created_after = "2016-05-01T00:00:00Z"
//! ```

use camino::Utf8PathBuf;
use chrono::{DateTime, Utc};
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::error::FetchError;
use crate::github::locator::RepositoryLocator;
use crate::github::token::TokenSource;

/// Organisation and project polled when none is configured.
pub const DEFAULT_REPOSITORY: &str = "kubernetes";

/// Operation mode determined by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Fetch issues updated since a point in time.
    FetchIssues,
    /// Fetch issue events and filter them.
    FetchEvents,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use issuewatch::IssueWatchConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = IssueWatchConfig::load().expect("failed to load configuration");
/// let locator = config.repository_locator().expect("repository should be valid");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "ISSUEWATCH",
    discovery(
        dotfile_name = ".issuewatch.toml",
        config_file_name = "issuewatch.toml",
        app_name = "issuewatch"
    )
)]
pub struct IssueWatchConfig {
    /// GitHub organisation that owns the repository.
    ///
    /// Can be provided via:
    /// - CLI: `--organization <ORG>` or `-o <ORG>`
    /// - Environment: `ISSUEWATCH_ORGANIZATION`
    /// - Config file: `organization = "..."`
    #[ortho_config(cli_short = 'o')]
    pub organization: String,

    /// Repository name within the organisation.
    ///
    /// Can be provided via:
    /// - CLI: `--project <NAME>` or `-p <NAME>`
    /// - Environment: `ISSUEWATCH_PROJECT`
    /// - Config file: `project = "..."`
    #[ortho_config(cli_short = 'p')]
    pub project: String,

    /// OAuth token used for requests. Takes precedence over `token_file`.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `ISSUEWATCH_TOKEN`
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// File containing the OAuth token. Surrounding whitespace is ignored.
    ///
    /// Without either a token or a token file, requests are unauthenticated.
    #[ortho_config()]
    pub token_file: Option<String>,

    /// API base URL, for GitHub Enterprise hosts.
    ///
    /// Defaults to `https://api.github.com`. On the command line:
    /// `--api-base <URL>` or `-a <URL>`.
    #[ortho_config(cli_short = 'a')]
    pub api_base: Option<String>,

    /// Fetch issue events instead of issues.
    ///
    /// Can be provided via:
    /// - CLI: `--events` / `-e`
    /// - Config file: `events = true`
    #[ortho_config(cli_short = 'e')]
    pub events: bool,

    /// Only issues updated at or after this RFC 3339 time are fetched.
    #[ortho_config()]
    pub since: Option<String>,

    /// Stop fetching events after the page that contains this event ID.
    #[ortho_config()]
    pub latest_event_id: Option<u64>,

    /// Comma-separated logins; keep only events by one of these actors.
    ///
    /// Can be provided via:
    /// - CLI: `--authors <LOGINS>` or `-A <LOGINS>`
    /// - Environment: `ISSUEWATCH_AUTHORS`
    /// - Config file: `authors = "alice,bob"`
    #[ortho_config(cli_short = 'A')]
    pub authors: Option<String>,

    /// Keep only events whose label starts with this prefix.
    #[ortho_config()]
    pub label_prefix: Option<String>,

    /// Keep only `labeled` events.
    #[ortho_config()]
    pub labeled_only: bool,

    /// Keep only events created strictly after this RFC 3339 time.
    #[ortho_config()]
    pub created_after: Option<String>,

    /// Keep only events created strictly before this RFC 3339 time.
    #[ortho_config()]
    pub created_before: Option<String>,
}

impl Default for IssueWatchConfig {
    fn default() -> Self {
        Self {
            organization: DEFAULT_REPOSITORY.to_owned(),
            project: DEFAULT_REPOSITORY.to_owned(),
            token: None,
            token_file: None,
            api_base: None,
            events: false,
            since: None,
            latest_event_id: None,
            authors: None,
            label_prefix: None,
            labeled_only: false,
            created_after: None,
            created_before: None,
        }
    }
}

impl IssueWatchConfig {
    /// Determines the operation mode.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.events {
            OperationMode::FetchEvents
        } else {
            OperationMode::FetchIssues
        }
    }

    /// Builds the locator for the configured repository.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Configuration`] for blank names or
    /// [`FetchError::InvalidUrl`] for an unparsable API base.
    pub fn repository_locator(&self) -> Result<RepositoryLocator, FetchError> {
        RepositoryLocator::new(&self.organization, &self.project, self.api_base.as_deref())
    }

    /// Returns where the token should be read from.
    #[must_use]
    pub fn token_source(&self) -> TokenSource {
        TokenSource::new(
            self.token.clone(),
            self.token_file.as_deref().map(Utf8PathBuf::from),
        )
    }

    /// Lower bound for the issue listing; the Unix epoch when unset.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Configuration`] when the value is not RFC 3339.
    pub fn since(&self) -> Result<DateTime<Utc>, FetchError> {
        let parsed = parse_timestamp("since", self.since.as_deref())?;
        Ok(parsed.unwrap_or(DateTime::<Utc>::UNIX_EPOCH))
    }

    /// Parsed `created_after` bound.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Configuration`] when the value is not RFC 3339.
    pub fn created_after(&self) -> Result<Option<DateTime<Utc>>, FetchError> {
        parse_timestamp("created_after", self.created_after.as_deref())
    }

    /// Parsed `created_before` bound.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Configuration`] when the value is not RFC 3339.
    pub fn created_before(&self) -> Result<Option<DateTime<Utc>>, FetchError> {
        parse_timestamp("created_before", self.created_before.as_deref())
    }

    /// Author logins from the comma-separated `authors` value, with blanks
    /// dropped.
    #[must_use]
    pub fn author_list(&self) -> Vec<String> {
        self.authors
            .as_deref()
            .map(|authors| {
                authors
                    .split(',')
                    .map(str::trim)
                    .filter(|login| !login.is_empty())
                    .map(ToOwned::to_owned)
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn parse_timestamp(field: &str, value: Option<&str>) -> Result<Option<DateTime<Utc>>, FetchError> {
    value
        .map(|raw| {
            DateTime::parse_from_rfc3339(raw.trim())
                .map(|parsed| parsed.with_timezone(&Utc))
                .map_err(|error| FetchError::Configuration {
                    message: format!("{field} must be an RFC 3339 timestamp: {error}"),
                })
        })
        .transpose()
}

#[cfg(test)]
mod tests;
