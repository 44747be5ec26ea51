//! Repository identity and API endpoint paths.

use url::Url;

use super::error::FetchError;

/// Public GitHub API base.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Organisation (repository owner) wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organization(String);

impl Organization {
    /// Validates that the organisation name is non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Configuration`] when the name is blank.
    pub fn new(value: &str) -> Result<Self, FetchError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(FetchError::Configuration {
                message: "organization must not be empty".to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the organisation name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Project (repository name) wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project(String);

impl Project {
    /// Validates that the project name is non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Configuration`] when the name is blank.
    pub fn new(value: &str) -> Result<Self, FetchError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(FetchError::Configuration {
                message: "project must not be empty".to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the project name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// The single repository being polled, plus the API base serving it.
///
/// # Example
///
/// ```
/// use issuewatch::github::RepositoryLocator;
///
/// let locator = RepositoryLocator::new("kubernetes", "kubernetes", None)
///     .expect("should create locator");
/// assert_eq!(locator.api_base().as_str(), "https://api.github.com/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLocator {
    api_base: Url,
    organization: Organization,
    project: Project,
}

impl RepositoryLocator {
    /// Creates a locator for `organization/project`.
    ///
    /// `api_base` defaults to the public GitHub API; pass a GitHub Enterprise
    /// base such as `https://ghe.example.com/api/v3` to target another host.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Configuration`] when a name is blank or
    /// [`FetchError::InvalidUrl`] when the API base cannot be parsed.
    pub fn new(
        organization: &str,
        project: &str,
        api_base: Option<&str>,
    ) -> Result<Self, FetchError> {
        let base = api_base.unwrap_or(DEFAULT_API_BASE);
        let parsed = Url::parse(base).map_err(|error| FetchError::InvalidUrl(error.to_string()))?;

        Ok(Self {
            api_base: parsed,
            organization: Organization::new(organization)?,
            project: Project::new(project)?,
        })
    }

    /// API base URL.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Repository owner.
    #[must_use]
    pub const fn organization(&self) -> &Organization {
        &self.organization
    }

    /// Repository name.
    #[must_use]
    pub const fn project(&self) -> &Project {
        &self.project
    }

    /// API path for listing issues.
    pub(crate) fn issues_path(&self) -> String {
        format!(
            "/repos/{}/{}/issues",
            self.organization.as_str(),
            self.project.as_str()
        )
    }

    /// API path for listing the repository's issue events.
    pub(crate) fn issue_events_path(&self) -> String {
        format!(
            "/repos/{}/{}/issues/events",
            self.organization.as_str(),
            self.project.as_str()
        )
    }
}
