//! Personal access token loading.
//!
//! A token may be supplied literally or read from a file. File contents are
//! trimmed of surrounding whitespace. When neither source yields a non-blank
//! token the client falls back to unauthenticated access.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use super::error::FetchError;

/// Personal access token wrapper enforcing presence.
#[derive(Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Trims the token and rejects blank values.
    ///
    /// Returns `None` when nothing remains after trimming.
    #[must_use]
    pub fn new(token: impl AsRef<str>) -> Option<Self> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

impl std::fmt::Debug for PersonalAccessToken {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("PersonalAccessToken(<redacted>)")
    }
}

/// Where the token comes from. A literal token takes precedence over a file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSource {
    token: Option<String>,
    token_file: Option<Utf8PathBuf>,
}

impl TokenSource {
    /// Creates a source from an optional literal token and token file path.
    #[must_use]
    pub const fn new(token: Option<String>, token_file: Option<Utf8PathBuf>) -> Self {
        Self { token, token_file }
    }

    /// Source for unauthenticated access.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self {
            token: None,
            token_file: None,
        }
    }

    /// Resolves the token, reading the token file when no literal token is
    /// set.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::TokenFile`] when the token file cannot be read.
    pub fn resolve(&self) -> Result<Option<PersonalAccessToken>, FetchError> {
        if let Some(token) = self.token.as_deref().and_then(PersonalAccessToken::new) {
            return Ok(Some(token));
        }

        match self.token_file.as_deref() {
            Some(path) => read_token_file(path).map(PersonalAccessToken::new),
            None => Ok(None),
        }
    }
}

fn read_token_file(path: &Utf8Path) -> Result<String, FetchError> {
    let to_error = |message: String| FetchError::TokenFile {
        path: path.to_string(),
        message,
    };

    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| to_error("path has no file name".to_owned()))?;

    let dir = Dir::open_ambient_dir(parent, ambient_authority())
        .map_err(|error| to_error(error.to_string()))?;
    dir.read_to_string(file_name)
        .map_err(|error| to_error(error.to_string()))
}
