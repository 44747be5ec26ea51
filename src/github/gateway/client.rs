//! Octocrab client construction.

use http::Uri;
use octocrab::Octocrab;

use crate::github::error::FetchError;
use crate::github::token::PersonalAccessToken;

use super::error_mapping::map_octocrab_error;

/// Builds an Octocrab client for the API base, authenticated when a token is
/// supplied.
///
/// # Errors
///
/// Returns `FetchError::InvalidUrl` when the base URI cannot be parsed or
/// `FetchError::Api` when Octocrab fails to construct a client.
pub(super) fn build_octocrab_client(
    token: Option<&PersonalAccessToken>,
    api_base: &str,
) -> Result<Octocrab, FetchError> {
    let base_uri: Uri = api_base
        .parse::<Uri>()
        .map_err(|error| FetchError::InvalidUrl(error.to_string()))?;

    let builder = Octocrab::builder()
        .base_uri(base_uri)
        .map_err(|error| FetchError::Api {
            message: format!("build client failed: {error}"),
        })?;
    let configured = match token {
        Some(personal_token) => builder.personal_token(personal_token.value()),
        None => builder,
    };

    configured
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}
