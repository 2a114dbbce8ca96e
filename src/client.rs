use anyhow::Context as _;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};

/// Builds the authenticated GitHub API client for the workflow run.
///
/// Constructed before the payload is examined so a missing or malformed
/// `repo-token` input fails the step immediately. This step emits nothing
/// over the network.
pub fn github_client(token: &str) -> anyhow::Result<reqwest::Client> {
    if token.trim().is_empty() {
        anyhow::bail!("repo-token input is empty");
    }

    let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
        .context("repo-token is not a valid header value")?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, auth);
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(concat!("pr-event-action/", env!("CARGO_PKG_VERSION"))),
    );

    reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .context("failed to build GitHub client")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_is_rejected() {
        assert!(github_client("").is_err());
        assert!(github_client("   ").is_err());
    }

    #[test]
    fn control_characters_in_token_are_rejected() {
        assert!(github_client("abc\ndef").is_err());
    }

    #[test]
    fn token_builds_a_client() {
        assert!(github_client("ghs_sometoken").is_ok());
    }
}
