//! GitHub REST adapter.

use async_trait::async_trait;
use base64::Engine;
use chrono::{DateTime, Utc};
use gethub_schema::{Manifest, ManifestError, Release};
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use super::{ReleaseSource, SourceError};
use crate::config::SourceConfig;
use crate::repo::RepoKey;

/// API quota for the current credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimit {
    /// Requests allowed per window.
    pub limit: u32,
    /// Requests left in the current window.
    pub remaining: u32,
    /// Requests already made in the current window.
    #[serde(default)]
    pub used: u32,
    /// When the window resets.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub reset: DateTime<Utc>,
}

#[derive(Deserialize)]
struct RateLimitResponse {
    rate: RateLimit,
}

#[derive(Deserialize)]
struct ApiMessage {
    message: String,
}

/// Body of `GET /repos/{owner}/{repo}/contents/{path}` for a file.
#[derive(Deserialize)]
struct ContentFile {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    encoding: Option<String>,
}

/// Reasons a manifest is treated as absent.
#[derive(Error, Debug)]
enum ManifestFetchError {
    #[error("no manifest file")]
    Missing,
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("unsupported content encoding '{0}'")]
    Encoding(String),
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("manifest is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error(transparent)]
    Parse(#[from] ManifestError),
}

/// Release source backed by the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GitHubSource {
    client: Client,
    config: SourceConfig,
}

impl GitHubSource {
    /// Build a client for `config`, authenticated when it carries a token.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidToken`] if the token contains characters
    /// not allowed in a header, or [`SourceError::Http`] if the HTTP client
    /// cannot be initialised.
    pub fn new(config: SourceConfig) -> Result<Self, SourceError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static("2022-11-28"),
        );

        if let Some(t) = &config.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {t}"))
                .map_err(|_| SourceError::InvalidToken)?;
            value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, value);
        }

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    /// True when requests carry a token.
    pub fn is_authenticated(&self) -> bool {
        self.config.token.is_some()
    }

    /// Current API quota. Does not count against it.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the request fails or GitHub answers with an
    /// error status.
    pub async fn rate_limit(&self) -> Result<RateLimit, SourceError> {
        let url = format!("{}/rate_limit", self.config.api_url);
        debug!(%url, "fetching rate limit");

        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(error_for_response(resp, None).await);
        }
        let body: RateLimitResponse = resp.json().await?;
        Ok(body.rate)
    }

    async fn fetch_manifest(&self, repo: &RepoKey) -> Result<Manifest, ManifestFetchError> {
        let url = format!(
            "{}/repos/{}/{}/contents/{}",
            self.config.api_url,
            repo.owner,
            repo.repo,
            self.config.manifest_path.trim_start_matches('/')
        );
        debug!(%url, "fetching manifest");

        let resp = self.client.get(&url).send().await?;
        match resp.status() {
            StatusCode::NOT_FOUND => return Err(ManifestFetchError::Missing),
            s if !s.is_success() => return Err(ManifestFetchError::Status(s)),
            _ => {}
        }

        let file: ContentFile = resp.json().await?;
        match file.encoding.as_deref() {
            None | Some("base64") => {}
            Some(other) => return Err(ManifestFetchError::Encoding(other.to_string())),
        }
        let content = file.content.ok_or(ManifestFetchError::Missing)?;

        // GitHub wraps the base64 payload across lines.
        let compact: String = content.chars().filter(|c| !c.is_whitespace()).collect();
        let bytes = base64::engine::general_purpose::STANDARD.decode(compact)?;
        let text = String::from_utf8(bytes)?;

        Ok(Manifest::parse(&text)?)
    }
}

#[async_trait]
impl ReleaseSource for GitHubSource {
    async fn releases(&self, repo: &RepoKey) -> Result<Vec<Release>, SourceError> {
        let url = format!(
            "{}/repos/{}/{}/releases?per_page={}",
            self.config.api_url, repo.owner, repo.repo, self.config.per_page
        );
        debug!(%url, authenticated = self.is_authenticated(), "fetching releases");

        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(error_for_response(resp, Some(repo)).await);
        }

        Ok(resp.json().await?)
    }

    async fn manifest(&self, repo: &RepoKey) -> Option<Manifest> {
        match self.fetch_manifest(repo).await {
            Ok(manifest) => {
                debug!(repo = %repo, rules = manifest.rules.len(), "manifest loaded");
                Some(manifest)
            }
            Err(ManifestFetchError::Missing) => {
                debug!(repo = %repo, "no manifest, using filename detection");
                None
            }
            Err(e) => {
                warn!(repo = %repo, error = %e, "ignoring unusable manifest");
                None
            }
        }
    }
}

/// Map a non-success response to the matching [`SourceError`].
async fn error_for_response(resp: Response, repo: Option<&RepoKey>) -> SourceError {
    let status = resp.status();
    let headers = resp.headers();
    let exhausted = header_str(headers, "x-ratelimit-remaining") == Some("0");
    let reset = header_str(headers, "x-ratelimit-reset")
        .and_then(|v| v.parse::<i64>().ok())
        .and_then(|secs| DateTime::from_timestamp(secs, 0));

    let body = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiMessage>(&body)
        .map(|m| m.message)
        .unwrap_or(body);

    let limited = matches!(status, StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS)
        && (exhausted || message.to_lowercase().contains("rate limit"));

    if limited {
        return SourceError::RateLimited { reset };
    }
    if let (StatusCode::NOT_FOUND, Some(repo)) = (status, repo) {
        return SourceError::NotFound { repo: repo.clone() };
    }
    SourceError::Status {
        status: status.as_u16(),
        message,
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
