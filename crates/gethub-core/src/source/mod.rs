//! Where releases and manifests come from.
//!
//! Only the releases request can fail the fetch. Manifest problems of any
//! kind mean "no manifest" and the assets get classified heuristically.

pub mod github;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gethub_schema::{Manifest, Release};
use thiserror::Error;

use crate::repo::RepoKey;

pub use github::{GitHubSource, RateLimit};

/// Failures of the releases request.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The anonymous (or token) quota is used up.
    #[error("GitHub API rate limit exceeded")]
    RateLimited {
        /// When the quota resets, if GitHub said.
        reset: Option<DateTime<Utc>>,
    },

    /// Unknown owner or repository.
    #[error("Repository not found: {repo}")]
    NotFound {
        /// The repository that was requested.
        repo: RepoKey,
    },

    /// Any other non-success response.
    #[error("GitHub API error {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// GitHub's error message, or the raw body.
        message: String,
    },

    /// Transport or decoding failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The token cannot be sent as an HTTP header.
    #[error("Invalid token: not a valid HTTP header value")]
    InvalidToken,
}

impl SourceError {
    /// Supplying a token and retrying may fix this error.
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }
}

/// A remote that lists releases and serves the repository manifest.
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    /// All releases, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the request fails; rate limits and
    /// unknown repositories get their own variants.
    async fn releases(&self, repo: &RepoKey) -> Result<Vec<Release>, SourceError>;

    /// The repository manifest, or `None` when it is missing or unusable.
    async fn manifest(&self, repo: &RepoKey) -> Option<Manifest>;
}

/// Everything fetched for one repository.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// The repository.
    pub repo: RepoKey,
    /// Releases, newest first.
    pub releases: Vec<Release>,
    /// Manifest, if the repository has a usable one.
    pub manifest: Option<Manifest>,
}

/// Fetch releases and manifest concurrently.
///
/// # Errors
///
/// Fails if and only if the releases request fails.
pub async fn fetch_snapshot(
    source: &dyn ReleaseSource,
    repo: &RepoKey,
) -> Result<Snapshot, SourceError> {
    let (releases, manifest) =
        futures::future::join(source.releases(repo), source.manifest(repo)).await;
    let releases = releases?;

    tracing::info!(
        repo = %repo,
        releases = releases.len(),
        manifest = manifest.is_some(),
        "fetched repository"
    );

    Ok(Snapshot {
        repo: repo.clone(),
        releases,
        manifest,
    })
}
