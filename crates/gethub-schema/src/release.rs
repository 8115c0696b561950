//! Releases and their downloadable assets, as returned by the GitHub API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A published release.
///
/// Generic over the asset stage: the same header carries raw [`Asset`]s as
/// fetched, then enriched and ranked assets as the pipeline runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Release<A = Asset> {
    /// GitHub release id.
    pub id: u64,
    /// Git tag the release points at (e.g. `v1.2.0`).
    pub tag_name: String,
    /// Release title. GitHub returns `null` for untitled releases.
    #[serde(default)]
    pub name: Option<String>,
    /// Release notes in Markdown.
    #[serde(default)]
    pub body: Option<String>,
    /// Publication time; absent for drafts.
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    /// Marked as a pre-release by the author.
    #[serde(default)]
    pub prerelease: bool,
    /// Unpublished draft (only visible with push access).
    #[serde(default)]
    pub draft: bool,
    /// Downloadable files, in API order.
    pub assets: Vec<A>,
}

impl<A> Release<A> {
    /// Title to show: the release name, or the tag when the name is empty.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.tag_name,
        }
    }

    /// Replace the assets while keeping the release header.
    pub fn with_assets<B>(&self, assets: Vec<B>) -> Release<B> {
        Release {
            id: self.id,
            tag_name: self.tag_name.clone(),
            name: self.name.clone(),
            body: self.body.clone(),
            published_at: self.published_at,
            prerelease: self.prerelease,
            draft: self.draft,
            assets,
        }
    }

    /// Transform each asset, keeping order and the release header.
    pub fn map_assets<B, F>(&self, f: F) -> Release<B>
    where
        F: FnMut(&A) -> B,
    {
        self.with_assets(self.assets.iter().map(f).collect())
    }
}

/// A file attached to a release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// GitHub asset id.
    pub id: u64,
    /// Filename as uploaded.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Number of downloads so far.
    #[serde(default)]
    pub download_count: u64,
    /// Direct download URL.
    pub browser_download_url: String,
    /// MIME type reported by GitHub.
    #[serde(default)]
    pub content_type: Option<String>,
    /// Checksum in `algorithm:hex` form (e.g. `sha256:...`), when GitHub has one.
    #[serde(default)]
    pub digest: Option<String>,
}

impl Asset {
    /// Minimal asset with just a filename, for offline classification.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            size: 0,
            download_count: 0,
            browser_download_url: String::new(),
            content_type: None,
            digest: None,
        }
    }
}
