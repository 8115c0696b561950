//! Repository references.

use thiserror::Error;

/// Input that does not name a GitHub repository.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("Invalid repository '{0}': expected 'owner/repo' or a github.com URL")]
pub struct RepoParseError(pub String);

/// A repository key uniquely identifying a GitHub repository.
///
/// # Example
///
/// ```
/// use gethub_core::repo::RepoKey;
///
/// let repo = RepoKey::parse("https://github.com/Tyrrrz/DiscordChatExporter.git").unwrap();
/// assert_eq!(repo.owner, "Tyrrrz");
/// assert_eq!(repo.repo, "DiscordChatExporter");
/// ```
#[derive(Debug, Clone, Hash, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RepoKey {
    /// Repository owner (GitHub user or organization).
    pub owner: String,
    /// Repository name.
    pub repo: String,
}

impl RepoKey {
    /// Create a new `RepoKey` from an owner and repository name.
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Parse user input: `owner/repo`, or any URL containing
    /// `github.com/owner/repo` (extra path segments, query and a trailing
    /// `.git` are ignored).
    ///
    /// # Errors
    ///
    /// Returns [`RepoParseError`] if no owner and repository name can be
    /// extracted.
    pub fn parse(input: &str) -> Result<Self, RepoParseError> {
        const HOST: &str = "github.com/";

        let trimmed = input.trim();
        let invalid = || RepoParseError(trimmed.to_string());

        let (path, from_url) = match trimmed.find(HOST) {
            Some(idx) => (&trimmed[idx + HOST.len()..], true),
            None => (trimmed, false),
        };
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');

        let mut parts = path.split('/');
        let owner = parts.next().unwrap_or_default();
        let repo = parts.next().unwrap_or_default();

        // Bare input must be exactly `owner/repo`.
        if !from_url && parts.next().is_some() {
            return Err(invalid());
        }

        let repo = repo.strip_suffix(".git").unwrap_or(repo);
        if owner.is_empty() || repo.is_empty() || owner.contains(':') {
            return Err(invalid());
        }

        Ok(Self::new(owner, repo))
    }
}

impl std::fmt::Display for RepoKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

impl std::str::FromStr for RepoKey {
    type Err = RepoParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
