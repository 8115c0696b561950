//! Settings for talking to the GitHub API.

use gethub_schema::MANIFEST_FILE;

/// Public GitHub REST endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// GitHub caps `per_page` at 100.
pub const DEFAULT_PER_PAGE: u8 = 100;

/// Configuration for [`GitHubSource`](crate::source::GitHubSource).
#[derive(Clone)]
pub struct SourceConfig {
    /// Base URL of the REST API, without a trailing slash.
    pub api_url: String,
    /// Bearer token raising the request quota. `None` means anonymous access.
    pub token: Option<String>,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    /// Manifest path relative to the repository root.
    pub manifest_path: String,
    /// Releases fetched per repository (single page).
    pub per_page: u8,
}

impl SourceConfig {
    /// Use a different API endpoint (GitHub Enterprise, test servers).
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Authenticate with a token. Blank tokens are ignored.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        self
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
            user_agent: crate::USER_AGENT.to_string(),
            manifest_path: MANIFEST_FILE.to_string(),
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

// Hand-written so the token never ends up in logs.
impl std::fmt::Debug for SourceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceConfig")
            .field("api_url", &self.api_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("user_agent", &self.user_agent)
            .field("manifest_path", &self.manifest_path)
            .field("per_page", &self.per_page)
            .finish()
    }
}
