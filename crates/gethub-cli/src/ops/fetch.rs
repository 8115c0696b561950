//! Fetching a repository, with one authenticated retry on rate limiting.

use std::io::{IsTerminal, Write};

use anyhow::{Result, anyhow};
use chrono::Local;
use crossterm::style::Stylize;
use gethub_core::{GitHubSource, RepoKey, Snapshot, SourceConfig, SourceError, fetch_snapshot};

/// Fetch releases and manifest for `repo`.
///
/// When GitHub rate-limits an anonymous request and stdin is a terminal,
/// ask for a token and retry once with it.
pub async fn load_snapshot(repo: &RepoKey, config: SourceConfig) -> Result<Snapshot> {
    let source = GitHubSource::new(config.clone())?;
    match fetch_snapshot(&source, repo).await {
        Ok(snapshot) => Ok(snapshot),
        Err(err)
            if err.is_rate_limit()
                && !source.is_authenticated()
                && std::io::stdin().is_terminal() =>
        {
            let Some(token) = prompt_token(&err)? else {
                return Err(describe(err));
            };
            tracing::debug!("Retrying {repo} with a token");
            let source = GitHubSource::new(config.with_token(Some(token)))?;
            fetch_snapshot(&source, repo).await.map_err(describe)
        }
        Err(err) => Err(describe(err)),
    }
}

fn prompt_token(err: &SourceError) -> Result<Option<String>> {
    eprintln!("  {} {}", "⚠".yellow(), message(err));
    eprint!("  GitHub token (leave empty to cancel): ");
    std::io::stderr().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    let token = input.trim();
    Ok((!token.is_empty()).then(|| token.to_string()))
}

/// User-facing text for a source error.
pub fn message(err: &SourceError) -> String {
    match err {
        SourceError::RateLimited { reset } => {
            let mut msg = "GitHub API rate limit exceeded.".to_string();
            if let Some(reset) = reset {
                let local = reset.with_timezone(&Local);
                msg.push_str(&format!(" Resets at {}.", local.format("%H:%M")));
            }
            msg
        }
        SourceError::NotFound { repo } => {
            format!("Repository {repo} not found. Check the owner and repository name.")
        }
        other => other.to_string(),
    }
}

/// Turn a source error into the error the binary reports.
pub fn describe(err: SourceError) -> anyhow::Error {
    let mut msg = message(&err);
    if err.is_rate_limit() {
        msg.push_str(" Pass --token or set GITHUB_TOKEN to raise the limit.");
    }
    anyhow!(msg)
}
