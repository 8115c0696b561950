//! Rate limit command

use anyhow::Result;
use chrono::Local;
use gethub_core::{GitHubSource, SourceConfig};

use crate::ops::fetch::describe;
use crate::ui::Output;

/// Print the remaining GitHub API quota
pub async fn rate_limit(config: SourceConfig, json: bool) -> Result<()> {
    let source = GitHubSource::new(config)?;
    let limit = source.rate_limit().await.map_err(describe)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&limit)?);
        return Ok(());
    }

    let output = Output::new();
    output.section("GitHub API");
    output.field(
        "auth",
        if source.is_authenticated() {
            "token"
        } else {
            "anonymous"
        },
    );
    output.field(
        "remaining",
        &format!("{} of {}", limit.remaining, limit.limit),
    );
    output.field(
        "resets",
        &limit
            .reset
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
    );

    if limit.remaining == 0 && !source.is_authenticated() {
        println!();
        output.warning("Quota used up. Pass --token or set GITHUB_TOKEN.");
    }

    Ok(())
}
