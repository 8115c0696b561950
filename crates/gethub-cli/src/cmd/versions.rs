//! Versions command

use anyhow::Result;
use gethub_core::select::available_versions;
use gethub_core::{RepoKey, SourceConfig};

use crate::ops::fetch::load_snapshot;
use crate::ui::Output;
use crate::ui::list::format_version_row;

/// List the entries of the version selector for a repository
pub async fn versions(repo: &RepoKey, config: SourceConfig, json: bool) -> Result<()> {
    let snapshot = load_snapshot(repo, config).await?;
    let options = available_versions(&snapshot.releases);

    if json {
        println!("{}", serde_json::to_string_pretty(&options)?);
        return Ok(());
    }

    let output = Output::new();
    output.section(&format!("{repo} versions"));
    for option in &options {
        println!("{}", format_version_row(option));
    }
    if snapshot.releases.is_empty() {
        output.info("This repository has no releases.");
    }

    Ok(())
}
