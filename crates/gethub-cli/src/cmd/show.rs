//! Show command

use std::time::Instant;

use anyhow::Result;
use gethub_core::select::FilterOptions;
use gethub_core::{MatchLevel, RepoKey, RepositoryView, Selection, SourceConfig};
use gethub_schema::{PlatformGuess, RankedAsset, Release};
use serde::Serialize;

use crate::ops::fetch::load_snapshot;
use crate::ui::Output;
use crate::ui::list::{print_filter_options, print_release};

#[derive(Serialize)]
struct ShowReport<'a> {
    repo: &'a RepoKey,
    platform: PlatformGuess,
    manifest: bool,
    options: FilterOptions,
    releases: Vec<Release<RankedAsset>>,
}

/// Fetch a repository and print the selected releases with ranked assets
///
/// `details` adds where each asset's classification came from.
pub async fn show(
    repo: &RepoKey,
    selection: &Selection,
    platform: PlatformGuess,
    config: SourceConfig,
    json: bool,
    details: bool,
) -> Result<()> {
    let start = Instant::now();
    let snapshot = load_snapshot(repo, config).await?;
    let view = RepositoryView::new(snapshot, platform);
    let releases = view.select(selection);

    if json {
        let report = ShowReport {
            repo: view.repo(),
            platform: view.platform(),
            manifest: view.manifest().is_some(),
            options: view.filter_options(),
            releases,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let output = Output::new();
    output.section(&view.repo().to_string());
    output.field("platform", &view.platform().label());
    output.field(
        "rules",
        if view.manifest().is_some() {
            "gethub.json"
        } else {
            "detected from filenames"
        },
    );
    println!();

    if view.releases().is_empty() {
        output.info("This repository has no releases.");
        return Ok(());
    }
    if releases.is_empty() {
        output.warning(&format!(
            "No assets match release {}, os {}, tag {}.",
            selection.version, selection.os, selection.tag
        ));
    }

    for release in &releases {
        print_release(release, details);
        if let (Some(MatchLevel::OsOnly), Some(os)) =
            (view.match_level(&release.tag_name), view.platform().os)
        {
            output.info(&format!(
                "No {} build in {}; every {} asset is recommended.",
                view.platform().label(),
                release.tag_name,
                os.label()
            ));
            println!();
        }
    }

    print_filter_options(&view.filter_options());

    let assets: usize = releases.iter().map(|r| r.assets.len()).sum();
    let recommended = releases
        .iter()
        .flat_map(|r| &r.assets)
        .filter(|a| a.recommended)
        .count();
    output.summary(
        &format!("{assets} assets, {recommended} recommended"),
        start.elapsed().as_secs_f64(),
    );

    Ok(())
}
