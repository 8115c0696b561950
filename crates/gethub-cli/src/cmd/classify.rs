//! Classify command

use std::path::Path;

use anyhow::Result;
use gethub_core::{enrich, recommend};
use gethub_schema::{Asset, PlatformGuess, Release};

use crate::ops::manifest::read_manifest;
use crate::ui::Output;
use crate::ui::list::{format_asset_details, format_asset_header, format_asset_row};

fn local_release(files: &[String]) -> Release {
    Release {
        id: 0,
        tag_name: "local".to_string(),
        name: None,
        body: None,
        published_at: None,
        prerelease: false,
        draft: false,
        assets: files.iter().map(Asset::named).collect(),
    }
}

/// Classify filenames offline, with a manifest file or the keyword heuristics
pub fn classify(
    files: &[String],
    manifest: Option<&Path>,
    platform: PlatformGuess,
    json: bool,
) -> Result<()> {
    let manifest = manifest.map(read_manifest).transpose()?;
    let enriched = enrich(&[local_release(files)], manifest.as_ref());
    let ranked = recommend(&enriched[0], &platform);

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked.assets)?);
        return Ok(());
    }

    let output = Output::new();
    output.section("Classification");
    output.field("platform", &platform.label());
    output.field(
        "rules",
        match &manifest {
            Some(m) => format!("{} manifest rules", m.rules.len()),
            None => "detected from filenames".to_string(),
        }
        .as_str(),
    );
    println!();
    println!("{}", format_asset_header());
    for asset in &ranked.assets {
        println!("{}", format_asset_row(asset));
        for line in format_asset_details(asset, true) {
            println!("{line}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_release_keeps_order() {
        let files = vec!["b.zip".to_string(), "a.zip".to_string()];
        let release = local_release(&files);
        let names: Vec<&str> = release.assets.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["b.zip", "a.zip"]);
    }
}
