//! Release and asset output formatting
//!
//! Column-aligned rendering for `gethub show` and `gethub classify`.

use super::theme::{Theme, fit, format_date, format_number, format_size};
use crossterm::style::Stylize;
use gethub_core::select::{FilterOptions, VersionOption};
use gethub_schema::{Classification, RankedAsset, Release};

/// Header line for one release: tag, name, date and pre-release marker.
pub fn format_release_header<A>(release: &Release<A>) -> String {
    let theme = Theme::default();

    let mut line = format!("  {}", release.tag_name.as_str().bold());
    if release.display_name() != release.tag_name {
        line.push_str(&format!(
            "  {}",
            release.display_name().with(theme.colors.release)
        ));
    }
    if let Some(date) = &release.published_at {
        line.push_str(&format!(
            "  {}",
            format_date(date).with(theme.colors.secondary)
        ));
    }
    if release.prerelease {
        line.push_str(&format!("  {}", "pre-release".with(theme.colors.warning)));
    }
    line
}

/// Column headers for the asset table
pub fn format_asset_header() -> String {
    let theme = Theme::default();
    let header = format!(
        "    {:<nw$} {:<pw$} {:>sw$} {:>dw$}  {}",
        "asset",
        "platform",
        "size",
        "downloads",
        "tags",
        nw = theme.layout.name_width,
        pw = theme.layout.platform_width,
        sw = theme.layout.size_width,
        dw = theme.layout.downloads_width,
    );
    header.dark_grey().to_string()
}

/// One asset row: recommendation marker, name, platform, size, downloads, tags.
pub fn format_asset_row(asset: &RankedAsset) -> String {
    let theme = Theme::default();

    let marker = if asset.recommended {
        theme.icons.active.with(theme.colors.success)
    } else {
        theme.icons.pending.with(theme.colors.secondary)
    };
    let name = fit(asset.name(), theme.layout.name_width);
    let name = if asset.recommended {
        name.with(theme.colors.success).bold()
    } else {
        name.with(theme.colors.asset_name)
    };
    let platform = fit(
        &gethub_schema::format_platform(asset.os(), asset.arch()),
        theme.layout.platform_width,
    );
    let size = if asset.asset.size > 0 {
        format_size(asset.asset.size)
    } else {
        String::new()
    };
    let downloads = format_number(asset.asset.download_count);
    let tags = if asset.tags().is_empty() {
        String::new()
    } else {
        format!("[{}]", asset.tags().join(", "))
    };

    format!(
        "  {} {} {} {} {}  {}",
        marker,
        name,
        platform.with(theme.colors.platform),
        format!("{size:>w$}", w = theme.layout.size_width).with(theme.colors.secondary),
        format!("{downloads:>w$}", w = theme.layout.downloads_width).with(theme.colors.secondary),
        tags.with(theme.colors.tag),
    )
}

/// Indented detail lines under an asset row. Empty fields are skipped.
pub fn format_asset_details(asset: &RankedAsset, show_source: bool) -> Vec<String> {
    let theme = Theme::default();
    let mut lines = Vec::new();

    if show_source {
        let source = match &asset.classification {
            Classification::Rule(rule) => format!("rule {}", rule.pattern),
            Classification::Detected(pattern) if pattern.is_empty() => {
                "nothing recognised in filename".to_string()
            }
            Classification::Detected(_) => "detected from filename".to_string(),
            Classification::Unmatched => "no matching rule".to_string(),
        };
        lines.push(source);
    }
    if let Some(description) = asset.description() {
        lines.push(description.to_string());
    }
    if let Some(digest) = &asset.asset.digest {
        lines.push(digest.clone());
    }
    if !asset.asset.browser_download_url.is_empty() {
        lines.push(asset.asset.browser_download_url.clone());
    }

    lines
        .into_iter()
        .map(|l| format!("      {}", l.with(theme.colors.secondary)))
        .collect()
}

/// Print a release with its (already filtered and sorted) assets.
pub fn print_release(release: &Release<RankedAsset>, show_source: bool) {
    println!("{}", format_release_header(release));
    println!("{}", format_asset_header());
    for asset in &release.assets {
        println!("{}", format_asset_row(asset));
        for line in format_asset_details(asset, show_source) {
            println!("{line}");
        }
    }
    println!();
}

/// Print the values accepted by `--os` and `--tag`.
pub fn print_filter_options(options: &FilterOptions) {
    let theme = Theme::default();

    let os: Vec<&str> = options.os.iter().map(|o| o.as_str()).collect();
    let os = if os.is_empty() {
        "all".to_string()
    } else {
        format!("all, {}", os.join(", "))
    };
    println!("  {} {}", "--os ".with(theme.colors.header), os);

    if !options.tags.is_empty() {
        println!(
            "  {} all, {}",
            "--tag".with(theme.colors.header),
            options.tags.join(", ")
        );
    }
}

/// One entry of `gethub versions`.
pub fn format_version_row(option: &VersionOption) -> String {
    let theme = Theme::default();
    let mut line = format!(
        "  {} {}",
        format!("{:<24}", option.value).with(theme.colors.release),
        option.label.as_str().with(theme.colors.secondary)
    );
    if option.prerelease {
        line.push_str(&format!("  {}", "pre-release".with(theme.colors.warning)));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use gethub_schema::{Asset, AssetPattern, EnrichedAsset, MatchedRule, Os, Rule};

    fn ranked(name: &str, classification: Classification, recommended: bool) -> RankedAsset {
        let mut asset = Asset::named(name);
        asset.size = 2048;
        asset.download_count = 12_345;
        asset.browser_download_url = format!("https://example.com/{name}");
        RankedAsset {
            enriched: EnrichedAsset {
                asset,
                classification,
            },
            recommended,
        }
    }

    #[test]
    fn test_asset_row_columns() {
        let a = ranked(
            "tool-linux-x64-portable.tgz",
            Classification::Detected(AssetPattern::from_filename("tool-linux-x64-portable.tgz")),
            true,
        );
        let row = format_asset_row(&a);
        assert!(row.contains("tool-linux-x64-portable.tgz"));
        assert!(row.contains("Linux x64"));
        assert!(row.contains("2.0 KB"));
        assert!(row.contains("12,345"));
        assert!(row.contains("[Portable]"));
        assert!(row.contains("●"));
    }

    #[test]
    fn test_unmatched_row_shows_any_platform() {
        let a = ranked("notes.txt", Classification::Unmatched, false);
        let row = format_asset_row(&a);
        assert!(row.contains("Any platform"));
        assert!(row.contains("○"));
    }

    #[test]
    fn test_details_include_rule_and_description() {
        let rule = Rule::new(r"app\.zip")
            .with_os(Os::Windows)
            .with_description("Portable build");
        let a = ranked("app.zip", Classification::Rule(MatchedRule::from(&rule)), false);
        let lines = format_asset_details(&a, true);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains(r"rule app\.zip"));
        assert!(lines[1].contains("Portable build"));
        assert!(lines[2].contains("https://example.com/app.zip"));

        assert_eq!(format_asset_details(&a, false).len(), 2);
    }

    #[test]
    fn test_details_source_for_heuristics() {
        let known = ranked(
            "tool-linux-x64.tgz",
            Classification::Detected(AssetPattern::from_filename("tool-linux-x64.tgz")),
            false,
        );
        assert!(format_asset_details(&known, true)[0].contains("detected from filename"));

        let blank = ranked(
            "notes.txt",
            Classification::Detected(AssetPattern::from_filename("notes.txt")),
            false,
        );
        assert!(format_asset_details(&blank, true)[0].contains("nothing recognised"));
    }

    #[test]
    fn test_version_row_marks_prerelease() {
        let option = VersionOption {
            value: "v2.0.0-rc1".into(),
            label: "RC 1".into(),
            prerelease: true,
        };
        let row = format_version_row(&option);
        assert!(row.contains("v2.0.0-rc1"));
        assert!(row.contains("pre-release"));
    }
}
