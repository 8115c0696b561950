//! Version/OS/tag selection and asset ordering.

use std::cmp::Ordering;
use std::convert::Infallible;
use std::str::FromStr;

use gethub_schema::{EnrichedAsset, Manifest, Os, RankedAsset, Release};
use serde::Serialize;

/// Sentinel selecting the newest release.
pub const LATEST: &str = "latest";
/// Sentinel disabling a filter.
pub const ALL: &str = "all";
/// Releases offered by [`available_versions`] besides "latest".
pub const VERSION_CHOICES: usize = 10;

/// Which release(s) to show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VersionSelector {
    /// The first release in source order (newest).
    #[default]
    Latest,
    /// Releases with exactly this tag.
    Tag(String),
}

impl FromStr for VersionSelector {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == LATEST {
            Self::Latest
        } else {
            Self::Tag(s.to_string())
        })
    }
}

impl std::fmt::Display for VersionSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Latest => f.write_str(LATEST),
            Self::Tag(tag) => f.write_str(tag),
        }
    }
}

/// A filter that is either off or requires one value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Filter<T> {
    /// Everything passes.
    #[default]
    All,
    /// Only items carrying this value pass.
    Only(T),
}

impl<T: FromStr> FromStr for Filter<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Filter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Only(v) => v.fmt(f),
        }
    }
}

/// The visitor's current choices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Release to show.
    pub version: VersionSelector,
    /// Operating system filter.
    pub os: Filter<Os>,
    /// Tag filter (exact, case-sensitive).
    pub tag: Filter<String>,
}

impl Selection {
    fn keeps(&self, asset: &RankedAsset) -> bool {
        let os_ok = match &self.os {
            Filter::All => true,
            Filter::Only(os) => asset.os() == Some(*os),
        };
        let tag_ok = match &self.tag {
            Filter::All => true,
            Filter::Only(tag) => asset.tags().iter().any(|t| t == tag),
        };
        os_ok && tag_ok
    }
}

/// Display order: recommended first, then OS, architecture and filename.
/// Unknown OS/architecture sort as the empty string. Filenames compare
/// case-insensitively, with the exact name breaking ties.
pub fn compare_assets(a: &RankedAsset, b: &RankedAsset) -> Ordering {
    b.recommended
        .cmp(&a.recommended)
        .then_with(|| os_key(a).cmp(os_key(b)))
        .then_with(|| arch_key(a).cmp(arch_key(b)))
        .then_with(|| a.name().to_lowercase().cmp(&b.name().to_lowercase()))
        .then_with(|| a.name().cmp(b.name()))
}

fn os_key(a: &RankedAsset) -> &'static str {
    a.os().map_or("", |os| os.as_str())
}

fn arch_key(a: &RankedAsset) -> &'static str {
    a.arch().map_or("", |arch| arch.as_str())
}

/// Narrow releases to the selected version, filter and sort their assets,
/// and drop releases left without assets.
pub fn select(releases: &[Release<RankedAsset>], selection: &Selection) -> Vec<Release<RankedAsset>> {
    let chosen: Vec<&Release<RankedAsset>> = match &selection.version {
        VersionSelector::Latest => releases.iter().take(1).collect(),
        VersionSelector::Tag(tag) => releases.iter().filter(|r| &r.tag_name == tag).collect(),
    };

    chosen
        .into_iter()
        .filter_map(|release| {
            let mut assets: Vec<RankedAsset> = release
                .assets
                .iter()
                .filter(|a| selection.keeps(a))
                .cloned()
                .collect();
            if assets.is_empty() {
                return None;
            }
            assets.sort_by(compare_assets);
            Some(release.with_assets(assets))
        })
        .collect()
}

/// Values offered in the OS and tag selectors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    /// Distinct operating systems, first-seen order.
    pub os: Vec<Os>,
    /// Distinct tags, first-seen order.
    pub tags: Vec<String>,
}

impl FilterOptions {
    /// Collect options from the manifest rules when there is a manifest,
    /// otherwise from the enriched assets.
    pub fn collect(manifest: Option<&Manifest>, releases: &[Release<EnrichedAsset>]) -> Self {
        let mut options = Self::default();
        match manifest {
            Some(m) => {
                for rule in &m.rules {
                    options.add(rule.os, rule.tags.as_deref().unwrap_or_default());
                }
            }
            None => {
                for asset in releases.iter().flat_map(|r| &r.assets) {
                    options.add(asset.os(), asset.tags());
                }
            }
        }
        options
    }

    fn add(&mut self, os: Option<Os>, tags: &[String]) {
        if let Some(os) = os {
            if !self.os.contains(&os) {
                self.os.push(os);
            }
        }
        for tag in tags {
            if !self.tags.contains(tag) {
                self.tags.push(tag.clone());
            }
        }
    }
}

/// An entry of the version selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionOption {
    /// Value to select (`latest` or a tag).
    pub value: String,
    /// Text to show.
    pub label: String,
    /// The release is a pre-release.
    pub prerelease: bool,
}

/// "Latest Release" followed by the newest [`VERSION_CHOICES`] releases.
pub fn available_versions<A>(releases: &[Release<A>]) -> Vec<VersionOption> {
    let latest = VersionOption {
        value: LATEST.to_string(),
        label: "Latest Release".to_string(),
        prerelease: false,
    };

    std::iter::once(latest)
        .chain(releases.iter().take(VERSION_CHOICES).map(|r| VersionOption {
            value: r.tag_name.clone(),
            label: r.display_name().to_string(),
            prerelease: r.prerelease,
        }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrich::enrich;
    use crate::recommend::recommend_all;
    use crate::source::tests::release;
    use gethub_schema::{Arch, PlatformGuess, Rule};

    fn pipeline(releases: &[Release], guess: PlatformGuess) -> Vec<Release<RankedAsset>> {
        recommend_all(&enrich(releases, None), &guess)
            .into_iter()
            .map(|(release, _)| release)
            .collect()
    }

    fn names(release: &Release<RankedAsset>) -> Vec<&str> {
        release.assets.iter().map(|a| a.name()).collect()
    }

    #[test]
    fn test_latest_keeps_first_release_only() {
        let ranked = pipeline(
            &[release("v3", &["a-linux.tgz"]), release("v2", &["b-linux.tgz"])],
            PlatformGuess::default(),
        );
        let out = select(&ranked, &Selection::default());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].tag_name, "v3");

        assert!(select(&[], &Selection::default()).is_empty());
    }

    #[test]
    fn test_explicit_tag() {
        let ranked = pipeline(
            &[release("v3", &["a.tgz"]), release("v2", &["b.tgz"])],
            PlatformGuess::default(),
        );
        let selection = Selection {
            version: "v2".parse().unwrap(),
            ..Selection::default()
        };
        let out = select(&ranked, &selection);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].tag_name, "v2");

        let selection = Selection {
            version: VersionSelector::Tag("v9".into()),
            ..Selection::default()
        };
        assert!(select(&ranked, &selection).is_empty());
    }

    #[test]
    fn test_os_and_tag_filters_combine() {
        let ranked = pipeline(
            &[release(
                "v1",
                &[
                    "t-linux-x64-portable.tgz",
                    "t-linux-x64-setup.run",
                    "t-win-x64-portable.zip",
                    "notes.txt",
                ],
            )],
            PlatformGuess::default(),
        );

        let selection = Selection {
            os: "linux".parse().unwrap(),
            tag: "Portable".parse().unwrap(),
            ..Selection::default()
        };
        let out = select(&ranked, &selection);
        assert_eq!(names(&out[0]), ["t-linux-x64-portable.tgz"]);

        // unknown OS never passes an OS filter, but passes "all"
        let selection = Selection {
            os: Filter::Only(Os::Windows),
            ..Selection::default()
        };
        assert!(!names(&select(&ranked, &selection)[0]).contains(&"notes.txt"));
        assert!(names(&select(&ranked, &Selection::default())[0]).contains(&"notes.txt"));
    }

    #[test]
    fn test_release_dropped_when_filtered_empty() {
        let ranked = pipeline(&[release("v1", &["t-linux-x64.tgz"])], PlatformGuess::default());
        let selection = Selection {
            os: Filter::Only(Os::Android),
            ..Selection::default()
        };
        assert!(select(&ranked, &selection).is_empty());
    }

    #[test]
    fn test_sort_order() {
        let ranked = pipeline(
            &[release(
                "v1",
                &[
                    "z.txt",
                    "b-win-x64.zip",
                    "a-linux-x64.tgz",
                    "c-linux-arm64.tgz",
                    "a-win-x64.zip",
                    "d-linux.tgz",
                ],
            )],
            PlatformGuess::new(Some(Os::Windows), Some(Arch::X64)),
        );
        let out = select(&ranked, &Selection::default());
        assert_eq!(
            names(&out[0]),
            [
                // recommended, by filename
                "a-win-x64.zip",
                "b-win-x64.zip",
                // no os sorts first
                "z.txt",
                // linux: no arch, then arm64, then x64
                "d-linux.tgz",
                "c-linux-arm64.tgz",
                "a-linux-x64.tgz",
            ]
        );
    }

    #[test]
    fn test_sort_is_deterministic() {
        let assets = ["b-linux-x64.tgz", "a-linux-x64.tgz", "c-linux-x64.tgz"];
        let ranked = pipeline(&[release("v1", &assets)], PlatformGuess::default());
        let first = names(&select(&ranked, &Selection::default())[0])
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>();
        for _ in 0..5 {
            let again = select(&ranked, &Selection::default());
            assert_eq!(names(&again[0]), first);
        }
        assert_eq!(first, ["a-linux-x64.tgz", "b-linux-x64.tgz", "c-linux-x64.tgz"]);
    }

    #[test]
    fn test_sort_ignores_filename_case() {
        let ranked = pipeline(
            &[release("v1", &["app.zip", "README.md", "Checksums.txt", "App.zip"])],
            PlatformGuess::default(),
        );
        let out = select(&ranked, &Selection::default());
        assert_eq!(
            names(&out[0]),
            ["App.zip", "app.zip", "Checksums.txt", "README.md"]
        );
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!("all".parse::<Filter<Os>>().unwrap(), Filter::All);
        assert_eq!("osx".parse::<Filter<Os>>().unwrap(), Filter::Only(Os::Osx));
        assert!("beos".parse::<Filter<Os>>().is_err());
        assert_eq!(
            "CLI".parse::<Filter<String>>().unwrap(),
            Filter::Only("CLI".to_string())
        );
        assert_eq!("latest".parse::<VersionSelector>().unwrap(), VersionSelector::Latest);
        assert_eq!(Filter::Only(Os::Linux).to_string(), "linux");
    }

    #[test]
    fn test_filter_options_from_assets() {
        let enriched = enrich(
            &[
                release("v2", &["a-linux-x64-cli.tgz", "a-win-x64-portable.zip"]),
                release("v1", &["a-linux-arm64-cli.tgz", "a.txt"]),
            ],
            None,
        );
        let options = FilterOptions::collect(None, &enriched);
        assert_eq!(options.os, [Os::Linux, Os::Windows]);
        assert_eq!(options.tags, ["CLI", "Portable"]);
    }

    #[test]
    fn test_filter_options_from_manifest_rules() {
        let manifest = Manifest {
            version: 1,
            rules: vec![
                Rule::new("x").with_os(Os::Osx).with_tags(["gui"]),
                Rule::new("y").with_tags(["cli", "gui"]),
                Rule::new("z").with_os(Os::Osx),
            ],
        };
        // Assets are ignored when a manifest exists.
        let enriched = enrich(&[release("v1", &["w-linux.tgz"])], Some(&manifest));
        let options = FilterOptions::collect(Some(&manifest), &enriched);
        assert_eq!(options.os, [Os::Osx]);
        assert_eq!(options.tags, ["gui", "cli"]);
    }

    #[test]
    fn test_available_versions() {
        let releases: Vec<Release> = (0..12)
            .map(|i| release(&format!("v{i}"), &[]))
            .collect();
        let versions = available_versions(&releases);
        assert_eq!(versions.len(), 1 + VERSION_CHOICES);
        assert_eq!(versions[0].value, "latest");
        assert_eq!(versions[1].value, "v0");
        assert_eq!(versions[10].value, "v9");
    }
}
