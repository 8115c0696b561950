//! State of one repository page: fetched data plus derived views.
//!
//! Inputs (releases, manifest, platform guess) are replaced wholesale and
//! every derived collection is recomputed from scratch.

use gethub_schema::{EnrichedAsset, Manifest, PlatformGuess, RankedAsset, Release};

use crate::enrich::enrich;
use crate::recommend::{MatchLevel, recommend_all};
use crate::repo::RepoKey;
use crate::select::{FilterOptions, Selection, VersionOption, available_versions, select};
use crate::source::Snapshot;

/// Fetched releases and manifest for one repository, with enrichment and
/// recommendations already applied for the current platform guess.
#[derive(Debug, Clone)]
pub struct RepositoryView {
    repo: RepoKey,
    releases: Vec<Release>,
    manifest: Option<Manifest>,
    platform: PlatformGuess,
    enriched: Vec<Release<EnrichedAsset>>,
    ranked: Vec<Release<RankedAsset>>,
    levels: Vec<MatchLevel>,
}

fn rank(
    enriched: &[Release<EnrichedAsset>],
    platform: &PlatformGuess,
) -> (Vec<Release<RankedAsset>>, Vec<MatchLevel>) {
    recommend_all(enriched, platform).into_iter().unzip()
}

impl RepositoryView {
    /// Build the view for a fetched snapshot.
    pub fn new(snapshot: Snapshot, platform: PlatformGuess) -> Self {
        let Snapshot {
            repo,
            releases,
            manifest,
        } = snapshot;
        let enriched = enrich(&releases, manifest.as_ref());
        let (ranked, levels) = rank(&enriched, &platform);

        Self {
            repo,
            releases,
            manifest,
            platform,
            enriched,
            ranked,
            levels,
        }
    }

    /// Swap in a new fetch result (e.g. after retrying with a token).
    pub fn replace_snapshot(&mut self, snapshot: Snapshot) {
        *self = Self::new(snapshot, self.platform);
    }

    /// Change the platform guess. Enrichment does not depend on it and is kept.
    pub fn set_platform(&mut self, platform: PlatformGuess) {
        self.platform = platform;
        (self.ranked, self.levels) = rank(&self.enriched, &platform);
    }

    /// Releases and assets to display for `selection`.
    pub fn select(&self, selection: &Selection) -> Vec<Release<RankedAsset>> {
        select(&self.ranked, selection)
    }

    /// Values for the OS and tag selectors.
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions::collect(self.manifest.as_ref(), &self.enriched)
    }

    /// Entries for the version selector.
    pub fn versions(&self) -> Vec<VersionOption> {
        available_versions(&self.releases)
    }

    /// The repository.
    pub fn repo(&self) -> &RepoKey {
        &self.repo
    }

    /// Releases as fetched, newest first.
    pub fn releases(&self) -> &[Release] {
        &self.releases
    }

    /// The manifest, if the repository has a usable one.
    pub fn manifest(&self) -> Option<&Manifest> {
        self.manifest.as_ref()
    }

    /// The platform guess recommendations are computed for.
    pub fn platform(&self) -> PlatformGuess {
        self.platform
    }

    /// How recommendations were decided for the release tagged `tag_name`.
    pub fn match_level(&self, tag_name: &str) -> Option<MatchLevel> {
        self.ranked
            .iter()
            .zip(&self.levels)
            .find(|(r, _)| r.tag_name == tag_name)
            .map(|(_, level)| *level)
    }

    /// Every release with recommendations, before selection.
    pub fn ranked(&self) -> &[Release<RankedAsset>] {
        &self.ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::Filter;
    use crate::source::tests::release;
    use gethub_schema::{Arch, Classification, Os, Rule};

    fn view(assets: &[&str], manifest: Option<Manifest>, platform: PlatformGuess) -> RepositoryView {
        let snapshot = Snapshot {
            repo: RepoKey::new("o", "r"),
            releases: vec![release("v1", assets)],
            manifest,
        };
        RepositoryView::new(snapshot, platform)
    }

    #[test]
    fn test_manifest_rule_recommended_for_exact_platform() {
        let manifest = Manifest {
            version: 1,
            rules: vec![
                Rule::new(r"app-win-x64\.zip")
                    .with_os(Os::Windows)
                    .with_arch(Arch::X64),
            ],
        };
        let v = view(
            &["app-win-x64.zip"],
            Some(manifest),
            PlatformGuess::new(Some(Os::Windows), Some(Arch::X64)),
        );
        let out = v.select(&Selection::default());
        let asset = &out[0].assets[0];
        assert_eq!(asset.os(), Some(Os::Windows));
        assert_eq!(asset.arch(), Some(Arch::X64));
        assert!(asset.recommended);
    }

    #[test]
    fn test_heuristic_os_fallback_recommends() {
        let v = view(
            &["tool-linux-arm64.tar.gz"],
            None,
            PlatformGuess::new(Some(Os::Linux), Some(Arch::X64)),
        );
        let out = v.select(&Selection::default());
        let asset = &out[0].assets[0];
        assert_eq!(asset.os(), Some(Os::Linux));
        assert_eq!(asset.arch(), Some(Arch::Arm64));
        assert!(asset.recommended);
        assert_eq!(v.match_level("v1"), Some(MatchLevel::OsOnly));
        assert_eq!(v.match_level("v0"), None);
    }

    #[test]
    fn test_unclassified_asset() {
        let v = view(
            &["readme.txt"],
            None,
            PlatformGuess::new(Some(Os::Linux), Some(Arch::X64)),
        );
        let asset = &v.ranked()[0].assets[0];
        assert_eq!(asset.os(), None);
        assert_eq!(asset.arch(), None);
        assert!(asset.tags().is_empty());
        assert!(!asset.recommended);

        let linux_only = Selection {
            os: Filter::Only(Os::Linux),
            ..Selection::default()
        };
        assert!(v.select(&linux_only).is_empty());
        assert_eq!(v.select(&Selection::default())[0].assets.len(), 1);
    }

    #[test]
    fn test_tag_filter_portable() {
        let v = view(
            &["setup-win-x64.exe", "app-win-x64-portable.zip"],
            None,
            PlatformGuess::default(),
        );
        let tags: Vec<&[String]> = v.ranked()[0].assets.iter().map(|a| a.tags()).collect();
        assert_eq!(tags[0], ["Installer".to_string()]);
        assert_eq!(tags[1], ["Portable".to_string()]);

        let portable = Selection {
            tag: Filter::Only("Portable".to_string()),
            ..Selection::default()
        };
        let out = v.select(&portable);
        assert_eq!(out[0].assets.len(), 1);
        assert_eq!(out[0].assets[0].name(), "app-win-x64-portable.zip");
    }

    #[test]
    fn test_unknown_os_never_recommends_in_any_release() {
        let snapshot = Snapshot {
            repo: RepoKey::new("o", "r"),
            releases: vec![
                release("v2", &["a-linux-x64.tgz", "a-win-x64.zip"]),
                release("v1", &["a-darwin-arm64.tgz"]),
            ],
            manifest: None,
        };
        let v = RepositoryView::new(snapshot, PlatformGuess::new(None, Some(Arch::X64)));
        assert!(
            v.ranked()
                .iter()
                .flat_map(|r| &r.assets)
                .all(|a| !a.recommended)
        );
    }

    #[test]
    fn test_set_platform_recomputes_recommendations() {
        let mut v = view(
            &["a-linux-x64.tgz", "a-win-x64.zip"],
            None,
            PlatformGuess::new(Some(Os::Linux), Some(Arch::X64)),
        );
        assert!(v.ranked()[0].assets[0].recommended);

        assert_eq!(v.match_level("v1"), Some(MatchLevel::Exact));

        v.set_platform(PlatformGuess::new(Some(Os::Windows), Some(Arch::X64)));
        assert!(!v.ranked()[0].assets[0].recommended);
        assert!(v.ranked()[0].assets[1].recommended);

        v.set_platform(PlatformGuess::new(Some(Os::Android), None));
        assert_eq!(v.match_level("v1"), Some(MatchLevel::None));
    }

    #[test]
    fn test_replace_snapshot_switches_classifier() {
        let mut v = view(&["app-win-x64.zip"], None, PlatformGuess::default());
        assert!(matches!(
            v.ranked()[0].assets[0].classification,
            Classification::Detected(_)
        ));

        v.replace_snapshot(Snapshot {
            repo: RepoKey::new("o", "r"),
            releases: vec![release("v1", &["app-win-x64.zip"])],
            manifest: Some(Manifest {
                version: 1,
                rules: vec![],
            }),
        });
        assert_eq!(
            v.ranked()[0].assets[0].classification,
            Classification::Unmatched
        );
        assert!(v.filter_options().os.is_empty());
    }
}
