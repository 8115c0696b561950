//! Asset enrichment: attach a [`Classification`] to every asset.
//!
//! The source is picked once per repository. With a manifest, assets are
//! classified by its rules only (unmatched assets stay unmatched); without
//! one, every asset goes through the filename heuristics.

use gethub_schema::{
    AssetPattern, Classification, EnrichedAsset, Manifest, MatchedRule, Release, RuleSet,
};
use tracing::debug;

/// The classifier chosen for one repository.
#[derive(Debug)]
pub enum Classifier<'a> {
    /// Author-supplied rules, compiled once.
    Manifest(RuleSet<'a>),
    /// Filename heuristics.
    Heuristic,
}

impl<'a> Classifier<'a> {
    /// Pick the classifier for an optional manifest.
    pub fn new(manifest: Option<&'a Manifest>) -> Self {
        match manifest {
            Some(m) => Self::Manifest(m.compile()),
            None => Self::Heuristic,
        }
    }

    /// Classify one filename.
    pub fn classify(&self, filename: &str) -> Classification {
        match self {
            Self::Manifest(rules) => rules
                .first_match(filename)
                .map_or(Classification::Unmatched, |rule| {
                    Classification::Rule(MatchedRule::from(rule))
                }),
            Self::Heuristic => Classification::Detected(AssetPattern::from_filename(filename)),
        }
    }
}

/// Classify every asset of every release.
///
/// Releases and assets keep their order; nothing is added or dropped.
pub fn enrich(releases: &[Release], manifest: Option<&Manifest>) -> Vec<Release<EnrichedAsset>> {
    let classifier = Classifier::new(manifest);
    match &classifier {
        Classifier::Manifest(rules) if rules.is_empty() => {
            debug!("manifest has no rules, every asset stays unmatched");
        }
        Classifier::Manifest(rules) => debug!(rules = rules.len(), "classifying by manifest"),
        Classifier::Heuristic => debug!("classifying by filename"),
    }

    releases
        .iter()
        .map(|release| {
            release.map_assets(|asset| EnrichedAsset {
                asset: asset.clone(),
                classification: classifier.classify(&asset.name),
            })
        })
        .collect()
}
