//! Assets at each stage of the pipeline.
//!
//! - [`Asset`]: as fetched.
//! - [`EnrichedAsset`]: plus exactly one [`Classification`].
//! - [`RankedAsset`]: plus the recommendation flag for one visitor.

use serde::Serialize;

use crate::asset_pattern::AssetPattern;
use crate::manifest::Rule;
use crate::platform::{Arch, Os};
use crate::release::Asset;

/// Fields copied from the manifest rule that matched an asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchedRule {
    /// The rule's pattern, for display and debugging.
    pub pattern: String,
    /// Operating system from the rule.
    pub os: Option<Os>,
    /// Architecture from the rule.
    pub arch: Option<Arch>,
    /// Tags from the rule; empty when the rule has none.
    pub tags: Vec<String>,
    /// Description from the rule.
    pub description: Option<String>,
}

impl From<&Rule> for MatchedRule {
    fn from(rule: &Rule) -> Self {
        Self {
            pattern: rule.asset.clone(),
            os: rule.os,
            arch: rule.arch,
            tags: rule.tags.clone().unwrap_or_default(),
            description: rule.description.clone(),
        }
    }
}

/// Where an asset's platform information came from.
///
/// The two sources never mix: a repository with a manifest only ever yields
/// [`Classification::Rule`] or [`Classification::Unmatched`], one without
/// only ever yields [`Classification::Detected`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum Classification {
    /// A manifest rule matched.
    Rule(MatchedRule),
    /// Inferred from the filename (no manifest).
    Detected(AssetPattern),
    /// A manifest exists but none of its rules matched.
    Unmatched,
}

impl Classification {
    /// Operating system, if known.
    pub fn os(&self) -> Option<Os> {
        match self {
            Self::Rule(rule) => rule.os,
            Self::Detected(pattern) => pattern.os,
            Self::Unmatched => None,
        }
    }

    /// Architecture, if known.
    pub fn arch(&self) -> Option<Arch> {
        match self {
            Self::Rule(rule) => rule.arch,
            Self::Detected(pattern) => pattern.arch,
            Self::Unmatched => None,
        }
    }

    /// Tags; empty for unmatched assets.
    pub fn tags(&self) -> &[String] {
        match self {
            Self::Rule(rule) => &rule.tags,
            Self::Detected(pattern) => &pattern.tags,
            Self::Unmatched => &[],
        }
    }

    /// Description; only manifest rules carry one.
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Rule(rule) => rule.description.as_deref(),
            Self::Detected(_) | Self::Unmatched => None,
        }
    }
}

/// An asset annotated with its classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedAsset {
    /// The asset as fetched.
    #[serde(flatten)]
    pub asset: Asset,
    /// Platform information and its source.
    pub classification: Classification,
}

impl EnrichedAsset {
    /// Filename.
    pub fn name(&self) -> &str {
        &self.asset.name
    }

    /// Operating system, if known.
    pub fn os(&self) -> Option<Os> {
        self.classification.os()
    }

    /// Architecture, if known.
    pub fn arch(&self) -> Option<Arch> {
        self.classification.arch()
    }

    /// Tags, possibly empty.
    pub fn tags(&self) -> &[String] {
        self.classification.tags()
    }

    /// Description from the manifest, if any.
    pub fn description(&self) -> Option<&str> {
        self.classification.description()
    }
}

/// An enriched asset with its recommendation for one platform guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedAsset {
    /// The classified asset.
    #[serde(flatten)]
    pub enriched: EnrichedAsset,
    /// Suggested download for the visitor's platform.
    pub recommended: bool,
}

impl std::ops::Deref for RankedAsset {
    type Target = EnrichedAsset;

    fn deref(&self) -> &Self::Target {
        &self.enriched
    }
}
