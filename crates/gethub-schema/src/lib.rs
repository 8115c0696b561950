//! Shared types for gethub: releases, manifests, platforms and the two
//! asset classifiers (manifest rules and filename heuristics).

pub mod asset_pattern;
pub mod manifest;
pub mod platform;
pub mod release;
pub mod types;

// Re-exports
pub use asset_pattern::{AssetPattern, contains_word};
pub use manifest::{MANIFEST_FILE, Manifest, ManifestError, Rule, RuleSet, matches};
pub use platform::{Arch, Os, PlatformGuess, format_platform};
pub use release::{Asset, Release};
pub use types::{Classification, EnrichedAsset, MatchedRule, RankedAsset};
