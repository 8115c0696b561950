//! Recommendation pass.
//!
//! Per release, in two passes:
//!
//! 1. An asset is recommended when both its OS and architecture equal the
//!    visitor's (both halves of the guess must be known).
//! 2. If no asset matched exactly and the visitor's OS is known, the flags
//!    are recomputed as "same OS", ignoring architecture. This replaces the
//!    first pass for that release.
//!
//! Without a known OS nothing is ever recommended.

use gethub_schema::{EnrichedAsset, PlatformGuess, RankedAsset, Release};

/// How a release's recommendations were decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchLevel {
    /// At least one asset matches OS and architecture.
    Exact,
    /// Fallback: assets matching the OS only.
    OsOnly,
    /// Nothing could be recommended.
    None,
}

fn is_exact_match(asset: &EnrichedAsset, guess: &PlatformGuess) -> bool {
    match (guess.os, guess.arch) {
        (Some(os), Some(arch)) => asset.os() == Some(os) && asset.arch() == Some(arch),
        _ => false,
    }
}

/// Mark recommended assets of one release for `guess`.
pub fn recommend(release: &Release<EnrichedAsset>, guess: &PlatformGuess) -> Release<RankedAsset> {
    recommend_with_level(release, guess).0
}

/// Like [`recommend`], also reporting which pass decided the flags.
pub fn recommend_with_level(
    release: &Release<EnrichedAsset>,
    guess: &PlatformGuess,
) -> (Release<RankedAsset>, MatchLevel) {
    let mut ranked = release.map_assets(|asset| RankedAsset {
        enriched: asset.clone(),
        recommended: is_exact_match(asset, guess),
    });

    if ranked.assets.iter().any(|a| a.recommended) {
        return (ranked, MatchLevel::Exact);
    }

    let Some(os) = guess.os else {
        return (ranked, MatchLevel::None);
    };

    for asset in &mut ranked.assets {
        asset.recommended = asset.os() == Some(os);
    }

    let level = if ranked.assets.iter().any(|a| a.recommended) {
        MatchLevel::OsOnly
    } else {
        MatchLevel::None
    };
    (ranked, level)
}

/// Run the recommendation pass on every release independently, keeping
/// each release's [`MatchLevel`] alongside it.
pub fn recommend_all(
    releases: &[Release<EnrichedAsset>],
    guess: &PlatformGuess,
) -> Vec<(Release<RankedAsset>, MatchLevel)> {
    releases
        .iter()
        .map(|r| recommend_with_level(r, guess))
        .collect()
}
