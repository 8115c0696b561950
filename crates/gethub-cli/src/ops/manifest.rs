//! Reading local manifest files.

use std::path::Path;

use anyhow::{Context, Result};
use gethub_schema::Manifest;

/// Read and parse a manifest, failing on anything that is not a valid one.
pub fn read_manifest(path: &Path) -> Result<Manifest> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Manifest::parse(&json).with_context(|| format!("{} is not a valid manifest", path.display()))
}
