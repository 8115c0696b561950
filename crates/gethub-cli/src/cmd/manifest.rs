//! Manifest command

use std::path::Path;

use anyhow::{Result, bail};
use gethub_schema::format_platform;

use crate::ops::manifest::read_manifest;
use crate::ui::Output;

/// Validate a gethub.json file
///
/// Patterns that are not valid regular expressions still match by substring,
/// so they are reported as warnings unless `strict` is set.
pub fn check(path: &Path, strict: bool) -> Result<()> {
    let output = Output::new();
    let manifest = read_manifest(path)?;

    output.section(&path.display().to_string());
    output.field("version", &manifest.version.to_string());
    output.field("rules", &manifest.rules.len().to_string());
    println!();

    for (i, rule) in manifest.rules.iter().enumerate() {
        let tags = rule
            .tags
            .as_ref()
            .filter(|t| !t.is_empty())
            .map(|t| format!(" [{}]", t.join(", ")))
            .unwrap_or_default();
        println!(
            "  {:>3}. {}  {}{}",
            i + 1,
            rule.asset,
            format_platform(rule.os, rule.arch),
            tags
        );
    }

    let invalid = manifest.invalid_patterns();
    if invalid.is_empty() {
        println!();
        output.success("Manifest is valid");
        return Ok(());
    }

    println!();
    for (i, rule, err) in &invalid {
        let msg = format!(
            "Rule {} pattern {:?} is not a valid regex, matching by substring: {}",
            i + 1,
            rule.asset,
            err.lines().last().unwrap_or(err)
        );
        if strict {
            output.error(&msg);
        } else {
            output.warning(&msg);
        }
    }

    if strict {
        bail!("{} rule(s) have invalid patterns", invalid.len());
    }
    Ok(())
}
