//! Author-supplied `gethub.json` manifests and rule matching.
//!
//! A manifest is an ordered list of rules. Each rule carries a regular
//! expression that is searched for in asset filenames; the first rule that
//! matches an asset decides its OS, architecture, tags and description.
//!
//! ```json
//! {
//!   "version": 1,
//!   "rules": [
//!     { "asset": "App\\.Cli\\.win-x64\\.zip", "os": "windows", "arch": "x64",
//!       "tags": ["cli"], "description": "CLI flavor for Windows x64" }
//!   ]
//! }
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::platform::{Arch, Os};

/// Conventional location of the manifest, relative to the repository root.
pub const MANIFEST_FILE: &str = "gethub.json";

/// Errors raised while parsing a manifest document.
#[derive(Error, Debug)]
pub enum ManifestError {
    /// The document is not valid JSON or does not fit the manifest shape.
    #[error("Invalid manifest: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single matching rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Regular expression searched for in the asset filename.
    pub asset: String,
    /// Operating system assigned to matching assets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<Os>,
    /// Architecture assigned to matching assets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arch: Option<Arch>,
    /// Free-form tags assigned to matching assets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Human-readable description of matching assets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Rule {
    /// Create a rule with only a pattern set.
    pub fn new(asset: impl Into<String>) -> Self {
        Self {
            asset: asset.into(),
            os: None,
            arch: None,
            tags: None,
            description: None,
        }
    }

    /// Set the operating system.
    pub fn with_os(mut self, os: Os) -> Self {
        self.os = Some(os);
        self
    }

    /// Set the architecture.
    pub fn with_arch(mut self, arch: Arch) -> Self {
        self.arch = Some(arch);
        self
    }

    /// Set the tags.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A versioned set of rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Format version declared by the author.
    pub version: u32,
    /// Rules in author order. Matching is first-match.
    pub rules: Vec<Rule>,
}

impl Manifest {
    /// Parse a manifest from its JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Json`] if the text is not JSON, misses a
    /// required field, or names an OS/architecture outside the closed sets.
    pub fn parse(json: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Compile every rule for repeated matching.
    pub fn compile(&self) -> RuleSet<'_> {
        RuleSet::new(self)
    }

    /// Rules whose pattern is not a valid regular expression, with the
    /// compiler's message. These still match, by substring containment.
    pub fn invalid_patterns(&self) -> Vec<(usize, &Rule, String)> {
        self.rules
            .iter()
            .enumerate()
            .filter_map(|(i, rule)| Regex::new(&rule.asset).err().map(|e| (i, rule, e.to_string())))
            .collect()
    }
}

/// Decide whether `rule` applies to `filename`.
///
/// The pattern is compiled as a regular expression and searched for anywhere
/// in the filename. A pattern that does not compile falls back to plain
/// substring containment, so a malformed manifest degrades instead of failing.
///
/// ```
/// use gethub_schema::{matches, Rule};
///
/// assert!(matches("app-win-x64.zip", &Rule::new(r"win-x64\.zip$")));
/// // Unbalanced bracket: treated as a literal substring.
/// assert!(matches("weird[name.zip", &Rule::new("[name")));
/// ```
pub fn matches(filename: &str, rule: &Rule) -> bool {
    Matcher::compile(&rule.asset).is_match(filename)
}

#[derive(Debug, Clone)]
enum Matcher {
    Pattern(Regex),
    Substring(String),
}

impl Matcher {
    fn compile(pattern: &str) -> Self {
        match Regex::new(pattern) {
            Ok(re) => Self::Pattern(re),
            Err(_) => Self::Substring(pattern.to_string()),
        }
    }

    fn is_match(&self, filename: &str) -> bool {
        match self {
            Self::Pattern(re) => re.is_match(filename),
            Self::Substring(s) => filename.contains(s.as_str()),
        }
    }
}

/// A manifest with every rule compiled once.
#[derive(Debug, Clone)]
pub struct RuleSet<'a> {
    rules: Vec<(Matcher, &'a Rule)>,
}

impl<'a> RuleSet<'a> {
    /// Compile the rules of `manifest`, keeping author order.
    pub fn new(manifest: &'a Manifest) -> Self {
        let rules = manifest
            .rules
            .iter()
            .map(|rule| (Matcher::compile(&rule.asset), rule))
            .collect();
        Self { rules }
    }

    /// The first rule, in manifest order, that matches `filename`.
    pub fn first_match(&self, filename: &str) -> Option<&'a Rule> {
        self.rules
            .iter()
            .find(|(matcher, _)| matcher.is_match(filename))
            .map(|(_, rule)| *rule)
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when the manifest has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
