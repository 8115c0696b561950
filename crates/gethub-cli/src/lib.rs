//! gethub - find the right download in a GitHub release
#![allow(missing_docs)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
//!
//! Lists the assets of a repository's releases, labels each one with the
//! OS, architecture and tags it targets, and marks the ones that fit the
//! current machine.
//!
//! # Classification
//!
//! Assets are labelled by the repository's own `gethub.json` rules when it
//! publishes one, and by filename keywords otherwise:
//!
//! ```text
//! gethub.json present?  ──yes──► first matching rule (or Unmatched)
//!          │
//!          no ─────────────────► keyword heuristics (or Unmatched)
//! ```

pub mod cmd;
pub mod ops;
pub mod ui;

pub use gethub_core::USER_AGENT;

use clap::{Args, Parser, Subcommand};
use gethub_core::config::DEFAULT_API_URL;
use gethub_core::{Filter, RepoKey, SourceConfig, VersionSelector};
use gethub_schema::{Arch, Os, PlatformGuess};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "gethub")]
#[command(
    author,
    version,
    about = "gethub - find the right download in a GitHub release"
)]
pub struct Cli {
    /// Show debug logging and where each classification came from
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// GitHub token, raises the API rate limit
    #[arg(long, global = true, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// GitHub API base URL
    #[arg(long, global = true, env = "GETHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Source configuration from the global flags.
    pub fn source_config(&self) -> SourceConfig {
        SourceConfig::default()
            .with_api_url(&self.api_url)
            .with_token(self.token.clone())
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a repository's releases with classified, ranked assets
    Show {
        /// Repository (owner/repo or GitHub URL)
        repo: RepoKey,
        /// Release to show: "latest" or a tag name
        #[arg(short, long, default_value = "latest")]
        release: VersionSelector,
        /// Only assets for this OS: "all", windows, linux, osx, android
        #[arg(long, default_value = "all")]
        os: Filter<Os>,
        /// Only assets carrying this tag, or "all"
        #[arg(long, default_value = "all")]
        tag: Filter<String>,
        #[command(flatten)]
        platform: PlatformArgs,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List the versions offered by the release selector
    Versions {
        /// Repository (owner/repo or GitHub URL)
        repo: RepoKey,
        /// Print JSON instead of a list
        #[arg(long)]
        json: bool,
    },
    /// Classify asset filenames without contacting GitHub
    Classify {
        /// Asset filenames
        #[arg(required = true)]
        files: Vec<String>,
        /// gethub.json to classify with instead of the keyword heuristics
        #[arg(short, long)]
        manifest: Option<PathBuf>,
        #[command(flatten)]
        platform: PlatformArgs,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Work with gethub.json manifests
    Manifest {
        #[command(subcommand)]
        command: ManifestCommands,
    },
    /// Show the remaining GitHub API quota
    RateLimit {
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ManifestCommands {
    /// Validate a gethub.json file
    Check {
        /// Path to gethub.json
        #[arg(default_value = "gethub.json")]
        path: PathBuf,
        /// Fail on rules whose pattern is not a valid regex
        #[arg(long)]
        strict: bool,
    },
}

/// Platform the recommendations are computed for.
#[derive(Debug, Clone, Default, Args)]
pub struct PlatformArgs {
    /// Override the detected OS
    #[arg(long, value_name = "OS")]
    pub platform_os: Option<Os>,
    /// Override the detected architecture
    #[arg(long, value_name = "ARCH")]
    pub platform_arch: Option<Arch>,
    /// Detect the platform from a browser User-Agent instead of this machine
    #[arg(long, value_name = "UA")]
    pub user_agent: Option<String>,
}

impl PlatformArgs {
    /// Detected platform with any overrides applied.
    pub fn resolve(&self) -> PlatformGuess {
        let detected = match &self.user_agent {
            Some(ua) => gethub_core::platform::from_user_agent(ua, ""),
            None => gethub_core::platform::detect(),
        };
        PlatformGuess {
            os: self.platform_os.or(detected.os),
            arch: self.platform_arch.or(detected.arch),
        }
    }
}
