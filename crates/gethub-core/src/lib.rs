//! Core library for gethub.
//!
//! # Pipeline
//!
//! ```text
//! ReleaseSource ──► enrich ──► recommend_all ──► select ──► display
//!   (releases,      (manifest    (platform        (version/OS/tag
//!    manifest)       or heuristics) guess)          filters, sort)
//! ```
//!
//! Only the fetch is async and only the fetch can fail. Everything after it
//! is pure and total.

pub mod config;
pub mod enrich;
pub mod platform;
pub mod recommend;
pub mod repo;
pub mod select;
pub mod source;
pub mod view;

pub use config::SourceConfig;
pub use enrich::{Classifier, enrich};
pub use recommend::{MatchLevel, recommend, recommend_all};
pub use repo::RepoKey;
pub use select::{Filter, FilterOptions, Selection, VersionSelector, select};
pub use source::{GitHubSource, ReleaseSource, Snapshot, SourceError, fetch_snapshot};
pub use view::RepositoryView;

/// User Agent string for API requests
pub const USER_AGENT: &str = concat!("gethub/", env!("CARGO_PKG_VERSION"));
