//! Subcommand implementations.

pub mod classify;
pub mod completions;
pub mod manifest;
pub mod rate_limit;
pub mod show;
pub mod versions;
