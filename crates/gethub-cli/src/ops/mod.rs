//! Operations shared by several commands.

pub mod fetch;
pub mod manifest;
