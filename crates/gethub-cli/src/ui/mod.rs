//! Terminal output: theme constants, status lines and table formatting.

pub mod list;
pub mod output;
pub mod theme;

pub use output::Output;
pub use theme::Theme;
