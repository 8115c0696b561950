//! Status lines printed around command output.

use super::theme::Theme;
use crossterm::style::Stylize;

/// Section headers and one-line status messages.
#[derive(Debug, Clone, Default)]
pub struct Output {
    theme: Theme,
}

impl Output {
    /// Creates an output using the default theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prints a section header with a rule.
    pub fn section(&self, title: &str) {
        println!();
        println!(
            "{} {}",
            title.bold(),
            "─".repeat(40).with(self.theme.colors.header)
        );
    }

    /// Prints an informational message.
    pub fn info(&self, msg: &str) {
        println!("  {} {}", self.theme.icons.info, msg);
    }

    /// Prints a success message.
    pub fn success(&self, msg: &str) {
        println!(
            "  {} {}",
            self.theme.icons.success.with(self.theme.colors.success),
            msg
        );
    }

    /// Prints a warning message.
    pub fn warning(&self, msg: &str) {
        println!(
            "  {} {}",
            self.theme.icons.warning.with(self.theme.colors.warning),
            msg.with(self.theme.colors.warning)
        );
    }

    /// Prints an error message.
    pub fn error(&self, msg: &str) {
        println!(
            "  {} {}",
            self.theme.icons.error.with(self.theme.colors.error),
            msg.with(self.theme.colors.error)
        );
    }

    /// Prints a dimmed "key value" line.
    pub fn field(&self, key: &str, value: &str) {
        println!(
            "  {} {}",
            format!("{key:<10}").with(self.theme.colors.header),
            value
        );
    }

    /// Prints the closing summary with elapsed time.
    pub fn summary(&self, msg: &str, elapsed_secs: f64) {
        println!();
        println!(
            "  {} {}",
            msg.with(self.theme.colors.secondary),
            format!("({elapsed_secs:.1}s)").with(self.theme.colors.secondary)
        );
    }
}
