//! CLI presenter for output formatting

use colored::*;

/// Presenter for CLI output formatting.
///
/// Everything goes to stderr; the notifier has no stdout output.
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{}", Self::format_error(message));
    }

    /// Print the usage line to stderr
    pub fn usage(&self, usage: &str) {
        eprintln!("{}", usage);
    }

    fn format_error(message: &str) -> String {
        format!("{} {}", "✗".red(), message)
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
