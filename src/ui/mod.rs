//! CLI status output: colored status lines, banner and spinner.
//!
//! Status messages go to stderr so stdout carries only search results.

use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::time::Duration;

/// Status types for colored output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Error,
    Warning,
    Info,
    Search,
}

/// Status icons for different operations.
pub fn status_icon(status: Status) -> &'static str {
    match status {
        Status::Success => "✓",
        Status::Error => "✗",
        Status::Warning => "⚠",
        Status::Info => "ℹ",
        Status::Search => "🔍",
    }
}

/// Whether stderr is an interactive terminal (colors and spinners enabled).
pub fn stderr_is_terminal() -> bool {
    std::io::stderr().is_terminal()
}

/// Format a status line, colored when `color` is set.
pub fn format_status(status: Status, msg: &str, color: bool) -> String {
    let icon = status_icon(status);
    if !color {
        return format!("{} {}", icon, msg);
    }

    match status {
        Status::Success => format!("{} {}", icon.green().bold(), msg),
        Status::Error => format!("{} {}", icon.red().bold(), msg),
        Status::Warning => format!("{} {}", icon.yellow().bold(), msg),
        Status::Info => format!("{} {}", icon.cyan().bold(), msg),
        Status::Search => format!("{} {}", icon.yellow(), msg),
    }
}

/// Print a styled status message to stderr.
pub fn print_status(status: Status, msg: &str) {
    eprintln!("{}", format_status(status, msg, stderr_is_terminal()));
}

/// Welcome banner for interactive mode.
pub fn print_banner() {
    let title = format!("Paper Finder v{}", env!("CARGO_PKG_VERSION"));
    if stderr_is_terminal() {
        eprintln!("{}", format!("━━━ {} ━━━", title).bold().cyan());
    } else {
        eprintln!("━━━ {} ━━━", title);
    }
    eprintln!("Search paper titles, authors and years by keyword.");
    eprintln!();
}

/// Loading spinner, hidden when stderr is not a terminal.
pub struct Spinner {
    pb: indicatif::ProgressBar,
}

impl Spinner {
    /// Create a new spinner with the given message.
    pub fn new(msg: &str) -> Self {
        let pb = if stderr_is_terminal() {
            indicatif::ProgressBar::new_spinner()
        } else {
            indicatif::ProgressBar::hidden()
        };

        pb.set_style(
            indicatif::ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| indicatif::ProgressStyle::default_spinner())
                .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "),
        );
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self { pb }
    }

    /// Finish with success message.
    pub fn finish_with_success(&self, msg: &str) {
        self.pb.finish_and_clear();
        print_status(Status::Success, msg);
    }

    /// Finish with error message.
    pub fn finish_with_error(&self, msg: &str) {
        self.pb.finish_and_clear();
        print_status(Status::Error, msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_icon() {
        assert_eq!(status_icon(Status::Success), "✓");
        assert_eq!(status_icon(Status::Error), "✗");
        assert_eq!(status_icon(Status::Search), "🔍");
    }

    #[test]
    fn test_format_status_plain() {
        assert_eq!(
            format_status(Status::Success, "Loaded 3 papers", false),
            "✓ Loaded 3 papers"
        );
    }

    #[test]
    fn test_format_status_source_and_search_lines() {
        assert_eq!(
            format_status(Status::Info, "Data source: papers.csv", false),
            "ℹ Data source: papers.csv"
        );
        assert_eq!(
            format_status(Status::Search, "Searching Title for 'deep' (binary search)", false),
            "🔍 Searching Title for 'deep' (binary search)"
        );
    }

    #[test]
    fn test_format_status_colored_keeps_message() {
        let line = format_status(Status::Error, "boom", true);
        assert!(line.ends_with("boom"));
        assert!(line.contains('\u{1b}'));
    }
}
