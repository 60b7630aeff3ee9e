use std::io::Write;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

/// Label column width, matching Cargo's right-aligned verbs.
const LABEL_WIDTH: usize = 12;

/// Render one status line: the styled label right-aligned, then the message.
pub fn format_status(style: &Style, label: &str, message: &str) -> String {
    format!(
        "{:>width$} {message}",
        style.apply_to(label).for_stderr(),
        width = LABEL_WIDTH
    )
}

fn print_status(style: Style, label: &str, message: &str) {
    let _ = writeln!(std::io::stderr(), "{}", format_status(&style, label, message));
}

/// Action line in bold green: `   Published org.sonarlint.idea 4.2.0 to ...`
pub fn status(label: &str, message: &str) {
    print_status(Style::new().green().bold(), label, message);
}

/// Informational line in bold cyan.
pub fn status_info(label: &str, message: &str) {
    print_status(Style::new().cyan().bold(), label, message);
}

/// Warning line in bold yellow.
pub fn status_warn(label: &str, message: &str) {
    print_status(Style::new().yellow().bold(), label, message);
}

/// Animated spinner for a blocking network call.
///
/// Finish it with [`ProgressBar::finish_and_clear`]. Hidden when stderr is
/// not a terminal, which keeps CI logs clean.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = if console::Term::stderr().is_term() {
        ProgressBar::new_spinner()
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
