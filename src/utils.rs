//! Supporting helpers for user-facing stderr messages.

use owo_colors::OwoColorize;

fn stderr_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Prefix for fatal usage errors printed to stderr.
pub fn error_prefix() -> String {
    if stderr_colors() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

/// Prefix for friendly stderr notes.
pub fn note_prefix() -> String {
    if stderr_colors() {
        "note:".cyan().bold().to_string()
    } else {
        "note:".to_string()
    }
}
