//! Warning, confirmation and prompt messages for CLI output.

use std::io::Write;
use std::path::Path;

use super::quiet;
use crate::terminal::{RED, RESET, YELLOW};

/// Warning to stderr (yellow), suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Error to stderr (red), always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn no_class_selected() {
    warn("At least one character type must be selected. Using lowercase letters.");
}

pub fn length_clamped(requested: usize, used: usize) {
    warn(&format!(
        "Length {requested} is out of range, using {used} characters."
    ));
}

pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        if count == 1 {
            eprintln!("Password copied to clipboard!");
        } else {
            eprintln!("{count} passwords copied to clipboard!");
        }
    }
}

pub fn clipboard_error(err: &str) {
    error(&format!("Clipboard error: {err}"));
}

/// Ask whether to print instead when the clipboard fails. Returns true to print.
/// Quiet or non-interactive runs print without asking.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return true;
    }
    let input = input.trim().to_lowercase();
    if input.is_empty() || input == "y" || input == "yes" {
        return true;
    }

    eprintln!("Aborted.");
    false
}

pub fn settings_saved(path: &Path) {
    if !quiet::enabled() {
        eprintln!("Settings saved \u{2192} {}", path.display());
    }
}
