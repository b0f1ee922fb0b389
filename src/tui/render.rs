//! Screen layout.

use super::screen::{Notice, Screen, TOGGLES};
use crate::pass::{MAX_LENGTH, MIN_LENGTH, entropy_bits};
use crate::terminal::{
    BOLD, CYAN, DIM, GREEN, RED, RESET, YELLOW, box_bottom, box_line, box_line_center, box_rule,
    box_top, entropy_strength, strength_meter,
};

pub fn lines(screen: &Screen) -> Vec<String> {
    let mut lines = vec![
        box_top("Password Generator"),
        box_line_center("Instantly generate a random, secure password"),
        box_rule(),
        box_line(""),
    ];

    match screen.password() {
        Some(password) => lines.push(box_line_center(&format!("{BOLD}{CYAN}{password}{RESET}"))),
        None => lines.push(box_line_center(&format!("{DIM}(no password yet){RESET}"))),
    }
    lines.push(box_line(""));
    lines.push(box_rule());

    let level = screen.level();
    lines.push(box_line(&format!("Strength: {BOLD}{}{RESET}", level.label())));
    lines.push(box_line(&strength_meter(level)));
    if let Some(password) = screen.password() {
        let bits = entropy_bits(password.chars().count(), screen.pool_size());
        lines.push(box_line(&format!(
            "{DIM}Entropy: {bits:.1} bits ({}){RESET}",
            entropy_strength(bits)
        )));
    }
    lines.push(box_rule());

    let options = screen.options();
    lines.push(box_line(&format!(
        "Length: {BOLD}{}{RESET}  {DIM}({MIN_LENGTH}-{MAX_LENGTH}, -/+ to change){RESET}",
        options.length
    )));
    for (i, class) in TOGGLES.iter().enumerate() {
        let mark = if options.includes(*class) { "x" } else { " " };
        lines.push(box_line(&format!(
            "  {}) [{mark}] {:<10} {DIM}{}{RESET}",
            i + 1,
            class.name(),
            class.sample()
        )));
    }
    lines.push(box_rule());
    lines.push(box_line_center(
        "r/Enter: new password | c: copy | s: save | q: quit",
    ));
    lines.push(box_bottom());
    lines.push(notice_line(screen.notice()));
    lines
}

fn notice_line(notice: Option<&Notice>) -> String {
    match notice {
        Some(Notice::Info(msg)) => format!("{GREEN}{msg}{RESET}"),
        Some(Notice::Warning(msg)) => format!("{YELLOW}{msg}{RESET}"),
        Some(Notice::Error(msg)) => format!("{RED}{msg}{RESET}"),
        None => String::new(),
    }
}
