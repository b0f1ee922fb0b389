//! Terminal output utilities.
//!
//! Box drawing, the strength meter, ANSI colours. Box helpers return lines so
//! they can be written in raw mode with `\r\n` endings.

use crate::pass::StrengthLevel;

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[38;5;9m";
pub const YELLOW: &str = "\x1b[38;5;11m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const CYAN: &str = "\x1b[38;5;45m";

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 60;

const INNER_WIDTH: usize = BOX_WIDTH - 4;

/// ┌─ Title ───────────┐
pub fn box_top(title: &str) -> String {
    if title.is_empty() {
        format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(console_width(&title_part));
        format!("┌{}{}┐", title_part, "─".repeat(remaining))
    }
}

/// │ content           │
pub fn box_line(content: &str) -> String {
    let padding = INNER_WIDTH.saturating_sub(console_width(content));
    format!("│ {}{} │", content, " ".repeat(padding))
}

/// │      content      │
pub fn box_line_center(content: &str) -> String {
    let total_padding = INNER_WIDTH.saturating_sub(console_width(content));
    let left_pad = total_padding / 2;
    let right_pad = total_padding - left_pad;
    format!(
        "│ {}{}{} │",
        " ".repeat(left_pad),
        content,
        " ".repeat(right_pad)
    )
}

/// ├───────────────────┤
pub fn box_rule() -> String {
    format!("├{}┤", "─".repeat(BOX_WIDTH - 2))
}

/// └───────────────────┘
pub fn box_bottom() -> String {
    format!("└{}┘", "─".repeat(BOX_WIDTH - 2))
}

/// Display width, skipping ANSI escape sequences.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Strength Meter
// ============================================================================

const SEGMENT: &str = "██████████";
const SEGMENT_OFF: &str = "░░░░░░░░░░";

/// Four coloured segments, lit up to the level.
pub fn strength_meter(level: StrengthLevel) -> String {
    let color = level.color().unwrap_or(DIM);
    level
        .segments()
        .iter()
        .map(|&lit| {
            if lit {
                format!("{color}{SEGMENT}{RESET}")
            } else {
                format!("{DIM}{SEGMENT_OFF}{RESET}")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Entropy bucket label shown beside the bit count.
pub fn entropy_strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "weak",
        36..=59 => "fair",
        60..=127 => "strong",
        _ => "very strong",
    }
}
