//! Password strength scoring.

use std::fmt;

/// Qualitative strength bucket in [0, 4].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct StrengthLevel(u8);

impl StrengthLevel {
    pub const MAX: StrengthLevel = StrengthLevel(4);

    /// Number of segments in the strength meter.
    pub const SEGMENTS: usize = 4;

    fn from_points(points: u8) -> Self {
        Self((points / 2).min(Self::MAX.0))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            0 => "Very weak",
            1 => "Weak",
            2 => "Medium",
            3 => "Strong",
            _ => "Very strong",
        }
    }

    /// Meter colour as a 256-colour ANSI escape; `None` for level 0.
    pub fn color(self) -> Option<&'static str> {
        match self.0 {
            0 => None,
            1 => Some("\x1b[38;5;9m"),
            2 => Some("\x1b[38;5;11m"),
            3 => Some("\x1b[38;5;10m"),
            _ => Some("\x1b[38;5;39m"),
        }
    }

    /// Which meter segments are lit: segment `i` is lit iff `i < level`.
    pub fn segments(self) -> [bool; Self::SEGMENTS] {
        let mut lit = [false; Self::SEGMENTS];
        for (i, segment) in lit.iter_mut().enumerate() {
            *segment = i < self.0 as usize;
        }
        lit
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/4 ({})", self.0, self.label())
    }
}

/// Score a password from its length and character-class diversity.
///
/// Classes are detected from the content itself, so any string can be scored.
/// Length is measured in UTF-16 code units, so characters outside the Basic
/// Multilingual Plane count twice.
pub fn score(password: &str) -> StrengthLevel {
    if password.is_empty() {
        return StrengthLevel(0);
    }

    let length = password.encode_utf16().count();
    let mut points = [8, 12, 16].iter().filter(|&&tier| length >= tier).count() as u8;

    let checks: [fn(&char) -> bool; 4] = [
        char::is_ascii_uppercase,
        char::is_ascii_lowercase,
        char::is_ascii_digit,
        |c| !c.is_ascii_alphanumeric(),
    ];
    for check in checks {
        if password.chars().any(|c| check(&c)) {
            points += 1;
        }
    }

    StrengthLevel::from_points(points)
}

/// Calculate password entropy in bits: length * log2(pool size).
pub fn entropy_bits(length: usize, pool_size: usize) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    length as f64 * (pool_size as f64).log2()
}
