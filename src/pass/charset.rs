//! Character classes and pool building for password generation.

use super::GenerationOptions;

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

/// One of the four fixed alphabets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digits,
    Symbols,
}

impl CharClass {
    /// Pool order: lowercase, uppercase, digits, symbols.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digits,
        CharClass::Symbols,
    ];

    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digits => DIGITS,
            CharClass::Symbols => SYMBOLS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharClass::Lowercase => "Lowercase",
            CharClass::Uppercase => "Uppercase",
            CharClass::Digits => "Digits",
            CharClass::Symbols => "Symbols",
        }
    }

    /// Short sample shown next to the toggle.
    pub fn sample(self) -> &'static str {
        match self {
            CharClass::Lowercase => "a-z",
            CharClass::Uppercase => "A-Z",
            CharClass::Digits => "0-9",
            CharClass::Symbols => "!@#$%^&*",
        }
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.alphabet().contains(&(c as u8))
    }
}

/// Build the character pool from the enabled classes. Empty when none are.
pub fn build(options: &GenerationOptions) -> Vec<u8> {
    let mut chars = Vec::with_capacity(size(options));
    for class in CharClass::ALL {
        if options.includes(class) {
            chars.extend_from_slice(class.alphabet());
        }
    }
    chars
}

/// Pool size for the enabled classes (for entropy calculation).
pub fn size(options: &GenerationOptions) -> usize {
    CharClass::ALL
        .iter()
        .filter(|class| options.includes(**class))
        .map(|class| class.alphabet().len())
        .sum()
}
