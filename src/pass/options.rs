//! Generation options and the generated password value.

use std::fmt;

use zeroize::Zeroize;

use super::charset::CharClass;
use crate::error::{Error, Result};

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 32;
pub const DEFAULT_LENGTH: usize = 12;

/// Caller-owned configuration for one `generate` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
}

impl GenerationOptions {
    /// Default length with every class disabled.
    pub fn none() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include_uppercase: false,
            include_lowercase: false,
            include_digits: false,
            include_symbols: false,
        }
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    pub fn with_class(mut self, class: CharClass, enabled: bool) -> Self {
        self.set_class(class, enabled);
        self
    }

    pub fn includes(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lowercase => self.include_lowercase,
            CharClass::Uppercase => self.include_uppercase,
            CharClass::Digits => self.include_digits,
            CharClass::Symbols => self.include_symbols,
        }
    }

    pub fn set_class(&mut self, class: CharClass, enabled: bool) {
        let flag = match class {
            CharClass::Lowercase => &mut self.include_lowercase,
            CharClass::Uppercase => &mut self.include_uppercase,
            CharClass::Digits => &mut self.include_digits,
            CharClass::Symbols => &mut self.include_symbols,
        };
        *flag = enabled;
    }

    pub fn toggle(&mut self, class: CharClass) {
        self.set_class(class, !self.includes(class));
    }

    pub fn has_any_class(&self) -> bool {
        CharClass::ALL.iter().any(|class| self.includes(*class))
    }

    /// Length actually used for generation, always within [MIN_LENGTH, MAX_LENGTH].
    pub fn clamped_length(&self) -> usize {
        self.length.clamp(MIN_LENGTH, MAX_LENGTH)
    }

    /// Fails when no character class is selected.
    pub fn validate(&self) -> Result<()> {
        if self.has_any_class() {
            Ok(())
        } else {
            Err(Error::invalid_configuration(
                "at least one character class must be selected",
            ))
        }
    }

    /// Enable lowercase when nothing is selected.
    ///
    /// Returns the corrected options and whether a correction was made, so the
    /// caller can tell the user about it.
    pub fn with_fallback_class(self) -> (Self, bool) {
        if self.has_any_class() {
            (self, false)
        } else {
            (self.with_class(CharClass::Lowercase, true), true)
        }
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include_uppercase: true,
            include_lowercase: true,
            include_digits: true,
            include_symbols: true,
        }
    }
}

/// A generated password. The buffer is wiped on drop.
pub struct Password(String);

impl Password {
    pub(crate) fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars>)", self.len())
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}
