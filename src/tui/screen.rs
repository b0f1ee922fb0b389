//! Interactive screen state and key handling.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;
use tracing::{debug, warn};

use crate::clipboard::ClipboardSink;
use crate::pass::{
    self, CharClass, GenerationOptions, MAX_LENGTH, MIN_LENGTH, Password, StrengthLevel, charset,
};
use crate::settings::Settings;

/// Checkbox order on screen, bound to keys 1-4.
pub const TOGGLES: [CharClass; 4] = [
    CharClass::Uppercase,
    CharClass::Lowercase,
    CharClass::Digits,
    CharClass::Symbols,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
}

/// One-line message shown under the screen until the next key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Warning(String),
    Error(String),
}

pub struct Screen {
    options: GenerationOptions,
    password: Option<Password>,
    level: StrengthLevel,
    /// Pool size the current password was drawn from.
    pool_size: usize,
    notice: Option<Notice>,
    settings_path: PathBuf,
}

impl Screen {
    /// Nothing is generated until `regenerate` is called.
    pub fn new(options: GenerationOptions, settings_path: PathBuf) -> Self {
        Self {
            options,
            password: None,
            level: StrengthLevel::default(),
            pool_size: 0,
            notice: None,
            settings_path,
        }
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_ref().map(Password::as_str)
    }

    pub fn level(&self) -> StrengthLevel {
        self.level
    }

    pub fn pool_size(&self) -> usize {
        self.pool_size
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn regenerate(&mut self) {
        self.regenerate_with(&mut rand::thread_rng());
    }

    /// Replace the password and rescore it. Turns lowercase on, with a
    /// warning, when every class is off.
    pub fn regenerate_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let (options, corrected) = self.options.with_fallback_class();
        if corrected {
            warn!("no character class selected, enabling lowercase");
            self.options = options;
            self.notice = Some(Notice::Warning(
                "At least one character type must be selected.".into(),
            ));
        }

        match pass::generate_with(&self.options, rng) {
            Ok(password) => {
                self.level = pass::score(password.as_str());
                self.pool_size = charset::size(&self.options);
                self.password = Some(password);
            }
            Err(e) => self.notice = Some(Notice::Error(e.to_string())),
        }
    }

    pub fn copy(&mut self, clipboard: &mut dyn ClipboardSink) {
        let Some(password) = self.password.as_ref() else {
            self.notice = Some(Notice::Warning("Nothing to copy yet.".into()));
            return;
        };
        self.notice = Some(match clipboard.copy(password.as_str()) {
            Ok(()) => Notice::Info("Password copied to clipboard!".into()),
            Err(e) => Notice::Error(e.to_string()),
        });
    }

    /// Change the length by `delta`, staying within [MIN_LENGTH, MAX_LENGTH].
    /// The current password is kept.
    pub fn adjust_length(&mut self, delta: isize) {
        let length = self.options.clamped_length() as isize + delta;
        self.options.length = length.clamp(MIN_LENGTH as isize, MAX_LENGTH as isize) as usize;
    }

    /// Flip a class. The current password is kept.
    pub fn toggle(&mut self, class: CharClass) {
        self.options.toggle(class);
    }

    pub fn save(&mut self) {
        let settings = Settings {
            options: self.options,
        };
        self.notice = Some(match settings.save_to(&self.settings_path) {
            Ok(()) => Notice::Info(format!("Settings saved to {}", self.settings_path.display())),
            Err(e) => Notice::Error(e.to_string()),
        });
    }

    pub fn handle_key(&mut self, key: KeyEvent, clipboard: &mut dyn ClipboardSink) -> Action {
        self.notice = None;

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => Action::Quit,
                _ => Action::Continue,
            };
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return Action::Quit,
            KeyCode::Enter | KeyCode::Char('r') => self.regenerate(),
            KeyCode::Char('c') => self.copy(clipboard),
            KeyCode::Char('s') => self.save(),
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right | KeyCode::Up => {
                self.adjust_length(1)
            }
            KeyCode::Char('-') | KeyCode::Left | KeyCode::Down => self.adjust_length(-1),
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                self.toggle(TOGGLES[index]);
            }
            other => debug!(?other, "unbound key"),
        }
        Action::Continue
    }
}
