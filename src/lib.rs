//! passgen - random password generator with a strength meter.
//!
//! The library half holds the password synthesizer ([`generate`],
//! [`generate_with`]) and the strength scorer ([`score`]). The rest is the
//! terminal front end: command-line mode, the interactive screen, clipboard
//! and settings.

pub mod cli;
pub mod clipboard;
pub mod error;
pub mod exits;
pub mod logging;
pub mod pass;
pub mod settings;
pub mod terminal;
pub mod tui;

pub use error::{Error, Result};
pub use pass::{
    CharClass, GenerationOptions, Password, StrengthLevel, generate, generate_batch,
    generate_each, generate_with, score,
};
