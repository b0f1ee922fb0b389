//! Error types for passgen.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong outside the strength scorer.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("Clipboard error: {message}")]
    Clipboard { message: String },

    #[error("Settings file {}: {source}", path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed {action}: {source}")]
    Io {
        action: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),
}

impl Error {
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    pub fn clipboard(message: impl Into<String>) -> Self {
        Self::Clipboard {
            message: message.into(),
        }
    }

    pub fn settings(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Settings {
            path: path.into(),
            source,
        }
    }

    /// Plain stdin/stdout failure, e.g. a closed pipe.
    pub fn io(action: &'static str, source: io::Error) -> Self {
        Self::Io { action, source }
    }

    /// Process exit code for this error (2 = usage, 1 = runtime).
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidConfiguration { .. } => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
