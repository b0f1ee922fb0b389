//! CLI context - bundles parsed arguments and the settings location.

use std::io::{BufRead, BufWriter, Write};
use std::path::PathBuf;

use rand::RngCore;
use rand::rngs::OsRng;
use tracing::{debug, info};
use zeroize::Zeroize;

use super::{Args, prompts, quiet};
use crate::clipboard::{ClipboardSink, SystemClipboard};
use crate::error::{Error, Result};
use crate::pass::{self, GenerationOptions, Password};
use crate::settings::{self, Settings};
use crate::tui;

const READING_STDIN: &str = "reading stdin";
const WRITING_STDOUT: &str = "writing to stdout";

/// Application context for CLI mode.
pub struct Context {
    args: Args,
    settings_path: PathBuf,
    interactive: bool,
}

impl Context {
    pub fn new(args: Args, interactive: bool) -> Self {
        let settings_path = args.config.clone().unwrap_or_else(settings::default_path);
        Self {
            args,
            settings_path,
            interactive,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        quiet::set(self.args.quiet);

        if let Some(password) = self.args.check.take() {
            return self.check(password);
        }

        let options = self.resolve_options()?;

        if self.args.save {
            Settings { options }.save_to(&self.settings_path)?;
            prompts::settings_saved(&self.settings_path);
        }

        if self.interactive {
            return tui::run(options, self.settings_path.clone());
        }

        self.generate_output(&options)
    }

    /// Score a password given on the command line or on stdin.
    fn check(&self, mut password: String) -> Result<()> {
        if password == "-" {
            password.clear();
            std::io::stdin()
                .lock()
                .read_line(&mut password)
                .map_err(|e| Error::io(READING_STDIN, e))?;
            let trimmed = password.trim_end_matches(['\r', '\n']).len();
            password.truncate(trimmed);
        }

        let level = pass::score(&password);
        password.zeroize();
        writeln!(std::io::stdout().lock(), "{level}").map_err(|e| Error::io(WRITING_STDOUT, e))
    }

    /// Saved or default options with command-line overrides applied.
    pub fn resolve_options(&self) -> Result<GenerationOptions> {
        let mut options = if self.args.saved {
            Settings::load_from(&self.settings_path)?.options
        } else {
            GenerationOptions::default()
        };

        if let Some(length) = self.args.length {
            options.length = length;
            let used = options.clamped_length();
            if used != length {
                prompts::length_clamped(length, used);
                options.length = used;
            }
        }

        for class in self.args.excluded_classes() {
            options.set_class(class, false);
        }

        if self.args.strict {
            options.validate()?;
            return Ok(options);
        }

        let (options, corrected) = options.with_fallback_class();
        if corrected {
            prompts::no_class_selected();
        }
        Ok(options)
    }

    fn generate_output(&self, options: &GenerationOptions) -> Result<()> {
        let count = self.args.number;
        let mut rng: Box<dyn RngCore> = if self.args.os_rng {
            Box::new(OsRng)
        } else {
            Box::new(rand::thread_rng())
        };

        let stdout = std::io::stdout();
        let mut out = BufWriter::new(stdout.lock());

        if self.args.board {
            let passwords = pass::generate_batch(options, count, &mut *rng)?;
            debug!(count, os_rng = self.args.os_rng, "batch generated");
            match self.copy_to_clipboard(&passwords) {
                Ok(()) => {
                    prompts::clipboard_copied(count);
                    return Ok(());
                }
                Err(e) => {
                    prompts::clipboard_error(&e.to_string());
                    if !prompts::clipboard_fallback_prompt() {
                        return Err(e);
                    }
                }
            }
            for password in &passwords {
                self.write_line(&mut out, password)?;
            }
        } else {
            pass::generate_each(options, count, &mut *rng, |password| {
                self.write_line(&mut out, password)
            })?;
        }

        out.flush().map_err(|e| Error::io(WRITING_STDOUT, e))?;
        info!(count, os_rng = self.args.os_rng, "passwords written to stdout");
        Ok(())
    }

    fn copy_to_clipboard(&self, passwords: &[Password]) -> Result<()> {
        let mut clipboard = SystemClipboard::new()?;
        let mut joined = passwords
            .iter()
            .map(Password::as_str)
            .collect::<Vec<_>>()
            .join("\n");
        let result = clipboard.copy(&joined);
        joined.zeroize();
        result
    }

    /// One output line: the password, then its level with `-S`.
    fn write_line<W: Write>(&self, out: &mut W, password: &Password) -> Result<()> {
        let written = if self.args.score {
            writeln!(out, "{}  {}", password.as_str(), pass::score(password.as_str()))
        } else {
            writeln!(out, "{}", password.as_str())
        };
        written.map_err(|e| Error::io(WRITING_STDOUT, e))
    }
}
