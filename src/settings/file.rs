//! Settings file persistence.
//!
//! One line: `length,upper,lower,digits,symbols`.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::Settings;
use crate::error::{Error, Result};

const FIELDS: usize = 5;

pub fn save(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| Error::settings(parent, e))?;
    }

    let options = &settings.options;
    let data = format!(
        "{},{},{},{},{}\n",
        options.length,
        options.include_uppercase,
        options.include_lowercase,
        options.include_digits,
        options.include_symbols,
    );

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| Error::settings(path, e))?;
    file.write_all(data.as_bytes())
        .map_err(|e| Error::settings(path, e))?;

    debug!(path = %path.display(), "settings saved");
    Ok(())
}

/// Load settings; a missing file yields defaults, a malformed one is ignored.
pub fn load(path: &Path) -> Result<Settings> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }
        Err(e) => return Err(Error::settings(path, e)),
    };

    let line = contents.lines().next().unwrap_or("").trim();
    match parse_line(line) {
        Some(settings) => Ok(settings),
        None => {
            warn!(path = %path.display(), "malformed settings file, using defaults");
            Ok(Settings::default())
        }
    }
}

fn parse_line(line: &str) -> Option<Settings> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if parts.len() != FIELDS {
        return None;
    }

    let mut settings = Settings::default();
    let options = &mut settings.options;
    options.length = parts[0].parse().ok()?;
    options.include_uppercase = parts[1].parse().ok()?;
    options.include_lowercase = parts[2].parse().ok()?;
    options.include_digits = parts[3].parse().ok()?;
    options.include_symbols = parts[4].parse().ok()?;
    options.length = options.clamped_length();
    Some(settings)
}

/// `$HOME/.config/passgen/settings`; `--config` / `PASSGEN_CONFIG` override it.
pub fn default_path() -> PathBuf {
    let home = env::var_os("HOME").unwrap_or_else(|| ".".into());
    PathBuf::from(home).join(".config/passgen/settings")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::GenerationOptions;

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/settings");
        let settings = Settings {
            options: GenerationOptions {
                length: 20,
                include_uppercase: false,
                include_lowercase: true,
                include_digits: true,
                include_symbols: false,
            },
        };

        save(&settings, &path).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "20,false,true,true,false\n"
        );
        assert_eq!(load(&path).unwrap(), settings);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load(&dir.path().join("absent")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        fs::write(&path, "twelve,true,true\n").unwrap();
        assert_eq!(load(&path).unwrap(), Settings::default());

        fs::write(&path, "12,yes,true,true,true\n").unwrap();
        assert_eq!(load(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_out_of_range_length_is_clamped_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        fs::write(&path, "64,true,true,true,true\n").unwrap();
        assert_eq!(load(&path).unwrap().options.length, 32);
    }
}
