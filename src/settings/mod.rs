//! Saved generation settings.

mod file;

use std::path::Path;

use crate::error::Result;
use crate::pass::GenerationOptions;

pub use file::default_path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    pub options: GenerationOptions,
}

impl Settings {
    pub fn load_from(path: &Path) -> Result<Self> {
        file::load(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        file::save(self, path)
    }
}
