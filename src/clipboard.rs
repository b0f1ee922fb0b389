//! Clipboard access.

use copypasta::{ClipboardContext, ClipboardProvider};
use tracing::debug;
use zeroize::Zeroize;

use crate::error::{Error, Result};

/// Somewhere a password can be copied to.
pub trait ClipboardSink {
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// The system clipboard via copypasta.
pub struct SystemClipboard {
    ctx: ClipboardContext,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let ctx = ClipboardContext::new().map_err(|e| Error::clipboard(e.to_string()))?;
        Ok(Self { ctx })
    }
}

impl ClipboardSink for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        let mut contents = text.to_owned();
        let result = self
            .ctx
            .set_contents(contents.clone())
            .map_err(|e| Error::clipboard(e.to_string()));
        contents.zeroize();
        result?;

        // Read back so the provider has taken ownership, then wipe our copy.
        if let Ok(mut retrieved) = self.ctx.get_contents() {
            retrieved.zeroize();
        }
        debug!("password copied to clipboard");
        Ok(())
    }
}

/// Opens the system clipboard lazily so a missing display only matters on copy.
#[derive(Default)]
pub struct LazyClipboard {
    inner: Option<SystemClipboard>,
}

impl ClipboardSink for LazyClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        if self.inner.is_none() {
            self.inner = Some(SystemClipboard::new()?);
        }
        match self.inner.as_mut() {
            Some(clipboard) => clipboard.copy(text),
            None => Err(Error::clipboard("clipboard unavailable")),
        }
    }
}

/// In-memory clipboard for tests.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
    pub fail: bool,
}

#[cfg(test)]
impl ClipboardSink for MemoryClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        if self.fail {
            return Err(Error::clipboard("no display"));
        }
        self.contents = Some(text.to_owned());
        Ok(())
    }
}
