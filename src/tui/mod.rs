//! Interactive full-screen mode.

mod render;
mod screen;

use std::io::{self, Write};
use std::path::PathBuf;

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use tracing::debug;

pub use screen::{Action, Notice, Screen};

use crate::clipboard::LazyClipboard;
use crate::error::Result;
use crate::pass::GenerationOptions;
use crate::terminal::ScreenGuard;

/// Run the interactive screen until the user quits.
///
/// A password is generated once on entry and then only on explicit request.
pub fn run(options: GenerationOptions, settings_path: PathBuf) -> Result<()> {
    let mut screen = Screen::new(options, settings_path);
    screen.regenerate();

    let mut clipboard = LazyClipboard::default();
    let mut guard = ScreenGuard::new()?;
    debug!("interactive screen started");

    loop {
        draw(&screen)?;
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if screen.handle_key(key, &mut clipboard) == Action::Quit {
                    break;
                }
            }
            _ => {}
        }
    }

    guard.restore();
    Ok(())
}

fn draw(screen: &Screen) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
    for line in render::lines(screen) {
        write!(out, "{line}\r\n")?;
    }
    out.flush()
}
