use std::io::{self, Write};

use crate::tui::console::{poll_crossterm, RawModeState};
use crate::ui::core::console::ConsoleAdapter;
use crate::ui::core::error::{Result, UiError};
use crate::ui::core::event::{InputEvent, Key, KeyCode, KeyModifiers};
use crate::ui::core::geom::{Pos, Size};

pub const QUIT_KEY: Key = Key {
    code: KeyCode::Esc,
    modifiers: KeyModifiers::NONE,
};

/// Console on a Windows console host: the cursor is placed through the
/// console API (crossterm falls back to `SetConsoleCursorPosition` when the
/// host lacks virtual-terminal support), the size comes from the screen
/// buffer info, `Esc` quits.
pub struct WindowsConsole<W: Write = io::Stdout> {
    out: W,
    mode: RawModeState,
}

impl WindowsConsole {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl<W: Write> WindowsConsole<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            mode: RawModeState::default(),
        }
    }

    pub fn is_raw(&self) -> bool {
        self.mode.is_raw()
    }

    pub fn mouse_enabled(&self) -> bool {
        self.mode.mouse_enabled()
    }
}

impl<W: Write> ConsoleAdapter for WindowsConsole<W> {
    fn enable_raw_mouse_mode(&mut self) -> io::Result<()> {
        self.mode.enter(&mut self.out)
    }

    fn restore_mode(&mut self) -> io::Result<()> {
        self.mode.leave(&mut self.out)
    }

    fn poll_event(&mut self) -> io::Result<Option<InputEvent>> {
        poll_crossterm()
    }

    fn query_dimensions(&self) -> Result<Size> {
        let (columns, rows) = crossterm::terminal::size().map_err(UiError::PlatformQuery)?;
        Ok(Size::new(columns, rows))
    }

    fn write_at(&mut self, pos: Pos, text: &str) -> io::Result<()> {
        crossterm::queue!(
            self.out,
            crossterm::cursor::MoveTo(pos.x, pos.y),
            crossterm::style::Print(text)
        )
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn quit_key(&self) -> Key {
        QUIT_KEY
    }
}
