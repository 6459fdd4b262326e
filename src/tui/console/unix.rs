use std::io::{self, Write};

use crate::tui::console::{poll_crossterm, RawModeState};
use crate::ui::core::console::ConsoleAdapter;
use crate::ui::core::error::{Result, UiError};
use crate::ui::core::event::{InputEvent, Key, KeyCode, KeyModifiers};
use crate::ui::core::geom::{Pos, Size};

pub const QUIT_KEY: Key = Key {
    code: KeyCode::Char('q'),
    modifiers: KeyModifiers::NONE,
};

/// CUP sequence for a 0-indexed cell; the terminal counts from 1.
pub fn cursor_sequence(pos: Pos) -> String {
    format!("\x1b[{};{}H", u32::from(pos.y) + 1, u32::from(pos.x) + 1)
}

pub fn write_sequence<W: Write>(w: &mut W, pos: Pos, text: &str) -> io::Result<()> {
    w.write_all(cursor_sequence(pos).as_bytes())?;
    w.write_all(text.as_bytes())
}

/// Console on a POSIX terminal: text goes out as raw cursor-addressing
/// escapes, the size comes from `ioctl(TIOCGWINSZ)` on stdout, `q` quits.
pub struct UnixConsole<W: Write = io::Stdout> {
    out: W,
    mode: RawModeState,
}

impl UnixConsole {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl<W: Write> UnixConsole<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            mode: RawModeState::default(),
        }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn is_raw(&self) -> bool {
        self.mode.is_raw()
    }

    pub fn mouse_enabled(&self) -> bool {
        self.mode.mouse_enabled()
    }
}

impl<W: Write> ConsoleAdapter for UnixConsole<W> {
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
        let mut ws = libc::winsize {
            ws_row: 0,
            ws_col: 0,
            ws_xpixel: 0,
            ws_ypixel: 0,
        };
        // SAFETY: TIOCGWINSZ only writes into the `winsize` we pass by pointer.
        let ret = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ as _, &mut ws) };
        if ret == -1 {
            return Err(UiError::PlatformQuery(io::Error::last_os_error()));
        }
        if ws.ws_col == 0 || ws.ws_row == 0 {
            return Err(UiError::PlatformQuery(io::Error::new(
                io::ErrorKind::InvalidData,
                "terminal reported a zero size",
            )));
        }
        Ok(Size::new(ws.ws_col, ws.ws_row))
    }

    fn write_at(&mut self, pos: Pos, text: &str) -> io::Result<()> {
        write_sequence(&mut self.out, pos, text)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn quit_key(&self) -> Key {
        QUIT_KEY
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/tui/console/unix.rs"]
mod tests;
