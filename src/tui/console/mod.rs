//! Platform console adapters.
//!
//! Both adapters drive raw mode, mouse capture and input through crossterm;
//! they differ in how they query the size, how they place the cursor and
//! which key quits. [`PlatformConsole`] names the one for the build target.

use std::io::{self, Write};
use std::time::Duration;

use crate::ui::core::event::InputEvent;

#[cfg(unix)]
pub mod unix;
#[cfg(windows)]
pub mod windows;

#[cfg(unix)]
pub use unix::UnixConsole;
#[cfg(windows)]
pub use windows::WindowsConsole;

#[cfg(unix)]
pub type PlatformConsole = UnixConsole;
#[cfg(windows)]
pub type PlatformConsole = WindowsConsole;

/// Tracks which parts of the terminal mode this process changed so restore
/// only undoes what was done, once.
#[derive(Debug, Default)]
pub(crate) struct RawModeState {
    raw: bool,
    mouse: bool,
}

impl RawModeState {
    pub(crate) fn is_raw(&self) -> bool {
        self.raw
    }

    pub(crate) fn mouse_enabled(&self) -> bool {
        self.mouse
    }

    pub(crate) fn enter<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if !self.raw {
            crossterm::terminal::enable_raw_mode()?;
            self.raw = true;
        }
        if !self.mouse {
            match crossterm::execute!(out, crossterm::event::EnableMouseCapture) {
                Ok(()) => self.mouse = true,
                Err(err) => {
                    tracing::warn!(error = %err, "mouse capture unavailable; keyboard only");
                }
            }
        }
        Ok(())
    }

    /// Best-effort restore: tries every step even if one fails.
    pub(crate) fn leave<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let mut first_err: Option<io::Error> = None;

        if self.mouse {
            self.mouse = false;
            if let Err(err) = crossterm::execute!(out, crossterm::event::DisableMouseCapture) {
                first_err.get_or_insert(err);
            }
        }
        if self.raw {
            self.raw = false;
            if let Err(err) = crossterm::terminal::disable_raw_mode() {
                first_err.get_or_insert(err);
            }
        }

        match first_err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Non-blocking read of one crossterm event.
pub(crate) fn poll_crossterm() -> io::Result<Option<InputEvent>> {
    if !crossterm::event::poll(Duration::ZERO)? {
        return Ok(None);
    }
    let event = crossterm::event::read()?;
    Ok(crate::tui::crossterm::into_input_event(event))
}

/// Restores the process terminal without an adapter at hand. Used from the
/// signal thread when the main loop does not shut down in time.
pub fn emergency_restore() {
    let _ = crossterm::execute!(io::stdout(), crossterm::event::DisableMouseCapture);
    let _ = crossterm::terminal::disable_raw_mode();
}
