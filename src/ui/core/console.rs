//! Console adapter seam.
//!
//! The renderer and event loop only talk to [`ConsoleAdapter`]; each target
//! platform supplies one implementation (see `crate::tui::console`), and tests
//! use [`crate::ui::backend::headless::HeadlessConsole`].

use std::io;

use super::error::Result;
use super::event::{InputEvent, Key};
use super::geom::{Pos, Size};

pub trait ConsoleAdapter {
    /// Switches to unbuffered, unechoed input with mouse reporting and
    /// non-blocking reads. Mouse support is best-effort: an adapter that cannot
    /// enable it logs and carries on keyboard-only.
    fn enable_raw_mouse_mode(&mut self) -> io::Result<()>;

    /// Returns to line-buffered, echoing input. Idempotent, and a no-op when
    /// raw mode was never entered.
    fn restore_mode(&mut self) -> io::Result<()>;

    /// Returns at most one pending event without blocking.
    fn poll_event(&mut self) -> io::Result<Option<InputEvent>>;

    /// Current size, queried fresh on every call.
    fn query_dimensions(&self) -> Result<Size>;

    /// Moves the cursor to `pos` (0-indexed, top-left origin) and writes `text`
    /// from there without wrapping.
    fn write_at(&mut self, pos: Pos, text: &str) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()>;

    /// Key that stops the event loop on this platform.
    fn quit_key(&self) -> Key;
}

/// Size query that never fails: a refused query falls back to `fallback`.
pub fn dimensions_or_default<C: ConsoleAdapter + ?Sized>(console: &C, fallback: Size) -> Size {
    match console.query_dimensions() {
        Ok(size) => size,
        Err(err) => {
            tracing::debug!(error = %err, ?fallback, "using fallback console size");
            fallback
        }
    }
}
