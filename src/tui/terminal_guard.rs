use std::io;
use std::ops::{Deref, DerefMut};

use crate::ui::core::console::ConsoleAdapter;

/// Owns a console for the lifetime of raw mode. Raw mode is entered on
/// construction and restored on drop, on every exit path including `?` and
/// unwinding.
pub struct ConsoleGuard<C: ConsoleAdapter> {
    console: C,
    restored: bool,
}

impl<C: ConsoleAdapter> ConsoleGuard<C> {
    pub fn new(mut console: C) -> io::Result<Self> {
        if let Err(err) = console.enable_raw_mouse_mode() {
            // Undo whatever part of the setup did succeed.
            let _ = console.restore_mode();
            return Err(err);
        }
        Ok(Self {
            console,
            restored: false,
        })
    }

    /// Restores the terminal now. Later calls and the drop are no-ops.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        self.console.restore_mode()
    }
}

impl<C: ConsoleAdapter> Deref for ConsoleGuard<C> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.console
    }
}

impl<C: ConsoleAdapter> DerefMut for ConsoleGuard<C> {
    fn deref_mut(&mut self) -> &mut C {
        &mut self.console
    }
}

impl<C: ConsoleAdapter> Drop for ConsoleGuard<C> {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            tracing::error!(error = %err, "failed to restore terminal mode");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    SigInt,
    SigTerm,
}

impl TerminationSignal {
    pub fn exit_code(self) -> i32 {
        match self {
            TerminationSignal::SigInt => 130,
            TerminationSignal::SigTerm => 143,
        }
    }
}

/// Forwards SIGINT/SIGTERM to `tx` so the main loop can stop and drop its
/// guard. If the loop is wedged, `emergency_restore` runs after a grace
/// period and the process exits.
#[cfg(unix)]
pub fn install_termination_signals(
    tx: std::sync::mpsc::Sender<TerminationSignal>,
    emergency_restore: fn(),
) -> io::Result<std::thread::JoinHandle<()>> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;
    use std::time::Duration;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    Ok(std::thread::spawn(move || {
        for sig in signals.forever() {
            let signal = match sig {
                SIGINT => TerminationSignal::SigInt,
                SIGTERM => TerminationSignal::SigTerm,
                _ => continue,
            };

            let _ = tx.send(signal);

            std::thread::sleep(Duration::from_secs(2));
            emergency_restore();
            std::process::exit(signal.exit_code());
        }
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
