//! Cooperative event loop.
//!
//! [`EventLoop::step`] handles at most one pending event and returns; the
//! caller keeps calling it (typically once per frame, after redrawing) until
//! it reports [`LoopState::Stopped`].

use std::io;

use super::core::button::ButtonRegistry;
use super::core::console::ConsoleAdapter;
use super::core::event::{InputEvent, Key, MouseButton};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

impl LoopState {
    pub fn is_running(self) -> bool {
        self == LoopState::Running
    }
}

#[derive(Debug)]
pub struct EventLoop {
    state: LoopState,
    quit_key: Option<Key>,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    /// Loop that stops on the console's platform quit key.
    pub fn new() -> Self {
        Self {
            state: LoopState::Running,
            quit_key: None,
        }
    }

    pub fn with_quit_key(key: Key) -> Self {
        Self {
            state: LoopState::Running,
            quit_key: Some(key.normalized()),
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn stop(&mut self) {
        self.state = LoopState::Stopped;
    }

    pub fn step<C: ConsoleAdapter + ?Sized>(
        &mut self,
        console: &mut C,
        buttons: &mut ButtonRegistry,
    ) -> io::Result<LoopState> {
        if self.state == LoopState::Stopped {
            return Ok(LoopState::Stopped);
        }

        let Some(event) = console.poll_event()? else {
            return Ok(self.state);
        };

        match event {
            InputEvent::MousePress {
                button: MouseButton::Left,
                column,
                row,
            } => {
                buttons.dispatch_click(column, row);
            }
            InputEvent::Key(key) => {
                let quit = self.quit_key.unwrap_or_else(|| console.quit_key().normalized());
                if key.normalized() == quit {
                    tracing::debug!(?key, "quit key pressed");
                    self.state = LoopState::Stopped;
                }
            }
            InputEvent::MousePress { .. } | InputEvent::Resize(..) => {}
        }

        Ok(self.state)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/runtime.rs"]
mod tests;
