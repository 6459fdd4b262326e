//! Terminal integration layer (crossterm).
//!
//! Kept apart from `ui` so the core builds and tests without a terminal
//! crate; everything here plugs into `ui` through `ConsoleAdapter`.

pub mod console;
pub mod crossterm;
pub mod terminal_guard;
