//! Console implementations that need no terminal.
//!
//! The real platform adapters live in `crate::tui::console` so that this
//! module, like the rest of `ui`, stays free of terminal crates.

pub mod headless;
