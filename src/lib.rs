//! boxui - minimal terminal UI primitives
//!
//! Layout:
//! - ui: geometry, renderer, button registry, event loop, headless console
//! - tui: crossterm-backed platform consoles and the raw-mode guard
//! - settings: JSON settings file
//! - logging: tracing setup (file output; stdout is the drawing surface)

pub mod logging;
pub mod settings;
#[cfg(feature = "tui")]
pub mod tui;
pub mod ui;
