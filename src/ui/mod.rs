//! Terminal UI primitives.
//!
//! `core` holds geometry, drawing, buttons and the console seam; `runtime`
//! turns polled input into button clicks. Nothing here depends on a
//! terminal crate.

pub mod core;

pub mod backend;

pub mod runtime;
