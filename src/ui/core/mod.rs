pub mod button;
pub mod console;
pub mod error;
pub mod event;
pub mod geom;
pub mod painter;
