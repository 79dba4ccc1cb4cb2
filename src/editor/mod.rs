//! Text editing utilities.

pub mod buffer;

pub use buffer::{CursorBuffer, CURSOR_MARKER};
