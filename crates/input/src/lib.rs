//! Terminal input module (engine-facing).
//!
//! This module is independent of any rendering. It maps `crossterm` key and
//! mouse events into [`crate::types::GameAction`]s and keeps the keyboard
//! cursor used to pick a tile without a pointer.

pub mod cursor;
pub mod map;

pub use odd_one_out_types as types;

pub use cursor::GridCursor;
pub use map::{handle_key_event, mouse_tap, should_quit};
