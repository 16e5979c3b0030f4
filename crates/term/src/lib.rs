//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal gameplay. It renders into a simple
//! framebuffer that is diffed and flushed to a terminal backend, instead of
//! using a widget toolkit.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep layout pure so taps can be hit-tested against what was drawn
//! - Stand in for the sprite layer: tiles, HUD, overlays and sound cues

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use odd_one_out_core as core;
pub use odd_one_out_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Layout, Viewport};
pub use renderer::{encode_diff_into, encode_frame_into, encode_full_into, TerminalRenderer};
