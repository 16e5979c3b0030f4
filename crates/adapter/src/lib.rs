//! Adapter module - headless control via line-delimited JSON
//!
//! This module lets scripts, bots and tests drive the game without a terminal.
//! The game clock is supplied by the client, so a whole session is
//! reproducible from its input lines and the seed.
//!
//! # Message Types
//!
//! ## Client → Game
//!
//! - **tick**: advance the clock (`now_ms` must never decrease)
//! - **tap**: tap a grid slot at `now_ms`
//! - **restart**: back to level 1 with a zero score
//! - **observe**: request a full observation
//!
//! ## Game → Client
//!
//! - **event**: one core notification (`level_created`, `score_changed`,
//!   `time_updated`, `game_over`, `play_sound`, `restart_scene`)
//! - **ack**: acknowledgment of a tap or restart, with the tap result
//! - **observation**: level, score, timer, phase and every tile
//! - **error**: error response with code and message; the session continues
//!
//! # Environment Variables
//!
//! - `ODDONE_STREAM_OBSERVATIONS`: "1" or "true" sends an observation after
//!   every message that changed the game
//!
//! # Example Protocol Flow
//!
//! ```text
//! Client -> Game: {"type":"tick","seq":1,"now_ms":0}
//! Game -> Client: {"type":"event","seq":1,"name":"level_created","level":1}
//! Game -> Client: {"type":"event","seq":2,"name":"time_updated","seconds":10}
//! Client -> Game: {"type":"tap","seq":2,"slot":41,"now_ms":2300}
//! Game -> Client: {"type":"ack","seq":3,"ack":2,"tap":"correct"}
//! Game -> Client: {"type":"event","seq":4,"name":"score_changed","score":1}
//! Game -> Client: {"type":"event","seq":5,"name":"play_sound","sound":"correct"}
//! ```

pub mod protocol;
pub mod runtime;

pub use odd_one_out_core as core;
pub use odd_one_out_types as types;

// Re-export protocol types for convenience
pub use protocol::*;
pub use runtime::{Session, SessionConfig};
