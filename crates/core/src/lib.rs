//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules, round generation and state management.
//! It has **zero dependencies** on UI, terminals or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical rounds
//! - **Testable**: Every rule is exercised by unit tests
//! - **Portable**: Drives the terminal front end and the headless driver alike
//!
//! # Module Structure
//!
//! - [`palette`]: the piece catalog and validated palettes
//! - [`rng`]: seeded randomness behind the [`RandomSource`] trait
//! - [`round`]: one correct piece, repeat-twice decoys, shuffled slot positions
//! - [`scheduler`]: deferred "start level N later" tasks
//! - [`game_state`]: level, score, timer and guess resolution
//! - [`observer`]: callback-style delivery of game events
//! - [`snapshot`]: plain copies of the state for views and observers
//!
//! # Game Rules
//!
//! - Level `n` shows `min(5 + 4n, grid capacity)` tiles
//! - A correct tap scores +1 and advances a level after a 1.5s celebration
//! - A wrong tap scores -1 and drops a level (never below 1) after 1s
//! - Each level has a 10s budget; running out ends the game
//!
//! # Example
//!
//! ```
//! use odd_one_out_core::{GameState, GuessResult};
//! use odd_one_out_types::{GameEvent, Outcome};
//!
//! let mut game = GameState::new(12345);
//! game.tick(0);
//!
//! let slot = game.round().correct_slot();
//! assert_eq!(game.guess(slot, 250), GuessResult::Resolved(Outcome::Correct));
//! assert_eq!(game.score(), 1);
//!
//! // The next level appears once the celebration delay elapses.
//! game.tick(1_750);
//! assert_eq!(game.round().level(), 2);
//! assert!(game.drain_events().any(|e| e == GameEvent::LevelCreated { level: 2 }));
//! ```

pub mod error;
pub mod game_state;
pub mod observer;
pub mod palette;
pub mod rng;
pub mod round;
pub mod scheduler;
pub mod snapshot;

pub use odd_one_out_types as types;

// Re-export commonly used types for convenience
pub use error::CoreError;
pub use game_state::{GameRules, GameState, GuessResult};
pub use observer::{notify, GameObserver};
pub use palette::{Palette, PieceId};
pub use rng::{RandomSource, SimpleRng};
pub use round::{generate_round, wrong_pieces, Round, Slot};
pub use scheduler::{ScheduledTask, Scheduler};
pub use snapshot::GameSnapshot;
