//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, headless protocol).
//!
//! # Grid Dimensions
//!
//! The playfield is a fixed grid of tile slots:
//!
//! - **Rows**: 8
//! - **Columns**: 12
//! - **Capacity**: 96 slots, not all of which are shown on low levels
//!
//! # Level Rules
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MINIMUM_PIECES` | 5 | Tiles shown before the per-level bonus |
//! | `PIECES_PER_LEVEL` | 4 | Extra tiles shown per level |
//! | `TIME_PER_LEVEL_MS` | 10000 | Time budget for a single level |
//! | `CORRECT_ADVANCE_DELAY_MS` | 1500 | Celebration before the next level |
//! | `WRONG_ADVANCE_DELAY_MS` | 1000 | Wrong marker before the next level |
//! | `TICK_MS` | 16 | Frame interval of the terminal loop (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use odd_one_out_types::{items_to_show, GameAction, Sound, GRID_CAPACITY};
//!
//! // Level 1 shows nine tiles, level 30 is clamped to the grid.
//! assert_eq!(items_to_show(1, GRID_CAPACITY), 9);
//! assert_eq!(items_to_show(30, GRID_CAPACITY), GRID_CAPACITY);
//!
//! // Parse game action
//! let action = GameAction::from_str("select").unwrap();
//! assert_eq!(action, GameAction::Select);
//!
//! assert_eq!(Sound::Correct.as_str(), "correct");
//! ```

/// Grid height in tiles (8 rows)
pub const GRID_ROWS: u16 = 8;

/// Grid width in tiles (12 columns)
pub const GRID_COLS: u16 = 12;

/// Number of tile slots on the default grid
pub const GRID_CAPACITY: usize = (GRID_ROWS as usize) * (GRID_COLS as usize);

/// Largest row or column count a configured grid may have.
pub const MAX_GRID_DIM: u16 = 64;

/// Tiles shown on every level before the per-level bonus
pub const MINIMUM_PIECES: usize = 5;

/// Additional tiles shown per level
pub const PIECES_PER_LEVEL: usize = 4;

/// Time budget for one level (10 seconds)
pub const TIME_PER_LEVEL_MS: u64 = 10_000;

/// Delay between a correct guess and the next level (celebration length)
pub const CORRECT_ADVANCE_DELAY_MS: u64 = 1_500;

/// Delay between a wrong guess and the next level (wrong marker length)
pub const WRONG_ADVANCE_DELAY_MS: u64 = 1_000;

/// Fixed frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Level every game starts on, and the floor for wrong guesses
pub const FIRST_LEVEL: u32 = 1;

/// The default piece catalog, in display order.
pub const PIECE_NAMES: [&str; 10] = [
    "elephant", "giraffe", "hippo", "monkey", "panda", "parrot", "penguin", "pig", "rabbit",
    "snake",
];

/// Number of tiles shown on `level`, clamped to the grid capacity.
///
/// # Examples
///
/// ```
/// use odd_one_out_types::items_to_show;
///
/// assert_eq!(items_to_show(1, 96), 9);
/// assert_eq!(items_to_show(2, 96), 13);
/// assert_eq!(items_to_show(3, 4), 4);
/// ```
pub fn items_to_show(level: u32, grid_capacity: usize) -> usize {
    let wanted = MINIMUM_PIECES.saturating_add((level as usize).saturating_mul(PIECES_PER_LEVEL));
    wanted.min(grid_capacity)
}

/// Result of resolving a guess on a shown tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Correct,
    Wrong,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Correct => "correct",
            Outcome::Wrong => "wrong",
        }
    }
}

/// Sound effects requested by the core.
///
/// The presentation layer decides how (or whether) to play them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    Correct,
    Wrong,
}

impl Sound {
    /// Parse sound name from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use odd_one_out_types::Sound;
    ///
    /// assert_eq!(Sound::from_str("Correct"), Some(Sound::Correct));
    /// assert_eq!(Sound::from_str("wrong"), Some(Sound::Wrong));
    /// assert_eq!(Sound::from_str("boing"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "correct" => Some(Sound::Correct),
            "wrong" => Some(Sound::Wrong),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sound::Correct => "correct",
            Sound::Wrong => "wrong",
        }
    }
}

impl From<Outcome> for Sound {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Correct => Sound::Correct,
            Outcome::Wrong => Sound::Wrong,
        }
    }
}

/// Phase of the current level.
///
/// - **AwaitingGuess**: the timer runs and the next tap on a shown tile counts
/// - **Resolved**: a guess was made; the next level is pending
/// - **Expired**: the timer ran out; the game is over until restarted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    AwaitingGuess,
    Resolved(Outcome),
    Expired,
}

impl Phase {
    /// True while a guess is awaited (the `running` flag).
    pub fn is_running(&self) -> bool {
        matches!(self, Phase::AwaitingGuess)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::AwaitingGuess => "awaiting_guess",
            Phase::Resolved(Outcome::Correct) => "resolved_correct",
            Phase::Resolved(Outcome::Wrong) => "resolved_wrong",
            Phase::Expired => "expired",
        }
    }
}

/// One-way notification from the core to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A new round was generated for `level`.
    LevelCreated { level: u32 },
    /// The score changed to `score`.
    ScoreChanged { score: i32 },
    /// The whole seconds left on the level timer changed.
    TimeUpdated { seconds: i32 },
    /// The level timer ran out.
    GameOver,
    /// A sound effect should be played.
    PlaySound(Sound),
    /// Input arrived after the game stopped; the scene should be restarted.
    RestartScene,
}

impl GameEvent {
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::LevelCreated { .. } => "level_created",
            GameEvent::ScoreChanged { .. } => "score_changed",
            GameEvent::TimeUpdated { .. } => "time_updated",
            GameEvent::GameOver => "game_over",
            GameEvent::PlaySound(_) => "play_sound",
            GameEvent::RestartScene => "restart_scene",
        }
    }
}

/// Player actions produced by the input layer
///
/// Cursor movement is terminal-specific; `Select` is the tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the tile cursor one row up
    MoveUp,
    /// Move the tile cursor one row down
    MoveDown,
    /// Move the tile cursor one column left
    MoveLeft,
    /// Move the tile cursor one column right
    MoveRight,
    /// Tap the tile under the cursor
    Select,
    /// Restart the game from level 1
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use odd_one_out_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("SELECT"), Some(GameAction::Select));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveup" => Some(GameAction::MoveUp),
            "movedown" => Some(GameAction::MoveDown),
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "select" => Some(GameAction::Select),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveUp => "moveUp",
            GameAction::MoveDown => "moveDown",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Select => "select",
            GameAction::Restart => "restart",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_rule_defaults() {
        assert_eq!(GRID_CAPACITY, 96);
        assert_eq!(MINIMUM_PIECES, 5);
        assert_eq!(PIECES_PER_LEVEL, 4);
        assert_eq!(CORRECT_ADVANCE_DELAY_MS, 1_500);
        assert_eq!(WRONG_ADVANCE_DELAY_MS, 1_000);
    }

    #[test]
    fn piece_names_are_distinct() {
        for (i, a) in PIECE_NAMES.iter().enumerate() {
            for b in &PIECE_NAMES[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn items_to_show_grows_by_four_and_clamps() {
        assert_eq!(items_to_show(1, GRID_CAPACITY), 9);
        assert_eq!(items_to_show(5, GRID_CAPACITY), 25);
        assert_eq!(items_to_show(22, GRID_CAPACITY), 93);
        assert_eq!(items_to_show(23, GRID_CAPACITY), GRID_CAPACITY);
        assert_eq!(items_to_show(u32::MAX, GRID_CAPACITY), GRID_CAPACITY);
    }
}
