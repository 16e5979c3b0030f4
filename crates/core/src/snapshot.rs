use crate::round::Slot;
use crate::types::{Phase, GRID_COLS, GRID_ROWS};

/// Everything a view or observer needs to draw one frame.
///
/// Reuse one snapshot across frames with
/// [`GameState::snapshot_into`](crate::GameState::snapshot_into) to keep the
/// slot buffer allocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub round_id: u32,
    /// Level the next round will use (already updated after a guess).
    pub level: u32,
    /// Level of the round currently on screen.
    pub round_level: u32,
    pub score: i32,
    pub time_remaining: i32,
    pub phase: Phase,
    pub grid_rows: u16,
    pub grid_cols: u16,
    /// Row-major grid slots.
    pub slots: Vec<Slot>,
    pub correct_slot: usize,
    pub last_guess: Option<usize>,
}

impl GameSnapshot {
    pub fn slot_at(&self, row: u16, col: u16) -> Option<Slot> {
        if row >= self.grid_rows || col >= self.grid_cols {
            return None;
        }
        self.slots
            .get(row as usize * self.grid_cols as usize + col as usize)
            .copied()
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::Expired
    }

    pub fn clear(&mut self) {
        self.round_id = 0;
        self.level = 1;
        self.round_level = 1;
        self.score = 0;
        self.time_remaining = 0;
        self.phase = Phase::AwaitingGuess;
        self.slots.clear();
        self.correct_slot = 0;
        self.last_guess = None;
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            round_id: 0,
            level: 1,
            round_level: 1,
            score: 0,
            time_remaining: 0,
            phase: Phase::AwaitingGuess,
            grid_rows: GRID_ROWS,
            grid_cols: GRID_COLS,
            slots: Vec::new(),
            correct_slot: 0,
            last_guess: None,
        }
    }
}
