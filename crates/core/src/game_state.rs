//! Game state module - level, score, timer and guess resolution
//!
//! This module ties together the palette, round generation, RNG and the
//! deferred task queue. It is driven by exactly two inputs: [`GameState::tick`]
//! (once per frame, with a monotonic timestamp) and [`GameState::guess`] (a tap
//! on a grid slot). Neither blocks; both queue [`GameEvent`]s for the front end.

use std::collections::VecDeque;

use crate::error::CoreError;
use crate::observer::{notify, GameObserver};
use crate::palette::Palette;
use crate::rng::{RandomSource, SimpleRng};
use crate::round::{generate_round, Round, Slot};
use crate::scheduler::{ScheduledTask, Scheduler};
use crate::types::*;

/// Tunable rules of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    pub time_per_level_ms: u64,
    pub correct_delay_ms: u64,
    pub wrong_delay_ms: u64,
    grid_rows: u16,
    grid_cols: u16,
}

impl GameRules {
    /// Default rules on a `rows` x `cols` grid.
    pub fn with_grid(rows: u16, cols: u16) -> Result<Self, CoreError> {
        if rows == 0 || cols == 0 || rows > MAX_GRID_DIM || cols > MAX_GRID_DIM {
            return Err(CoreError::InvalidGrid { rows, cols });
        }
        Ok(Self {
            grid_rows: rows,
            grid_cols: cols,
            ..Self::default()
        })
    }

    pub fn with_time_per_level_ms(mut self, ms: u64) -> Self {
        self.time_per_level_ms = ms;
        self
    }

    pub fn grid_rows(&self) -> u16 {
        self.grid_rows
    }

    pub fn grid_cols(&self) -> u16 {
        self.grid_cols
    }

    pub fn grid_capacity(&self) -> usize {
        (self.grid_rows as usize) * (self.grid_cols as usize)
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            time_per_level_ms: TIME_PER_LEVEL_MS,
            correct_delay_ms: CORRECT_ADVANCE_DELAY_MS,
            wrong_delay_ms: WRONG_ADVANCE_DELAY_MS,
            grid_rows: GRID_ROWS,
            grid_cols: GRID_COLS,
        }
    }
}

/// What happened to a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// Tap on a hidden or non-existent slot; nothing changed.
    Ignored,
    /// The guess was scored and the next level scheduled.
    Resolved(Outcome),
    /// No guess is awaited; a `RestartScene` event was queued.
    RestartRequested,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    palette: Palette,
    rules: GameRules,
    rng: R,
    round: Round,
    /// Monotonic id of the current round (increments on every level start).
    round_id: u32,
    level: u32,
    score: i32,
    correct_guesses: u32,
    wrong_guesses: u32,
    phase: Phase,
    /// Captured by the first tick after a level starts.
    level_start_ms: Option<u64>,
    time_remaining: i32,
    /// Last value sent as `TimeUpdated`, reset per level.
    reported_time: Option<i32>,
    last_guess: Option<usize>,
    scheduler: Scheduler,
    events: VecDeque<GameEvent>,
}

impl GameState<SimpleRng> {
    /// Create a new game with the default palette and rules.
    pub fn new(seed: u32) -> Self {
        let rules = GameRules::default();
        let palette = Palette::animals();
        let mut rng = SimpleRng::new(seed);
        let round = match generate_round(FIRST_LEVEL, rules.grid_capacity(), &palette, &mut rng) {
            Ok(round) => round,
            Err(e) => unreachable!("default palette and grid are valid: {}", e),
        };
        Self::from_parts(palette, rules, rng, round)
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a game on level 1 with a custom palette, rules and randomness.
    pub fn with_rng(palette: Palette, rules: GameRules, mut rng: R) -> Result<Self, CoreError> {
        if rules.grid_capacity() == 0 {
            return Err(CoreError::InvalidGrid {
                rows: rules.grid_rows,
                cols: rules.grid_cols,
            });
        }
        let round = generate_round(FIRST_LEVEL, rules.grid_capacity(), &palette, &mut rng)?;
        Ok(Self::from_parts(palette, rules, rng, round))
    }

    fn from_parts(palette: Palette, rules: GameRules, rng: R, round: Round) -> Self {
        let mut state = Self {
            palette,
            rules,
            rng,
            round,
            round_id: 1,
            level: FIRST_LEVEL,
            score: 0,
            correct_guesses: 0,
            wrong_guesses: 0,
            phase: Phase::AwaitingGuess,
            level_start_ms: None,
            time_remaining: 0,
            reported_time: None,
            last_guess: None,
            scheduler: Scheduler::new(),
            events: VecDeque::new(),
        };
        state.time_remaining = state.full_budget_seconds();
        state.events.push_back(GameEvent::LevelCreated { level: FIRST_LEVEL });
        log::debug!("game created on level {}", FIRST_LEVEL);
        state
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn correct_guesses(&self) -> u32 {
        self.correct_guesses
    }

    pub fn wrong_guesses(&self) -> u32 {
        self.wrong_guesses
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while a guess is awaited.
    pub fn running(&self) -> bool {
        self.phase.is_running()
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::Expired
    }

    /// Whole seconds left on the level timer (may be negative once expired).
    pub fn time_remaining(&self) -> i32 {
        self.time_remaining
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn round_id(&self) -> u32 {
        self.round_id
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    /// Slot of the last resolved guess in the current round.
    pub fn last_guess(&self) -> Option<usize> {
        self.last_guess
    }

    /// Due time of the pending level start, if any.
    pub fn next_level_due(&self) -> Option<u64> {
        self.scheduler.next_due()
    }

    pub fn snapshot_into(&self, out: &mut crate::snapshot::GameSnapshot) {
        out.round_id = self.round_id;
        out.level = self.level;
        out.round_level = self.round.level();
        out.score = self.score;
        out.time_remaining = self.time_remaining;
        out.phase = self.phase;
        out.grid_rows = self.rules.grid_rows;
        out.grid_cols = self.rules.grid_cols;
        out.slots.clear();
        out.slots.extend_from_slice(self.round.slots());
        out.correct_slot = self.round.correct_slot();
        out.last_guess = self.last_guess;
    }

    pub fn snapshot(&self) -> crate::snapshot::GameSnapshot {
        let mut s = crate::snapshot::GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Generate the round for `level` and start awaiting a guess.
    ///
    /// Any pending deferred level start is dropped.
    pub fn start_level(&mut self, level: u32) -> Result<(), CoreError> {
        let round = generate_round(
            level,
            self.rules.grid_capacity(),
            &self.palette,
            &mut self.rng,
        )?;

        self.scheduler.clear();
        self.round = round;
        self.round_id = self.round_id.wrapping_add(1);
        self.level = level;
        self.phase = Phase::AwaitingGuess;
        self.level_start_ms = None;
        self.time_remaining = self.full_budget_seconds();
        self.reported_time = None;
        self.last_guess = None;
        self.events.push_back(GameEvent::LevelCreated { level });

        log::debug!(
            "level {} started (round {}, {} tiles shown)",
            level,
            self.round_id,
            self.round.shown()
        );
        Ok(())
    }

    /// Reset to level 1 with a zero score.
    pub fn restart(&mut self) {
        log::info!(
            "restarting game (level {}, score {})",
            self.level,
            self.score
        );
        self.scheduler.clear();
        self.correct_guesses = 0;
        self.wrong_guesses = 0;
        self.set_score(0);
        if let Err(e) = self.start_level(FIRST_LEVEL) {
            log::error!("failed to restart on level {}: {}", FIRST_LEVEL, e);
        }
    }

    /// Main game tick - run due deferred tasks and update the level timer.
    ///
    /// `now_ms` is a monotonic timestamp. Returns true when the visible state
    /// changed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let mut changed = false;

        while let Some(task) = self.scheduler.pop_due(now_ms) {
            match task {
                ScheduledTask::StartLevel(level) => {
                    if let Err(e) = self.start_level(level) {
                        log::error!("deferred start of level {} failed: {}", level, e);
                    }
                    changed = true;
                }
            }
        }

        if !self.phase.is_running() {
            return changed;
        }

        let start = *self.level_start_ms.get_or_insert(now_ms);
        let elapsed = now_ms.saturating_sub(start);
        let remaining_ms = self.rules.time_per_level_ms as i64 - elapsed as i64;
        let seconds = ceil_seconds(remaining_ms);
        self.time_remaining = seconds;

        if self.reported_time != Some(seconds) {
            self.reported_time = Some(seconds);
            self.events.push_back(GameEvent::TimeUpdated { seconds });
            changed = true;
        }

        if seconds <= 0 {
            self.phase = Phase::Expired;
            self.events.push_back(GameEvent::GameOver);
            log::info!(
                "time ran out on level {} (score {})",
                self.level,
                self.score
            );
            changed = true;
        }

        changed
    }

    /// Resolve a tap on grid slot `slot` at time `now_ms`.
    pub fn guess(&mut self, slot: usize, now_ms: u64) -> GuessResult {
        if !self.phase.is_running() {
            self.events.push_back(GameEvent::RestartScene);
            return GuessResult::RestartRequested;
        }

        let outcome = match self.round.slot(slot) {
            None | Some(Slot::Hidden) => return GuessResult::Ignored,
            Some(Slot::Correct(_)) => Outcome::Correct,
            Some(Slot::Wrong(_)) => Outcome::Wrong,
        };

        self.phase = Phase::Resolved(outcome);
        self.last_guess = Some(slot);

        let delay_ms = match outcome {
            Outcome::Correct => {
                self.correct_guesses += 1;
                self.set_score(self.score + 1);
                self.level = self.level.saturating_add(1);
                self.rules.correct_delay_ms
            }
            Outcome::Wrong => {
                self.wrong_guesses += 1;
                self.set_score(self.score - 1);
                self.level = self.level.saturating_sub(1).max(FIRST_LEVEL);
                self.rules.wrong_delay_ms
            }
        };
        self.events.push_back(GameEvent::PlaySound(outcome.into()));
        self.scheduler.schedule(
            now_ms.saturating_add(delay_ms),
            ScheduledTask::StartLevel(self.level),
        );

        log::debug!(
            "guess on slot {} was {}; next level {} in {}ms",
            slot,
            outcome.as_str(),
            self.level,
            delay_ms
        );
        GuessResult::Resolved(outcome)
    }

    /// Set the score and queue a `ScoreChanged` notification.
    pub fn set_score(&mut self, score: i32) -> i32 {
        self.score = score;
        self.events.push_back(GameEvent::ScoreChanged { score });
        score
    }

    /// Take every queued event, oldest first.
    pub fn drain_events(&mut self) -> std::collections::vec_deque::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    /// Deliver every queued event to `observer`, oldest first.
    pub fn dispatch_events<O: GameObserver + ?Sized>(&mut self, observer: &mut O) {
        while let Some(event) = self.events.pop_front() {
            notify(observer, event);
        }
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    fn full_budget_seconds(&self) -> i32 {
        ceil_seconds(self.rules.time_per_level_ms as i64)
    }
}

/// `ceil(ms / 1000)`, correct for negative values.
fn ceil_seconds(ms: i64) -> i32 {
    let secs = (ms + 999).div_euclid(1000);
    secs.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}
