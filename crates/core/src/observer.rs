//! Callback-style delivery of [`GameEvent`]s.
//!
//! The core queues events; front ends either drain the queue themselves or
//! hand an observer to [`GameState::dispatch_events`](crate::GameState::dispatch_events).

use crate::types::{GameEvent, Sound};

/// Receiver for core notifications. Every method defaults to a no-op.
pub trait GameObserver {
    fn level_created(&mut self, _level: u32) {}
    fn score_changed(&mut self, _score: i32) {}
    fn time_updated(&mut self, _seconds: i32) {}
    fn game_over(&mut self) {}
    fn play_sound(&mut self, _sound: Sound) {}
    fn restart_scene(&mut self) {}
}

/// Route one event to the matching observer method.
pub fn notify<O: GameObserver + ?Sized>(observer: &mut O, event: GameEvent) {
    match event {
        GameEvent::LevelCreated { level } => observer.level_created(level),
        GameEvent::ScoreChanged { score } => observer.score_changed(score),
        GameEvent::TimeUpdated { seconds } => observer.time_updated(seconds),
        GameEvent::GameOver => observer.game_over(),
        GameEvent::PlaySound(sound) => observer.play_sound(sound),
        GameEvent::RestartScene => observer.restart_scene(),
    }
}

impl GameObserver for Vec<GameEvent> {
    fn level_created(&mut self, level: u32) {
        self.push(GameEvent::LevelCreated { level });
    }

    fn score_changed(&mut self, score: i32) {
        self.push(GameEvent::ScoreChanged { score });
    }

    fn time_updated(&mut self, seconds: i32) {
        self.push(GameEvent::TimeUpdated { seconds });
    }

    fn game_over(&mut self) {
        self.push(GameEvent::GameOver);
    }

    fn play_sound(&mut self, sound: Sound) {
        self.push(GameEvent::PlaySound(sound));
    }

    fn restart_scene(&mut self) {
        self.push(GameEvent::RestartScene);
    }
}
