use odd_one_out::core::{GameRules, GameState, GuessResult, Palette, SimpleRng, Slot};
use odd_one_out::types::{GameEvent, Outcome, Phase, Sound};

fn events(state: &mut GameState) -> Vec<GameEvent> {
    state.drain_events().collect()
}

fn wrong_slot(state: &GameState) -> usize {
    state
        .round()
        .slots()
        .iter()
        .position(|s| matches!(s, Slot::Wrong(_)))
        .unwrap()
}

fn hidden_slot(state: &GameState) -> usize {
    state.round().slots().iter().position(Slot::is_hidden).unwrap()
}

#[test]
fn new_game_announces_level_one() {
    let mut state = GameState::new(1);
    assert_eq!(state.level(), 1);
    assert_eq!(state.score(), 0);
    assert_eq!(state.phase(), Phase::AwaitingGuess);
    assert_eq!(state.round().shown(), 9);
    assert_eq!(events(&mut state), vec![GameEvent::LevelCreated { level: 1 }]);
}

#[test]
fn correct_guess_scores_and_advances_after_delay() {
    let mut state = GameState::new(42);
    state.tick(0);
    events(&mut state);

    let slot = state.round().correct_slot();
    assert_eq!(
        state.guess(slot, 2_000),
        GuessResult::Resolved(Outcome::Correct)
    );
    assert_eq!(state.score(), 1);
    assert_eq!(state.level(), 2);
    assert_eq!(state.phase(), Phase::Resolved(Outcome::Correct));
    assert_eq!(
        events(&mut state),
        vec![
            GameEvent::ScoreChanged { score: 1 },
            GameEvent::PlaySound(Sound::Correct),
        ]
    );

    // The answer stays on screen until the delay passes.
    state.tick(3_499);
    assert_eq!(state.round().level(), 1);
    assert!(events(&mut state).is_empty());

    state.tick(3_500);
    assert_eq!(state.round().level(), 2);
    assert_eq!(state.round().shown(), 13);
    assert_eq!(state.phase(), Phase::AwaitingGuess);
    assert_eq!(
        events(&mut state),
        vec![
            GameEvent::LevelCreated { level: 2 },
            GameEvent::TimeUpdated { seconds: 10 },
        ]
    );
}

#[test]
fn wrong_guess_loses_a_point_but_never_drops_below_level_one() {
    let mut state = GameState::new(3);
    events(&mut state);

    let slot = wrong_slot(&state);
    assert_eq!(state.guess(slot, 0), GuessResult::Resolved(Outcome::Wrong));
    assert_eq!(state.score(), -1);
    assert_eq!(state.level(), 1);
    assert_eq!(
        events(&mut state),
        vec![
            GameEvent::ScoreChanged { score: -1 },
            GameEvent::PlaySound(Sound::Wrong),
        ]
    );

    state.tick(1_000);
    assert_eq!(events(&mut state)[0], GameEvent::LevelCreated { level: 1 });
}

#[test]
fn wrong_guess_steps_back_a_level() {
    let mut state = GameState::new(8);
    let mut now = 0;
    for _ in 0..3 {
        let slot = state.round().correct_slot();
        state.guess(slot, now);
        now += state.rules().correct_delay_ms;
        state.tick(now);
    }
    assert_eq!(state.level(), 4);

    let slot = wrong_slot(&state);
    state.guess(slot, now);
    assert_eq!(state.level(), 3);
    assert_eq!(state.score(), 2);
    assert_eq!(state.correct_guesses(), 3);
    assert_eq!(state.wrong_guesses(), 1);
}

#[test]
fn hidden_and_missing_slots_are_ignored() {
    let mut state = GameState::new(5);
    events(&mut state);

    let hidden = hidden_slot(&state);
    assert_eq!(state.guess(hidden, 0), GuessResult::Ignored);
    assert_eq!(state.guess(10_000, 0), GuessResult::Ignored);
    assert_eq!(state.phase(), Phase::AwaitingGuess);
    assert_eq!(state.score(), 0);
    assert!(events(&mut state).is_empty());
}

#[test]
fn timer_counts_down_and_ends_the_game() {
    let mut state = GameState::new(11);
    events(&mut state);

    state.tick(0);
    assert_eq!(events(&mut state), vec![GameEvent::TimeUpdated { seconds: 10 }]);

    // Same second, nothing new to report.
    state.tick(16);
    assert!(events(&mut state).is_empty());

    state.tick(1_001);
    assert_eq!(events(&mut state), vec![GameEvent::TimeUpdated { seconds: 9 }]);
    assert_eq!(state.time_remaining(), 9);

    state.tick(10_000);
    assert_eq!(
        events(&mut state),
        vec![GameEvent::TimeUpdated { seconds: 0 }, GameEvent::GameOver]
    );
    assert!(state.game_over());

    // Game over is reported once.
    state.tick(20_000);
    assert!(events(&mut state).is_empty());
}

#[test]
fn tap_after_game_over_requests_a_restart() {
    let mut state = GameState::new(12);
    state.tick(0);
    state.tick(10_000);
    events(&mut state);

    let slot = state.round().correct_slot();
    assert_eq!(state.guess(slot, 10_500), GuessResult::RestartRequested);
    assert_eq!(events(&mut state), vec![GameEvent::RestartScene]);
    assert_eq!(state.score(), 0);

    state.restart();
    assert!(state.running());
    assert_eq!(state.level(), 1);
    assert_eq!(
        events(&mut state),
        vec![
            GameEvent::ScoreChanged { score: 0 },
            GameEvent::LevelCreated { level: 1 },
        ]
    );
}

#[test]
fn tap_while_resolved_requests_a_restart() {
    let mut state = GameState::new(13);
    let slot = state.round().correct_slot();
    state.guess(slot, 0);
    events(&mut state);

    assert_eq!(state.guess(slot, 100), GuessResult::RestartRequested);
    assert_eq!(state.score(), 1);
    assert_eq!(events(&mut state), vec![GameEvent::RestartScene]);
}

#[test]
fn timer_does_not_run_out_between_levels() {
    let mut state = GameState::new(14);
    state.tick(0);
    let slot = state.round().correct_slot();
    state.guess(slot, 9_000);
    state.tick(10_500);
    events(&mut state);

    assert!(state.running());
    assert_eq!(state.time_remaining(), 10);
    state.tick(19_000);
    assert!(state.running());
    assert_eq!(state.time_remaining(), 2);
}

#[test]
fn restart_drops_a_pending_level_start() {
    let mut state = GameState::new(15);
    let slot = state.round().correct_slot();
    state.guess(slot, 0);
    state.restart();
    let round_id = state.round_id();

    state.tick(5_000);
    assert_eq!(state.round_id(), round_id);
    assert_eq!(state.level(), 1);
}

#[test]
fn observer_receives_events_in_order() {
    let mut state = GameState::new(16);
    state.tick(0);
    let slot = state.round().correct_slot();
    state.guess(slot, 10);

    let mut seen: Vec<GameEvent> = Vec::new();
    state.dispatch_events(&mut seen);
    assert_eq!(
        seen,
        vec![
            GameEvent::LevelCreated { level: 1 },
            GameEvent::TimeUpdated { seconds: 10 },
            GameEvent::ScoreChanged { score: 1 },
            GameEvent::PlaySound(Sound::Correct),
        ]
    );
    assert_eq!(state.pending_events(), 0);
}

#[test]
fn custom_rules_shorten_the_timer_and_grid() {
    let rules = GameRules::with_grid(2, 3)
        .unwrap()
        .with_time_per_level_ms(2_500);
    let mut state =
        GameState::with_rng(Palette::animals(), rules, SimpleRng::new(17)).unwrap();
    assert_eq!(state.round().capacity(), 6);
    assert_eq!(state.round().shown(), 6);

    state.tick(0);
    assert_eq!(state.time_remaining(), 3);
    state.tick(2_500);
    assert!(state.game_over());
}
