//! Terminal Odd One Out runner (default binary).
//!
//! Uses crossterm for keyboard/mouse input and the framebuffer renderer from
//! `odd_one_out::term`. Logging is off unless a log file is configured.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use odd_one_out::config::AppConfig;
use odd_one_out::core::{GameObserver, GameState};
use odd_one_out::input::{handle_key_event, mouse_tap, should_quit, GridCursor};
use odd_one_out::logging::{self, LogTarget};
use odd_one_out::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use odd_one_out::types::{GameAction, Sound, TICK_MS};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = AppConfig::load(&args)?;
    if let Some(path) = config.log_path.as_deref() {
        logging::init(LogTarget::File(path))?;
    }
    let mut game = config.new_game()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    log::info!(
        "session over: level {}, score {}",
        game.level(),
        game.score()
    );
    result
}

/// Routes core notifications to terminal side effects.
struct SceneObserver<'a> {
    term: &'a mut TerminalRenderer,
    restart: bool,
}

impl GameObserver for SceneObserver<'_> {
    fn level_created(&mut self, level: u32) {
        log::debug!("level {} on screen", level);
    }

    fn game_over(&mut self) {
        log::info!("game over");
    }

    fn play_sound(&mut self, sound: Sound) {
        self.term.play(sound);
    }

    fn restart_scene(&mut self) {
        self.restart = true;
    }
}

fn run(term: &mut TerminalRenderer, game: &mut GameState) -> Result<()> {
    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;

    let view = GameView::new(game.palette());
    let mut cursor = GridCursor::new(game.rules().grid_rows(), game.rules().grid_cols());
    let mut snap = game.snapshot();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Notifications.
        let mut observer = SceneObserver {
            term: &mut *term,
            restart: false,
        };
        game.dispatch_events(&mut observer);
        if observer.restart {
            game.restart();
            game.dispatch_events(&mut observer);
        }

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Some(cursor.slot()), viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match handle_key_event(key) {
                        Some(GameAction::Select) => {
                            game.guess(cursor.slot(), now_ms());
                        }
                        Some(GameAction::Restart) => game.restart(),
                        Some(action) => {
                            cursor.apply(action);
                        }
                        None => {}
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some((x, y)) = mouse_tap(mouse) {
                        match view.hit_test(&snap, viewport, x, y) {
                            Some(slot) => {
                                cursor.set_slot(slot);
                                game.guess(slot, now_ms());
                            }
                            // Empty space only matters when nothing is awaited.
                            None if !game.running() => {
                                game.guess(usize::MAX, now_ms());
                            }
                            None => {}
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick(now_ms());
        }
    }
}
