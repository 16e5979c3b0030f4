use odd_one_out::core::{GameState, Slot};
use odd_one_out::term::{FrameBuffer, GameView, Viewport};

fn screen_text(fb: &FrameBuffer) -> Vec<String> {
    (0..fb.height()).map(|y| fb.row_text(y)).collect()
}

fn face_text(fb: &FrameBuffer, x: u16, y: u16) -> String {
    fb.row_text(y).chars().skip(x as usize).take(5).collect()
}

#[test]
fn term_view_shows_hud_values() {
    let mut state = GameState::new(1);
    state.tick(0);
    let snap = state.snapshot();
    let view = GameView::new(state.palette());
    let fb = view.render(&snap, None, Viewport::new(80, 24));

    let text = screen_text(&fb).join("\n");
    assert!(text.contains("LEVEL 1"));
    assert!(text.contains("SCORE 0"));
    assert!(text.contains("TIME 10"));
}

#[test]
fn term_view_draws_shown_tiles_and_leaves_hidden_ones_blank() {
    let state = GameState::new(2);
    let snap = state.snapshot();
    let view = GameView::new(state.palette());
    let vp = Viewport::new(80, 24);
    let fb = view.render(&snap, None, vp);
    let layout = view.layout(&snap, vp);

    for (index, slot) in snap.slots.iter().enumerate() {
        let row = (index / snap.grid_cols as usize) as u16;
        let col = (index % snap.grid_cols as usize) as u16;
        let (x, y) = layout.tile_origin(row, col);
        let face = face_text(&fb, x, y);
        match slot {
            Slot::Hidden => assert_eq!(face.trim(), ""),
            Slot::Wrong(p) | Slot::Correct(p) => {
                let name = state.palette().name(*p).unwrap().to_ascii_uppercase();
                assert_eq!(face.trim(), &name[..3]);
            }
        }
    }
}

#[test]
fn term_view_hit_test_finds_the_odd_tile() {
    let state = GameState::new(3);
    let snap = state.snapshot();
    let view = GameView::new(state.palette());
    let vp = Viewport::new(100, 30);
    let layout = view.layout(&snap, vp);

    let correct = snap.correct_slot;
    let row = (correct / snap.grid_cols as usize) as u16;
    let col = (correct % snap.grid_cols as usize) as u16;
    let (x, y) = layout.tile_origin(row, col);
    assert_eq!(view.hit_test(&snap, vp, x + 2, y), Some(correct));
}

#[test]
fn term_view_marks_correct_guess() {
    let mut state = GameState::new(4);
    let correct = state.round().correct_slot();
    state.guess(correct, 0);
    let snap = state.snapshot();
    let view = GameView::new(state.palette());
    let vp = Viewport::new(80, 24);
    let fb = view.render(&snap, None, vp);

    let layout = view.layout(&snap, vp);
    let row = (correct / snap.grid_cols as usize) as u16;
    let col = (correct % snap.grid_cols as usize) as u16;
    let (x, y) = layout.tile_origin(row, col);
    let face = face_text(&fb, x, y);
    assert!(face.starts_with('*') && face.ends_with('*'), "{:?}", face);
}

#[test]
fn term_view_shows_time_up_overlay() {
    let mut state = GameState::new(5);
    state.tick(0);
    state.tick(10_000);
    let snap = state.snapshot();
    let view = GameView::new(state.palette());
    let fb = view.render(&snap, Some(0), Viewport::new(80, 24));

    let text = screen_text(&fb).join("\n");
    assert!(text.contains("TIME'S UP"));
    assert!(text.contains("TIME 0"));
}

#[test]
fn term_view_cursor_brackets_the_tile() {
    let state = GameState::new(6);
    let snap = state.snapshot();
    let view = GameView::new(state.palette());
    let vp = Viewport::new(80, 24);
    let fb = view.render(&snap, Some(13), vp);

    let (x, y) = view.layout(&snap, vp).tile_origin(1, 1);
    assert_eq!(fb.get(x, y).unwrap().ch, '[');
    assert_eq!(fb.get(x + 4, y).unwrap().ch, ']');
}
