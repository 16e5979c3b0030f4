//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Palette, Slot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Outcome, Phase};

/// Terminal columns per tile, including the one-column gap.
const TILE_W: u16 = 6;
/// Terminal rows per tile, including the one-row gap.
const TILE_H: u16 = 2;
/// Drawn width of a tile.
const TILE_FACE_W: u16 = TILE_W - 1;

const BOARD_BG: Rgb = Rgb::new(24, 48, 28);

/// Tile background per piece, cycled by piece index.
const PIECE_COLORS: [Rgb; 10] = [
    Rgb::new(150, 150, 160),
    Rgb::new(230, 190, 90),
    Rgb::new(170, 130, 180),
    Rgb::new(170, 110, 70),
    Rgb::new(235, 235, 235),
    Rgb::new(90, 200, 90),
    Rgb::new(90, 140, 230),
    Rgb::new(240, 150, 170),
    Rgb::new(200, 180, 150),
    Rgb::new(130, 200, 60),
];

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Screen positions of the HUD, board frame and help line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub hud_y: u16,
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    pub help_y: u16,
}

impl Layout {
    /// Top-left terminal cell of the tile at `(row, col)`.
    pub fn tile_origin(&self, row: u16, col: u16) -> (u16, u16) {
        (
            self.frame_x
                .saturating_add(2)
                .saturating_add(col.saturating_mul(TILE_W)),
            self.frame_y
                .saturating_add(2)
                .saturating_add(row.saturating_mul(TILE_H)),
        )
    }
}

/// A lightweight terminal renderer for the tile grid.
pub struct GameView {
    /// Three-letter tile labels, indexed by piece id.
    labels: Vec<String>,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(&Palette::animals())
    }
}

impl GameView {
    pub fn new(palette: &Palette) -> Self {
        let labels = palette
            .names()
            .iter()
            .map(|name| name.chars().take(3).collect::<String>().to_uppercase())
            .collect();
        Self { labels }
    }

    pub fn layout(&self, snap: &GameSnapshot, viewport: Viewport) -> Layout {
        let frame_w = snap.grid_cols.saturating_mul(TILE_W).saturating_add(3);
        let frame_h = snap.grid_rows.saturating_mul(TILE_H).saturating_add(3);
        let total_h = frame_h.saturating_add(2);

        let frame_x = viewport.width.saturating_sub(frame_w) / 2;
        let hud_y = viewport.height.saturating_sub(total_h) / 2;
        let frame_y = hud_y.saturating_add(1);
        Layout {
            hud_y,
            frame_x,
            frame_y,
            frame_w,
            frame_h,
            help_y: frame_y.saturating_add(frame_h),
        }
    }

    /// Slot index of the tile face under terminal cell `(x, y)`.
    pub fn hit_test(&self, snap: &GameSnapshot, viewport: Viewport, x: u16, y: u16) -> Option<usize> {
        let layout = self.layout(snap, viewport);
        let (x0, y0) = layout.tile_origin(0, 0);
        let rel_x = x.checked_sub(x0)?;
        let rel_y = y.checked_sub(y0)?;
        if rel_x % TILE_W >= TILE_FACE_W || rel_y % TILE_H != 0 {
            return None;
        }
        let col = rel_x / TILE_W;
        let row = rel_y / TILE_H;
        if col >= snap.grid_cols || row >= snap.grid_rows {
            return None;
        }
        Some(row as usize * snap.grid_cols as usize + col as usize)
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// `cursor` is the slot highlighted by the keyboard cursor.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        cursor: Option<usize>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(snap, viewport);
        let bg = CellStyle::new(Rgb::new(80, 110, 80), BOARD_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.fill_rect(
            layout.frame_x + 1,
            layout.frame_y + 1,
            layout.frame_w.saturating_sub(2),
            layout.frame_h.saturating_sub(2),
            ' ',
            bg,
        );
        fb.draw_box(
            layout.frame_x,
            layout.frame_y,
            layout.frame_w,
            layout.frame_h,
            border,
        );

        for row in 0..snap.grid_rows {
            for col in 0..snap.grid_cols {
                let index = row as usize * snap.grid_cols as usize + col as usize;
                let slot = snap.slots.get(index).copied().unwrap_or_default();
                let (x, y) = layout.tile_origin(row, col);
                self.draw_tile(fb, snap, index, slot, x, y, cursor == Some(index));
            }
        }

        self.draw_hud(fb, snap, &layout);

        let help = CellStyle::new(Rgb::new(150, 150, 150), Rgb::new(0, 0, 0)).dim();
        fb.put_str_centered(
            layout.frame_x,
            layout.help_y,
            layout.frame_w,
            "arrows/hjkl move  enter tap  r restart  q quit",
            help,
        );

        if snap.phase == Phase::Expired {
            self.draw_overlay(fb, &layout, "TIME'S UP", "tap or press enter to play again");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, cursor: Option<usize>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, viewport, &mut fb);
        fb
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        index: usize,
        slot: Slot,
        x: u16,
        y: u16,
        under_cursor: bool,
    ) {
        let guessed = snap.last_guess == Some(index);
        let (label, style) = match (slot.piece(), snap.phase) {
            (None, _) => (String::new(), CellStyle::new(Rgb::new(255, 255, 255), BOARD_BG)),
            (Some(_), Phase::Resolved(Outcome::Wrong)) if guessed => (
                "X".to_string(),
                CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(200, 40, 40)).bold(),
            ),
            (Some(piece), Phase::Resolved(Outcome::Correct)) if guessed => (
                format!("*{}*", self.label(piece.index())),
                CellStyle::new(Rgb::new(0, 0, 0), Rgb::new(120, 255, 120)).bold(),
            ),
            (Some(piece), Phase::Expired) if index == snap.correct_slot => (
                self.label(piece.index()).to_string(),
                CellStyle::new(Rgb::new(0, 0, 0), Rgb::new(255, 230, 60)).bold(),
            ),
            (Some(piece), _) => (
                self.label(piece.index()).to_string(),
                CellStyle::new(
                    Rgb::new(20, 20, 20),
                    PIECE_COLORS[piece.index() % PIECE_COLORS.len()],
                ),
            ),
        };

        fb.fill_rect(x, y, TILE_FACE_W, 1, ' ', style);
        fb.put_str_centered(x, y, TILE_FACE_W, &label, style);

        if under_cursor {
            let marker = CellStyle {
                fg: Rgb::new(255, 255, 0),
                ..style
            }
            .bold();
            fb.put_char(x, y, '[', marker);
            fb.put_char(x.saturating_add(TILE_FACE_W - 1), y, ']', marker);
        }
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &Layout) {
        let label = CellStyle::default().bold();
        let third = layout.frame_w / 3;

        fb.put_str(
            layout.frame_x + 1,
            layout.hud_y,
            &format!("LEVEL {}", snap.round_level),
            label,
        );
        fb.put_str_centered(
            layout.frame_x + third,
            layout.hud_y,
            third,
            &format!("SCORE {}", snap.score),
            label,
        );

        let time = format!("TIME {}", snap.time_remaining.max(0));
        let time_style = if snap.time_remaining <= 3 && snap.phase.is_running() {
            CellStyle {
                fg: Rgb::new(255, 90, 90),
                ..label
            }
        } else {
            label
        };
        let time_w = time.chars().count() as u16;
        let time_x = (layout.frame_x + layout.frame_w).saturating_sub(time_w + 1);
        fb.put_str(time_x, layout.hud_y, &time, time_style);
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, layout: &Layout, title: &str, subtitle: &str) {
        let w = (subtitle.chars().count() as u16 + 4).min(layout.frame_w);
        let h = 4;
        let x = layout.frame_x + layout.frame_w.saturating_sub(w) / 2;
        let y = layout.frame_y + layout.frame_h.saturating_sub(h) / 2;

        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.fill_rect(x, y, w, h, ' ', style);
        fb.draw_box(x, y, w, h, style);
        fb.put_str_centered(x, y + 1, w, title, style);
        fb.put_str_centered(x, y + 2, w, subtitle, CellStyle { bold: false, ..style });
    }

    fn label(&self, piece: usize) -> &str {
        self.labels.get(piece).map(String::as_str).unwrap_or("?")
    }
}
