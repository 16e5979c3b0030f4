//! Round generation.
//!
//! A round assigns one piece to every grid slot that is shown on a level:
//! a single *correct* piece and `items_to_show - 1` *wrong* decoys. Decoys are
//! drawn from the shuffled palette minus the correct piece, each one filling two
//! consecutive slots before moving on to the next, wrapping when the source
//! list runs out. Which grid positions are shown is shuffled too.

use crate::error::CoreError;
use crate::palette::{Palette, PieceId};
use crate::rng::RandomSource;
use crate::types::items_to_show;

/// How many consecutive slots reuse one wrong piece.
const WRONG_REPEAT: usize = 2;

/// Content of a single grid slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Slot {
    /// Not shown on this level; taps on it are ignored.
    #[default]
    Hidden,
    /// Decoy tile.
    Wrong(PieceId),
    /// The odd piece out.
    Correct(PieceId),
}

impl Slot {
    pub fn is_hidden(&self) -> bool {
        matches!(self, Slot::Hidden)
    }

    pub fn piece(&self) -> Option<PieceId> {
        match *self {
            Slot::Hidden => None,
            Slot::Wrong(id) | Slot::Correct(id) => Some(id),
        }
    }
}

/// One level's assignment of pieces to grid slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    level: u32,
    slots: Vec<Slot>,
    correct_slot: usize,
    correct_piece: PieceId,
}

impl Round {
    pub fn level(&self) -> u32 {
        self.level
    }

    /// All grid slots, row-major, `grid_capacity` long.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<Slot> {
        self.slots.get(index).copied()
    }

    pub fn correct_slot(&self) -> usize {
        self.correct_slot
    }

    pub fn correct_piece(&self) -> PieceId {
        self.correct_piece
    }

    /// Number of slots that are not hidden.
    pub fn shown(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_hidden()).count()
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}

/// Expand `source` into `count` decoys, using each entry twice before
/// advancing and wrapping at the end.
///
/// `[p0, p1, p2]` with `count = 7` yields `[p0, p0, p1, p1, p2, p2, p0]`.
pub fn wrong_pieces(source: &[PieceId], count: usize) -> Vec<PieceId> {
    if source.is_empty() {
        return Vec::new();
    }
    (0..count)
        .map(|i| source[(i / WRONG_REPEAT) % source.len()])
        .collect()
}

/// Generate the round for `level` on a grid with `grid_capacity` slots.
pub fn generate_round<R: RandomSource>(
    level: u32,
    grid_capacity: usize,
    palette: &Palette,
    rng: &mut R,
) -> Result<Round, CoreError> {
    if level == 0 {
        return Err(CoreError::InvalidLevel);
    }
    if grid_capacity == 0 {
        return Err(CoreError::InvalidGrid { rows: 0, cols: 0 });
    }
    if palette.len() < 2 {
        return Err(CoreError::InvalidPalette { len: palette.len() });
    }

    // Shuffle the pieces and reserve the last one as the correct piece.
    let mut pieces: Vec<PieceId> = palette.ids().collect();
    rng.shuffle(&mut pieces);
    let correct_piece = match pieces.pop() {
        Some(piece) => piece,
        None => return Err(CoreError::InvalidPalette { len: 0 }),
    };

    let shown = items_to_show(level, grid_capacity);
    let decoys = wrong_pieces(&pieces, shown.saturating_sub(1));

    // Shuffle grid positions; decoys take the front, the correct piece the back.
    let mut order: Vec<usize> = (0..grid_capacity).collect();
    rng.shuffle(&mut order);

    let mut slots = vec![Slot::Hidden; grid_capacity];
    for (&pos, &piece) in order.iter().zip(decoys.iter()) {
        slots[pos] = Slot::Wrong(piece);
    }
    let correct_slot = order[grid_capacity - 1];
    slots[correct_slot] = Slot::Correct(correct_piece);

    log::debug!(
        "round generated: level={} shown={} correct_slot={} correct_piece={:?}",
        level,
        shown,
        correct_slot,
        palette.name(correct_piece)
    );

    Ok(Round {
        level,
        slots,
        correct_slot,
        correct_piece,
    })
}
