use thiserror::Error;

/// Configuration errors raised before a game can start.
///
/// None of these occur during play: a palette or grid that passes
/// construction can generate rounds for every level.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("a palette needs at least 2 pieces (one correct, one wrong), got {len}")]
    InvalidPalette { len: usize },
    #[error("piece `{0}` appears more than once in the palette")]
    DuplicatePiece(String),
    #[error("piece names must not be empty")]
    EmptyPieceName,
    #[error("levels start at 1")]
    InvalidLevel,
    #[error("grid must be between 1x1 and {max}x{max}, got {rows}x{cols}", max = crate::types::MAX_GRID_DIM)]
    InvalidGrid { rows: u16, cols: u16 },
}
