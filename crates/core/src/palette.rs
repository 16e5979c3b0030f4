//! Piece catalog.
//!
//! A [`Palette`] is the visual vocabulary of a game: a fixed, ordered list of
//! distinct image identifiers. Rounds refer to pieces by [`PieceId`], an index
//! into the palette, so they stay `Copy` and cheap to snapshot.

use crate::error::CoreError;
use crate::types::PIECE_NAMES;

/// Index of a piece in its [`Palette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub u8);

impl PieceId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Ordered set of distinct piece identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    names: Vec<String>,
}

impl Palette {
    /// Build a palette, rejecting fewer than two entries, empty names and
    /// duplicates.
    pub fn new<I, S>(names: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        if names.len() < 2 || names.len() > u8::MAX as usize + 1 {
            return Err(CoreError::InvalidPalette { len: names.len() });
        }
        for (i, name) in names.iter().enumerate() {
            if name.is_empty() {
                return Err(CoreError::EmptyPieceName);
            }
            if names[..i].contains(name) {
                return Err(CoreError::DuplicatePiece(name.clone()));
            }
        }

        Ok(Self { names })
    }

    /// The ten animal pieces shipped with the game.
    pub fn animals() -> Self {
        Self {
            names: PIECE_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn name(&self, id: PieceId) -> Option<&str> {
        self.names.get(id.index()).map(String::as_str)
    }

    pub fn id_of(&self, name: &str) -> Option<PieceId> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| PieceId(i as u8))
    }

    /// All piece ids in palette order.
    pub fn ids(&self) -> impl Iterator<Item = PieceId> + '_ {
        (0..self.names.len()).map(|i| PieceId(i as u8))
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::animals()
    }
}
