//! Keyboard cursor over the tile grid.

use crate::types::GameAction;

/// Position of the keyboard cursor. Movement wraps at the grid edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCursor {
    rows: u16,
    cols: u16,
    row: u16,
    col: u16,
}

impl GridCursor {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows: rows.max(1),
            cols: cols.max(1),
            row: 0,
            col: 0,
        }
    }

    pub fn row(&self) -> u16 {
        self.row
    }

    pub fn col(&self) -> u16 {
        self.col
    }

    /// Row-major slot index under the cursor.
    pub fn slot(&self) -> usize {
        self.row as usize * self.cols as usize + self.col as usize
    }

    /// Move onto `slot`; out-of-range slots are ignored.
    pub fn set_slot(&mut self, slot: usize) {
        let cols = self.cols as usize;
        if slot >= self.rows as usize * cols {
            return;
        }
        self.row = (slot / cols) as u16;
        self.col = (slot % cols) as u16;
    }

    /// Apply a movement action. Returns false for non-movement actions.
    pub fn apply(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveUp => self.row = (self.row + self.rows - 1) % self.rows,
            GameAction::MoveDown => self.row = (self.row + 1) % self.rows,
            GameAction::MoveLeft => self.col = (self.col + self.cols - 1) % self.cols,
            GameAction::MoveRight => self.col = (self.col + 1) % self.cols,
            GameAction::Select | GameAction::Restart => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_and_wraps() {
        let mut c = GridCursor::new(8, 12);
        assert_eq!(c.slot(), 0);

        assert!(c.apply(GameAction::MoveLeft));
        assert_eq!((c.row(), c.col()), (0, 11));
        assert!(c.apply(GameAction::MoveUp));
        assert_eq!((c.row(), c.col()), (7, 11));
        assert_eq!(c.slot(), 95);

        c.apply(GameAction::MoveDown);
        c.apply(GameAction::MoveRight);
        assert_eq!(c.slot(), 0);
    }

    #[test]
    fn non_movement_actions_are_rejected() {
        let mut c = GridCursor::new(2, 2);
        assert!(!c.apply(GameAction::Select));
        assert!(!c.apply(GameAction::Restart));
        assert_eq!(c.slot(), 0);
    }

    #[test]
    fn set_slot_ignores_out_of_range() {
        let mut c = GridCursor::new(2, 3);
        c.set_slot(4);
        assert_eq!((c.row(), c.col()), (1, 1));
        c.set_slot(6);
        assert_eq!(c.slot(), 4);
    }
}
