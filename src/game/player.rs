use std::fmt;

use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    First,
    Second,
}

impl PlayerId {
    /// Player expected to move after `moves` moves have been played
    pub fn for_move(moves: usize) -> PlayerId {
        if moves % 2 == 0 {
            PlayerId::First
        } else {
            PlayerId::Second
        }
    }

    /// Get the other player
    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::First => PlayerId::Second,
            PlayerId::Second => PlayerId::First,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            PlayerId::First => Cell::First,
            PlayerId::Second => Cell::Second,
        }
    }

    /// Seat index (0 or 1)
    pub fn index(self) -> usize {
        match self {
            PlayerId::First => 0,
            PlayerId::Second => 1,
        }
    }

    /// 1-based number used in game messages
    pub fn number(self) -> usize {
        self.index() + 1
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().glyph())
    }
}
