//! Text board snapshots, in the same layout the board renders to:
//!
//! ```text
//! +-+-+-+
//! |X| |O|
//! +-+-+-+
//! | |X| |
//! +-+-+-+
//! <<EOF
//! ```
//!
//! Only lines starting with `|` are rows; reading stops at `<<EOF`.

use std::path::Path;

use super::{Board, Cell, Coord};
use crate::error::SnapshotError;

const SENTINEL: &str = "<<EOF";

/// A parsed board plus the number of tokens on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub moves: usize,
}

impl Snapshot {
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let content = std::fs::read_to_string(path).map_err(|e| SnapshotError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    pub fn parse(text: &str) -> Result<Self, SnapshotError> {
        let mut rows: Vec<Vec<Cell>> = Vec::new();

        for (idx, line) in text.lines().enumerate() {
            let line = line.trim_end();
            if line == SENTINEL {
                break;
            }
            if !line.starts_with('|') {
                continue;
            }
            let chars: Vec<char> = line.chars().collect();
            let cols = (chars.len() - 1) / 2;
            let row: Vec<Cell> = (0..cols).map(|c| Cell::from_glyph(chars[c * 2 + 1])).collect();

            if let Some(first) = rows.first() {
                if first.len() != row.len() {
                    return Err(SnapshotError::RaggedRow {
                        line: idx + 1,
                        expected: first.len(),
                        found: row.len(),
                    });
                }
            }
            rows.push(row);
        }

        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(SnapshotError::NoRows);
        }

        let mut board = Board::new(rows.len(), cols);
        let mut moves = 0;
        for (r, row) in rows.iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                if cell != Cell::Empty {
                    board.occupy(Coord::new(r, c), cell);
                    moves += 1;
                }
            }
        }

        Ok(Snapshot { board, moves })
    }
}
