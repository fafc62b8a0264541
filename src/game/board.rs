use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    First,
    Second,
}

impl Cell {
    /// Glyph used by the text rendering and the snapshot format
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::First => 'X',
            Cell::Second => 'O',
        }
    }

    pub fn from_glyph(glyph: char) -> Cell {
        match glyph {
            'X' => Cell::First,
            'O' => Cell::Second,
            _ => Cell::Empty,
        }
    }
}

/// A (row, column) position, 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    /// Shift by a signed delta. `None` when either component would go negative;
    /// the upper bound is left for the board to check.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Coord> {
        Some(Coord {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{},{}}}", self.row, self.col)
    }
}

/// Fixed-size grid of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl Board {
    /// Create an empty `rows` x `cols` board
    pub fn new(rows: usize, cols: usize) -> Self {
        Board {
            cells: vec![Cell::Empty; rows * cols],
            rows,
            cols,
        }
    }

    /// Create an empty square board
    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `at` lies on the board
    pub fn contains(&self, at: Coord) -> bool {
        at.row < self.rows && at.col < self.cols
    }

    fn index(&self, at: Coord) -> usize {
        assert!(
            self.contains(at),
            "coordinate {at} outside {}x{} board",
            self.rows,
            self.cols
        );
        at.row * self.cols + at.col
    }

    /// Get the cell at a position. Panics when out of range.
    pub fn get(&self, at: Coord) -> Cell {
        self.cells[self.index(at)]
    }

    pub fn is_empty(&self, at: Coord) -> bool {
        self.get(at) == Cell::Empty
    }

    /// Put `cell` on an empty square. Returns false and leaves the board
    /// untouched when the square is already occupied.
    pub fn occupy(&mut self, at: Coord, cell: Cell) -> bool {
        debug_assert_ne!(cell, Cell::Empty, "occupy with an empty cell");
        let idx = self.index(at);
        if self.cells[idx] != Cell::Empty {
            return false;
        }
        self.cells[idx] = cell;
        true
    }

    /// Reset a square to empty, returning what was there
    pub fn clear(&mut self, at: Coord) -> Cell {
        let idx = self.index(at);
        std::mem::replace(&mut self.cells[idx], Cell::Empty)
    }

    /// Number of non-empty cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    /// Every coordinate in row-major order
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let cols = self.cols;
        (0..self.rows * self.cols).map(move |i| Coord::new(i / cols, i % cols))
    }
}

fn border(f: &mut fmt::Formatter<'_>, cols: usize) -> fmt::Result {
    f.write_str("+")?;
    for _ in 0..cols {
        f.write_str("-+")?;
    }
    writeln!(f)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        border(f, self.cols)?;
        for row in 0..self.rows {
            f.write_str("|")?;
            for col in 0..self.cols {
                write!(f, "{}|", self.get(Coord::new(row, col)).glyph())?;
            }
            writeln!(f)?;
            border(f, self.cols)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(3, 4);
        assert_eq!(board.rows(), 3);
        assert_eq!(board.cols(), 4);
        for at in board.coords() {
            assert_eq!(board.get(at), Cell::Empty);
        }
        assert_eq!(board.occupied(), 0);
    }

    #[test]
    fn test_occupy_empty_cell() {
        let mut board = Board::square(3);
        assert!(board.occupy(Coord::new(1, 2), Cell::First));
        assert_eq!(board.get(Coord::new(1, 2)), Cell::First);
        assert_eq!(board.occupied(), 1);
    }

    #[test]
    fn test_occupy_taken_cell_fails_without_mutation() {
        let mut board = Board::square(3);
        board.occupy(Coord::new(0, 0), Cell::First);
        let before = board.clone();

        assert!(!board.occupy(Coord::new(0, 0), Cell::Second));
        assert_eq!(board, before);
    }

    #[test]
    fn test_clear_returns_previous() {
        let mut board = Board::square(3);
        board.occupy(Coord::new(2, 1), Cell::Second);
        assert_eq!(board.clear(Coord::new(2, 1)), Cell::Second);
        assert!(board.is_empty(Coord::new(2, 1)));
        assert_eq!(board.clear(Coord::new(2, 1)), Cell::Empty);
    }

    #[test]
    #[should_panic(expected = "outside 3x3 board")]
    fn test_out_of_range_access_panics() {
        let board = Board::square(3);
        board.get(Coord::new(3, 0));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(2, 3);
        let coords: Vec<_> = board.coords().collect();
        for at in coords {
            assert!(!board.is_full());
            board.occupy(at, Cell::First);
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_coords_are_row_major() {
        let board = Board::new(2, 2);
        let coords: Vec<_> = board.coords().collect();
        assert_eq!(
            coords,
            vec![
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(1, 0),
                Coord::new(1, 1)
            ]
        );
    }

    #[test]
    fn test_offset() {
        let at = Coord::new(1, 0);
        assert_eq!(at.offset(1, 1), Some(Coord::new(2, 1)));
        assert_eq!(at.offset(-1, 0), Some(Coord::new(0, 0)));
        assert_eq!(at.offset(0, -1), None);
    }

    #[test]
    fn test_render() {
        let mut board = Board::new(2, 3);
        board.occupy(Coord::new(0, 0), Cell::First);
        board.occupy(Coord::new(1, 2), Cell::Second);
        assert_eq!(
            board.to_string(),
            "+-+-+-+\n|X| | |\n+-+-+-+\n| | |O|\n+-+-+-+\n"
        );
    }
}
