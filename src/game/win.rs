//! Win detection around a just-played cell.

use super::board::{Board, Cell, Coord};

/// Vertical, horizontal and both diagonals.
const AXES: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Whether the token at `at` completes a run of at least `required` cells of
/// `cell` along any axis. The pivot always counts, only cells reachable from it
/// are visited.
pub fn is_winning_move(board: &Board, at: Coord, required: usize, cell: Cell) -> bool {
    AXES.iter().any(|&(dr, dc)| {
        let run = 1 + run_length(board, at, dr, dc, cell) + run_length(board, at, -dr, -dc, cell);
        run >= required
    })
}

/// Count consecutive `cell`s walking from `from` (exclusive) by (dr, dc)
fn run_length(board: &Board, from: Coord, dr: isize, dc: isize, cell: Cell) -> usize {
    let mut count = 0;
    let mut at = from;
    while let Some(next) = at.offset(dr, dc) {
        if !board.contains(next) || board.get(next) != cell {
            break;
        }
        count += 1;
        at = next;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(rows: usize, cols: usize, cells: &[(usize, usize, Cell)]) -> Board {
        let mut board = Board::new(rows, cols);
        for &(r, c, cell) in cells {
            assert!(board.occupy(Coord::new(r, c), cell));
        }
        board
    }

    #[test]
    fn test_row_completion() {
        let mut board = board_with(3, 3, &[(0, 0, Cell::First), (0, 1, Cell::First)]);
        board.occupy(Coord::new(0, 2), Cell::First);
        assert!(is_winning_move(&board, Coord::new(0, 2), 3, Cell::First));
    }

    #[test]
    fn test_off_line_move_does_not_win() {
        let mut board = board_with(3, 3, &[(0, 0, Cell::First), (0, 1, Cell::First)]);
        board.occupy(Coord::new(1, 2), Cell::First);
        assert!(!is_winning_move(&board, Coord::new(1, 2), 3, Cell::First));
    }

    #[test]
    fn test_vertical_win_from_middle() {
        let board = board_with(
            5,
            4,
            &[(1, 2, Cell::Second), (2, 2, Cell::Second), (3, 2, Cell::Second)],
        );
        assert!(is_winning_move(&board, Coord::new(2, 2), 3, Cell::Second));
        assert!(!is_winning_move(&board, Coord::new(2, 2), 4, Cell::Second));
    }

    #[test]
    fn test_diagonal_down_win() {
        let board = board_with(
            4,
            4,
            &[
                (0, 0, Cell::First),
                (1, 1, Cell::First),
                (2, 2, Cell::First),
                (3, 3, Cell::First),
            ],
        );
        assert!(is_winning_move(&board, Coord::new(3, 3), 4, Cell::First));
    }

    #[test]
    fn test_diagonal_up_win() {
        let board = board_with(
            4,
            5,
            &[(3, 1, Cell::First), (2, 2, Cell::First), (1, 3, Cell::First)],
        );
        assert!(is_winning_move(&board, Coord::new(1, 3), 3, Cell::First));
    }

    #[test]
    fn test_run_broken_by_opponent() {
        let board = board_with(
            1,
            5,
            &[
                (0, 0, Cell::First),
                (0, 1, Cell::First),
                (0, 2, Cell::Second),
                (0, 3, Cell::First),
            ],
        );
        assert!(!is_winning_move(&board, Coord::new(0, 3), 3, Cell::First));
        assert!(!is_winning_move(&board, Coord::new(0, 1), 3, Cell::First));
    }

    #[test]
    fn test_longer_run_than_required_counts() {
        let board = board_with(
            1,
            6,
            &[
                (0, 0, Cell::Second),
                (0, 1, Cell::Second),
                (0, 2, Cell::Second),
                (0, 3, Cell::Second),
                (0, 4, Cell::Second),
            ],
        );
        assert!(is_winning_move(&board, Coord::new(0, 2), 4, Cell::Second));
    }

    #[test]
    fn test_win_length_one() {
        let board = board_with(2, 2, &[(1, 1, Cell::First)]);
        assert!(is_winning_move(&board, Coord::new(1, 1), 1, Cell::First));
    }

    #[test]
    fn test_other_players_run_is_ignored() {
        let board = board_with(
            3,
            3,
            &[(0, 0, Cell::Second), (0, 1, Cell::Second), (0, 2, Cell::First)],
        );
        assert!(!is_winning_move(&board, Coord::new(0, 2), 3, Cell::First));
    }
}
