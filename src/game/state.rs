use super::snapshot::Snapshot;
use super::win::is_winning_move;
use super::{Board, Cell, Coord, PlayerId};
use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(PlayerId),
    Draw,
}

/// Board, move counter and win length. Search strategies mutate it in place
/// and restore it before returning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    moves: usize,
    win_length: usize,
}

impl GameState {
    /// Create an empty game on a `rows` x `cols` board
    pub fn new(rows: usize, cols: usize, win_length: usize) -> Result<Self, GameError> {
        Self::with_board(Board::new(rows, cols), win_length)
    }

    /// Resume from a loaded snapshot. X moves first, so a reachable board
    /// holds as many X tokens as O tokens, or exactly one more.
    pub fn from_snapshot(snapshot: Snapshot, win_length: usize) -> Result<Self, GameError> {
        let board = snapshot.board;
        let count = |cell: Cell| board.coords().filter(|&at| board.get(at) == cell).count();
        let (first, second) = (count(Cell::First), count(Cell::Second));
        if first != second && first != second + 1 {
            return Err(GameError::ImpossibleTokenCount { first, second });
        }
        Self::with_board(board, win_length)
    }

    fn with_board(board: Board, win_length: usize) -> Result<Self, GameError> {
        let (rows, cols) = (board.rows(), board.cols());
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidDimensions { rows, cols });
        }
        let max = rows.min(cols);
        if win_length == 0 || win_length > max {
            return Err(GameError::InvalidWinLength {
                win_length,
                max,
                rows,
                cols,
            });
        }
        Ok(GameState {
            moves: board.occupied(),
            board,
            win_length,
        })
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    pub fn cols(&self) -> usize {
        self.board.cols()
    }

    /// Number of tokens on the board
    pub fn moves(&self) -> usize {
        self.moves
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Parity decides who plays next. On any board `from_snapshot` accepts
    /// this is also the side with fewer tokens.
    pub fn player_to_move(&self) -> PlayerId {
        PlayerId::for_move(self.moves)
    }

    pub fn is_full(&self) -> bool {
        self.moves == self.rows() * self.cols()
    }

    pub fn can_play_at(&self, at: Coord) -> bool {
        self.board.is_empty(at)
    }

    /// Place `player`'s token. Returns false, leaving the state untouched,
    /// when the square is taken.
    pub fn apply_move(&mut self, at: Coord, player: PlayerId) -> bool {
        let placed = self.board.occupy(at, player.to_cell());
        if placed {
            self.moves += 1;
        }
        placed
    }

    /// Take back a token placed by `apply_move`
    pub fn undo_move(&mut self, at: Coord) {
        if self.board.clear(at) != Cell::Empty {
            self.moves -= 1;
        }
    }

    /// Would `player` win with the token at `at`?
    pub fn is_winning_move_for(&self, at: Coord, player: PlayerId) -> bool {
        is_winning_move(&self.board, at, self.win_length, player.to_cell())
    }

    /// Empty squares in row-major order
    pub fn legal_moves(&self) -> impl Iterator<Item = Coord> + '_ {
        self.board.coords().filter(|&at| self.board.is_empty(at))
    }

    /// Cursor over empty squares that lets the caller mutate the state
    /// between steps.
    pub fn move_cursor(&self) -> MoveCursor {
        MoveCursor {
            next: 0,
            rows: self.rows(),
            cols: self.cols(),
        }
    }
}

/// Row-major walk over empty squares. Each step looks at the live board, so
/// moves played and undone between steps are seen; dropping it early is fine.
#[derive(Debug, Clone)]
pub struct MoveCursor {
    next: usize,
    rows: usize,
    cols: usize,
}

impl MoveCursor {
    pub fn next_move(&mut self, state: &GameState) -> Option<Coord> {
        while self.next < self.rows * self.cols {
            let at = Coord::new(self.next / self.cols, self.next % self.cols);
            self.next += 1;
            if state.can_play_at(at) {
                return Some(at);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::new(3, 4, 3).unwrap();
        assert_eq!(state.moves(), 0);
        assert_eq!(state.player_to_move(), PlayerId::First);
        assert_eq!(state.legal_moves().count(), 12);
        assert!(!state.is_full());
    }

    #[test]
    fn test_rejects_bad_win_length() {
        assert!(matches!(
            GameState::new(3, 4, 4),
            Err(GameError::InvalidWinLength { max: 3, .. })
        ));
        assert!(matches!(
            GameState::new(3, 3, 0),
            Err(GameError::InvalidWinLength { .. })
        ));
        assert!(matches!(
            GameState::new(0, 3, 1),
            Err(GameError::InvalidDimensions { rows: 0, cols: 3 })
        ));
    }

    #[test]
    fn test_apply_move() {
        let mut state = GameState::new(3, 3, 3).unwrap();
        assert!(state.apply_move(Coord::new(1, 1), PlayerId::First));
        assert_eq!(state.board().get(Coord::new(1, 1)), Cell::First);
        assert_eq!(state.moves(), 1);
        assert_eq!(state.player_to_move(), PlayerId::Second);
    }

    #[test]
    fn test_apply_move_on_occupied_is_noop() {
        let mut state = GameState::new(3, 3, 3).unwrap();
        state.apply_move(Coord::new(0, 0), PlayerId::First);
        let before = state.clone();

        assert!(!state.apply_move(Coord::new(0, 0), PlayerId::Second));
        assert_eq!(state, before);
    }

    #[test]
    fn test_undo_restores_counter() {
        let mut state = GameState::new(3, 3, 3).unwrap();
        state.apply_move(Coord::new(2, 2), PlayerId::First);
        state.undo_move(Coord::new(2, 2));
        assert_eq!(state.moves(), 0);
        assert!(state.can_play_at(Coord::new(2, 2)));

        // undoing an empty square leaves the counter alone
        state.undo_move(Coord::new(2, 2));
        assert_eq!(state.moves(), 0);
    }

    #[test]
    fn test_winning_move_uses_configured_length() {
        let mut state = GameState::new(4, 4, 3).unwrap();
        state.apply_move(Coord::new(0, 0), PlayerId::First);
        state.apply_move(Coord::new(0, 1), PlayerId::First);
        state.apply_move(Coord::new(0, 2), PlayerId::First);
        assert!(state.is_winning_move_for(Coord::new(0, 2), PlayerId::First));
        assert!(!state.is_winning_move_for(Coord::new(0, 2), PlayerId::Second));
    }

    #[test]
    fn test_legal_moves_skip_occupied() {
        let mut state = GameState::new(2, 2, 2).unwrap();
        state.apply_move(Coord::new(0, 1), PlayerId::First);
        let moves: Vec<_> = state.legal_moves().collect();
        assert_eq!(
            moves,
            vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(1, 1)]
        );
    }

    #[test]
    fn test_cursor_sees_live_board() {
        let mut state = GameState::new(2, 2, 2).unwrap();
        let mut cursor = state.move_cursor();
        assert_eq!(cursor.next_move(&state), Some(Coord::new(0, 0)));

        // a square filled after the cursor was created is skipped
        state.apply_move(Coord::new(1, 0), PlayerId::Second);
        assert_eq!(cursor.next_move(&state), Some(Coord::new(0, 1)));
        assert_eq!(cursor.next_move(&state), Some(Coord::new(1, 1)));
        assert_eq!(cursor.next_move(&state), None);

        // a fresh cursor restarts from the top
        assert_eq!(state.move_cursor().next_move(&state), Some(Coord::new(0, 0)));
    }

    #[test]
    fn test_from_snapshot_counts_moves() {
        let snapshot = Snapshot::parse("|X| |\n| |O|\n").unwrap();
        let state = GameState::from_snapshot(snapshot, 2).unwrap();
        assert_eq!(state.moves(), 2);
        assert_eq!(state.player_to_move(), PlayerId::First);
    }

    #[test]
    fn test_from_snapshot_rejects_impossible_counts() {
        // O cannot be ahead
        let snapshot = Snapshot::parse("|O|O| |\n| |X| |\n| | | |\n").unwrap();
        assert!(matches!(
            GameState::from_snapshot(snapshot, 3),
            Err(GameError::ImpossibleTokenCount {
                first: 1,
                second: 2
            })
        ));

        // nor X two tokens ahead
        let snapshot = Snapshot::parse("|X|X| |\n| | | |\n| | | |\n").unwrap();
        assert!(matches!(
            GameState::from_snapshot(snapshot, 3),
            Err(GameError::ImpossibleTokenCount {
                first: 2,
                second: 0
            })
        ));
    }

    #[test]
    fn test_from_snapshot_side_with_fewer_tokens_moves() {
        let snapshot = Snapshot::parse("|X| | |\n| | | |\n| | | |\n").unwrap();
        let state = GameState::from_snapshot(snapshot, 3).unwrap();
        assert_eq!(state.player_to_move(), PlayerId::Second);

        let snapshot = Snapshot::parse("|X| | |\n| |O| |\n| | | |\n").unwrap();
        let state = GameState::from_snapshot(snapshot, 3).unwrap();
        assert_eq!(state.player_to_move(), PlayerId::First);
    }

    #[test]
    fn test_full_state() {
        let mut state = GameState::new(1, 2, 1).unwrap();
        state.apply_move(Coord::new(0, 0), PlayerId::First);
        state.apply_move(Coord::new(0, 1), PlayerId::Second);
        assert!(state.is_full());
        assert_eq!(state.legal_moves().count(), 0);
    }
}
