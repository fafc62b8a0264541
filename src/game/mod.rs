//! Core game logic: board, win detection, player identity, game state and
//! board snapshots.

mod board;
mod player;
mod snapshot;
mod state;
mod win;

pub use board::{Board, Cell, Coord};
pub use player::PlayerId;
pub use snapshot::Snapshot;
pub use state::{GameOutcome, GameState, MoveCursor};
pub use win::is_winning_move;
