use std::io::Write;

use crate::ai::Player;
use crate::error::GameError;
use crate::game::{GameOutcome, GameState};

/// Drives a game between two seated players.
pub struct Runner {
    state: GameState,
    players: Vec<Player>,
}

impl Runner {
    /// `players[0]` plays first (X), `players[1]` second (O).
    pub fn new(state: GameState, players: Vec<Player>) -> Self {
        Runner { state, players }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Play until someone wins or the board fills, reporting progress to
    /// `out`. Resumes from whatever position the state holds.
    ///
    /// Panics if an agent returns a coordinate outside the board.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<GameOutcome, GameError> {
        if self.players.len() < 2 {
            return Err(GameError::MissingPlayers {
                found: self.players.len(),
            });
        }

        write!(out, "{}", self.state.board())?;
        let mut turn = self.state.player_to_move();
        tracing::info!(
            rows = self.state.rows(),
            cols = self.state.cols(),
            win_length = self.state.win_length(),
            moves = self.state.moves(),
            first = %turn,
            "game started"
        );

        while !self.state.is_full() {
            let player = &mut self.players[turn.index()];
            write!(
                out,
                "Moves: {} ; Player {}, {}, ",
                self.state.moves(),
                turn.number(),
                player.name()
            )?;
            out.flush()?;

            let at = player.choose_move(&mut self.state)?;
            assert!(
                self.state.board().contains(at),
                "{} chose {at}, outside the {}x{} board",
                player.name(),
                self.state.rows(),
                self.state.cols()
            );

            if !self.state.apply_move(at, turn) {
                writeln!(out, "Cannot play there, try again.")?;
                continue;
            }
            writeln!(out, "plays at {at}")?;
            write!(out, "{}", self.state.board())?;

            if self.state.is_winning_move_for(at, turn) {
                writeln!(out, "Player {}, {}, has won!", turn.number(), player.name())?;
                tracing::info!(winner = %turn, moves = self.state.moves(), "game over");
                return Ok(GameOutcome::Winner(turn));
            }
            turn = turn.other();
        }

        writeln!(out, "Draw. Nobody wins.")?;
        tracing::info!(moves = self.state.moves(), "game drawn");
        Ok(GameOutcome::Draw)
    }
}
