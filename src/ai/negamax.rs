use crate::error::AgentError;
use crate::game::{Coord, GameState, PlayerId};

use super::agent::Agent;
use super::search::{loss_at, Score, SearchConfig, SearchOutcome};

/// Exhaustive negamax search to a fixed depth.
///
/// Only terminal positions are scored: a win found at remaining depth `d`
/// is worth `1000 - d` to the winner, everything else is a neutral 0.
pub struct NegamaxAgent {
    config: SearchConfig,
    player: PlayerId,
    nodes: u64,
}

impl NegamaxAgent {
    /// Panics if `config.depth` is 0 or above [`MAX_DEPTH`].
    ///
    /// [`MAX_DEPTH`]: super::MAX_DEPTH
    pub fn new(config: SearchConfig, player: PlayerId) -> Self {
        NegamaxAgent {
            config: config.checked(),
            player,
            nodes: 0,
        }
    }

    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// Score every legal move and keep the first best one in row-major order.
    /// The state is left exactly as it was found.
    ///
    /// Panics if the board has no empty square.
    pub fn search(&mut self, state: &mut GameState) -> SearchOutcome {
        self.nodes = 0;
        let child_depth = self.config.depth.saturating_sub(1);
        let mut best: Option<(Coord, Score)> = None;

        let mut cursor = state.move_cursor();
        while let Some(at) = cursor.next_move(state) {
            state.apply_move(at, self.player);
            // Negamax: opponent's score is negated
            let score = -self.negamax(state, child_depth, self.player, at);
            state.undo_move(at);

            if best.map_or(true, |(_, top)| score > top) {
                best = Some((at, score));
            }
        }

        let (best, score) = best.expect("search needs at least one empty square");
        SearchOutcome {
            best,
            score,
            nodes: self.nodes,
        }
    }

    /// Value of the position after `acting` played `last`, seen by the
    /// player who has to answer it.
    fn negamax(
        &mut self,
        state: &mut GameState,
        depth: usize,
        acting: PlayerId,
        last: Coord,
    ) -> Score {
        self.nodes += 1;

        if state.is_winning_move_for(last, acting) {
            let score = loss_at(depth);
            self.trace(depth, acting, last, score, "winning move");
            return score;
        }
        if depth == 0 {
            self.trace(depth, acting, last, 0, "leaf");
            return 0;
        }

        let opponent = acting.other();
        let mut best: Option<Score> = None;

        let mut cursor = state.move_cursor();
        while let Some(at) = cursor.next_move(state) {
            state.apply_move(at, opponent);
            let score = -self.negamax(state, depth - 1, opponent, at);
            state.undo_move(at);

            best = Some(best.map_or(score, |top| top.max(score)));
        }

        // no empty square left: drawn
        let score = best.unwrap_or(0);
        self.trace(depth, acting, last, score, "interior");
        score
    }

    fn trace(&self, depth: usize, acting: PlayerId, last: Coord, score: Score, kind: &str) {
        if self.config.trace {
            tracing::trace!(depth, player = %acting, last = %last, score, kind, "negamax node");
        }
    }
}

impl Agent for NegamaxAgent {
    fn choose_move(&mut self, state: &mut GameState) -> Result<Coord, AgentError> {
        let outcome = self.search(state);
        outcome.log(self.name());
        Ok(outcome.best)
    }

    fn name(&self) -> &str {
        "Negamax"
    }
}
