use crate::error::AgentError;
use crate::game::{Coord, GameState, PlayerId};

use super::agent::Agent;
use super::search::{loss_at, Score, SearchConfig, SearchOutcome, WIN_SCORE};

/// Negamax with alpha-beta pruning.
///
/// Picks the same move, with the same score, as [`NegamaxAgent`] at equal
/// depth; it only skips siblings that cannot change the result.
///
/// [`NegamaxAgent`]: super::NegamaxAgent
pub struct AlphaBetaAgent {
    config: SearchConfig,
    player: PlayerId,
    nodes: u64,
}

impl AlphaBetaAgent {
    /// Panics if `config.depth` is 0 or above [`MAX_DEPTH`].
    ///
    /// [`MAX_DEPTH`]: super::MAX_DEPTH
    pub fn new(config: SearchConfig, player: PlayerId) -> Self {
        AlphaBetaAgent {
            config: config.checked(),
            player,
            nodes: 0,
        }
    }

    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// Panics if the board has no empty square.
    pub fn search(&mut self, state: &mut GameState) -> SearchOutcome {
        self.nodes = 0;
        let child_depth = self.config.depth.saturating_sub(1);
        let mut alpha = -WIN_SCORE;
        let beta = WIN_SCORE;
        let mut best: Option<(Coord, Score)> = None;

        let mut cursor = state.move_cursor();
        while let Some(at) = cursor.next_move(state) {
            state.apply_move(at, self.player);
            let score = -self.negamax(state, child_depth, self.player, at, -beta, -alpha);
            state.undo_move(at);

            if best.map_or(true, |(_, top)| score > top) {
                best = Some((at, score));
            }
            if score > alpha {
                alpha = score;
            }
            if alpha >= beta {
                break;
            }
        }

        let (best, score) = best.expect("search needs at least one empty square");
        SearchOutcome {
            best,
            score,
            nodes: self.nodes,
        }
    }

    fn negamax(
        &mut self,
        state: &mut GameState,
        depth: usize,
        acting: PlayerId,
        last: Coord,
        mut alpha: Score,
        beta: Score,
    ) -> Score {
        self.nodes += 1;

        if state.is_winning_move_for(last, acting) {
            let score = loss_at(depth);
            self.trace(depth, acting, last, score, alpha, beta);
            return score;
        }
        if depth == 0 {
            self.trace(depth, acting, last, 0, alpha, beta);
            return 0;
        }

        let opponent = acting.other();
        let mut best: Option<Score> = None;

        let mut cursor = state.move_cursor();
        while let Some(at) = cursor.next_move(state) {
            state.apply_move(at, opponent);
            let score = -self.negamax(state, depth - 1, opponent, at, -beta, -alpha);
            state.undo_move(at);

            best = Some(best.map_or(score, |top| top.max(score)));
            if score > alpha {
                alpha = score;
            }
            if alpha >= beta {
                break;
            }
        }

        let score = best.unwrap_or(0);
        self.trace(depth, acting, last, score, alpha, beta);
        score
    }

    fn trace(
        &self,
        depth: usize,
        acting: PlayerId,
        last: Coord,
        score: Score,
        alpha: Score,
        beta: Score,
    ) {
        if self.config.trace {
            tracing::trace!(
                depth,
                player = %acting,
                last = %last,
                score,
                alpha,
                beta,
                "alpha-beta node"
            );
        }
    }
}

impl Agent for AlphaBetaAgent {
    fn choose_move(&mut self, state: &mut GameState) -> Result<Coord, AgentError> {
        let outcome = self.search(state);
        outcome.log(self.name());
        Ok(outcome.best)
    }

    fn name(&self) -> &str {
        "Negamax-AB"
    }
}
