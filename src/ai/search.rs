use crate::game::Coord;

/// Search score, from the point of view of the player it is returned to.
pub type Score = i32;

/// Magnitude of a win. Also the initial alpha/beta bound.
pub const WIN_SCORE: Score = 1000;

/// Deepest search allowed. Past this a win found at the horizon would score
/// as good for the side that has to answer it.
pub const MAX_DEPTH: usize = WIN_SCORE as usize - 1;

/// Scores beyond this mean a forced result was found within the horizon.
const VERDICT_THRESHOLD: Score = 950;

/// Score of a position whose last move won, seen by the player who now has to
/// answer it.
pub(crate) fn loss_at(depth: usize) -> Score {
    debug_assert!(depth <= MAX_DEPTH);
    -WIN_SCORE + depth as Score
}

/// Parameters shared by both negamax agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies explored, the agent's own move included
    pub depth: usize,
    /// Emit a `trace` event for every explored node
    pub trace: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: 3,
            trace: false,
        }
    }
}

/// What a search settled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub best: Coord,
    pub score: Score,
    /// Nodes visited, root moves included
    pub nodes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The searching player can force a win
    ForcedWin,
    /// The opponent can force a win whatever we play
    ForcedLoss,
}

impl SearchConfig {
    /// Panics unless `depth` is in `[1, MAX_DEPTH]`.
    pub(crate) fn checked(self) -> Self {
        assert!(
            (1..=MAX_DEPTH).contains(&self.depth),
            "search depth {} outside [1, {MAX_DEPTH}]",
            self.depth
        );
        self
    }
}

impl SearchOutcome {
    pub fn verdict(&self) -> Option<Verdict> {
        if self.score > VERDICT_THRESHOLD {
            Some(Verdict::ForcedWin)
        } else if self.score < -VERDICT_THRESHOLD {
            Some(Verdict::ForcedLoss)
        } else {
            None
        }
    }

    pub(crate) fn log(&self, agent: &str) {
        tracing::info!(agent, best = %self.best, score = self.score, "search picked a move");
        tracing::debug!(agent, nodes = self.nodes, "search finished");
        match self.verdict() {
            Some(Verdict::ForcedWin) => tracing::info!(agent, "forced win found"),
            Some(Verdict::ForcedLoss) => tracing::info!(agent, "opponent has a forced win"),
            None => {}
        }
    }
}
