use crate::config::AppConfig;
use crate::error::AgentError;
use crate::game::{Coord, GameState, PlayerId};

use super::{AlphaBetaAgent, HumanAgent, NegamaxAgent};

/// Universal interface for anything that can occupy a seat.
pub trait Agent {
    /// Choose the next move. The state may be explored in place but must be
    /// handed back unchanged, and the returned coordinate must lie on the
    /// board.
    fn choose_move(&mut self, state: &mut GameState) -> Result<Coord, AgentError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// A seat: a display name and the agent deciding for it.
pub struct Player {
    name: String,
    agent: Box<dyn Agent>,
}

impl Player {
    pub fn new(name: impl Into<String>, agent: Box<dyn Agent>) -> Self {
        Player {
            name: name.into(),
            agent,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn choose_move(&mut self, state: &mut GameState) -> Result<Coord, AgentError> {
        self.agent.choose_move(state)
    }
}

/// Kinds of seat occupant selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum AgentKind {
    /// Plain negamax search
    #[value(name = "negamax", alias = "n")]
    Negamax,
    /// Negamax with alpha-beta pruning
    #[value(name = "negamax-ab", alias = "a")]
    AlphaBeta,
    /// Moves typed on the console
    #[value(name = "human", alias = "h")]
    Human,
}

impl AgentKind {
    /// Seat an agent of this kind playing as `id`
    pub fn build(self, id: PlayerId, config: &AppConfig) -> Player {
        match self {
            AgentKind::Negamax => Player::new(
                "(AI-negamax)",
                Box::new(NegamaxAgent::new(config.negamax, id)),
            ),
            AgentKind::AlphaBeta => Player::new(
                "(AI-negamax-AB)",
                Box::new(AlphaBetaAgent::new(config.alphabeta, id)),
            ),
            AgentKind::Human => Player::new("(Human)", Box::new(HumanAgent::stdio())),
        }
    }
}
