//! Seat occupants: the agent trait, both negamax searches and the console
//! player.

mod agent;
mod alphabeta;
mod human;
mod negamax;
mod search;

pub use agent::{Agent, AgentKind, Player};
pub use alphabeta::AlphaBetaAgent;
pub use human::{HumanAgent, LineSource};
pub use negamax::NegamaxAgent;
pub use search::{Score, SearchConfig, SearchOutcome, Verdict, MAX_DEPTH, WIN_SCORE};
