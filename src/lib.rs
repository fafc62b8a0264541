//! # Tic-Tac-Toe Negamax
//!
//! A k-in-a-row board game engine for any rectangular board. Seats can be
//! taken by a console player or by one of two negamax searches, plain or with
//! alpha-beta pruning.
//!
//! ## Modules
//!
//! - [`game`] — Board, win detection, player identity, game state, snapshots
//! - [`ai`] — Agent trait, seats, negamax and alpha-beta search, console player
//! - [`runner`] — Turn loop
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod runner;
