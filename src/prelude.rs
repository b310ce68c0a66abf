//! Commonly used types and utilities for ease of import.

pub use crate::{
    Board, Game, GameError, GameStatus, GameSummary, MovementStrategy, NaiveMovement,
    NaiveTargeting, Reporter, SessionConfig, TargetingStrategy,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, load_board, ConsoleReporter};
