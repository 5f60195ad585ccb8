//! Commonly used types and utilities for ease of import.

pub use crate::{
    AiPlayer, Board, BoardError, GameConfig, GameEngine, GameStatus, GuessResult, Orientation,
    Player, Session, Side, TargetingEngine,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, CliPlayer};
