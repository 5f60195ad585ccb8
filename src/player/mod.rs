//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - AiPlayer: Probability-based AI using hunt/target mode
//! - CliPlayer: Interactive command-line player

use crate::core::{Board, BoardView, Coord, GuessResult};
use rand::rngs::SmallRng;

/// Interface implemented by different player types.
///
/// A Player is responsible for:
/// - Placing ships on the board
/// - Selecting targets to attack
/// - Handling feedback from guesses
pub trait Player {
    /// Place all ships onto the provided board.
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> anyhow::Result<()>;

    /// Choose the next target on the opponent's board.
    fn select_target(&mut self, opponent: BoardView<'_>) -> anyhow::Result<Coord>;

    /// Inform the player of the result of its last guess.
    fn handle_guess_result(&mut self, _coord: Coord, _result: &GuessResult) -> anyhow::Result<()> {
        Ok(())
    }

    /// Inform the player of an opponent guess against its board.
    fn handle_opponent_guess(&mut self, _coord: Coord, _result: &GuessResult) {}
}

pub mod ai;
pub use ai::AiPlayer;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::CliPlayer;
