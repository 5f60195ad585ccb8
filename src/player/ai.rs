use crate::core::{Board, BoardView, Coord, GameConfig, GuessResult, TargetingEngine};
use rand::rngs::SmallRng;

use super::Player;

/// Computer player: random fleet, probability-map targeting.
pub struct AiPlayer {
    engine: TargetingEngine,
}

impl AiPlayer {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            engine: TargetingEngine::new(config),
        }
    }

    /// The targeting engine, e.g. to display its probability map.
    pub fn engine(&self) -> &TargetingEngine {
        &self.engine
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

impl Player for AiPlayer {
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> anyhow::Result<()> {
        board
            .place_remaining_randomly(rng)
            .map_err(|e| anyhow::anyhow!(e))
    }

    fn select_target(&mut self, _opponent: BoardView<'_>) -> anyhow::Result<Coord> {
        self.engine.get_next_target().map_err(|e| anyhow::anyhow!(e))
    }

    fn handle_guess_result(&mut self, coord: Coord, result: &GuessResult) -> anyhow::Result<()> {
        self.engine
            .update_game_state(coord.0, coord.1, result)
            .map_err(|e| anyhow::anyhow!(e))
    }
}
