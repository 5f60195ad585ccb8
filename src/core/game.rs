use rand::Rng;

use super::{
    board::Board,
    common::{BoardError, GuessResult},
    config::GameConfig,
    grid::Coord,
    ship::Orientation,
};

/// One of the two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    /// The side being fired upon when `self` fires.
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::Human => 0,
            Side::Computer => 1,
        }
    }
}

/// Phase of a match. Boards never see this; the engine enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    Placement,
    InProgress,
    Finished { winner: Side },
}

/// Current status of a game from one side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// What happened on one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub side: Side,
    pub target: Coord,
    pub result: GuessResult,
    /// Set when this shot ended the match.
    pub winner: Option<Side>,
}

/// Core match logic holding both boards, the phase and whose turn it is.
pub struct GameEngine {
    config: GameConfig,
    boards: [Board; 2],
    phase: MatchPhase,
    turn: Side,
}

impl GameEngine {
    /// Create a new engine with two empty boards. The human fires first.
    pub fn new(config: GameConfig) -> Self {
        let boards = [Board::new(&config), Board::new(&config)];
        Self {
            config,
            boards,
            phase: MatchPhase::Placement,
            turn: Side::Human,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Side expected to fire next.
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Board belonging to `side`.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    /// Place one ship on `side`'s board during the placement phase.
    pub fn place_ship(
        &mut self,
        side: Side,
        name: &str,
        length: usize,
        anchor: Coord,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        self.require_placement()?;
        self.boards[side.index()].place_ship(name, length, anchor, orientation)?;
        self.update_phase();
        Ok(())
    }

    /// Randomly place whatever `side` has not placed yet.
    pub fn place_fleet_randomly<R: Rng + ?Sized>(
        &mut self,
        side: Side,
        rng: &mut R,
    ) -> Result<(), BoardError> {
        self.require_placement()?;
        self.boards[side.index()].place_remaining_randomly(rng)?;
        self.update_phase();
        Ok(())
    }

    /// Clear `side`'s board while still placing.
    pub fn reset_placement(&mut self, side: Side) -> Result<(), BoardError> {
        self.require_placement()?;
        self.boards[side.index()].reset_placement()
    }

    /// `side` fires at (row, col) on the opposing board.
    pub fn fire(&mut self, side: Side, row: usize, col: usize) -> Result<TurnReport, BoardError> {
        if self.phase != MatchPhase::InProgress || self.turn != side {
            return Err(BoardError::OutOfTurn);
        }
        let target = &mut self.boards[side.opponent().index()];
        let result = target.attack(row, col)?;

        let winner = if target.all_sunk() {
            log::info!("{:?} wins after {} shots", side, target.shots());
            self.phase = MatchPhase::Finished { winner: side };
            Some(side)
        } else {
            self.turn = side.opponent();
            None
        };
        Ok(TurnReport {
            side,
            target: (row, col),
            result,
            winner,
        })
    }

    /// Evaluate the current game status for `side`.
    pub fn status(&self, side: Side) -> GameStatus {
        match self.phase {
            MatchPhase::Finished { winner } if winner == side => GameStatus::Won,
            MatchPhase::Finished { .. } => GameStatus::Lost,
            _ => GameStatus::InProgress,
        }
    }

    /// Shots fired by `side` so far.
    pub fn shots_fired(&self, side: Side) -> usize {
        self.board(side.opponent()).shots()
    }

    fn require_placement(&self) -> Result<(), BoardError> {
        if self.phase == MatchPhase::Placement {
            Ok(())
        } else {
            Err(BoardError::OutOfTurn)
        }
    }

    fn update_phase(&mut self) {
        if self.phase == MatchPhase::Placement && self.boards.iter().all(Board::is_fully_placed) {
            log::info!("both fleets placed, battle begins");
            self.phase = MatchPhase::InProgress;
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        GameEngine::new(GameConfig::default())
    }
}
