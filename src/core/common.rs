//! Common types for Battleship: board errors and guess results.

use alloc::string::String;
use core::fmt;

use super::grid::GridError;

/// Result of a guess attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessResult {
    /// Guess missed all ships.
    Miss,
    /// Guess hit a ship that is still afloat, carrying its name.
    Hit(String),
    /// Guess sank a ship, carrying its name.
    Sink(String),
}

impl GuessResult {
    /// `true` for both hits and sinks.
    pub fn is_hit(&self) -> bool {
        !matches!(self, GuessResult::Miss)
    }

    /// `true` if the guess finished off a ship.
    pub fn is_sunk(&self) -> bool {
        matches!(self, GuessResult::Sink(_))
    }

    /// Name of the ship that was struck, if any.
    pub fn ship(&self) -> Option<&str> {
        match self {
            GuessResult::Miss => None,
            GuessResult::Hit(name) | GuessResult::Sink(name) => Some(name),
        }
    }
}

/// Why a ship could not be placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Part of the ship would fall off the board.
    OutOfBounds,
    /// Ship placement overlaps another ship.
    Overlaps,
    /// Ship would touch another ship, diagonals included.
    Adjacent,
    /// Named ship is not part of the configured fleet.
    UnknownShip,
    /// Length does not match the configured ship of that name.
    LengthMismatch { expected: usize, found: usize },
    /// Attempted to place a ship that is already placed.
    AlreadyPlaced,
    /// The board has already been fired upon.
    BattleStarted,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "ship placement is out of bounds"),
            PlacementError::Overlaps => write!(f, "ship placement overlaps with another ship"),
            PlacementError::Adjacent => write!(f, "ship placement touches another ship"),
            PlacementError::UnknownShip => write!(f, "ship is not part of the fleet"),
            PlacementError::LengthMismatch { expected, found } => {
                write!(f, "ship length {} does not match fleet length {}", found, expected)
            }
            PlacementError::AlreadyPlaced => write!(f, "ship is already placed on the board"),
            PlacementError::BattleStarted => write!(f, "board has already been fired upon"),
        }
    }
}

/// Why an attack was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttackError {
    /// Target lies outside the board.
    OutOfBounds { row: usize, col: usize },
    /// Guess was already made at this position.
    AlreadyAttacked { row: usize, col: usize },
    /// Not every ship of the fleet has been placed yet.
    FleetIncomplete,
}

impl fmt::Display for AttackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttackError::OutOfBounds { row, col } => {
                write!(f, "target ({}, {}) is out of bounds", row, col)
            }
            AttackError::AlreadyAttacked { row, col } => {
                write!(f, "target ({}, {}) was already attacked", row, col)
            }
            AttackError::FleetIncomplete => write!(f, "fleet is not fully placed"),
        }
    }
}

/// Errors returned by Board, TargetingEngine and GameEngine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying grid error (e.g., invalid size or index).
    Grid(GridError),
    /// Placement rejected; the board is unchanged.
    InvalidPlacement(PlacementError),
    /// Attack rejected; the board is unchanged.
    InvalidAttack(AttackError),
    /// Every cell has been attacked, so there is nothing left to target.
    ExhaustedTargets,
    /// Named ship not found among the ships still afloat.
    NameNotFound,
    /// Unable to place ship (random placement failed).
    UnableToPlaceShip,
    /// Move made out of turn or outside the battle phase.
    OutOfTurn,
}

impl From<GridError> for BoardError {
    fn from(err: GridError) -> Self {
        BoardError::Grid(err)
    }
}

impl From<PlacementError> for BoardError {
    fn from(err: PlacementError) -> Self {
        BoardError::InvalidPlacement(err)
    }
}

impl From<AttackError> for BoardError {
    fn from(err: AttackError) -> Self {
        BoardError::InvalidAttack(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::Grid(e) => write!(f, "Grid error: {}", e),
            BoardError::InvalidPlacement(e) => write!(f, "Invalid placement: {}", e),
            BoardError::InvalidAttack(e) => write!(f, "Invalid attack: {}", e),
            BoardError::ExhaustedTargets => write!(f, "No untargeted cells remain"),
            BoardError::NameNotFound => write!(f, "Ship name not found among ships afloat"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
            BoardError::OutOfTurn => write!(f, "Move made out of turn"),
        }
    }
}

impl core::error::Error for BoardError {}
