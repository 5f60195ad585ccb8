//! Core battleship game engine (no_std compatible)
//!
//! This module contains the rules and the targeting engine with no
//! dependencies beyond `alloc`, `rand` and the `log` facade. It can be used
//! in embedded systems or compiled to WebAssembly.

pub mod ai;
pub mod board;
pub mod common;
pub mod config;
pub mod game;
pub mod grid;
pub mod ship;

// Re-export commonly used types
pub use ai::{calc_density, normalize, Mode, TargetingEngine};
pub use board::{Board, BoardView, Cell, CellView};
pub use common::{AttackError, BoardError, GuessResult, PlacementError};
pub use config::*;
pub use game::{GameEngine, GameStatus, MatchPhase, Side, TurnReport};
pub use grid::{orthogonal_neighbors, surrounding, Coord, Grid, GridError};
pub use ship::{ship_cells, Orientation, Ship, ShipType};
