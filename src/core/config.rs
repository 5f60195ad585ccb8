use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use super::ship::ShipType;

pub const BOARD_SIZE: usize = 10;
/// Largest accepted board side.
pub const MAX_BOARD_SIZE: usize = 64;

/// The standard fleet as `(name, length)` pairs.
pub const STANDARD_FLEET: [(&str, usize); 5] = [
    ("Carrier", 5),
    ("Battleship", 4),
    ("Cruiser", 3),
    ("Submarine", 3),
    ("Destroyer", 2),
];

/// Reasons a [`GameConfig`] is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyBoard,
    BoardTooLarge { size: usize, max: usize },
    EmptyFleet,
    ZeroLength { name: String },
    ShipTooLong { name: String, length: usize, board_size: usize },
    DuplicateName { name: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyBoard => write!(f, "board size must be at least 1"),
            ConfigError::BoardTooLarge { size, max } => {
                write!(f, "board size {} exceeds the maximum of {}", size, max)
            }
            ConfigError::EmptyFleet => write!(f, "fleet must contain at least one ship"),
            ConfigError::ZeroLength { name } => write!(f, "ship '{}' has zero length", name),
            ConfigError::ShipTooLong {
                name,
                length,
                board_size,
            } => write!(
                f,
                "ship '{}' of length {} does not fit a {}x{} board",
                name, length, board_size, board_size
            ),
            ConfigError::DuplicateName { name } => {
                write!(f, "ship name '{}' is used more than once", name)
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// Board size and fleet shared by both sides of a match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    board_size: usize,
    fleet: Vec<ShipType>,
}

impl GameConfig {
    /// Validated constructor.
    pub fn new(board_size: usize, fleet: Vec<ShipType>) -> Result<Self, ConfigError> {
        let config = GameConfig { board_size, fleet };
        config.validate()?;
        Ok(config)
    }

    /// Checks the board is between 1 and [`MAX_BOARD_SIZE`] wide and every
    /// ship is unique, non-empty and fits the board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardTooLarge {
                size: self.board_size,
                max: MAX_BOARD_SIZE,
            });
        }
        if self.fleet.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        for (i, ship) in self.fleet.iter().enumerate() {
            if ship.length() == 0 {
                return Err(ConfigError::ZeroLength {
                    name: ship.name().into(),
                });
            }
            if ship.length() > self.board_size {
                return Err(ConfigError::ShipTooLong {
                    name: ship.name().into(),
                    length: ship.length(),
                    board_size: self.board_size,
                });
            }
            if self.fleet[..i].iter().any(|s| s.name() == ship.name()) {
                return Err(ConfigError::DuplicateName {
                    name: ship.name().into(),
                });
            }
        }
        Ok(())
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn fleet(&self) -> &[ShipType] {
        &self.fleet
    }

    /// Total number of ship segments in the fleet.
    pub fn total_ship_cells(&self) -> usize {
        self.fleet.iter().map(ShipType::length).sum()
    }

    /// Look up a fleet entry by name.
    pub fn ship_type(&self, name: &str) -> Option<&ShipType> {
        self.fleet.iter().find(|s| s.name() == name)
    }

    /// Parse and validate a JSON configuration such as
    /// `{"board_size": 8, "fleet": [{"name": "Sloop", "length": 2}]}`.
    #[cfg(feature = "std")]
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: BOARD_SIZE,
            fleet: STANDARD_FLEET
                .iter()
                .map(|&(name, length)| ShipType::new(name, length))
                .collect(),
        }
    }
}
