//! Ship definitions and placement geometry.

use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use super::common::PlacementError;
use super::grid::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends towards increasing column.
    Horizontal,
    /// Extends towards increasing row.
    Vertical,
}

impl Orientation {
    /// Both orientations, horizontal first.
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

    /// The other orientation.
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Cell `i` steps from `anchor` along this orientation.
    #[inline]
    pub fn step(self, anchor: Coord, i: usize) -> Coord {
        match self {
            Orientation::Horizontal => (anchor.0, anchor.1 + i),
            Orientation::Vertical => (anchor.0 + i, anchor.1),
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipType {
    name: String,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub fn new(name: impl Into<String>, length: usize) -> Self {
        Self {
            name: name.into(),
            length,
        }
    }

    /// Ship's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// The contiguous run of `length` cells from `anchor` along `orientation`,
/// or `None` if any of it falls off a `size×size` board.
pub fn ship_cells(
    size: usize,
    anchor: Coord,
    length: usize,
    orientation: Orientation,
) -> Option<Vec<Coord>> {
    if length == 0 {
        return None;
    }
    let (row, col) = orientation.step(anchor, length - 1);
    if anchor.0 >= size || anchor.1 >= size || row >= size || col >= size {
        return None;
    }
    Some((0..length).map(|i| orientation.step(anchor, i)).collect())
}

/// A ship placed on a board, with the cells struck so far.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    orientation: Orientation,
    origin: Coord,
    positions: Vec<Coord>,
    hits: BTreeSet<Coord>,
}

impl Ship {
    /// Place a ship at (`row`, `col`) with `orientation` on a `size×size`
    /// board. Only the board edges are checked here; other ships are the
    /// board's concern.
    pub fn new(
        ship_type: ShipType,
        orientation: Orientation,
        row: usize,
        col: usize,
        size: usize,
    ) -> Result<Self, PlacementError> {
        let positions = ship_cells(size, (row, col), ship_type.length(), orientation)
            .ok_or(PlacementError::OutOfBounds)?;
        Ok(Ship {
            ship_type,
            orientation,
            origin: (row, col),
            positions,
            hits: BTreeSet::new(),
        })
    }

    /// Register a hit at (`row`, `col`).
    /// Returns `true` if the cell belongs to this ship.
    pub fn register_hit(&mut self, row: usize, col: usize) -> bool {
        if self.contains(row, col) {
            self.hits.insert((row, col));
            true
        } else {
            false
        }
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hits.len() == self.positions.len()
    }

    /// Returns `true` if the ship occupies (`row`, `col`).
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.positions.contains(&(row, col))
    }

    /// Ship's type.
    pub fn ship_type(&self) -> &ShipType {
        &self.ship_type
    }

    pub fn name(&self) -> &str {
        self.ship_type.name()
    }

    pub fn length(&self) -> usize {
        self.ship_type.length()
    }

    /// Origin of the ship (row, col).
    pub fn origin(&self) -> Coord {
        self.origin
    }

    /// Orientation of the ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupied cells, from the origin outwards.
    pub fn positions(&self) -> &[Coord] {
        &self.positions
    }

    /// Cells struck so far.
    pub fn hits(&self) -> &BTreeSet<Coord> {
        &self.hits
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", origin: ({}, {}), orientation: {:?}, hits: {}/{} }}",
            self.name(),
            self.origin.0,
            self.origin.1,
            self.orientation,
            self.hits.len(),
            self.length(),
        )
    }
}
