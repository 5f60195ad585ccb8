//! One side's board: fleet placement, attack resolution and the win check.

use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use super::common::{AttackError, BoardError, GuessResult, PlacementError};
use super::config::GameConfig;
use super::grid::{surrounding, Coord, Grid};
use super::ship::{ship_cells, Orientation, Ship, ShipType};

/// Random attempts before falling back to enumerating every legal placement.
const RANDOM_ATTEMPTS: usize = 100;
/// Full restarts allowed when random fleet placement paints itself into a corner.
const FLEET_RETRIES: usize = 32;

/// State of a cell as known to the board's owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    /// Occupied by a ship and not yet attacked.
    Ship,
    Hit,
    Miss,
}

/// State of a cell as an opponent may see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    Unknown,
    Hit,
    Miss,
}

/// Main board state: ship placements, hits, misses.
#[derive(Clone)]
pub struct Board {
    fleet: Vec<ShipType>,
    cells: Grid<Cell>,
    /// Index into `ships` for every occupied cell.
    owners: Grid<Option<usize>>,
    ships: Vec<Ship>,
    shots: usize,
}

impl Board {
    /// Create an empty board (no ships placed) for the configured fleet.
    pub fn new(config: &GameConfig) -> Self {
        let size = config.board_size();
        Board {
            fleet: config.fleet().to_vec(),
            cells: Grid::new(size, Cell::Empty),
            owners: Grid::new(size, None),
            ships: Vec::with_capacity(config.fleet().len()),
            shots: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.cells.size()
    }

    /// The fleet this board expects to hold.
    pub fn fleet(&self) -> &[ShipType] {
        &self.fleet
    }

    /// Ships placed so far, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, name: &str) -> Option<&Ship> {
        self.ships.iter().find(|s| s.name() == name)
    }

    /// Fleet entries not yet on the board, in fleet order.
    pub fn unplaced(&self) -> impl Iterator<Item = &ShipType> + '_ {
        self.fleet.iter().filter(|t| self.ship(t.name()).is_none())
    }

    pub fn is_fully_placed(&self) -> bool {
        self.ships.len() == self.fleet.len()
    }

    /// Number of attacks resolved against this board.
    pub fn shots(&self) -> usize {
        self.shots
    }

    /// Cells holding a ship segment, hit or not.
    pub fn occupied_cells(&self) -> usize {
        self.cells.count(|c| matches!(c, Cell::Ship | Cell::Hit))
    }

    /// Validates placing a ship of `length` at `anchor` without changing the
    /// board, returning the cells it would cover.
    pub fn check_placement(
        &self,
        length: usize,
        anchor: Coord,
        orientation: Orientation,
    ) -> Result<Vec<Coord>, PlacementError> {
        let size = self.size();
        let cells = ship_cells(size, anchor, length, orientation)
            .ok_or(PlacementError::OutOfBounds)?;
        if cells.iter().any(|&(r, c)| self.is_occupied((r, c))) {
            return Err(PlacementError::Overlaps);
        }
        let touches = cells
            .iter()
            .flat_map(|&cell| surrounding(size, cell))
            .any(|n| self.is_occupied(n));
        if touches {
            return Err(PlacementError::Adjacent);
        }
        Ok(cells)
    }

    /// Place the fleet ship `name` of `length` at `anchor`.
    pub fn place_ship(
        &mut self,
        name: &str,
        length: usize,
        anchor: Coord,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let result = self.try_place(name, length, anchor, orientation);
        if let Err(e) = &result {
            log::debug!("rejected {} at {:?} {:?}: {}", name, anchor, orientation, e);
        }
        result.map_err(BoardError::from)
    }

    fn try_place(
        &mut self,
        name: &str,
        length: usize,
        anchor: Coord,
        orientation: Orientation,
    ) -> Result<(), PlacementError> {
        if self.shots > 0 {
            return Err(PlacementError::BattleStarted);
        }
        let ship_type = self
            .fleet
            .iter()
            .find(|t| t.name() == name)
            .cloned()
            .ok_or(PlacementError::UnknownShip)?;
        if ship_type.length() != length {
            return Err(PlacementError::LengthMismatch {
                expected: ship_type.length(),
                found: length,
            });
        }
        if self.ship(name).is_some() {
            return Err(PlacementError::AlreadyPlaced);
        }
        let cells = self.check_placement(length, anchor, orientation)?;
        let ship = Ship::new(ship_type, orientation, anchor.0, anchor.1, self.size())?;

        let index = self.ships.len();
        for &(r, c) in &cells {
            self.mark(r, c, Cell::Ship);
            let _ = self.owners.set(r, c, Some(index));
        }
        log::debug!("placed {} at {:?} {:?}", name, anchor, orientation);
        self.ships.push(ship);
        Ok(())
    }

    /// Returns a random legal (anchor, orientation) for `ship_type`.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        ship_type: &ShipType,
    ) -> Result<(Coord, Orientation), BoardError> {
        let size = self.size();
        let len = ship_type.length();
        if len == 0 || len > size {
            return Err(BoardError::UnableToPlaceShip);
        }
        for _ in 0..RANDOM_ATTEMPTS {
            let orient = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_r, max_c) = match orient {
                Orientation::Horizontal => (size - 1, size - len),
                Orientation::Vertical => (size - len, size - 1),
            };
            let anchor = (rng.random_range(0..=max_r), rng.random_range(0..=max_c));
            if self.check_placement(len, anchor, orient).is_ok() {
                return Ok((anchor, orient));
            }
        }

        // Crowded board: pick uniformly among every legal placement.
        let legal: Vec<(Coord, Orientation)> = Orientation::ALL
            .iter()
            .flat_map(|&o| {
                (0..size).flat_map(move |r| (0..size).map(move |c| ((r, c), o)))
            })
            .filter(|&(anchor, o)| self.check_placement(len, anchor, o).is_ok())
            .collect();
        if legal.is_empty() {
            return Err(BoardError::UnableToPlaceShip);
        }
        Ok(legal[rng.random_range(0..legal.len())])
    }

    /// Randomly place every ship not yet on the board. On failure the board
    /// is left as it was.
    pub fn place_remaining_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        let snapshot = self.clone();
        for attempt in 0..FLEET_RETRIES {
            match self.try_place_remaining(rng) {
                Ok(()) => return Ok(()),
                Err(BoardError::UnableToPlaceShip) => {
                    log::debug!("random fleet placement dead end, attempt {}", attempt + 1);
                    *self = snapshot.clone();
                }
                Err(e) => {
                    *self = snapshot;
                    return Err(e);
                }
            }
        }
        *self = snapshot;
        Err(BoardError::UnableToPlaceShip)
    }

    fn try_place_remaining<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        let pending: Vec<ShipType> = self.unplaced().cloned().collect();
        for ship_type in pending {
            let (anchor, orient) = self.random_placement(rng, &ship_type)?;
            self.place_ship(ship_type.name(), ship_type.length(), anchor, orient)?;
        }
        Ok(())
    }

    /// Remove every ship. Only allowed before the first attack.
    pub fn reset_placement(&mut self) -> Result<(), BoardError> {
        if self.shots > 0 {
            return Err(PlacementError::BattleStarted.into());
        }
        self.cells.fill(Cell::Empty);
        self.owners.fill(None);
        self.ships.clear();
        Ok(())
    }

    /// Process an attack at (row, col), marking hits/misses and reporting result.
    pub fn attack(&mut self, row: usize, col: usize) -> Result<GuessResult, BoardError> {
        if !self.cells.in_bounds(row, col) {
            return Err(AttackError::OutOfBounds { row, col }.into());
        }
        if !self.is_fully_placed() {
            return Err(AttackError::FleetIncomplete.into());
        }
        match self.cells.get(row, col)? {
            Cell::Hit | Cell::Miss => Err(AttackError::AlreadyAttacked { row, col }.into()),
            Cell::Empty => {
                self.mark(row, col, Cell::Miss);
                self.shots += 1;
                Ok(GuessResult::Miss)
            }
            Cell::Ship => {
                // `owners` is written alongside every Ship cell.
                let index = self.owners.get(row, col)?.ok_or(BoardError::NameNotFound)?;
                self.mark(row, col, Cell::Hit);
                self.shots += 1;
                let ship = &mut self.ships[index];
                ship.register_hit(row, col);
                if ship.is_sunk() {
                    log::info!("{} sunk at ({}, {})", ship.name(), row, col);
                    Ok(GuessResult::Sink(ship.name().into()))
                } else {
                    Ok(GuessResult::Hit(ship.name().into()))
                }
            }
        }
    }

    /// Returns `true` once the whole fleet is placed and sunk.
    pub fn all_sunk(&self) -> bool {
        self.is_fully_placed() && self.ships.iter().all(Ship::is_sunk)
    }

    /// What an opponent may know about (row, col).
    pub fn view(&self, row: usize, col: usize) -> Result<CellView, BoardError> {
        Ok(match self.cells.get(row, col)? {
            Cell::Empty | Cell::Ship => CellView::Unknown,
            Cell::Hit => CellView::Hit,
            Cell::Miss => CellView::Miss,
        })
    }

    /// Read-only handle exposing only what an opponent may see.
    pub fn public_view(&self) -> BoardView<'_> {
        BoardView { board: self }
    }

    /// Full cell state, for rendering the owner's own board.
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        Ok(self.cells.get(row, col)?)
    }

    fn is_occupied(&self, (row, col): Coord) -> bool {
        matches!(self.cells.get(row, col), Ok(Cell::Ship | Cell::Hit))
    }

    fn mark(&mut self, row: usize, col: usize, cell: Cell) {
        // Callers have already bounds-checked.
        let _ = self.cells.set(row, col, cell);
    }
}

/// An opponent's window onto a [`Board`]: hits, misses and sunk ship names,
/// never positions of ships still afloat.
#[derive(Clone, Copy)]
pub struct BoardView<'a> {
    board: &'a Board,
}

impl<'a> BoardView<'a> {
    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<CellView, BoardError> {
        self.board.view(row, col)
    }

    /// `true` if (row, col) is on the board and has already been attacked.
    pub fn is_attacked(&self, row: usize, col: usize) -> bool {
        matches!(self.cell(row, col), Ok(CellView::Hit | CellView::Miss))
    }

    /// Fleet entries with whether each has been sunk, in fleet order.
    pub fn fleet_status(&self) -> impl Iterator<Item = (&'a ShipType, bool)> + 'a {
        let board = self.board;
        board
            .fleet
            .iter()
            .map(move |t| (t, board.ship(t.name()).is_some_and(Ship::is_sunk)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new(&GameConfig::default())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  cells: {:?},\n  shots: {},\n  ships: {:?}\n}}",
            self.cells, self.shots, self.ships
        )
    }
}
