// Probability-based targeting with a hunt/target state machine.
// Works in no_std; allocations are limited to the belief state.

use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::OnceCell;

use super::common::{AttackError, BoardError, GuessResult};
use super::config::GameConfig;
use super::grid::{orthogonal_neighbors, surrounding, Coord, Grid};
use super::ship::{Orientation, ShipType};

/// Targeting strategy currently in force.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Sweep the board using the probability map.
    Hunt,
    /// Finish off a ship that has been hit but not sunk.
    Target,
}

/// Hits recorded against one ship that is still afloat, oldest first.
#[derive(Debug, Clone)]
struct Pursuit {
    ship: String,
    hits: Vec<Coord>,
}

/// Count, for every cell of a `size×size` board, how many placements of
/// the given ship lengths cover it without touching a blocked cell.
///
/// Each legal horizontal or vertical placement adds one to every cell it
/// covers, so cells where more of the surviving fleet could still fit
/// score higher.
pub fn calc_density<I, F>(size: usize, lengths: I, blocked: F) -> Grid<u32>
where
    I: IntoIterator<Item = usize>,
    F: Fn(Coord) -> bool,
{
    let mut density = Grid::new(size, 0u32);
    for len in lengths {
        if len == 0 || len > size {
            continue;
        }
        for orient in Orientation::ALL {
            let (rows, cols) = match orient {
                Orientation::Horizontal => (size, size - len + 1),
                Orientation::Vertical => (size - len + 1, size),
            };
            for r in 0..rows {
                for c in 0..cols {
                    if (0..len).any(|k| blocked(orient.step((r, c), k))) {
                        continue;
                    }
                    for k in 0..len {
                        let (rr, cc) = orient.step((r, c), k);
                        if let Ok(w) = density.get_mut(rr, cc) {
                            *w += 1;
                        }
                    }
                }
            }
        }
    }
    density
}

/// Scale `density` over the cells not in `attacked` to fractions summing to
/// one; attacked cells get zero. With no weight left, every open cell gets
/// an equal share.
pub fn normalize(density: &Grid<u32>, attacked: impl Fn(Coord) -> bool) -> Grid<f64> {
    let size = density.size();
    let mut out = Grid::new(size, 0.0f64);
    let open: Vec<(Coord, u32)> = density.iter().filter(|&(c, _)| !attacked(c)).collect();
    if open.is_empty() {
        return out;
    }
    let total: u64 = open.iter().map(|&(_, w)| u64::from(w)).sum();
    if total == 0 {
        let uniform = 1.0 / open.len() as f64;
        for ((r, c), _) in open {
            let _ = out.set(r, c, uniform);
        }
        return out;
    }
    for ((r, c), w) in open {
        let _ = out.set(r, c, f64::from(w) / total as f64);
    }
    out
}

/// The computer's belief about an opponent board it cannot see.
///
/// Knowledge comes only from outcomes passed to [`update_game_state`].
/// Selection is deterministic: ties on the probability map go to the
/// first cell in row-major order, and target candidates are tried in a
/// fixed order.
///
/// [`update_game_state`]: TargetingEngine::update_game_state
#[derive(Debug, Clone)]
pub struct TargetingEngine {
    size: usize,
    remaining: Vec<ShipType>,
    known_hits: BTreeSet<Coord>,
    known_misses: BTreeSet<Coord>,
    /// Cells of ships already sunk.
    sunk_cells: BTreeSet<Coord>,
    /// Most recently hit ship last.
    pursuits: Vec<Pursuit>,
    /// Next candidate at the end.
    target_stack: Vec<Coord>,
    mode: Mode,
    density: OnceCell<Grid<u32>>,
}

impl TargetingEngine {
    pub fn new(config: &GameConfig) -> Self {
        TargetingEngine {
            size: config.board_size(),
            remaining: config.fleet().to_vec(),
            known_hits: BTreeSet::new(),
            known_misses: BTreeSet::new(),
            sunk_cells: BTreeSet::new(),
            pursuits: Vec::new(),
            target_stack: Vec::new(),
            mode: Mode::Hunt,
            density: OnceCell::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn known_hits(&self) -> &BTreeSet<Coord> {
        &self.known_hits
    }

    pub fn known_misses(&self) -> &BTreeSet<Coord> {
        &self.known_misses
    }

    /// Ships not yet reported sunk.
    pub fn remaining_ships(&self) -> &[ShipType] {
        &self.remaining
    }

    /// Pending target candidates; the next one is last.
    pub fn target_stack(&self) -> &[Coord] {
        &self.target_stack
    }

    pub fn is_attacked(&self, coord: Coord) -> bool {
        self.known_hits.contains(&coord) || self.known_misses.contains(&coord)
    }

    /// Placement weight per cell given everything recorded so far.
    pub fn probability_map(&self) -> &Grid<u32> {
        self.density.get_or_init(|| {
            let blocked = self.blocked_cells();
            calc_density(
                self.size,
                self.remaining.iter().map(ShipType::length),
                |(r, c)| blocked.get(r, c).unwrap_or(true),
            )
        })
    }

    /// The probability map scaled to fractions, for display.
    pub fn normalized_probability_map(&self) -> Grid<f64> {
        normalize(self.probability_map(), |c| self.is_attacked(c))
    }

    /// Choose the next cell to attack without changing any state.
    pub fn get_next_target(&self) -> Result<Coord, BoardError> {
        match self.target_stack.last() {
            Some(&coord) => Ok(coord),
            None => self.hunt_target(),
        }
    }

    /// Highest-weight unattacked cell, first in row-major order on ties.
    fn hunt_target(&self) -> Result<Coord, BoardError> {
        let mut best: Option<(Coord, u32)> = None;
        for (coord, weight) in self.probability_map().iter() {
            if self.is_attacked(coord) {
                continue;
            }
            if best.map_or(true, |(_, w)| weight > w) {
                best = Some((coord, weight));
            }
        }
        best.map(|(coord, _)| coord).ok_or(BoardError::ExhaustedTargets)
    }

    /// Record the outcome of an attack at (row, col) and move the state
    /// machine. Rejected outcomes leave the engine unchanged.
    pub fn update_game_state(
        &mut self,
        row: usize,
        col: usize,
        outcome: &GuessResult,
    ) -> Result<(), BoardError> {
        if row >= self.size || col >= self.size {
            return Err(AttackError::OutOfBounds { row, col }.into());
        }
        if self.is_attacked((row, col)) {
            return Err(AttackError::AlreadyAttacked { row, col }.into());
        }
        if let Some(name) = outcome.ship() {
            if !self.remaining.iter().any(|t| t.name() == name) {
                return Err(BoardError::NameNotFound);
            }
        }

        let before = self.mode;
        match outcome {
            GuessResult::Miss => {
                self.known_misses.insert((row, col));
            }
            GuessResult::Hit(name) => {
                self.known_hits.insert((row, col));
                let mut pursuit = match self.pursuits.iter().position(|p| p.ship == *name) {
                    Some(idx) => self.pursuits.remove(idx),
                    None => Pursuit {
                        ship: name.clone(),
                        hits: Vec::new(),
                    },
                };
                pursuit.hits.push((row, col));
                self.pursuits.push(pursuit);
            }
            GuessResult::Sink(name) => {
                self.known_hits.insert((row, col));
                if let Some(idx) = self.pursuits.iter().position(|p| p.ship == *name) {
                    let pursuit = self.pursuits.remove(idx);
                    self.sunk_cells.extend(pursuit.hits);
                }
                self.sunk_cells.insert((row, col));
                if let Some(idx) = self.remaining.iter().position(|t| t.name() == name.as_str()) {
                    self.remaining.remove(idx);
                }
                log::debug!("{} confirmed sunk, {} ships left", name, self.remaining.len());
            }
        }

        self.density = OnceCell::new();
        self.refresh_targets();
        if before != self.mode {
            log::debug!("targeting mode {:?} -> {:?}", before, self.mode);
        }
        Ok(())
    }

    /// Rebuild the target stack from the most recent pursuit that still has
    /// somewhere to go.
    fn refresh_targets(&mut self) {
        let next = self
            .pursuits
            .iter()
            .rev()
            .map(|p| self.candidates_for(p))
            .find(|c| !c.is_empty())
            .unwrap_or_default();
        self.target_stack = next.into_iter().rev().collect();
        self.mode = if self.target_stack.is_empty() {
            Mode::Hunt
        } else {
            Mode::Target
        };
    }

    /// Candidate cells for one pursuit, best first.
    fn candidates_for(&self, pursuit: &Pursuit) -> Vec<Coord> {
        let open = |c: &Coord| !self.is_attacked(*c) && !self.touches_sunk(*c);

        if pursuit.hits.len() >= 2 {
            let along_line: Vec<Coord> = line_extension(self.size, &pursuit.hits)
                .into_iter()
                .filter(open)
                .collect();
            if !along_line.is_empty() {
                return along_line;
            }
        }

        let mut out: Vec<Coord> = Vec::new();
        for &hit in pursuit.hits.iter().rev() {
            for n in orthogonal_neighbors(self.size, hit) {
                if open(&n) && !out.contains(&n) {
                    out.push(n);
                }
            }
        }
        out
    }

    fn touches_sunk(&self, coord: Coord) -> bool {
        surrounding(self.size, coord).any(|n| self.sunk_cells.contains(&n))
    }

    /// Misses, sunk ships and the water around sunk ships: no surviving ship
    /// can cover any of these.
    fn blocked_cells(&self) -> Grid<bool> {
        let mut blocked = Grid::new(self.size, false);
        for &(r, c) in &self.known_misses {
            let _ = blocked.set(r, c, true);
        }
        for &cell in &self.sunk_cells {
            for (r, c) in surrounding(self.size, cell) {
                let _ = blocked.set(r, c, true);
            }
        }
        blocked
    }
}

impl Default for TargetingEngine {
    fn default() -> Self {
        TargetingEngine::new(&GameConfig::default())
    }
}

/// Cells that continue a straight run of `hits`: gaps inside the run next
/// to a hit, then the low end, then the high end. Empty if the hits are not
/// in line.
fn line_extension(size: usize, hits: &[Coord]) -> Vec<Coord> {
    let Some(&(r0, c0)) = hits.first() else {
        return Vec::new();
    };
    let (horizontal, lo, hi) = if hits.iter().all(|h| h.0 == r0) {
        let cols = hits.iter().map(|h| h.1);
        (true, cols.clone().min().unwrap_or(c0), cols.max().unwrap_or(c0))
    } else if hits.iter().all(|h| h.1 == c0) {
        let rows = hits.iter().map(|h| h.0);
        (false, rows.clone().min().unwrap_or(r0), rows.max().unwrap_or(r0))
    } else {
        return Vec::new();
    };
    let at = |i: usize| if horizontal { (r0, i) } else { (i, c0) };

    let mut out: Vec<Coord> = (lo + 1..hi)
        .filter(|&i| !hits.contains(&at(i)))
        .filter(|&i| hits.contains(&at(i - 1)) || hits.contains(&at(i + 1)))
        .map(at)
        .collect();
    if lo > 0 {
        out.push(at(lo - 1));
    }
    if hi + 1 < size {
        out.push(at(hi + 1));
    }
    out
}
