//! A square grid of cells stored row-major in a flat vector.
//!
//! The type is `no_std` friendly (it only needs `alloc`). Boards are an
//! `N×N` grid addressed by `(row, col)`; `N` is chosen at runtime so that
//! board sizes come from configuration rather than the type system.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

/// A `(row, col)` position on a board.
pub type Coord = (usize, usize);

/// Orthogonal steps in the fixed order north, east, south, west.
const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Errors returned by grid operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Row or column index is out of bounds [0..N).
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

impl core::error::Error for GridError {}

/// An `N×N` grid holding one `T` per cell.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Copy> Grid<T> {
    /// Create a grid with every cell set to `fill`.
    pub fn new(size: usize, fill: T) -> Self {
        Grid {
            size,
            cells: vec![fill; size * size],
        }
    }

    /// Side length of the grid.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if (row, col) lies on the grid.
    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Gets the cell at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<T, GridError> {
        self.check_bounds(row, col)?;
        Ok(self.cells[row * self.size + col])
    }

    /// Sets the cell at (row, col).
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), GridError> {
        self.check_bounds(row, col)?;
        self.cells[row * self.size + col] = value;
        Ok(())
    }

    /// Mutable access to the cell at (row, col).
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T, GridError> {
        self.check_bounds(row, col)?;
        Ok(&mut self.cells[row * self.size + col])
    }

    /// Sets every cell to `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.iter_mut().for_each(|c| *c = value);
    }

    /// Number of cells matching `pred`.
    pub fn count<F: Fn(&T) -> bool>(&self, pred: F) -> usize {
        self.cells.iter().filter(|c| pred(c)).count()
    }

    /// Iterator over `((row, col), value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, T)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &v)| ((idx / size, idx % size), v))
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<(), GridError> {
        if self.in_bounds(row, col) {
            Ok(())
        } else {
            Err(GridError::IndexOutOfBounds { row, col })
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{}x{}>:", self.size, self.size)?;
        for row in self.cells.chunks(self.size.max(1)) {
            writeln!(f, "{:?}", row)?;
        }
        Ok(())
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(self.size.max(1)).enumerate() {
            for v in row {
                write!(f, "{:>4}", v)?;
            }
            if r + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Offsets `coord` by `(dr, dc)`, staying on a `size×size` board.
#[inline]
pub fn offset(size: usize, coord: Coord, dr: isize, dc: isize) -> Option<Coord> {
    let r = coord.0.checked_add_signed(dr)?;
    let c = coord.1.checked_add_signed(dc)?;
    (r < size && c < size).then_some((r, c))
}

/// Orthogonal neighbours of `coord` in north, east, south, west order.
pub fn orthogonal_neighbors(size: usize, coord: Coord) -> impl Iterator<Item = Coord> {
    ORTHOGONAL
        .into_iter()
        .filter_map(move |(dr, dc)| offset(size, coord, dr, dc))
}

/// The 3×3 block centred on `coord` (the cell itself included), clipped to
/// the board, in row-major order.
pub fn surrounding(size: usize, coord: Coord) -> impl Iterator<Item = Coord> {
    (-1isize..=1).flat_map(move |dr| {
        (-1isize..=1).filter_map(move |dc| offset(size, coord, dr, dc))
    })
}
