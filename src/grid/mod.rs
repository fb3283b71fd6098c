//! Grid data model: cell states and the bounded rectangular world they occupy.
//!
//! Coordinates are (row, column) pairs, 0-indexed from the top-left corner.
//! Cells are stored in a single row-major buffer so generation snapshots are
//! one allocation, not one per row.

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SimError};

pub mod loader;
pub mod printer;

/// State of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    Red,
    Blue,
    Empty,
}

impl CellState {
    /// Returns true if the cell holds an agent
    pub fn is_occupied(&self) -> bool {
        !matches!(self, CellState::Empty)
    }
}

/// (row, column) position on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Von-Neumann neighborhood offsets: up, down, left, right.
const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Bounded rectangular grid of cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create an all-empty grid of the given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![CellState::Empty; width * height],
        }
    }

    /// Build a grid from rows, validating that the map is non-empty and
    /// rectangular. This is the boundary check: the simulation itself assumes
    /// a well-formed grid.
    pub fn from_rows(rows: Vec<Vec<CellState>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(SimError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(width * height);
        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != width {
                return Err(SimError::RaggedGrid {
                    row,
                    found: line.len(),
                    expected: width,
                });
            }
            cells.extend(line);
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, coord: Coord) -> usize {
        debug_assert!(coord.row < self.height && coord.col < self.width);
        coord.row * self.width + coord.col
    }

    pub fn get(&self, coord: Coord) -> CellState {
        self.cells[self.index(coord)]
    }

    pub fn set(&mut self, coord: Coord, state: CellState) {
        let idx = self.index(coord);
        self.cells[idx] = state;
    }

    /// Reset every cell to the given state
    pub fn fill(&mut self, state: CellState) {
        self.cells.fill(state);
    }

    /// All coordinates in row-major scan order
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Coord::new(row, col)))
    }

    /// In-bounds von-Neumann neighbors of a coordinate. Edge and corner cells
    /// yield fewer than four.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let row = coord.row as isize + dr;
            let col = coord.col as isize + dc;
            if row >= 0 && row < self.height as isize && col >= 0 && col < self.width as isize {
                Some(Coord::new(row as usize, col as usize))
            } else {
                None
            }
        })
    }

    /// Count cells matching a state
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }
}
