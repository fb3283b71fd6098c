//! Neighborhood happiness evaluation and mobility classification.
//!
//! A neighbor is acceptable when it is empty or matches the cell's own state.
//! Only the four axis-aligned neighbors count; out-of-bounds positions are
//! excluded from both sides of the ratio.

use crate::grid::{CellState, Coord, Grid};

/// Percentage of acceptable neighbors, in [0, 100].
///
/// A cell with no in-bounds neighbors (a 1x1 grid) is defined to be 100%
/// happy: with nobody nearby there is nobody to be unhappy about.
///
/// Empty cells are evaluable too; the comparison uses the cell's own state,
/// so for an empty cell only empty neighbors count as acceptable. Callers
/// never classify empty cells by this number (see [`jumpable_coordinates`]).
pub fn calculate_happiness(grid: &Grid, coord: Coord) -> f64 {
    let own = grid.get(coord);
    let mut neighbors = 0u32;
    let mut acceptable = 0u32;

    for n in grid.neighbors(coord) {
        neighbors += 1;
        let state = grid.get(n);
        if state == own || state == CellState::Empty {
            acceptable += 1;
        }
    }

    if neighbors == 0 {
        return 100.0;
    }
    f64::from(acceptable) / f64::from(neighbors) * 100.0
}

pub fn is_happy(grid: &Grid, coord: Coord, threshold: u8) -> bool {
    calculate_happiness(grid, coord) >= f64::from(threshold)
}

/// Number of occupied cells that fail the happiness threshold. This is the
/// convergence predicate; empty cells never count.
pub fn unhappy_count(grid: &Grid, threshold: u8) -> usize {
    grid.coords()
        .filter(|&c| grid.get(c).is_occupied() && !is_happy(grid, c, threshold))
        .count()
}

/// Every coordinate that can change occupant this generation, in row-major
/// order: unhappy occupied cells plus all empty cells. Empty cells are always
/// jumpable slots regardless of their computed happiness.
pub fn jumpable_coordinates(grid: &Grid, threshold: u8) -> Vec<Coord> {
    grid.coords()
        .filter(|&c| {
            let cell = grid.get(c);
            !cell.is_occupied() || !is_happy(grid, c, threshold)
        })
        .collect()
}
