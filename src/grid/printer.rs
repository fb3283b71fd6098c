//! Renders a grid back to the textual map alphabet, one line per row.

use crate::grid::loader::{BLUE_SYMBOL, EMPTY_SYMBOL, RED_SYMBOL};
use crate::grid::{CellState, Coord, Grid};

pub fn symbol_for_cell(cell: CellState) -> char {
    match cell {
        CellState::Red => RED_SYMBOL,
        CellState::Blue => BLUE_SYMBOL,
        CellState::Empty => EMPTY_SYMBOL,
    }
}

pub fn render(grid: &Grid) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            out.push(symbol_for_cell(grid.get(Coord::new(row, col))));
        }
        out.push('\n');
    }
    out
}
