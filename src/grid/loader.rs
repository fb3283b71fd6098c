//! Reads a grid from its textual map form.
//!
//! Each line of the map is one row; `R` is a red agent, `B` a blue agent, and
//! any other symbol (conventionally `E`) an empty cell.

use std::fs;
use std::path::Path;

use crate::core::error::Result;
use crate::grid::{CellState, Grid};

pub const RED_SYMBOL: char = 'R';
pub const BLUE_SYMBOL: char = 'B';
pub const EMPTY_SYMBOL: char = 'E';

pub fn cell_from_symbol(symbol: char) -> CellState {
    match symbol {
        RED_SYMBOL => CellState::Red,
        BLUE_SYMBOL => CellState::Blue,
        _ => CellState::Empty,
    }
}

/// Parse a map from text, preserving row order and per-line symbol order
pub fn parse(text: &str) -> Result<Grid> {
    let rows: Vec<Vec<CellState>> = text
        .lines()
        .map(|line| line.chars().map(cell_from_symbol).collect())
        .collect();
    Grid::from_rows(rows)
}

/// Load a map file from disk
pub fn load_from_path(path: &Path) -> Result<Grid> {
    let text = fs::read_to_string(path)?;
    let grid = parse(&text)?;
    tracing::info!(
        path = %path.display(),
        width = grid.width(),
        height = grid.height(),
        "loaded grid map"
    );
    Ok(grid)
}
