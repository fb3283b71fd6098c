//! Plain-text portable pixmap (P3) emitter for final grid snapshots.
//!
//! One RGB triplet per cell, row-major: red agents are pure red, blue agents
//! pure blue, empty cells white.

use std::fs;
use std::path::Path;

use crate::core::error::Result;
use crate::grid::{CellState, Coord, Grid};

const MAX_CHANNEL: &str = "255";
const RED_RGB: &str = "255 0 0";
const BLUE_RGB: &str = "0 0 255";
const WHITE_RGB: &str = "255 255 255";

fn rgb_for_cell(cell: CellState) -> &'static str {
    match cell {
        CellState::Red => RED_RGB,
        CellState::Blue => BLUE_RGB,
        CellState::Empty => WHITE_RGB,
    }
}

/// Render the grid as P3 text: `P3 <width> <height> 255` header, then one
/// line of triplets per grid row.
pub fn render(grid: &Grid) -> String {
    let mut out = format!(
        "P3 {} {} {}\n",
        grid.width(),
        grid.height(),
        MAX_CHANNEL
    );
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            out.push_str(rgb_for_cell(grid.get(Coord::new(row, col))));
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

/// Write the grid image to disk
pub fn write_to_path(grid: &Grid, path: &Path) -> Result<()> {
    fs::write(path, render(grid))?;
    tracing::info!(path = %path.display(), "wrote grid image");
    Ok(())
}
