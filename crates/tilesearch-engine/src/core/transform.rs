//! Geometric grid transforms.
//!
//! Both functions are pure and return a fresh grid; the input is never aliased.

use super::grid::Grid;

/// Returns the matrix transpose of `grid`.
///
/// For a non-square grid the width and height are swapped.
#[must_use]
pub fn transpose(grid: &Grid) -> Grid {
    let size = grid.size();
    let mut cells = Vec::with_capacity(size.num_cells());
    for x in 0..size.width {
        cells.extend(grid.rows().map(|row| row[x]));
    }
    Grid::from_cells(size.transposed(), cells)
}

/// Returns `grid` with every row reversed left-to-right.
#[must_use]
pub fn invert(grid: &Grid) -> Grid {
    let cells = grid
        .rows()
        .flat_map(|row| row.iter().rev().copied())
        .collect();
    Grid::from_cells(grid.size(), cells)
}
