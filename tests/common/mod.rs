//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use gridcalc::grid::Grid;

/// Build a grid from literal rows
pub fn grid_from(rows: &[&[f64]]) -> Grid {
    Grid::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
}

/// Grid whose cell (i, j) holds `i * 10 + j`, so every value is distinct
pub fn numbered_grid(rows: usize, cols: usize) -> Grid {
    let data = (0..rows)
        .map(|i| (0..cols).map(|j| (i * 10 + j) as f64).collect())
        .collect();
    Grid::from_rows(data).unwrap()
}

/// Collect all cells as nested vectors for whole-grid comparisons
pub fn cells(grid: &Grid) -> Vec<Vec<f64>> {
    grid.rows().map(|r| r.to_vec()).collect()
}
