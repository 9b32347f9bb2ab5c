//! Grid data model
//!
//! Rows are stored as `Vec<Vec<f64>>`. Every operation validates its
//! indices before touching storage, so a failed call leaves the grid as it was.

use serde::Serialize;

use super::operator::{fold, Operator};
use crate::error::{GridError, IndexError, ParseError, Result};

/// Position of a cell in the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
}

impl CellPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for CellPosition {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Rectangular matrix of numeric cells
///
/// Invariant: either there are no rows, or every row has the same length.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Grid {
    rows: Vec<Vec<f64>>,
}

impl Grid {
    /// Create an empty grid (no rows, no columns)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from rows, rejecting ragged input
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        if let Some(first) = rows.first() {
            let expected = first.len();
            if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
                return Err(GridError::Parse(ParseError {
                    line: i + 1,
                    field: None,
                    message: format!("expected {} cells, found {}", expected, row.len()),
                }));
            }
        }
        Ok(Self { rows })
    }

    /// Create a `rows x cols` grid filled with 0.0
    pub fn with_size(rows: usize, cols: usize) -> Self {
        Self {
            rows: vec![vec![0.0; cols]; rows],
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns; 0 when the grid has no rows
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, |r| r.len())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Read-only view of one row
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.rows.get(index).map(|r| r.as_slice())
    }

    /// Iterate over rows in order
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.rows.iter().map(|r| r.as_slice())
    }

    /// Iterate down one column (empty if out of range)
    pub fn column(&self, index: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().filter_map(move |r| r.get(index).copied())
    }

    // === Structural mutation ===

    /// Append a row of zeros
    ///
    /// The new row matches the current column count, or has one cell when
    /// the grid is empty.
    pub fn add_row(&mut self) {
        let width = if self.rows.is_empty() {
            1
        } else {
            self.column_count()
        };
        self.rows.push(vec![0.0; width]);
    }

    /// Remove row `index`, shifting later rows up by one
    pub fn remove_row(&mut self, index: usize) -> Result<()> {
        self.check_row(index)?;
        self.rows.remove(index);
        Ok(())
    }

    /// Append a zero cell to every row. No-op on an empty grid.
    pub fn add_column(&mut self) {
        for row in &mut self.rows {
            row.push(0.0);
        }
    }

    /// Remove column `index` from every row
    pub fn remove_column(&mut self, index: usize) -> Result<()> {
        self.check_column(index)?;
        for row in &mut self.rows {
            row.remove(index);
        }
        Ok(())
    }

    // === Cell access ===

    pub fn set_cell(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        self.check_cell(row, col)?;
        self.rows[row][col] = value;
        Ok(())
    }

    pub fn get_cell(&self, row: usize, col: usize) -> Result<f64> {
        self.check_cell(row, col)?;
        Ok(self.rows[row][col])
    }

    // === Arithmetic ===

    /// Apply `op` to two cells: `a op b`
    pub fn combine_cells(&self, a: CellPosition, b: CellPosition, op: char) -> Result<f64> {
        let lhs = self.get_cell(a.row, a.col)?;
        let rhs = self.get_cell(b.row, b.col)?;
        Operator::from_symbol(op)?.apply(lhs, rhs)
    }

    /// Fold `op` left-to-right across row `index`, seeded by its first cell
    pub fn reduce_row(&self, index: usize, op: char) -> Result<f64> {
        self.check_row(index)?;
        let op = Operator::from_symbol(op)?;
        let row = &self.rows[index];
        fold(row.iter().copied(), op).unwrap_or_else(|| {
            Err(IndexError::Column {
                index: 0,
                column_count: row.len(),
            }
            .into())
        })
    }

    /// Fold `op` down column `index`, seeded by row 0
    pub fn reduce_column(&self, index: usize, op: char) -> Result<f64> {
        self.check_column(index)?;
        let op = Operator::from_symbol(op)?;
        fold(self.column(index), op).unwrap_or_else(|| {
            Err(IndexError::Row {
                index: 0,
                row_count: self.row_count(),
            }
            .into())
        })
    }

    // === Bounds checks ===

    fn check_row(&self, index: usize) -> Result<()> {
        if index < self.rows.len() {
            Ok(())
        } else {
            Err(IndexError::Row {
                index,
                row_count: self.rows.len(),
            }
            .into())
        }
    }

    fn check_column(&self, index: usize) -> Result<()> {
        if !self.rows.is_empty() && index < self.column_count() {
            Ok(())
        } else {
            Err(IndexError::Column {
                index,
                column_count: self.column_count(),
            }
            .into())
        }
    }

    fn check_cell(&self, row: usize, col: usize) -> Result<()> {
        match self.rows.get(row) {
            Some(r) if col < r.len() => Ok(()),
            _ => Err(IndexError::Cell {
                row,
                col,
                row_count: self.row_count(),
                column_count: self.column_count(),
            }
            .into()),
        }
    }
}
