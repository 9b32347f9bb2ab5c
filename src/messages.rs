//! Message types for the Elm-style architecture
//!
//! Every grid operation a front end can request is one `GridMsg`.

use std::path::PathBuf;

use crate::grid::CellPosition;

/// Grid operations, one per front-end action
#[derive(Debug, Clone, PartialEq)]
pub enum GridMsg {
    // === Structure ===
    /// Append a row of zeros
    AddRow,
    /// Remove a row by index
    RemoveRow(usize),
    /// Append a column of zeros
    AddColumn,
    /// Remove a column by index
    RemoveColumn(usize),

    // === Cells ===
    /// Overwrite one cell
    SetCell { row: usize, col: usize, value: f64 },
    /// Read one cell
    GetCell { row: usize, col: usize },

    // === Arithmetic ===
    /// `a op b` over two cells
    CombineCells {
        a: CellPosition,
        b: CellPosition,
        op: char,
    },
    /// Fold an operator across a row
    ReduceRow { row: usize, op: char },
    /// Fold an operator down a column
    ReduceColumn { col: usize, op: char },

    // === Persistence ===
    /// Write the grid to a file
    Save { path: PathBuf },
    /// Replace the grid with a file's contents
    Load { path: PathBuf },
}

impl GridMsg {
    /// Whether handling this message can change the grid's contents
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            GridMsg::AddRow
                | GridMsg::RemoveRow(_)
                | GridMsg::AddColumn
                | GridMsg::RemoveColumn(_)
                | GridMsg::SetCell { .. }
                | GridMsg::Load { .. }
        )
    }
}
