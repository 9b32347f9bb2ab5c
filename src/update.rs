//! Update function for the Elm-style architecture
//!
//! All grid state transformations flow through `update`.

use crate::commands::Cmd;
use crate::error::Result;
use crate::grid::Grid;
use crate::messages::GridMsg;

/// Apply one message to the grid
///
/// Errors leave the grid untouched. `Ok(None)` means nothing changed
/// and there is nothing to show.
pub fn update(grid: &mut Grid, msg: GridMsg) -> Result<Option<Cmd>> {
    tracing::debug!(?msg, "update");

    let result = update_inner(grid, msg);

    match &result {
        Ok(cmd) => tracing::debug!(
            ?cmd,
            rows = grid.row_count(),
            cols = grid.column_count(),
            "update done"
        ),
        Err(e) => tracing::debug!(error = %e, "update rejected"),
    }

    result
}

fn update_inner(grid: &mut Grid, msg: GridMsg) -> Result<Option<Cmd>> {
    match msg {
        GridMsg::AddRow => {
            grid.add_row();
            Ok(Some(Cmd::Redraw))
        }
        GridMsg::RemoveRow(index) => {
            grid.remove_row(index)?;
            Ok(Some(Cmd::Redraw))
        }
        GridMsg::AddColumn => {
            if grid.is_empty() {
                return Ok(None);
            }
            grid.add_column();
            Ok(Some(Cmd::Redraw))
        }
        GridMsg::RemoveColumn(index) => {
            grid.remove_column(index)?;
            Ok(Some(Cmd::Redraw))
        }
        GridMsg::SetCell { row, col, value } => {
            grid.set_cell(row, col, value)?;
            Ok(Some(Cmd::Redraw))
        }
        GridMsg::GetCell { row, col } => grid.get_cell(row, col).map(|v| Some(Cmd::Report(v))),
        GridMsg::CombineCells { a, b, op } => {
            grid.combine_cells(a, b, op).map(|v| Some(Cmd::Report(v)))
        }
        GridMsg::ReduceRow { row, op } => grid.reduce_row(row, op).map(|v| Some(Cmd::Report(v))),
        GridMsg::ReduceColumn { col, op } => {
            grid.reduce_column(col, op).map(|v| Some(Cmd::Report(v)))
        }
        GridMsg::Save { path } => Ok(Some(Cmd::SaveFile(path))),
        GridMsg::Load { path } => Ok(Some(Cmd::LoadFile(path))),
    }
}
