//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! File I/O is never done inside `update`; the caller runs `SaveFile` and
//! `LoadFile`.

use std::path::PathBuf;

use crate::codec;
use crate::error::Result;
use crate::grid::Grid;

/// Side effects returned by `update`
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    /// The grid changed and should be redisplayed
    Redraw,
    /// A query or reduction produced a value to show
    Report(f64),
    /// Write the grid to this path
    SaveFile(PathBuf),
    /// Replace the grid with this file's contents
    LoadFile(PathBuf),
}

impl Cmd {
    /// Run a persistence command against `grid`
    ///
    /// `Redraw` and `Report` have no effect here; the front end displays them.
    /// Returns true when the grid was replaced.
    pub fn run(&self, grid: &mut Grid) -> Result<bool> {
        match self {
            Cmd::SaveFile(path) => {
                codec::save_file(grid, path)?;
                Ok(false)
            }
            Cmd::LoadFile(path) => {
                *grid = codec::load_file(path)?;
                Ok(true)
            }
            Cmd::Redraw | Cmd::Report(_) => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_load_replaces_grid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.csv");

        let mut grid = Grid::from_rows(vec![vec![1.0, 2.0]]).unwrap();
        assert!(!Cmd::SaveFile(path.clone()).run(&mut grid).unwrap());

        let mut other = Grid::new();
        assert!(Cmd::LoadFile(path).run(&mut other).unwrap());
        assert_eq!(other, grid);
    }

    #[test]
    fn test_failed_load_keeps_grid() {
        let mut grid = Grid::with_size(1, 1);
        let result = Cmd::LoadFile(PathBuf::from("/nonexistent/grid.csv")).run(&mut grid);
        assert!(result.is_err());
        assert_eq!(grid, Grid::with_size(1, 1));
    }

    #[test]
    fn test_display_commands_are_inert() {
        let mut grid = Grid::new();
        assert!(!Cmd::Redraw.run(&mut grid).unwrap());
        assert!(!Cmd::Report(1.0).run(&mut grid).unwrap());
    }
}
