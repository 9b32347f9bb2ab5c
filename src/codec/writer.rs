//! Delimited text output

use super::delimiter::Delimiter;
use crate::grid::Grid;

/// Serialize a grid as comma-delimited text
pub fn serialize(grid: &Grid) -> String {
    serialize_with(grid, Delimiter::Comma)
}

/// Serialize a grid, one line per row, newline after every row
///
/// Values use the shortest decimal text that parses back to the same
/// `f64` (Rust's `Display` for floats), so `1.0` is written as `1`.
pub fn serialize_with(grid: &Grid, delimiter: Delimiter) -> String {
    let separator = delimiter.char().to_string();
    let mut out = String::new();

    for row in grid.rows() {
        let line = row
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join(&separator);
        out.push_str(&line);
        out.push('\n');
    }

    out
}
