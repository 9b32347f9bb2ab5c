//! Plain-text table rendering
//!
//! Draws the grid as a bordered table with zero-based row and column
//! indices in the headers, matching the indices the operations take.

use std::fmt;

use super::model::Grid;

/// Default cell display width in characters
pub const DEFAULT_CELL_WIDTH: usize = 7;

/// Truncate text with ellipsis if too long
pub fn truncate_text(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars <= 1 {
        s.chars().take(max_chars).collect()
    } else {
        let mut result: String = s.chars().take(max_chars - 1).collect();
        result.push('…');
        result
    }
}

/// Format a value to fit `width` characters
///
/// Values too long for plain notation switch to scientific notation with
/// as many digits as fit. If even that is too wide the cell is filled
/// with `#` so a truncated number is never shown.
pub fn format_value(value: f64, width: usize) -> String {
    let plain = value.to_string();
    if plain.chars().count() <= width {
        return plain;
    }

    for precision in (0..width.min(17)).rev() {
        let text = format!("{:.*e}", precision, value);
        if text.chars().count() <= width {
            return text;
        }
    }

    "#".repeat(width)
}

fn separator(header_width: usize, cell_width: usize, columns: usize) -> String {
    let mut line = String::from("+");
    line.push_str(&"-".repeat(header_width + 2));
    for _ in 0..columns {
        line.push('+');
        line.push_str(&"-".repeat(cell_width + 2));
    }
    line.push_str("+\n");
    line
}

/// Render the grid as a bordered table, right-aligning values
///
/// `cell_width` is clamped to at least 1.
pub fn render_table(grid: &Grid, cell_width: usize) -> String {
    if grid.is_empty() {
        return "(empty grid)\n".to_string();
    }

    let width = cell_width.max(1);
    let columns = grid.column_count();
    let header_width = grid.row_count().saturating_sub(1).to_string().len();
    let rule = separator(header_width, width, columns);

    let mut out = String::new();
    out.push_str(&rule);

    out.push_str(&format!("| {:>header_width$} |", ""));
    for col in 0..columns {
        let label = truncate_text(&col.to_string(), width);
        out.push_str(&format!(" {:>width$} |", label));
    }
    out.push('\n');
    out.push_str(&rule);

    for (index, row) in grid.rows().enumerate() {
        out.push_str(&format!("| {:>header_width$} |", index));
        for value in row {
            out.push_str(&format!(" {:>width$} |", format_value(*value, width)));
        }
        out.push('\n');
    }
    out.push_str(&rule);
    out
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_table(self, DEFAULT_CELL_WIDTH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("hello", 10), "hello");
        assert_eq!(truncate_text("hello world", 5), "hell…");
        assert_eq!(truncate_text("hi", 1), "h");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_table(&Grid::new(), 7), "(empty grid)\n");
    }

    #[test]
    fn test_render_small_grid() {
        let grid = Grid::from_rows(vec![vec![1.0, 2.5], vec![-3.0, 40.0]]).unwrap();
        let expected = "\
+---+-----+-----+
|   |   0 |   1 |
+---+-----+-----+
| 0 |   1 | 2.5 |
| 1 |  -3 |  40 |
+---+-----+-----+
";
        assert_eq!(render_table(&grid, 3), expected);
    }

    #[test]
    fn test_format_value_keeps_magnitude() {
        assert_eq!(format_value(2.5, 7), "2.5");
        assert_eq!(format_value(123456.75, 6), "1.23e5");
        assert_eq!(format_value(123456.75, 4), "1e5");
        assert_eq!(format_value(-0.000123, 7), "-1.2e-4");
        assert_eq!(format_value(-123456.75, 3), "###");
    }

    #[test]
    fn test_render_long_values_use_scientific_notation() {
        let grid = Grid::from_rows(vec![vec![123456.75, 1.0]]).unwrap();
        let table = render_table(&grid, 4);
        assert!(table.contains("|  1e5 |"));
        assert!(!table.contains('…'));
    }

    #[test]
    fn test_display_uses_default_width() {
        let grid = Grid::with_size(1, 1);
        let text = grid.to_string();
        assert!(text.contains(&format!("| {:>7} |", 0)));
    }
}
