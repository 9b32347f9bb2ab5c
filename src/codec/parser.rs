//! Delimited text parsing using the csv crate
//!
//! Quoting is disabled: the format has no escaping, so a `"` is just an
//! invalid number. Whitespace around fields is trimmed and lines that are
//! empty after trimming are skipped. Line numbers in errors are physical
//! 1-based lines of the input, skipped lines included.

use super::delimiter::Delimiter;
use crate::error::{ParseError, Result};
use crate::grid::Grid;

/// Parse comma-delimited text into a grid
pub fn parse(content: &str) -> Result<Grid> {
    parse_with(content, Delimiter::Comma)
}

/// Parse delimited text into a grid
///
/// Every field must be a number and every line must have the same number
/// of fields as the first one.
pub fn parse_with(content: &str, delimiter: Delimiter) -> Result<Grid> {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .delimiter(delimiter.byte())
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .buffer_capacity(256);

    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut record = csv::StringRecord::new();

    // `lines()` also strips the `\r` of CRLF endings
    for (index, text) in content.lines().enumerate() {
        let line = index + 1;
        if text.trim().is_empty() {
            continue;
        }

        let mut reader = builder.from_reader(text.as_bytes());
        if !reader
            .read_record(&mut record)
            .map_err(|e| from_csv_error(e, line))?
        {
            continue;
        }

        let row = record
            .iter()
            .map(|field| parse_field(field, line))
            .collect::<std::result::Result<Vec<f64>, ParseError>>()?;

        if let Some(first) = rows.first() {
            if first.len() != row.len() {
                return Err(ParseError {
                    line,
                    field: None,
                    message: format!("expected {} fields, found {}", first.len(), row.len()),
                }
                .into());
            }
        }

        rows.push(row);
    }

    tracing::debug!(rows = rows.len(), "parsed grid text");
    Grid::from_rows(rows)
}

fn parse_field(field: &str, line: usize) -> std::result::Result<f64, ParseError> {
    field.parse::<f64>().map_err(|_| ParseError {
        line,
        field: Some(field.to_string()),
        message: "invalid number".to_string(),
    })
}

fn from_csv_error(e: csv::Error, line: usize) -> ParseError {
    ParseError {
        line,
        field: None,
        message: e.to_string(),
    }
}
