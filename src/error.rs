//! Error types for grid operations and persistence
//!
//! Every failure is surfaced to the caller as a distinct variant; nothing
//! in the grid or codec falls back to a default value.

use std::fmt;

use crate::codec::FileOpenError;

/// Which bound an index violated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    /// Row index >= row count
    Row { index: usize, row_count: usize },
    /// Column index >= column count (or the grid has no rows)
    Column { index: usize, column_count: usize },
    /// Cell position outside the current shape
    Cell {
        row: usize,
        col: usize,
        row_count: usize,
        column_count: usize,
    },
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row { index, row_count } => {
                write!(f, "row index {} out of range ({} rows)", index, row_count)
            }
            Self::Column {
                index,
                column_count,
            } => write!(
                f,
                "column index {} out of range ({} columns)",
                index, column_count
            ),
            Self::Cell {
                row,
                col,
                row_count,
                column_count,
            } => write!(
                f,
                "cell ({}, {}) out of range ({}x{} grid)",
                row, col, row_count, column_count
            ),
        }
    }
}

/// Malformed input found while parsing delimited text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// 1-based line number in the source text
    pub line: usize,
    /// Offending field text, when a single field is at fault
    pub field: Option<String>,
    pub message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(
                f,
                "parse error at line {}: {} ({:?})",
                self.line, self.message, field
            ),
            None => write!(f, "parse error at line {}: {}", self.line, self.message),
        }
    }
}

impl std::error::Error for ParseError {}

/// Top-level error type for grid and codec operations
#[derive(Debug)]
pub enum GridError {
    /// Row/column/cell index out of current bounds
    Index(IndexError),
    /// Division with a zero divisor
    DivisionByZero,
    /// Operator symbol other than `+ - * /`
    InvalidOperator(char),
    /// Malformed field or ragged row while loading
    Parse(ParseError),
    /// File could not be read or written
    Io(std::io::Error),
    /// File failed validation before reading
    FileOpen(FileOpenError),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(e) => write!(f, "index error: {}", e),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::InvalidOperator(op) => {
                write!(f, "invalid operator {:?} (expected one of + - * /)", op)
            }
            Self::Parse(e) => write!(f, "{}", e),
            Self::Io(e) => write!(f, "I/O error: {}", e),
            Self::FileOpen(e) => write!(f, "cannot open file: {}", e),
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::FileOpen(e) => Some(e),
            _ => None,
        }
    }
}

impl From<IndexError> for GridError {
    fn from(e: IndexError) -> Self {
        Self::Index(e)
    }
}

impl From<ParseError> for GridError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<std::io::Error> for GridError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<FileOpenError> for GridError {
    fn from(e: FileOpenError) -> Self {
        Self::FileOpen(e)
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, GridError>;
