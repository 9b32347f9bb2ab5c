//! File persistence for grids
//!
//! Validates files before reading them, checking for:
//! - File existence and permissions
//! - File size limits
//! - Binary content

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use super::delimiter::Delimiter;
use super::parser::parse_with;
use super::writer::serialize_with;
use crate::error::Result;
use crate::grid::Grid;

/// Maximum file size in bytes (50 MB)
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Errors that can occur when validating a file for loading
#[derive(Debug, Clone)]
pub enum FileOpenError {
    /// File does not exist
    NotFound,
    /// Permission denied to read file
    PermissionDenied,
    /// Path is a directory, not a file
    IsDirectory,
    /// File appears to be binary (contains null bytes)
    BinaryFile,
    /// File exceeds size limit
    TooLarge { size_mb: f64 },
    /// Other I/O error
    IoError(String),
}

impl std::fmt::Display for FileOpenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "file not found"),
            Self::PermissionDenied => write!(f, "permission denied"),
            Self::IsDirectory => write!(f, "is a directory"),
            Self::BinaryFile => write!(f, "binary file"),
            Self::TooLarge { size_mb } => write!(f, "file too large ({:.1} MB)", size_mb),
            Self::IoError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FileOpenError {}

/// Validate a file before attempting to load it
///
/// Checks existence, that it is not a directory, and the size limit.
pub fn validate_file_for_opening(path: &Path) -> std::result::Result<(), FileOpenError> {
    let metadata = fs::metadata(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => FileOpenError::NotFound,
        std::io::ErrorKind::PermissionDenied => FileOpenError::PermissionDenied,
        _ => FileOpenError::IoError(e.to_string()),
    })?;

    if metadata.is_dir() {
        return Err(FileOpenError::IsDirectory);
    }

    if metadata.len() > MAX_FILE_SIZE {
        return Err(FileOpenError::TooLarge {
            size_mb: metadata.len() as f64 / (1024.0 * 1024.0),
        });
    }

    Ok(())
}

/// Check if a file is likely binary by scanning the first 8KB for null bytes
///
/// Returns `false` on any read error (let the actual read fail with a better error).
pub fn is_likely_binary(path: &Path) -> bool {
    let Ok(mut file) = File::open(path) else {
        return false;
    };

    let mut buffer = [0u8; 8192];
    let Ok(bytes_read) = file.read(&mut buffer) else {
        return false;
    };

    buffer[..bytes_read].contains(&0)
}

/// Pick the delimiter for a path from its extension (comma by default)
pub fn delimiter_for_path(path: &Path) -> Delimiter {
    path.extension()
        .and_then(|e| e.to_str())
        .map(Delimiter::from_extension)
        .unwrap_or_default()
}

/// Read and parse a whole grid file
pub fn load_file(path: &Path) -> Result<Grid> {
    validate_file_for_opening(path)?;
    if is_likely_binary(path) {
        return Err(FileOpenError::BinaryFile.into());
    }

    let content = fs::read_to_string(path)?;
    let grid = parse_with(&content, delimiter_for_path(path))?;

    tracing::info!(
        "Loaded {}x{} grid from {}",
        grid.row_count(),
        grid.column_count(),
        path.display()
    );
    Ok(grid)
}

/// Serialize a grid and overwrite `path` with it
pub fn save_file(grid: &Grid, path: &Path) -> Result<()> {
    let content = serialize_with(grid, delimiter_for_path(path));
    fs::write(path, content)?;

    tracing::info!(
        "Saved {}x{} grid to {}",
        grid.row_count(),
        grid.column_count(),
        path.display()
    );
    Ok(())
}
