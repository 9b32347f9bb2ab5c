//! Text codec for grids
//!
//! One row per line, fields separated by a delimiter (comma unless the
//! file extension says otherwise), no header row and no quoting.
//!
//! ```text
//! serialize(&Grid) -> String     parse(&str) -> Result<Grid>
//! save_file(&Grid, path)         load_file(path) -> Result<Grid>
//! ```

mod delimiter;
mod file;
mod parser;
mod writer;

pub use delimiter::Delimiter;
pub use file::{
    delimiter_for_path, is_likely_binary, load_file, save_file, validate_file_for_opening,
    FileOpenError, MAX_FILE_SIZE,
};
pub use parser::{parse, parse_with};
pub use writer::{serialize, serialize_with};
