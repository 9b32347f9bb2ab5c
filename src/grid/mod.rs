//! Numeric grid engine
//!
//! A rectangular matrix of `f64` cells with:
//! - Structural mutation (append/remove rows and columns)
//! - Bounds-checked cell access
//! - Pairwise and row/column arithmetic with `+ - * /`
//!
//! ```text
//! Grid
//! ├── rows: Vec<Vec<f64>>   (all rows share one length)
//! ├── Operator              (+, -, *, /)
//! └── render_table          (bordered text view)
//! ```

mod model;
mod operator;
pub mod render;

pub use model::{CellPosition, Grid};
pub use operator::{fold, Operator};
pub use render::{format_value, render_table, DEFAULT_CELL_WIDTH};
