//! gridcalc - numeric grid engine
//!
//! This crate provides an in-memory grid of `f64` cells with structural
//! mutation, cell access and `+ - * /` arithmetic, plus a delimited text
//! codec for saving and loading. Front ends drive it through the
//! Elm-style `GridMsg` -> `update` -> `Cmd` loop.

pub mod cli;
pub mod codec;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod error;
pub mod grid;
pub mod messages;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::GridConfig;
pub use error::{GridError, IndexError, ParseError, Result};
pub use grid::{CellPosition, Grid, Operator};
pub use messages::GridMsg;
