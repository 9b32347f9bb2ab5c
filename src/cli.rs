//! Command-line argument parsing
//!
//! Each invocation loads one grid file, applies one command and (for
//! commands that change the grid) writes the file back.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::GridConfig;
use crate::grid::CellPosition;
use crate::messages::GridMsg;

/// Numeric grid calculator
#[derive(Parser, Debug)]
#[command(name = "gridcalc", version, about = "A numeric grid calculator")]
pub struct CliArgs {
    /// Grid file to operate on (starts empty if it doesn't exist)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Don't write the file back after a change
    #[arg(long)]
    pub no_save: bool,

    /// Cell display width for table output (overrides config)
    #[arg(long, value_name = "N")]
    pub width: Option<usize>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// How `show` prints the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Print the grid
    Show {
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Append a row of zeros
    AddRow,
    /// Remove row INDEX
    RemoveRow { index: usize },
    /// Append a column of zeros
    AddColumn,
    /// Remove column INDEX
    RemoveColumn { index: usize },
    /// Set cell (ROW, COL) to VALUE
    Set {
        row: usize,
        col: usize,
        #[arg(allow_hyphen_values = true)]
        value: f64,
    },
    /// Print cell (ROW, COL)
    Get { row: usize, col: usize },
    /// Apply OP to two cells: (ROW1, COL1) OP (ROW2, COL2)
    Combine {
        row1: usize,
        col1: usize,
        row2: usize,
        col2: usize,
        #[arg(allow_hyphen_values = true)]
        op: char,
    },
    /// Fold OP across row ROW
    ReduceRow {
        row: usize,
        #[arg(allow_hyphen_values = true)]
        op: char,
    },
    /// Fold OP down column COL
    ReduceColumn {
        col: usize,
        #[arg(allow_hyphen_values = true)]
        op: char,
    },
}

impl CliCommand {
    /// The grid message for this command; `None` for display-only commands
    pub fn to_msg(&self) -> Option<GridMsg> {
        let msg = match *self {
            CliCommand::Show { .. } => return None,
            CliCommand::AddRow => GridMsg::AddRow,
            CliCommand::RemoveRow { index } => GridMsg::RemoveRow(index),
            CliCommand::AddColumn => GridMsg::AddColumn,
            CliCommand::RemoveColumn { index } => GridMsg::RemoveColumn(index),
            CliCommand::Set { row, col, value } => GridMsg::SetCell { row, col, value },
            CliCommand::Get { row, col } => GridMsg::GetCell { row, col },
            CliCommand::Combine {
                row1,
                col1,
                row2,
                col2,
                op,
            } => GridMsg::CombineCells {
                a: CellPosition::new(row1, col1),
                b: CellPosition::new(row2, col2),
                op,
            },
            CliCommand::ReduceRow { row, op } => GridMsg::ReduceRow { row, op },
            CliCommand::ReduceColumn { col, op } => GridMsg::ReduceColumn { col, op },
        };
        Some(msg)
    }
}

/// Settings for one run, resolved from CLI args and the config file
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub file: PathBuf,
    pub command: CliCommand,
    /// Write the file back if the grid changed
    pub save_changes: bool,
    pub cell_width: usize,
}

impl CliArgs {
    /// Merge parsed args with persisted config; CLI flags win
    pub fn into_config(self, config: &GridConfig) -> RunConfig {
        RunConfig {
            file: self.file,
            command: self.command,
            save_changes: config.autosave && !self.no_save,
            cell_width: self.width.unwrap_or(config.cell_width),
        }
    }
}
