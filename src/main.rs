use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;

use gridcalc::cli::{CliArgs, CliCommand, OutputFormat, RunConfig};
use gridcalc::codec;
use gridcalc::commands::Cmd;
use gridcalc::config::GridConfig;
use gridcalc::grid::{render_table, Grid};
use gridcalc::update::update;

/// Load the grid file, or start empty if it doesn't exist yet
fn load_or_empty(path: &Path) -> Result<Grid> {
    if !path.exists() {
        tracing::info!("{} does not exist, starting with an empty grid", path.display());
        return Ok(Grid::new());
    }
    codec::load_file(path).with_context(|| format!("failed to load {}", path.display()))
}

fn print_grid(grid: &Grid, format: OutputFormat, cell_width: usize) -> Result<()> {
    match format {
        OutputFormat::Table => print!("{}", render_table(grid, cell_width)),
        OutputFormat::Csv => print!("{}", codec::serialize(grid)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(grid)?),
    }
    Ok(())
}

fn run(config: RunConfig) -> Result<()> {
    let mut grid = load_or_empty(&config.file)?;

    let msg = match config.command.to_msg() {
        Some(msg) => msg,
        None => {
            if let CliCommand::Show { format } = config.command {
                print_grid(&grid, format, config.cell_width)?;
            }
            return Ok(());
        }
    };

    let changes_grid = msg.is_mutation();

    match update(&mut grid, msg)? {
        Some(Cmd::Report(value)) => println!("{}", value),
        Some(Cmd::Redraw) => {
            if changes_grid && config.save_changes {
                Cmd::SaveFile(config.file.clone())
                    .run(&mut grid)
                    .with_context(|| format!("failed to save {}", config.file.display()))?;
            }
            print!("{}", render_table(&grid, config.cell_width));
        }
        Some(cmd) => {
            cmd.run(&mut grid)?;
        }
        None => eprintln!("Nothing to change"),
    }

    Ok(())
}

fn main() -> Result<()> {
    gridcalc::tracing::init();

    let args = CliArgs::parse();
    let config = GridConfig::load();

    run(args.into_config(&config))
}
