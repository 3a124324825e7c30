use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Calgrid calendar grid demo.
#[derive(Parser)]
#[command(
    name = "calgrid",
    version,
    about = "Render month grids and inspect selection diffs"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Render a month grid with selections and run highlighting.
    Show(ShowArgs),
    /// Print the grid cells that change between two selection snapshots.
    Diff(DiffArgs),
}

/// Grid configuration flags shared by all subcommands.
#[derive(clap::Args)]
pub struct GridArgs {
    /// Month number (1-12).
    #[arg(short, long)]
    pub month: u8,

    /// Year.
    #[arg(short, long)]
    pub year: i32,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override first weekday from config (1 = Sunday .. 7 = Saturday).
    #[arg(long)]
    pub first_weekday: Option<u32>,

    /// Override the number of week rows from config.
    #[arg(long)]
    pub weekday_stacks: Option<usize>,
}

/// Arguments for the `show` subcommand.
#[derive(clap::Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub grid: GridArgs,

    /// Dates to select (YYYY-MM-DD); may be repeated.
    #[arg(short, long = "select")]
    pub select: Vec<NaiveDate>,

    /// Also select every date with this weekday (1 = Sunday).
    #[arg(long)]
    pub repeat_weekday: Option<u32>,

    /// Connect the selected dates into one continuous run.
    #[arg(long)]
    pub connect: bool,
}

/// Arguments for the `diff` subcommand.
#[derive(clap::Args)]
pub struct DiffArgs {
    #[command(flatten)]
    pub grid: GridArgs,

    /// Previously selected dates (YYYY-MM-DD); may be repeated.
    #[arg(long = "prev")]
    pub prev: Vec<NaiveDate>,

    /// Currently selected dates (YYYY-MM-DD); may be repeated.
    #[arg(long = "current")]
    pub current: Vec<NaiveDate>,
}
