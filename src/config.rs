use std::path::Path;

use anyhow::{bail, Context};
use calgrid_calendar::{
    validate_weekday, Month, DEFAULT_FIRST_WEEKDAY, DEFAULT_WEEKDAY_STACKS,
};
use serde::Deserialize;

/// Top-level calgrid configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CalgridConfig {
    /// Grid settings.
    #[serde(default)]
    pub grid: GridConfig,
}

/// Grid defaults applied when no CLI override is given.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridConfig {
    /// First weekday of the grid (1 = Sunday .. 7 = Saturday).
    #[serde(default = "default_first_weekday")]
    pub first_weekday: u32,

    /// Number of week rows in the grid.
    #[serde(default = "default_weekday_stacks")]
    pub weekday_stacks: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            first_weekday: default_first_weekday(),
            weekday_stacks: default_weekday_stacks(),
        }
    }
}

fn default_first_weekday() -> u32 {
    DEFAULT_FIRST_WEEKDAY
}

fn default_weekday_stacks() -> usize {
    DEFAULT_WEEKDAY_STACKS
}

/// Loads the configuration file, or the built-in defaults when no path is
/// given.
pub fn load(path: Option<&Path>) -> anyhow::Result<CalgridConfig> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
        }
        None => Ok(CalgridConfig::default()),
    }
}

/// Largest accepted number of week rows; a year of weeks is already far
/// beyond any sensible grid.
const MAX_WEEKDAY_STACKS: usize = 54;

/// Resolves the effective grid settings for a subcommand: config file (or
/// defaults) overridden by CLI flags. All user-supplied values are validated
/// here, before they reach the grid engine.
pub fn resolve_grid(args: &crate::cli::GridArgs) -> anyhow::Result<(Month, u32, usize)> {
    let config = load(args.config.as_deref())?;
    let first_weekday =
        validate_weekday(args.first_weekday.unwrap_or(config.grid.first_weekday))?;
    let weekday_stacks = args.weekday_stacks.unwrap_or(config.grid.weekday_stacks);
    if !(1..=MAX_WEEKDAY_STACKS).contains(&weekday_stacks) {
        bail!("invalid weekday stacks: {weekday_stacks} (must be 1..={MAX_WEEKDAY_STACKS})");
    }
    let month = Month::new(args.month, args.year)?;
    Ok((month, first_weekday, weekday_stacks))
}
