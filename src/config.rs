use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tui_raster::{Algorithm, Grid};

/// Draw lines on a Braille canvas with DDA, Bresenham or Wu
#[derive(Parser, Debug)]
#[command(name = "tui-raster", version, about)]
pub struct Config {
    /// Grid pitch in Braille dots; clicks snap to this lattice
    #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(i32).range(1..=256))]
    pub pitch: i32,

    /// Initial algorithm: dda, bresenham or wu
    #[arg(long, short, default_value = "dda")]
    pub algorithm: Algorithm,

    /// Start with the grid overlay hidden
    #[arg(long)]
    pub no_grid: bool,

    /// Write logs to this file (the terminal is owned by the UI)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn grid(&self) -> Result<Grid> {
        Ok(Grid::new(self.pitch)?)
    }

    /// Install the tracing subscriber when a log file was requested.
    /// Level comes from `RUST_LOG`, defaulting to `info`.
    pub fn init_logging(&self) -> Result<()> {
        let Some(path) = &self.log_file else {
            return Ok(());
        };

        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;

        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(false)
            .init();

        Ok(())
    }
}
