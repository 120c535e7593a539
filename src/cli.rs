use anyhow::{Context, Result};
use checkerpath_core::{GridConfig, Sampling, Value, ValueRange};
use clap::{ArgAction, Parser};
use std::{fs, path::PathBuf};

use crate::limits::{Limits, MAX_DEPTH};

#[derive(Parser, Debug)]
#[command(name = "checkerpath", version, about = "Find the best right/up paths across a random checkerboard")]
pub struct Cli {
    /// Grid width (default 5)
    #[arg(short = 'W', long)]
    pub width: Option<usize>,

    /// Grid height (default 5)
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Lowest cell value
    #[arg(long)]
    pub min: Option<Value>,

    /// Upper value bound; see --inclusive
    #[arg(long)]
    pub max: Option<Value>,

    /// Use the [1, 99] value range
    #[arg(long, conflicts_with_all = ["min", "max"])]
    pub large: bool,

    /// Draw values from min..=max instead of min..=min+max-1
    #[arg(long)]
    pub inclusive: bool,

    /// Seed for reproducible grids
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// JSON grid config; explicit flags override its fields
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Refuse grids with more paths than this (0 = unlimited)
    #[arg(long, default_value_t = 1_000_000)]
    pub max_paths: u64,

    /// Refuse grids whose stored paths would exceed this many cells (0 = unlimited)
    #[arg(long, default_value_t = 20_000_000)]
    pub max_cells: u64,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Highlight the best path with colors
    #[arg(long)]
    pub color: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn limits(&self) -> Limits {
        Limits { max_paths: self.max_paths, max_cells: self.max_cells, max_depth: MAX_DEPTH }
    }

    /// Config file (or defaults) with explicit flags applied, validated.
    pub fn load_config(&self) -> Result<GridConfig> {
        let cfg = match &self.config {
            Some(p) => {
                let raw = fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?;
                serde_json::from_str(&raw).with_context(|| format!("parsing {}", p.display()))?
            }
            None => GridConfig::default(),
        };
        let cfg = self.apply_overrides(cfg);
        cfg.validate().context("invalid grid settings")?;
        Ok(cfg)
    }

    pub fn apply_overrides(&self, mut cfg: GridConfig) -> GridConfig {
        if let Some(w) = self.width { cfg.width = w; }
        if let Some(h) = self.height { cfg.height = h; }
        if self.large { cfg.range = ValueRange::LARGE.with_sampling(cfg.range.sampling); }
        if let Some(min) = self.min { cfg.range.min = min; }
        if let Some(max) = self.max { cfg.range.max = max; }
        if self.inclusive { cfg.range.sampling = Sampling::Inclusive; }
        if self.seed.is_some() { cfg.seed = self.seed; }
        cfg
    }
}
