use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grid::{check_dimensions, Grid, ValueRange};

/// Everything needed to build a grid; loadable from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
    #[serde(default)]
    pub range: ValueRange,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GridConfig {
    fn default() -> Self { Self { width: 5, height: 5, range: ValueRange::default(), seed: None } }
}

impl GridConfig {
    pub fn new(width: usize, height: usize) -> Self { Self { width, height, ..Self::default() } }

    pub fn validate(&self) -> Result<()> {
        check_dimensions(self.width, self.height)?;
        self.range.validate()
    }

    pub fn build(&self) -> Result<Grid> {
        self.validate()?;
        Grid::generate(self.width, self.height, self.range, self.seed)
    }
}
