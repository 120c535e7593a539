pub mod config;
pub mod error;
pub mod grid;
pub mod search;

pub use config::GridConfig;
pub use error::{Error, Result};
pub use grid::{Cell, Coords, Grid, Sampling, Value, ValueRange};
pub use search::{find_best_paths, path_count, Path, SearchResult};
