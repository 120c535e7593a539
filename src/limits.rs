use anyhow::{anyhow, bail, Result};
use checkerpath_core::path_count;

/// Deepest recursion the search may reach, in cells along one path.
pub const MAX_DEPTH: usize = 4_096;

/// Bounds a grid must respect before it is searched. The search recurses
/// `width + height - 1` deep and keeps every path, plus a copy of each best
/// one, so both the depth and the materialised cells are capped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_paths: u64,   // 0 = unlimited
    pub max_cells: u64,   // 0 = unlimited
    pub max_depth: usize,
}

impl Default for Limits {
    fn default() -> Self { Self { max_paths: 1_000_000, max_cells: 20_000_000, max_depth: MAX_DEPTH } }
}

impl Limits {
    /// Returns the number of paths the search will enumerate.
    pub fn check(&self, width: usize, height: usize) -> Result<u128> {
        let depth = width.saturating_add(height).saturating_sub(1);
        if depth > self.max_depth {
            bail!("{}x{} grid paths are {} cells long, above the depth limit of {}", width, height, depth, self.max_depth);
        }
        let paths = path_count(width, height).ok_or_else(|| anyhow!("{}x{} grid has too many paths to enumerate", width, height))?;
        if self.max_paths != 0 && paths > u128::from(self.max_paths) {
            bail!("{}x{} grid has {} paths, above the limit of {}", width, height, paths, self.max_paths);
        }
        // worst case every path ties for best and is stored twice
        let cells = paths.checked_mul(2 * depth as u128);
        if self.max_cells != 0 && cells.map_or(true, |c| c > u128::from(self.max_cells)) {
            bail!("{}x{} grid would hold up to {} path cells, above the limit of {}",
                width, height, cells.map_or_else(|| "too many".to_string(), |c| c.to_string()), self.max_cells);
        }
        Ok(paths)
    }
}
