use std::cmp::Ordering;

use crate::error::Result;
use crate::grid::{Cell, Coords, Grid, Value};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    pub cells: Vec<Cell>,
    pub value: u64,
}

impl Path {
    pub fn len(&self) -> usize { self.cells.len() }
    pub fn is_empty(&self) -> bool { self.cells.is_empty() }
    pub fn values(&self) -> Vec<Value> { self.cells.iter().map(|c| c.value).collect() }
    pub fn coords(&self) -> Vec<Coords> { self.cells.iter().map(|c| c.coords).collect() }
    pub fn contains(&self, at: Coords) -> bool { self.cells.iter().any(|c| c.coords == at) }
}

/// Outcome of [`find_best_paths`]. Paths are kept in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub all_paths: Vec<Path>,
    pub best_value: u64,
    pub best_paths: Vec<Path>,
}

impl SearchResult {
    pub fn path_count(&self) -> usize { self.all_paths.len() }
}

/// Enumerates every right/up path from the lower-left to the upper-right cell
/// and keeps all of those with the highest sum.
///
/// This is a full brute-force walk: `path_count(width, height)` paths are
/// materialised, so callers should bound the grid size beforehand.
pub fn find_best_paths(grid: &Grid) -> Result<SearchResult> {
    let start = grid.lower_left();
    log::debug!(
        "searching {}x{} grid, expecting {:?} paths",
        grid.width(), grid.height(), path_count(grid.width(), grid.height())
    );
    let mut walk = Traversal { grid, result: SearchResult::default() };
    walk.visit(Vec::new(), 0, start.x, start.y)?;
    let result = walk.result;
    log::debug!(
        "{} paths, best value {} reached by {} path(s)",
        result.all_paths.len(), result.best_value, result.best_paths.len()
    );
    Ok(result)
}

struct Traversal<'g> {
    grid: &'g Grid,
    result: SearchResult,
}

impl Traversal<'_> {
    // Each call owns its path buffer; branches get their own clone.
    fn visit(&mut self, mut path: Vec<Cell>, mut sum: u64, x: usize, y: usize) -> Result<()> {
        let cell = *self.grid.lookup(x, y)?;
        path.push(cell);
        sum += u64::from(cell.value);

        let last_col = self.grid.width() - 1;
        if x == last_col && y == 0 {
            self.record(Path { cells: path, value: sum });
            return Ok(());
        }

        if x < last_col && y > 0 {
            self.visit(path.clone(), sum, x + 1, y)?;
            self.visit(path, sum, x, y - 1)
        } else if x == last_col {
            self.visit(path, sum, x, y - 1)
        } else {
            self.visit(path, sum, x + 1, y)
        }
    }

    fn record(&mut self, path: Path) {
        let result = &mut self.result;
        match path.value.cmp(&result.best_value) {
            Ordering::Greater => {
                log::trace!("new best {} (was {}) after {} paths", path.value, result.best_value, result.all_paths.len());
                result.best_value = path.value;
                result.best_paths = vec![path.clone()];
            }
            Ordering::Equal => result.best_paths.push(path.clone()),
            Ordering::Less => {}
        }
        result.all_paths.push(path);
    }
}

/// Number of right/up paths across a `width` x `height` grid,
/// `C(width + height - 2, width - 1)`. `None` if it does not fit in a `u128`.
pub fn path_count(width: usize, height: usize) -> Option<u128> {
    if width == 0 || height == 0 { return Some(0); }
    let n = (width - 1 + height - 1) as u128;
    let k = (width - 1).min(height - 1) as u128;
    let mut count: u128 = 1;
    for i in 0..k {
        // exact at every step: count * (n - i) is divisible by (i + 1)
        count = count.checked_mul(n - i)? / (i + 1);
    }
    Some(count)
}
