use checkerpath_core::{Coords, Grid, Path, SearchResult, Value};
use colored::*;
use itertools::Itertools;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellEntry { pub id: usize, pub x: usize, pub y: usize, pub value: Value }

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step { pub x: usize, pub y: usize, pub value: Value }

/// Machine-readable form of a finished search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<CellEntry>,
    pub path_count: usize,
    pub best_value: u64,
    pub best_paths: Vec<Vec<Step>>,
}

impl Report {
    pub fn new(grid: &Grid, result: &SearchResult) -> Self {
        let cells = grid.cells()
            .map(|c| CellEntry { id: c.id, x: c.coords.x, y: c.coords.y, value: c.value })
            .collect();
        let best_paths = result.best_paths.iter()
            .map(|p| p.cells.iter().map(|c| Step { x: c.coords.x, y: c.coords.y, value: c.value }).collect())
            .collect();
        Self {
            width: grid.width(),
            height: grid.height(),
            cells,
            path_count: result.path_count(),
            best_value: result.best_value,
            best_paths,
        }
    }
}

/// `3 + 7 + 2`
pub fn path_line(path: &Path) -> String { path.values().iter().join(" + ") }

pub fn summary(result: &SearchResult) -> String {
    let mut s = format!("Out of {} different paths, there is ", result.path_count());
    if result.best_paths.len() > 1 {
        s.push_str(&format!("{} different paths to achieve the best score of {}:", result.best_paths.len(), result.best_value));
    } else {
        s.push_str(&format!("one path to achieve the best score of {}:", result.best_value));
    }
    s
}

/// Value table, one line per row. Cells on `highlight` are bracketed, or
/// painted when `color` is set.
pub fn render_grid(grid: &Grid, highlight: Option<&Path>, color: bool) -> String {
    let pad = grid.value_width();
    let on_path = |at: Coords| highlight.is_some_and(|p| p.contains(at));
    let mut s = String::new();
    for row in grid.rows() {
        let line = row.iter().map(|cell| {
            let text = format!("{:>pad$}", cell.value);
            match (on_path(cell.coords), color) {
                (true, true) => format!(" {} ", text.black().on_yellow().bold()),
                (true, false) => format!("[{}]", text),
                (false, _) => format!(" {} ", text),
            }
        }).join("");
        s.push_str(line.trim_end());
        s.push('\n');
    }
    s
}

pub fn render_text(grid: &Grid, result: &SearchResult, color: bool) -> String {
    let mut s = render_grid(grid, result.best_paths.first(), color);
    s.push('\n');
    let head = summary(result);
    if color { s.push_str(&head.bold().to_string()); } else { s.push_str(&head); }
    s.push('\n');
    for p in &result.best_paths {
        s.push_str(&path_line(p));
        s.push('\n');
    }
    s
}
