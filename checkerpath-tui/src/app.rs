use anyhow::{anyhow, Result};
use checkerpath::limits::{Limits, MAX_DEPTH};
use checkerpath_core::{find_best_paths, Grid, GridConfig, SearchResult};
use std::time::{Duration, Instant};

// Tighter than the CLI so a search never freezes the UI for long.
pub const LIMITS: Limits = Limits { max_paths: 200_000, max_cells: 5_000_000, max_depth: MAX_DEPTH };
pub const ROTATE_EVERY: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field { Width, Height }

pub struct App {
    pub width: String,
    pub height: String,
    pub focus: Field,
    pub grid: Option<Grid>,
    pub result: Option<SearchResult>,
    pub highlight: usize,
    pub status: String,
    last_rotate: Instant,
}

impl App {
    pub fn new() -> Self {
        Self {
            width: "5".into(),
            height: "5".into(),
            focus: Field::Width,
            grid: None,
            result: None,
            highlight: 0,
            status: "Enter=generate".into(),
            last_rotate: Instant::now(),
        }
    }

    fn field_mut(&mut self) -> &mut String {
        match self.focus { Field::Width => &mut self.width, Field::Height => &mut self.height }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus { Field::Width => Field::Height, Field::Height => Field::Width };
    }

    pub fn push_digit(&mut self, ch: char) {
        let f = self.field_mut();
        if ch.is_ascii_digit() && f.len() < 4 { f.push(ch); }
    }

    pub fn pop_digit(&mut self) { self.field_mut().pop(); }

    pub fn step(&mut self, delta: i64) {
        let f = self.field_mut();
        let cur = f.parse::<i64>().unwrap_or(0);
        *f = (cur + delta).max(1).to_string();
    }

    fn dimensions(&self) -> Result<(usize, usize)> {
        let parse = |name: &str, s: &str| s.trim().parse::<usize>().map_err(|_| anyhow!("{} must be a positive integer", name));
        Ok((parse("width", &self.width)?, parse("height", &self.height)?))
    }

    /// Builds a fresh grid from the input fields and searches it. Failures
    /// leave the previous grid in place and only update the status line.
    pub fn generate(&mut self) {
        match self.try_generate() {
            Ok(()) => {}
            Err(e) => { log::warn!("{:#}", e); self.status = format!("{:#}", e); }
        }
    }

    fn try_generate(&mut self) -> Result<()> {
        let (w, h) = self.dimensions()?;
        let cfg = GridConfig::new(w, h);
        cfg.validate()?;
        LIMITS.check(w, h)?;
        let grid = cfg.build()?;
        let result = find_best_paths(&grid)?;
        log::info!("{}x{}: {} paths, best {}", w, h, result.path_count(), result.best_value);
        self.status = format!("Generated {}x{}", w, h);
        self.load(grid, result);
        Ok(())
    }

    pub fn load(&mut self, grid: Grid, result: SearchResult) {
        self.grid = Some(grid);
        self.result = Some(result);
        self.highlight = 0;
        self.last_rotate = Instant::now();
    }

    /// Moves the highlight to the next best path once `ROTATE_EVERY` has passed.
    pub fn tick(&mut self, now: Instant) {
        let Some(result) = &self.result else { return };
        let n = result.best_paths.len();
        if n > 1 && now.duration_since(self.last_rotate) >= ROTATE_EVERY {
            self.highlight = (self.highlight + 1) % n;
            self.last_rotate = now;
        }
    }
}

/// First line to show so that line `selected` fits in `visible` rows.
pub fn scroll_offset(selected: usize, visible: u16) -> u16 {
    let visible = usize::from(visible.max(1));
    u16::try_from(selected.saturating_sub(visible - 1)).unwrap_or(u16::MAX)
}
