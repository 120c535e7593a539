use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

use crate::error::{Error, Result};

pub type Value = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coords { pub x: usize, pub y: usize }

impl Coords { pub fn new(x: usize, y: usize) -> Self { Self { x, y } } }

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub id: usize,        // row-major generation order
    pub coords: Coords,
    pub value: Value,
}

/// How a cell value is drawn from a [`ValueRange`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sampling {
    /// `min + floor(random() * max)`: uniform over `min ..= min + max - 1`.
    #[default]
    Offset,
    /// Uniform over `min ..= max`.
    Inclusive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: Value,
    pub max: Value,
    #[serde(default)]
    pub sampling: Sampling,
}

impl Default for ValueRange {
    fn default() -> Self { Self::SMALL }
}

impl ValueRange {
    pub const SMALL: Self = Self { min: 1, max: 10, sampling: Sampling::Offset };
    pub const LARGE: Self = Self { min: 1, max: 99, sampling: Sampling::Offset };

    pub fn new(min: Value, max: Value) -> Self { Self { min, max, sampling: Sampling::Offset } }

    pub fn with_sampling(self, sampling: Sampling) -> Self { Self { sampling, ..self } }

    pub fn validate(&self) -> Result<()> {
        let (min, max) = (self.min, self.max);
        if min > max { return Err(Error::InvalidRange { min, max, reason: "min is greater than max" }); }
        if self.sampling == Sampling::Offset {
            if max == 0 { return Err(Error::InvalidRange { min, max, reason: "max must be at least 1" }); }
            if min.checked_add(max - 1).is_none() { return Err(Error::InvalidRange { min, max, reason: "min + max overflows" }); }
        }
        Ok(())
    }

    /// Smallest and largest value `draw` can produce.
    pub fn bounds(&self) -> (Value, Value) {
        match self.sampling {
            Sampling::Offset => (self.min, self.min.saturating_add(self.max.saturating_sub(1))),
            Sampling::Inclusive => (self.min, self.max),
        }
    }

    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Value {
        match self.sampling {
            Sampling::Offset => self.min + rng.gen_range(0..self.max),
            Sampling::Inclusive => rng.gen_range(self.min..=self.max),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridRepr")]
pub struct Grid {
    width: usize,
    height: usize,
    // row-major: index = y * width + x
    cells: Vec<Cell>,
}

impl Grid {
    /// Random grid drawn from the thread-seeded generator.
    pub fn new(width: usize, height: usize, range: ValueRange) -> Result<Self> {
        Self::generate(width, height, range, None)
    }

    /// Random grid; the same `seed` always yields the same values.
    pub fn generate(width: usize, height: usize, range: ValueRange, seed: Option<u64>) -> Result<Self> {
        check_dimensions(width, height)?;
        range.validate()?;
        let mut rng = match seed { Some(s) => StdRng::seed_from_u64(s), None => StdRng::from_entropy() };
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height { for x in 0..width {
            cells.push(Cell { id: cells.len(), coords: Coords { x, y }, value: range.draw(&mut rng) });
        }}
        log::debug!("generated {width}x{height} grid, values {:?} ({:?})", range.bounds(), range.sampling);
        Ok(Self { width, height, cells })
    }

    /// Grid with explicit values, `rows[y][x]`.
    pub fn from_rows<R: AsRef<[Value]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        check_dimensions(width, height)?;
        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width { return Err(Error::RaggedRows { row: y, expected: width, found: row.len() }); }
            for (x, &value) in row.iter().enumerate() {
                cells.push(Cell { id: cells.len(), coords: Coords { x, y }, value });
            }
        }
        Ok(Self { width, height, cells })
    }

    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }

    pub fn lower_left(&self) -> Coords { Coords { x: 0, y: self.height - 1 } }
    pub fn upper_right(&self) -> Coords { Coords { x: self.width - 1, y: 0 } }

    pub fn lookup(&self, x: usize, y: usize) -> Result<&Cell> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds { x, y, width: self.width, height: self.height });
        }
        Ok(&self.cells[y * self.width + x])
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> { self.cells.iter() }

    /// Widest value in digits; tables right-align to this.
    pub fn value_width(&self) -> usize {
        self.cells.iter().map(|c| c.value.to_string().len()).max().unwrap_or(1)
    }

    /// Rows from top (`y = 0`) to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> { self.cells.chunks(self.width) }
}

pub fn check_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 { return Err(Error::InvalidDimension { width, height }); }
    Ok(())
}

// Unchecked wire shape; `TryFrom` re-establishes the one-cell-per-position layout.
#[derive(Deserialize)]
struct GridRepr {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl TryFrom<GridRepr> for Grid {
    type Error = Error;

    fn try_from(r: GridRepr) -> Result<Self> {
        check_dimensions(r.width, r.height)?;
        let expected = r.width.checked_mul(r.height).ok_or(Error::InvalidDimension { width: r.width, height: r.height })?;
        if r.cells.len() != expected { return Err(Error::CellCount { expected, found: r.cells.len() }); }
        for (i, c) in r.cells.iter().enumerate() {
            let at = Coords { x: i % r.width, y: i / r.width };
            if c.coords != at { return Err(Error::MisplacedCell { index: i, expected: at, found: c.coords }); }
        }
        Ok(Self { width: r.width, height: r.height, cells: r.cells })
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let pad = self.value_width();
        for row in self.rows() {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 { write!(f, " ")?; }
                write!(f, "{:>pad$}", cell.value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
