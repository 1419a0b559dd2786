use lifegrid_common::{CellPos, SimConfig};

use crate::pattern::Pattern;

/// Moore neighborhood offsets as `(d_row, d_col)`.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
];

/// Errors from grid access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// Fixed-size Game of Life grid.
///
/// Cells are stored densely in row-major order. A second buffer of the same
/// size holds the next generation while it is being computed; the two are
/// swapped when the generation is complete, so every cell of a generation is
/// computed from the same prior state.
///
/// Neighbors that fall off the grid are skipped rather than wrapped, so
/// border cells see at most five neighbors and corner cells at most three.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
    next: Vec<bool>,
    generation: u64,
}

impl Grid {
    /// Create an all-dead grid.
    ///
    /// # Panics
    /// Panics if either dimension is zero or the cell count overflows
    /// `usize`. Use [`SimConfig::validate`] to check user-supplied
    /// dimensions first.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "grid dimensions must be non-zero");
        let size = rows
            .checked_mul(cols)
            .expect("grid cell count overflows usize");
        Self {
            rows,
            cols,
            cells: vec![false; size],
            next: vec![false; size],
            generation: 0,
        }
    }

    /// Create an all-dead grid with the configured dimensions.
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.rows, config.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Generations advanced since creation or the last clear.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Whether `(row, col)` lies on the grid.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Current alive state of a cell.
    pub fn get(&self, row: usize, col: usize) -> Result<bool, GridError> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx])
    }

    /// Write a single cell.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<(), GridError> {
        let idx = self.index(row, col)?;
        self.cells[idx] = alive;
        Ok(())
    }

    /// Count live cells in the Moore neighborhood of `(row, col)`, skipping
    /// positions that fall off the grid.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> Result<u8, GridError> {
        self.index(row, col)?;
        Ok(self.neighbors_unchecked(row, col))
    }

    /// Apply the Game of Life rule to every cell at once.
    pub fn advance_generation(&mut self) {
        let _span = tracing::trace_span!("advance_generation", generation = self.generation)
            .entered();

        for row in 0..self.rows {
            for col in 0..self.cols {
                let idx = row * self.cols + col;
                let alive = self.cells[idx];
                let n = self.neighbors_unchecked(row, col);
                self.next[idx] = match (alive, n) {
                    (true, 2 | 3) => true,
                    (true, _) => false,
                    (false, 3) => true,
                    (false, _) => false,
                };
            }
        }
        std::mem::swap(&mut self.cells, &mut self.next);
        self.generation += 1;

        tracing::trace!(
            generation = self.generation,
            population = self.population(),
            "generation advanced"
        );
    }

    /// Kill every cell and reset the generation counter.
    pub fn clear(&mut self) {
        self.cells.fill(false);
        self.generation = 0;
    }

    /// Write the live cells of `pattern` with its top-left corner at `origin`.
    ///
    /// Either every cell lands on the grid and is set alive, or nothing is
    /// written and the first off-grid cell is reported.
    pub fn stamp(&mut self, pattern: Pattern, origin: CellPos) -> Result<(), GridError> {
        let targets: Vec<usize> = pattern
            .cells()
            .iter()
            .map(|&(d_row, d_col)| {
                match (origin.row.checked_add(d_row), origin.col.checked_add(d_col)) {
                    (Some(row), Some(col)) => self.index(row, col),
                    _ => Err(self.out_of_bounds(
                        origin.row.saturating_add(d_row),
                        origin.col.saturating_add(d_col),
                    )),
                }
            })
            .collect::<Result<_, _>>()?;
        for idx in targets {
            self.cells[idx] = true;
        }
        tracing::debug!(pattern = pattern.name(), %origin, "pattern stamped");
        Ok(())
    }

    /// Positions of all live cells in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = CellPos> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(|(idx, _)| CellPos::new(idx / self.cols, idx % self.cols))
    }

    /// Deterministic FNV-1a hash of the dimensions and cell contents.
    /// The generation counter is not included.
    pub fn state_hash(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325;
        let mix = |h: &mut u64, bytes: &[u8]| {
            for &b in bytes {
                *h ^= b as u64;
                *h = h.wrapping_mul(0x0100_0000_01b3);
            }
        };
        mix(&mut h, &(self.rows as u64).to_le_bytes());
        mix(&mut h, &(self.cols as u64).to_le_bytes());
        for &alive in &self.cells {
            mix(&mut h, &[alive as u8]);
        }
        h
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if self.contains(row, col) {
            Ok(row * self.cols + col)
        } else {
            Err(self.out_of_bounds(row, col))
        }
    }

    fn out_of_bounds(&self, row: usize, col: usize) -> GridError {
        GridError::OutOfBounds {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        }
    }

    fn neighbors_unchecked(&self, row: usize, col: usize) -> u8 {
        let pos = CellPos::new(row, col);
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(d_row, d_col)| pos.offset(d_row, d_col))
            .filter(|p| self.contains(p.row, p.col) && self.cells[p.row * self.cols + p.col])
            .count() as u8
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::from_config(&SimConfig::default())
    }
}
