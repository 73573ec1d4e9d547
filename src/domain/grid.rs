use std::ops::Range;

use super::CellState;
use rand::Rng;
use rayon::prelude::*;

/// Grids with at least this many allocated cells evolve on the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 200 * 200;

/// Grid is the bounded Game of Life world.
///
/// The visible area spans rows `0..height` and columns `0..width`; a margin
/// of dead-initialised cells surrounds it on every side so patterns can
/// leave the viewport without hitting a wall. Addressable coordinates are
/// therefore `-margin..height + margin` by `-margin..width + margin`.
/// Anything beyond that reads as dead.
///
/// Evolution is double-buffered: the next generation is written into a
/// scratch buffer from an untouched snapshot and swapped in afterwards.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    margin: usize,
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
    scratch: Vec<CellState>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize, margin: usize) -> Self {
        let rows = height + 2 * margin;
        let cols = width + 2 * margin;
        Self {
            width,
            height,
            margin,
            rows,
            cols,
            cells: vec![CellState::Dead; rows * cols],
            scratch: Vec::new(),
        }
    }

    /// Visible width in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Visible height in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn margin(&self) -> usize {
        self.margin
    }

    /// Total number of allocated cells, margin included
    pub const fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every addressable row, margin included
    pub fn row_range(&self) -> Range<i32> {
        -(self.margin as i32)..(self.height + self.margin) as i32
    }

    /// Every addressable column, margin included
    pub fn col_range(&self) -> Range<i32> {
        -(self.margin as i32)..(self.width + self.margin) as i32
    }

    /// Whether `(row, col)` lies inside the allocated array
    pub fn contains(&self, row: i32, col: i32) -> bool {
        self.index(row, col).is_some()
    }

    /// Whether `(row, col)` lies inside the visible area
    pub fn is_visible(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    /// Convert world coordinates to a flat row-major index
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        let r = usize::try_from(i64::from(row) + self.margin as i64).ok()?;
        let c = usize::try_from(i64::from(col) + self.margin as i64).ok()?;
        (r < self.rows && c < self.cols).then_some(r * self.cols + c)
    }

    /// Get cell at position. Coordinates outside the array read as dead.
    pub fn get(&self, row: i32, col: i32) -> CellState {
        self.index(row, col)
            .map_or(CellState::Dead, |idx| self.cells[idx])
    }

    /// Set cell at position; out-of-bounds writes are ignored
    pub fn set(&mut self, row: i32, col: i32, state: CellState) {
        if let Some(idx) = self.index(row, col) {
            self.cells[idx] = state;
        }
    }

    /// Flip a cell between alive and dead; out-of-bounds is ignored
    pub fn toggle(&mut self, row: i32, col: i32) {
        if let Some(idx) = self.index(row, col) {
            self.cells[idx] = self.cells[idx].toggle();
        }
    }

    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Live neighbours of the cell at array position `(r, c)`.
    /// Positions past the array edge count as dead.
    fn count_live_neighbors(&self, r: usize, c: usize) -> u8 {
        (-1isize..=1)
            .flat_map(|dr| (-1isize..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .filter_map(|(dr, dc)| {
                let nr = r.checked_add_signed(dr).filter(|&nr| nr < self.rows)?;
                let nc = c.checked_add_signed(dc).filter(|&nc| nc < self.cols)?;
                Some(self.cells[nr * self.cols + nc])
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    fn next_state(&self, r: usize, c: usize) -> CellState {
        self.cells[r * self.cols + c].evolve(self.count_live_neighbors(r, c))
    }

    /// Advance one generation, picking the parallel path for large grids
    pub fn advance(&mut self) {
        if self.len() >= PARALLEL_THRESHOLD {
            self.advance_parallel();
        } else {
            self.advance_serial();
        }
    }

    /// Single-threaded evolution
    pub fn advance_serial(&mut self) {
        let mut next = std::mem::take(&mut self.scratch);
        next.clear();
        next.extend(
            (0..self.rows)
                .flat_map(|r| (0..self.cols).map(move |c| (r, c)))
                .map(|(r, c)| self.next_state(r, c)),
        );
        self.commit(next);
    }

    /// Row-parallel evolution using rayon.
    /// Produces exactly the same generation as [`Grid::advance_serial`].
    pub fn advance_parallel(&mut self) {
        if self.is_empty() {
            return;
        }
        let mut next = std::mem::take(&mut self.scratch);
        next.resize(self.cells.len(), CellState::Dead);

        let snapshot = &*self;
        next.par_chunks_mut(snapshot.cols)
            .enumerate()
            .for_each(|(r, row)| {
                row.iter_mut()
                    .enumerate()
                    .for_each(|(c, slot)| *slot = snapshot.next_state(r, c));
            });
        self.commit(next);
    }

    /// Swap the freshly computed generation in; the old one becomes scratch
    fn commit(&mut self, next: Vec<CellState>) {
        self.scratch = std::mem::replace(&mut self.cells, next);
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = CellState::Dead);
    }

    /// Seed the visible area at random. Each visible cell comes alive with
    /// probability `density`; the margin is cleared.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        let density = if density.is_finite() { density.clamp(0.0, 1.0) } else { 0.0 };
        for row in self.row_range() {
            for col in self.col_range() {
                let alive = self.is_visible(row, col) && rng.random_bool(density);
                self.set(row, col, alive.into());
            }
        }
    }

    /// Iterate over the coordinates of all live cells, margin included
    pub fn iter_alive(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let margin = self.margin as i32;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(move |(idx, _)| {
                let row = (idx / self.cols) as i32 - margin;
                let col = (idx % self.cols) as i32 - margin;
                (row, col)
            })
    }
}
