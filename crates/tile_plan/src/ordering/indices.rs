//! `(row, col)` index generation for grid traversal.
use crate::ordering::OrderMode;

/// Lazy iterator over the cells of a grid in a given [`OrderMode`].
///
/// Row-wise and column-wise variants compute each pair from the emission counter. The spiral
/// walks outward from the center one step at a time, skipping cells outside the grid.
#[derive(Clone, Debug)]
pub struct GridIndices {
    mode: OrderMode,
    rows: usize,
    cols: usize,
    next: usize,
    spiral: SpiralWalk,
}

impl GridIndices {
    pub fn new(mode: OrderMode, rows: usize, cols: usize) -> Self {
        Self {
            mode,
            rows,
            cols,
            next: 0,
            spiral: SpiralWalk::new(rows, cols),
        }
    }

    /// Number of cells, saturating at `usize::MAX` for grids too large to count.
    fn total(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    fn index_at(&mut self, k: usize) -> (usize, usize) {
        match self.mode {
            OrderMode::RowWise => (k / self.cols, k % self.cols),
            OrderMode::ColumnWise => (k % self.rows, k / self.rows),
            OrderMode::RowWiseSnake => {
                let row = k / self.cols;
                let step = k % self.cols;
                let col = if row % 2 == 0 {
                    step
                } else {
                    self.cols - 1 - step
                };
                (row, col)
            }
            OrderMode::ColumnWiseSnake => {
                let col = k / self.rows;
                let step = k % self.rows;
                let row = if col % 2 == 0 {
                    step
                } else {
                    self.rows - 1 - step
                };
                (row, col)
            }
            OrderMode::Spiral => self.spiral.next_cell(),
        }
    }
}

impl Iterator for GridIndices {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total() {
            return None;
        }
        let item = self.index_at(self.next);
        self.next += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GridIndices {}

// (d_row, d_col): right, down, left, up
const DIRS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Square spiral from the central cell: right, down, left, up with leg lengths 1, 1, 2, 2, ...
///
/// Only valid while fewer than `rows * cols` cells have been taken.
#[derive(Clone, Debug)]
struct SpiralWalk {
    rows: isize,
    cols: isize,
    row: isize,
    col: isize,
    dir: usize,
    leg: usize,
    stepped: usize,
    started: bool,
}

impl SpiralWalk {
    fn new(rows: usize, cols: usize) -> Self {
        let rows = isize::try_from(rows).unwrap_or(isize::MAX);
        let cols = isize::try_from(cols).unwrap_or(isize::MAX);
        Self {
            rows,
            cols,
            row: (rows - 1) / 2,
            col: (cols - 1) / 2,
            dir: 0,
            leg: 1,
            stepped: 0,
            started: false,
        }
    }

    fn contains(&self) -> bool {
        (0..self.rows).contains(&self.row) && (0..self.cols).contains(&self.col)
    }

    fn step(&mut self) {
        let (dr, dc) = DIRS[self.dir];
        self.row += dr;
        self.col += dc;
        self.stepped += 1;
        if self.stepped == self.leg {
            self.stepped = 0;
            self.dir = (self.dir + 1) % 4;
            // legs grow after every right/left turn pair
            if self.dir % 2 == 0 {
                self.leg += 1;
            }
        }
    }

    fn next_cell(&mut self) -> (usize, usize) {
        if self.started {
            self.step();
            while !self.contains() {
                self.step();
            }
        }
        self.started = true;
        (self.row as usize, self.col as usize)
    }
}
