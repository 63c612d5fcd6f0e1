//! Grid geometry shared by every tiling variant.
//!
//! A variant only decides how many rows and columns it has and where the first tile center
//! sits. Step sizes and the lazy emission of [`Position`]s are implemented once on
//! [`GridLayout`].
use tracing::debug;

use crate::error::{Error, Result};
use crate::ordering::{GridIndices, OrderMode};
use crate::plan::options::{GridOptions, RelativeTo};
use crate::plan::position::Position;

/// Contract implemented by each grid variant.
pub trait GridLayout {
    /// Variant name used in error messages.
    fn plan_name(&self) -> &'static str;

    fn options(&self) -> &GridOptions;

    /// Number of rows for a vertical step `dy`.
    fn row_count(&self, dy: f64) -> usize;

    /// Number of columns for a horizontal step `dx`.
    fn col_count(&self, dx: f64) -> usize;

    /// X coordinate of column 0.
    fn x_offset(&self, dx: f64) -> f64;

    /// Y coordinate of row 0. Rows grow downward, so later rows have smaller y.
    fn y_offset(&self, dy: f64) -> f64;

    /// Whether the number of positions depends on a known field of view.
    fn requires_fov(&self) -> bool;

    /// Distance between neighbouring tile centers.
    fn step_size(&self, fov_width: f64, fov_height: f64) -> (f64, f64) {
        self.options().overlap.step_size(fov_width, fov_height)
    }

    /// Resolve steps, counts and offsets, falling back to a unit field of view.
    fn frame(&self) -> GridFrame {
        let (fov_w, fov_h) = self.options().fov.or_unit();
        let (dx, dy) = self.step_size(fov_w, fov_h);
        let frame = GridFrame {
            dx,
            dy,
            rows: self.row_count(dy),
            cols: self.col_count(dx),
            x0: self.x_offset(dx),
            y0: self.y_offset(dy),
        };
        debug!(plan = self.plan_name(), ?frame, "resolved grid frame");
        frame
    }

    /// `rows * cols`, failing when the count depends on an unknown field of view or does not fit
    /// in `usize`. Variants that filter the raster override this with the retained count.
    fn grid_size(&self) -> Result<usize> {
        if self.requires_fov() && self.options().fov.both().is_none() {
            return Err(Error::MissingFov {
                plan: self.plan_name(),
            });
        }
        self.frame().cell_count()
    }

    /// Lazily emit every grid position, in `order` or the configured mode.
    fn iter_grid_positions(&self, order: Option<OrderMode>) -> GridPositions {
        let mode = order.unwrap_or(self.options().mode);
        GridPositions::new(self.frame(), mode)
    }
}

/// Resolved geometry of one grid traversal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridFrame {
    pub dx: f64,
    pub dy: f64,
    pub rows: usize,
    pub cols: usize,
    pub x0: f64,
    pub y0: f64,
}

impl GridFrame {
    /// `rows * cols`, or an error if the product overflows.
    pub fn cell_count(&self) -> Result<usize> {
        self.rows.checked_mul(self.cols).ok_or_else(|| {
            Error::InvalidConfig(format!(
                "grid of {} x {} tiles is too large to count",
                self.rows, self.cols
            ))
        })
    }

    /// Stage coordinates of the tile center at `(row, col)`.
    pub fn cell_center(&self, row: usize, col: usize) -> (f64, f64) {
        (
            self.x0 + col as f64 * self.dx,
            self.y0 - row as f64 * self.dy,
        )
    }
}

/// Lazy, finite iterator over the positions of a grid.
#[derive(Clone, Debug)]
pub struct GridPositions {
    frame: GridFrame,
    indices: GridIndices,
    emitted: usize,
}

impl GridPositions {
    pub fn new(frame: GridFrame, mode: OrderMode) -> Self {
        Self {
            frame,
            indices: mode.generate_indices(frame.rows, frame.cols),
            emitted: 0,
        }
    }

    pub fn frame(&self) -> &GridFrame {
        &self.frame
    }
}

impl Iterator for GridPositions {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        let (row, col) = self.indices.next()?;
        let (x, y) = self.frame.cell_center(row, col);
        let pos = Position::grid_cell(self.emitted, x, y, row, col);
        self.emitted += 1;
        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl ExactSizeIterator for GridPositions {}

/// Tiles needed along one axis so that the outer tile edges cover `span`.
///
/// Without a field of view the span is simply stepped through, including both ends.
pub(crate) fn span_count(span: f64, step: f64, fov: Option<f64>) -> usize {
    match fov {
        None => ((span + step) / step).ceil() as usize,
        Some(fov) if span <= fov => 1,
        Some(fov) => ((span - fov) / step).ceil() as usize + 1,
    }
}

/// X of column 0 for a grid of `count` columns anchored at `relative_to`.
pub(crate) fn anchored_x(count: usize, dx: f64, relative_to: RelativeTo) -> f64 {
    match relative_to {
        RelativeTo::Center => -((count.saturating_sub(1)) as f64 * dx) / 2.0,
        RelativeTo::TopLeft => 0.0,
    }
}

/// Y of row 0 for a grid of `count` rows anchored at `relative_to`.
pub(crate) fn anchored_y(count: usize, dy: f64, relative_to: RelativeTo) -> f64 {
    match relative_to {
        RelativeTo::Center => (count.saturating_sub(1)) as f64 * dy / 2.0,
        RelativeTo::TopLeft => 0.0,
    }
}
