//! Grid with a fixed number of rows and columns.
use crate::error::{Error, Result};
use crate::plan::grid::{anchored_x, anchored_y, GridLayout};
use crate::plan::options::{GridOptions, RelativeTo};

/// Positions relative to the current stage position, laid out as `rows x columns` tiles.
#[derive(Clone, Debug, PartialEq)]
pub struct GridRowsColumns {
    rows: usize,
    columns: usize,
    relative_to: RelativeTo,
    options: GridOptions,
}

impl GridRowsColumns {
    pub fn try_new(
        rows: usize,
        columns: usize,
        relative_to: RelativeTo,
        options: GridOptions,
    ) -> Result<Self> {
        if rows < 1 || columns < 1 {
            return Err(Error::InvalidConfig(format!(
                "rows and columns must be >= 1, got {rows}x{columns}"
            )));
        }
        options.validate()?;
        Ok(Self {
            rows,
            columns,
            relative_to,
            options,
        })
    }

    /// The same plan with the field of view supplied by the instrument.
    pub fn with_fov(&self, width: f64, height: f64) -> Result<Self> {
        Self::try_new(
            self.rows,
            self.columns,
            self.relative_to,
            self.options.with_fov(width, height),
        )
    }

    pub fn relative_to(&self) -> RelativeTo {
        self.relative_to
    }
}

impl GridLayout for GridRowsColumns {
    fn plan_name(&self) -> &'static str {
        "GridRowsColumns"
    }

    fn options(&self) -> &GridOptions {
        &self.options
    }

    fn row_count(&self, _dy: f64) -> usize {
        self.rows
    }

    fn col_count(&self, _dx: f64) -> usize {
        self.columns
    }

    fn x_offset(&self, dx: f64) -> f64 {
        anchored_x(self.columns, dx, self.relative_to)
    }

    fn y_offset(&self, dy: f64) -> f64 {
        anchored_y(self.rows, dy, self.relative_to)
    }

    fn requires_fov(&self) -> bool {
        false
    }
}
