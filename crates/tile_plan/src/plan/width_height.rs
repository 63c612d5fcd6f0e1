//! Grid covering at least a given width and height.
use crate::error::{ensure_positive, Result};
use crate::plan::grid::{anchored_x, anchored_y, GridLayout};
use crate::plan::options::{GridOptions, RelativeTo};

/// Positions relative to the current stage position, covering at least `width x height`.
///
/// The number of tiles is rounded up, so the covered area may be larger than requested.
#[derive(Clone, Debug, PartialEq)]
pub struct GridWidthHeight {
    width: f64,
    height: f64,
    relative_to: RelativeTo,
    options: GridOptions,
}

impl GridWidthHeight {
    pub fn try_new(
        width: f64,
        height: f64,
        relative_to: RelativeTo,
        options: GridOptions,
    ) -> Result<Self> {
        ensure_positive("width", width)?;
        ensure_positive("height", height)?;
        options.validate()?;
        Ok(Self {
            width,
            height,
            relative_to,
            options,
        })
    }

    /// The same plan with the field of view supplied by the instrument.
    pub fn with_fov(&self, width: f64, height: f64) -> Result<Self> {
        Self::try_new(
            self.width,
            self.height,
            self.relative_to,
            self.options.with_fov(width, height),
        )
    }

    pub fn relative_to(&self) -> RelativeTo {
        self.relative_to
    }
}

impl GridLayout for GridWidthHeight {
    fn plan_name(&self) -> &'static str {
        "GridWidthHeight"
    }

    fn options(&self) -> &GridOptions {
        &self.options
    }

    fn row_count(&self, dy: f64) -> usize {
        (self.height / dy).ceil() as usize
    }

    fn col_count(&self, dx: f64) -> usize {
        (self.width / dx).ceil() as usize
    }

    fn x_offset(&self, dx: f64) -> f64 {
        anchored_x(self.col_count(dx), dx, self.relative_to)
    }

    fn y_offset(&self, dy: f64) -> f64 {
        anchored_y(self.row_count(dy), dy, self.relative_to)
    }

    fn requires_fov(&self) -> bool {
        true
    }
}
