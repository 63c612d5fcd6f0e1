//! Grid bounded by stage edges.
use crate::error::{ensure_finite, Result};
use crate::geometry::Bounds;
use crate::plan::grid::{span_count, GridLayout};
use crate::plan::options::GridOptions;

/// Absolute stage positions covering the area between `top`, `left`, `bottom` and `right`.
///
/// The edges are the *outer* edges of the imaged area: the first tile's left edge sits on
/// `left` and its top edge on `top`.
#[derive(Clone, Debug, PartialEq)]
pub struct GridFromEdges {
    top: f64,
    left: f64,
    bottom: f64,
    right: f64,
    options: GridOptions,
}

impl GridFromEdges {
    pub fn try_new(
        top: f64,
        left: f64,
        bottom: f64,
        right: f64,
        options: GridOptions,
    ) -> Result<Self> {
        ensure_finite("top", top)?;
        ensure_finite("left", left)?;
        ensure_finite("bottom", bottom)?;
        ensure_finite("right", right)?;
        options.validate()?;
        Ok(Self {
            top,
            left,
            bottom,
            right,
            options,
        })
    }

    /// The same plan with the field of view supplied by the instrument.
    pub fn with_fov(&self, width: f64, height: f64) -> Result<Self> {
        Self::try_new(
            self.top,
            self.left,
            self.bottom,
            self.right,
            self.options.with_fov(width, height),
        )
    }

    /// Edges as given, for plotting.
    pub fn bounding_box(&self) -> Bounds {
        Bounds::new(self.left, self.bottom, self.right, self.top)
    }
}

impl GridLayout for GridFromEdges {
    fn plan_name(&self) -> &'static str {
        "GridFromEdges"
    }

    fn options(&self) -> &GridOptions {
        &self.options
    }

    fn row_count(&self, dy: f64) -> usize {
        span_count((self.top - self.bottom).abs(), dy, self.options.fov.height)
    }

    fn col_count(&self, dx: f64) -> usize {
        span_count((self.right - self.left).abs(), dx, self.options.fov.width)
    }

    fn x_offset(&self, _dx: f64) -> f64 {
        // center half a fov in from the left edge
        self.left.min(self.right) + self.options.fov.width.unwrap_or(0.0) / 2.0
    }

    fn y_offset(&self, _dy: f64) -> f64 {
        // center half a fov down from the top edge
        self.top.max(self.bottom) - self.options.fov.height.unwrap_or(0.0) / 2.0
    }

    fn requires_fov(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::ordering::OrderMode;

    fn xy(plan: &GridFromEdges) -> Vec<(f64, f64)> {
        plan.iter_grid_positions(None).map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn square_area_snake_order() {
        let plan =
            GridFromEdges::try_new(100.0, 0.0, 0.0, 100.0, GridOptions::new().with_fov(50.0, 50.0))
                .unwrap();
        assert_eq!(plan.grid_size().unwrap(), 4);
        assert_eq!(
            xy(&plan),
            vec![(25.0, 75.0), (75.0, 75.0), (75.0, 25.0), (25.0, 25.0)]
        );
    }

    #[test]
    fn swapped_edges_give_same_grid() {
        let opts = GridOptions::new().with_fov(50.0, 50.0);
        let a = GridFromEdges::try_new(100.0, 0.0, 0.0, 100.0, opts).unwrap();
        let b = GridFromEdges::try_new(0.0, 100.0, 100.0, 0.0, opts).unwrap();
        assert_eq!(xy(&a), xy(&b));
        assert_eq!(a.bounding_box(), b.bounding_box());
    }

    #[test]
    fn zero_overlap_steps_by_exactly_one_fov() {
        let plan = GridFromEdges::try_new(
            0.0,
            0.0,
            -30.0,
            95.0,
            GridOptions::new()
                .with_fov(20.0, 10.0)
                .with_mode(OrderMode::RowWise),
        )
        .unwrap();
        let frame = plan.frame();
        // ceil((95 - 20) / 20) + 1 = 5, ceil((30 - 10) / 10) + 1 = 3
        assert_eq!((frame.rows, frame.cols), (3, 5));
        let first_row: Vec<f64> = plan
            .iter_grid_positions(None)
            .take(frame.cols)
            .map(|p| p.x)
            .collect();
        for pair in first_row.windows(2) {
            assert_eq!(pair[1] - pair[0], 20.0);
        }
        // the last tile reaches (or just passes) the right edge
        let last_right_edge = first_row[first_row.len() - 1] + 10.0;
        assert!(last_right_edge >= 95.0 && last_right_edge - 95.0 < 20.0);
    }

    #[test]
    fn overlap_adds_tiles() {
        let plain =
            GridFromEdges::try_new(100.0, 0.0, 0.0, 100.0, GridOptions::new().with_fov(50.0, 50.0))
                .unwrap();
        let overlapped = GridFromEdges::try_new(
            100.0,
            0.0,
            0.0,
            100.0,
            GridOptions::new().with_fov(50.0, 50.0).with_overlap(10.0),
        )
        .unwrap();
        assert_eq!(plain.grid_size().unwrap(), 4);
        assert_eq!(overlapped.grid_size().unwrap(), 9);
    }

    #[test]
    fn count_requires_fov_but_iteration_falls_back() {
        let plan = GridFromEdges::try_new(2.0, 0.0, 0.0, 3.0, GridOptions::new()).unwrap();
        assert!(matches!(
            plan.grid_size(),
            Err(Error::MissingFov {
                plan: "GridFromEdges"
            })
        ));
        // unit steps, both edges included
        assert_eq!(plan.iter_grid_positions(None).count(), 3 * 4);

        let with_fov = plan.with_fov(1.0, 1.0).unwrap();
        assert_eq!(with_fov.grid_size().unwrap(), 2 * 3);
    }

    #[test]
    fn huge_span_fails_to_count_instead_of_overflowing() {
        let plan =
            GridFromEdges::try_new(1e10, 0.0, 0.0, 1e10, GridOptions::new().with_fov(1.0, 1.0))
                .unwrap();
        assert!(matches!(plan.grid_size(), Err(Error::InvalidConfig(_))));
        // emission stays lazy
        let first = plan.iter_grid_positions(None).next().unwrap();
        assert_eq!((first.x, first.y), (0.5, 1e10 - 0.5));
    }

    #[test]
    fn rejects_invalid_parameters() {
        assert!(GridFromEdges::try_new(f64::NAN, 0.0, 0.0, 1.0, GridOptions::new()).is_err());
        assert!(GridFromEdges::try_new(
            1.0,
            0.0,
            0.0,
            1.0,
            GridOptions::new().with_overlap(100.0)
        )
        .is_err());
        assert!(GridFromEdges::try_new(1.0, 0.0, 0.0, 1.0, GridOptions::new().with_fov(0.0, 1.0))
            .is_err());
    }
}
