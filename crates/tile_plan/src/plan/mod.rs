//! Multi-point acquisition plans: grid tilings and random point sets.
//!
//! Every plan is an immutable value. Iterating recomputes the positions from scratch, so a plan
//! can be traversed any number of times.
use crate::error::Result;
use crate::geometry::Bounds;

pub mod edges;
pub mod events;
pub mod grid;
pub mod options;
pub mod polygon;
pub mod position;
pub mod random;
pub mod rows_columns;
pub mod width_height;

pub use edges::GridFromEdges;
pub use grid::{GridFrame, GridLayout, GridPositions};
pub use options::{Fov, GridOptions, Overlap, RelativeTo};
pub use polygon::{GridFromPolygon, PolygonSpec};
pub use position::Position;
pub use random::{RandomPoints, RandomPointsSpec, StartAt};
pub use rows_columns::GridRowsColumns;
pub use width_height::GridWidthHeight;

/// Boxed position sequence returned by [`MultiPointPlan::positions`].
pub type PositionIter<'a> = Box<dyn Iterator<Item = Position> + 'a>;

/// Common surface of all plans.
pub trait MultiPointPlan {
    /// Number of positions the plan yields (an upper bound for overlap-free random plans).
    fn num_positions(&self) -> Result<usize>;

    /// Positions in visiting order.
    fn positions(&self) -> Result<PositionIter<'_>>;

    /// Whether positions are offsets from the current stage position rather than absolute.
    fn is_relative(&self) -> bool;

    /// Field of view the plan was built with.
    fn fov(&self) -> Fov;
}

macro_rules! grid_plan {
    ($ty:ty, $relative:expr) => {
        impl MultiPointPlan for $ty {
            fn num_positions(&self) -> Result<usize> {
                self.grid_size()
            }

            fn positions(&self) -> Result<PositionIter<'_>> {
                Ok(Box::new(self.iter_grid_positions(None)))
            }

            fn is_relative(&self) -> bool {
                $relative
            }

            fn fov(&self) -> Fov {
                self.options().fov
            }
        }
    };
}

grid_plan!(GridFromEdges, false);
grid_plan!(GridRowsColumns, true);
grid_plan!(GridWidthHeight, true);

impl MultiPointPlan for GridFromPolygon {
    fn num_positions(&self) -> Result<usize> {
        GridFromPolygon::num_positions(self)
    }

    fn positions(&self) -> Result<PositionIter<'_>> {
        Ok(Box::new(GridFromPolygon::positions(self)?))
    }

    fn is_relative(&self) -> bool {
        false
    }

    fn fov(&self) -> Fov {
        self.options().fov
    }
}

impl MultiPointPlan for RandomPoints {
    fn num_positions(&self) -> Result<usize> {
        Ok(RandomPoints::num_positions(self))
    }

    fn positions(&self) -> Result<PositionIter<'_>> {
        Ok(Box::new(RandomPoints::positions(self)))
    }

    fn is_relative(&self) -> bool {
        true
    }

    fn fov(&self) -> Fov {
        self.spec().fov
    }
}

/// Any of the supported plans.
#[derive(Clone, Debug)]
pub enum AnyPlan {
    Edges(GridFromEdges),
    RowsColumns(GridRowsColumns),
    WidthHeight(GridWidthHeight),
    Polygon(GridFromPolygon),
    Random(RandomPoints),
}

impl AnyPlan {
    fn inner(&self) -> &dyn MultiPointPlan {
        match self {
            AnyPlan::Edges(p) => p,
            AnyPlan::RowsColumns(p) => p,
            AnyPlan::WidthHeight(p) => p,
            AnyPlan::Polygon(p) => p,
            AnyPlan::Random(p) => p,
        }
    }

    /// The same plan with the field of view supplied by the instrument.
    pub fn with_fov(&self, width: f64, height: f64) -> Result<Self> {
        Ok(match self {
            AnyPlan::Edges(p) => AnyPlan::Edges(p.with_fov(width, height)?),
            AnyPlan::RowsColumns(p) => AnyPlan::RowsColumns(p.with_fov(width, height)?),
            AnyPlan::WidthHeight(p) => AnyPlan::WidthHeight(p.with_fov(width, height)?),
            AnyPlan::Polygon(p) => AnyPlan::Polygon(p.with_fov(width, height)?),
            AnyPlan::Random(p) => AnyPlan::Random(p.with_fov(width, height)?),
        })
    }

    /// Area a plot of this plan should frame, where the plan defines one.
    pub fn bounding_box(&self) -> Option<Bounds> {
        match self {
            AnyPlan::Edges(p) => Some(p.bounding_box()),
            AnyPlan::Polygon(p) => p.bounding_box().ok(),
            _ => None,
        }
    }
}

impl MultiPointPlan for AnyPlan {
    fn num_positions(&self) -> Result<usize> {
        self.inner().num_positions()
    }

    fn positions(&self) -> Result<PositionIter<'_>> {
        self.inner().positions()
    }

    fn is_relative(&self) -> bool {
        self.inner().is_relative()
    }

    fn fov(&self) -> Fov {
        self.inner().fov()
    }
}

macro_rules! any_plan_from {
    ($variant:ident, $ty:ty) => {
        impl From<$ty> for AnyPlan {
            fn from(value: $ty) -> Self {
                AnyPlan::$variant(value)
            }
        }
    };
}

any_plan_from!(Edges, GridFromEdges);
any_plan_from!(RowsColumns, GridRowsColumns);
any_plan_from!(WidthHeight, GridWidthHeight);
any_plan_from!(Polygon, GridFromPolygon);
any_plan_from!(Random, RandomPoints);
