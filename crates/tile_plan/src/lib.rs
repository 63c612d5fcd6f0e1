#![forbid(unsafe_code)]
//! tile_plan: spatial sampling plans for scanning-stage acquisitions.
//!
//! Modules:
//! - plan: grid tilings (edges, rows x columns, width x height, polygon) and random point plans
//! - geometry: bounds and the prepared-region port used by polygon tiling
//! - ordering: grid traversal modes and the point reordering contract
//! - sampling: shape samplers for random plans (ellipse, rectangle)
pub mod error;
pub mod geometry;
pub mod ordering;
pub mod plan;
pub mod sampling;

/// Convenient re-exports for common types. Import with `use tile_plan::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Bounds, PreparedRegion, RegionShape};
    pub use crate::ordering::{FnOrdering, OrderMode, PointOrdering, Unordered};
    pub use crate::plan::events::{EventSink, FnSink, PlanEvent, VecSink};
    pub use crate::plan::random::MAX_RANDOM_CANDIDATES;
    pub use crate::plan::{
        AnyPlan, Fov, GridFromEdges, GridFromPolygon, GridLayout, GridOptions, GridRowsColumns,
        GridWidthHeight, MultiPointPlan, Overlap, PolygonSpec, Position, RandomPoints,
        RandomPointsSpec, RelativeTo, StartAt,
    };
    pub use crate::sampling::Shape;
}
