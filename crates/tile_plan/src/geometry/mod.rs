//! Geometry port used by polygon-bounded tiling.
//!
//! Planning code only talks to [`RegionShape`], so the backend that validates, buffers and
//! prepares a polygon can be swapped without touching the raster logic. The default backend is
//! [`PreparedRegion`], built on the `geo` crate.
use std::fmt::Debug;

use glam::DVec2;

pub mod region;

pub use region::PreparedRegion;

/// Axis-aligned bounds in stage coordinates. `y` grows upward, so `top >= bottom`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
}

impl Bounds {
    /// Create bounds from edges; the edges are normalized so that `left <= right` and
    /// `bottom <= top`.
    pub fn new(left: f64, bottom: f64, right: f64, top: f64) -> Self {
        Self {
            left: left.min(right),
            bottom: bottom.min(top),
            right: left.max(right),
            top: bottom.max(top),
        }
    }

    /// Rectangle of size `width x height` centered on `center`.
    pub fn centered(center: DVec2, width: f64, height: f64) -> Self {
        let half_w = width * 0.5;
        let half_h = height * 0.5;
        Self {
            left: center.x - half_w,
            bottom: center.y - half_h,
            right: center.x + half_w,
            top: center.y + half_h,
        }
    }

    /// Grow the bounds by `margin_x` on the left and right and `margin_y` on the top and bottom.
    pub fn expanded(self, margin_x: f64, margin_y: f64) -> Self {
        Self {
            left: self.left - margin_x,
            bottom: self.bottom - margin_y,
            right: self.right + margin_x,
            top: self.top + margin_y,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(
            (self.left + self.right) * 0.5,
            (self.bottom + self.top) * 0.5,
        )
    }

    /// Inclusive overlap test; rectangles that share only an edge or corner intersect.
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.left <= other.right
            && other.left <= self.right
            && self.bottom <= other.top
            && other.bottom <= self.top
    }
}

/// A prepared planar region that tiles are tested against.
///
/// Implementations are built once and queried many times, so `intersects_rect` should be cheap
/// for rectangles far away from the region.
pub trait RegionShape: Send + Sync + Debug {
    /// Axis-aligned bounds of the region.
    fn bounds(&self) -> Bounds;

    /// Whether the closed rectangle `rect` touches or overlaps the region.
    fn intersects_rect(&self, rect: &Bounds) -> bool;

    /// Vertices of the outer ring, for plotting.
    fn exterior(&self) -> Vec<DVec2>;
}
