//! Visiting order for planned positions.
//!
//! Two independent concepts live here:
//! - [`OrderMode`]: deterministic traversal of a `rows x cols` raster, yielding `(row, col)` pairs.
//! - [`PointOrdering`]: an opaque strategy that permutes a set of free points, used by random
//!   plans. Path heuristics plug in through this trait.
use std::fmt;

use mint::Vector2;

pub mod indices;

pub use indices::GridIndices;

/// Traversal order of a grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum OrderMode {
    /// Left to right along every row, top row first.
    RowWise,
    /// Top to bottom along every column, left column first.
    ColumnWise,
    /// Row-wise, reversing direction on every other row.
    #[default]
    RowWiseSnake,
    /// Column-wise, reversing direction on every other column.
    ColumnWiseSnake,
    /// Outward square spiral starting at the central cell.
    Spiral,
}

impl OrderMode {
    /// Iterate `(row, col)` pairs of a `rows x cols` grid in this order.
    pub fn generate_indices(self, rows: usize, cols: usize) -> GridIndices {
        GridIndices::new(self, rows, cols)
    }
}

/// Strategy that reorders free points into a visiting sequence.
///
/// Implementations must return a permutation of `points`: nothing added, removed or duplicated.
/// `start_at` is the index (into `points`) of the point the path should begin with.
pub trait PointOrdering: Send + Sync {
    fn order(&self, points: Vec<Vector2<f64>>, start_at: usize) -> Vec<Vector2<f64>>;
}

/// Keeps points in the order they were generated.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unordered;

impl PointOrdering for Unordered {
    fn order(&self, points: Vec<Vector2<f64>>, _start_at: usize) -> Vec<Vector2<f64>> {
        points
    }
}

/// A [`PointOrdering`] that forwards to a user-provided closure.
pub struct FnOrdering<F>
where
    F: Fn(Vec<Vector2<f64>>, usize) -> Vec<Vector2<f64>> + Send + Sync,
{
    f: F,
}

impl<F> FnOrdering<F>
where
    F: Fn(Vec<Vector2<f64>>, usize) -> Vec<Vector2<f64>> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> PointOrdering for FnOrdering<F>
where
    F: Fn(Vec<Vector2<f64>>, usize) -> Vec<Vector2<f64>> + Send + Sync,
{
    #[inline]
    fn order(&self, points: Vec<Vector2<f64>>, start_at: usize) -> Vec<Vector2<f64>> {
        (self.f)(points, start_at)
    }
}

impl<F> fmt::Debug for FnOrdering<F>
where
    F: Fn(Vec<Vector2<f64>>, usize) -> Vec<Vector2<f64>> + Send + Sync,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnOrdering")
    }
}
