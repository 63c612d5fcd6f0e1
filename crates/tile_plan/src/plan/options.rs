//! Shared plan options: tile overlap, field of view, traversal order and anchoring.
use crate::error::{ensure_positive, Error, Result};
use crate::ordering::OrderMode;

/// Percentage overlap between neighbouring tiles along x and y.
///
/// Converts from a scalar (applied to both axes), a tuple or a two-element array.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "OverlapRepr", into = "(f64, f64)"))]
pub struct Overlap {
    pub x: f64,
    pub y: f64,
}

impl Overlap {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Overlap must be finite and below 100% so that steps stay positive.
    /// Negative values leave gaps between tiles.
    pub fn validate(&self) -> Result<()> {
        for (axis, value) in [("x", self.x), ("y", self.y)] {
            if !value.is_finite() || value >= 100.0 {
                return Err(Error::InvalidConfig(format!(
                    "overlap {axis} must be finite and < 100, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Distance between neighbouring tile centers for a given field of view.
    pub fn step_size(&self, fov_width: f64, fov_height: f64) -> (f64, f64) {
        let dx = fov_width - (fov_width * self.x) / 100.0;
        let dy = fov_height - (fov_height * self.y) / 100.0;
        (dx, dy)
    }
}

impl From<f64> for Overlap {
    fn from(value: f64) -> Self {
        Self::new(value, value)
    }
}

impl From<(f64, f64)> for Overlap {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Overlap {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Overlap> for (f64, f64) {
    fn from(value: Overlap) -> Self {
        (value.x, value.y)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum OverlapRepr {
    Scalar(f64),
    Pair(f64, f64),
}

#[cfg(feature = "serde")]
impl From<OverlapRepr> for Overlap {
    fn from(value: OverlapRepr) -> Self {
        match value {
            OverlapRepr::Scalar(v) => Overlap::from(v),
            OverlapRepr::Pair(x, y) => Overlap::new(x, y),
        }
    }
}

/// Field of view of one camera frame in stage units.
///
/// Either side may be unknown to the plan; the instrument then supplies it later through
/// `with_fov` on the plan.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fov {
    #[cfg_attr(feature = "serde", serde(default))]
    pub width: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub height: Option<f64>,
}

impl Fov {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    pub fn unset() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(w) = self.width {
            ensure_positive("fov_width", w)?;
        }
        if let Some(h) = self.height {
            ensure_positive("fov_height", h)?;
        }
        Ok(())
    }

    /// Both sides, if both are known.
    pub fn both(&self) -> Option<(f64, f64)> {
        self.width.zip(self.height)
    }

    /// Sides with a unit fallback for unknown values.
    pub fn or_unit(&self) -> (f64, f64) {
        (self.width.unwrap_or(1.0), self.height.unwrap_or(1.0))
    }
}

/// Point of the grid that the relative coordinates are anchored to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum RelativeTo {
    /// Grid is centered on the origin.
    #[default]
    Center,
    /// First tile center sits on the origin and the grid extends right and down.
    TopLeft,
}

/// Options shared by all grid plans.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridOptions {
    #[cfg_attr(feature = "serde", serde(default))]
    pub overlap: Overlap,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mode: OrderMode,
    #[cfg_attr(feature = "serde", serde(default, flatten))]
    pub fov: Fov,
}

impl GridOptions {
    /// Zero overlap, row-wise snake order, unknown field of view.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overlap(mut self, overlap: impl Into<Overlap>) -> Self {
        self.overlap = overlap.into();
        self
    }

    pub fn with_mode(mut self, mode: OrderMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_fov(mut self, width: f64, height: f64) -> Self {
        self.fov = Fov::new(width, height);
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.overlap.validate()?;
        self.fov.validate()
    }
}
