//! Output record of every plan.
use glam::DVec2;

/// A planned stage position.
///
/// `row` and `col` are set for grid-derived positions only. `name` is the zero-padded emission
/// index and is meant for display, not identity.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub row: Option<usize>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub col: Option<usize>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
}

impl Position {
    /// An unnamed position without grid indices.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            row: None,
            col: None,
            name: String::new(),
        }
    }

    pub(crate) fn grid_cell(index: usize, x: f64, y: f64, row: usize, col: usize) -> Self {
        Self {
            x,
            y,
            row: Some(row),
            col: Some(col),
            name: position_name(index),
        }
    }

    pub(crate) fn point(index: usize, p: DVec2) -> Self {
        Self {
            x: p.x,
            y: p.y,
            row: None,
            col: None,
            name: position_name(index),
        }
    }

    pub fn xy(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

/// Emission index padded to four digits.
pub fn position_name(index: usize) -> String {
    format!("{index:04}")
}
