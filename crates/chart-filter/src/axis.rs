// File: crates/chart-filter/src/axis.rs
// Summary: Horizontal axis model: label and currently visible range.

use crate::range::VisibleRange;

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    pub fn default_x() -> Self {
        Self::new("X", 0.0, 10.0)
    }

    pub fn visible_range(&self) -> VisibleRange {
        VisibleRange::new(self.min, self.max)
    }
}
