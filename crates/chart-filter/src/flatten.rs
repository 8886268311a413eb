// File: crates/chart-filter/src/flatten.rs
// Summary: Serialize points into the flat numeric layout the renderer consumes.

use crate::series::PointSlice;

/// Linear buffer of drawable points, `stride` values per point.
/// Contract: `values.len() == point_count * stride`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlatBuffer {
    values: Vec<f64>,
    stride: usize,
}

impl FlatBuffer {
    /// Empty buffer for points of `stride` slots.
    pub fn empty(stride: usize) -> Self {
        Self { values: Vec::new(), stride }
    }

    /// Values per point (`pointsize + 1`).
    pub fn stride(&self) -> usize { self.stride }
    pub fn values(&self) -> &[f64] { &self.values }
    pub fn into_values(self) -> Vec<f64> { self.values }
    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Number of points held.
    pub fn point_count(&self) -> usize {
        if self.stride == 0 { 0 } else { self.values.len() / self.stride }
    }

    pub fn points(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.values.chunks_exact(self.stride.max(1))
    }
}

/// Write the first `pointsize + 1` slots of every point, in order.
/// Each point must carry at least that many slots.
pub fn flatten(points: PointSlice<'_>, pointsize: usize) -> FlatBuffer {
    let stride = pointsize + 1;
    debug_assert!(stride <= points.arity(), "pointsize {pointsize} exceeds arity {}", points.arity());
    let mut values = Vec::with_capacity(points.len() * stride);
    for p in points {
        values.extend_from_slice(&p[..stride]);
    }
    FlatBuffer { values, stride }
}
