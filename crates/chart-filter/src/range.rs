// File: crates/chart-filter/src/range.rs
// Summary: Locate the index window of a sorted series that covers a visible x range.

use crate::series::PointSlice;

/// Closed interval on the x axis. `min <= max` is assumed, not checked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibleRange {
    pub min: f64,
    pub max: f64,
}

impl VisibleRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }
}

/// Inclusive index pair `[lo, hi]` into a series.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexWindow {
    pub lo: usize,
    pub hi: usize,
}

impl IndexWindow {
    /// Number of points covered (never zero).
    pub const fn len(&self) -> usize { self.hi - self.lo + 1 }
}

/// Find the points of `points` that fall inside `range`, plus at most one
/// neighbour on each side so a line drawn to the window edge is not cut short.
/// Returns `None` when the range lies entirely left or right of the data.
pub fn locate(points: PointSlice<'_>, range: VisibleRange) -> Option<IndexWindow> {
    if points.is_empty() {
        return None;
    }
    let last = points.len() - 1;
    if range.max < points.x(0) || range.min > points.x(last) {
        return None;
    }
    let lo = lower_bound_index(points, range.min);
    let hi = upper_bound_index(points, range.max);
    Some(IndexWindow { lo, hi })
}

/// Index of the greatest x `<= value`, taking the first of equal x values
/// so every point sitting on `value` is kept. 0 when `value` precedes every
/// point (or when `points` is empty).
pub fn lower_bound_index(points: PointSlice<'_>, value: f64) -> usize {
    if points.is_empty() {
        return 0;
    }
    let (lo, hi) = narrow(points, |x| x < value);
    if points.x(lo) >= value {
        lo
    } else if points.x(hi) <= value {
        hi
    } else {
        lo
    }
}

/// Index of the smallest x `>= value`, taking the last of equal x values.
/// The last index when `value` is past every point.
pub fn upper_bound_index(points: PointSlice<'_>, value: f64) -> usize {
    if points.is_empty() {
        return 0;
    }
    let (lo, hi) = narrow(points, |x| x <= value);
    if points.x(hi) <= value {
        hi
    } else if points.x(lo) >= value {
        lo
    } else {
        hi
    }
}

/// Shrink `[0, len - 1]` to adjacent indices, moving `lo` up while
/// `below(x[mid])` holds and `hi` down otherwise. The ends themselves are
/// never tested, so callers check both.
fn narrow(points: PointSlice<'_>, below: impl Fn(f64) -> bool) -> (usize, usize) {
    let mut lo = 0usize;
    let mut hi = points.len() - 1;
    while hi - lo > 1 {
        // round((lo + hi) / 2), halves rounding up
        let mid = (lo + hi + 1) / 2;
        if below(points.x(mid)) {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    (lo, hi)
}
