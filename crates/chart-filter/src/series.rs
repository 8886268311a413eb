// File: crates/chart-filter/src/series.rs
// Summary: Point storage with a runtime arity, borrowed point views, and the Series model.
// Notes:
// - Points are stored flat (`arity` values per point) so the filter never
//   touches nested allocations. Slot 0 is x, slot 1 is y, the rest are
//   auxiliary values (error bars, stacking data) that ride along with y.
// - A series is expected to be sorted by x. Construction does not check it.

use crate::error::{FilterError, Result};

/// Owned, fixed-arity point sequence.
/// Contract: `arity >= 2` and `values.len() % arity == 0`.
#[derive(Clone, Debug, PartialEq)]
pub struct Points {
    values: Vec<f64>,
    arity: usize,
}

impl Points {
    /// Empty point sequence with `arity` slots per point.
    pub fn new(arity: usize) -> Result<Self> {
        check_arity(arity)?;
        Ok(Self { values: Vec::new(), arity })
    }

    /// Wrap an already flattened buffer.
    pub fn from_flat(values: Vec<f64>, arity: usize) -> Result<Self> {
        check_arity(arity)?;
        if values.len() % arity != 0 {
            return Err(FilterError::TrailingValues { len: values.len(), arity });
        }
        Ok(Self { values, arity })
    }

    /// Build from nested rows; every row must hold exactly `arity` values.
    pub fn from_rows<I, R>(arity: usize, rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[f64]>,
    {
        let mut out = Self::new(arity)?;
        for row in rows {
            out.push(row.as_ref())?;
        }
        Ok(out)
    }

    /// Plain (x, y) pairs.
    pub fn from_xy(data: &[(f64, f64)]) -> Self {
        let mut values = Vec::with_capacity(data.len() * 2);
        for &(x, y) in data {
            values.push(x);
            values.push(y);
        }
        Self { values, arity: 2 }
    }

    pub(crate) fn with_capacity(arity: usize, points: usize) -> Self {
        debug_assert!(arity >= 2);
        Self { values: Vec::with_capacity(arity * points), arity }
    }

    /// Append one point.
    pub fn push(&mut self, point: &[f64]) -> Result<()> {
        if point.len() != self.arity {
            return Err(FilterError::RaggedPoint { index: self.len(), len: point.len(), arity: self.arity });
        }
        self.values.extend_from_slice(point);
        Ok(())
    }

    pub(crate) fn push_unchecked(&mut self, point: &[f64]) {
        debug_assert_eq!(point.len(), self.arity);
        self.values.extend_from_slice(point);
    }

    pub fn arity(&self) -> usize { self.arity }
    pub fn len(&self) -> usize { self.values.len() / self.arity }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }
    pub fn values(&self) -> &[f64] { &self.values }

    pub fn as_slice(&self) -> PointSlice<'_> {
        PointSlice { values: &self.values, arity: self.arity }
    }
}

/// Borrowed view over a contiguous run of points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointSlice<'a> {
    values: &'a [f64],
    arity: usize,
}

impl<'a> PointSlice<'a> {
    pub fn arity(&self) -> usize { self.arity }
    pub fn len(&self) -> usize { self.values.len() / self.arity }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }
    pub fn values(&self) -> &'a [f64] { self.values }

    /// Slots of point `i`. Panics when out of bounds, like slice indexing.
    pub fn point(&self, i: usize) -> &'a [f64] {
        &self.values[i * self.arity..(i + 1) * self.arity]
    }

    pub fn get(&self, i: usize) -> Option<&'a [f64]> {
        if i < self.len() { Some(self.point(i)) } else { None }
    }

    /// Horizontal coordinate of point `i`.
    #[inline]
    pub fn x(&self, i: usize) -> f64 { self.values[i * self.arity] }

    pub fn iter(&self) -> std::slice::ChunksExact<'a, f64> {
        self.values.chunks_exact(self.arity)
    }

    /// Points `lo..=hi`, clamped to the view.
    pub fn sub(&self, lo: usize, hi: usize) -> PointSlice<'a> {
        let n = self.len();
        let end = hi.saturating_add(1).min(n);
        let start = lo.min(end);
        PointSlice { values: &self.values[start * self.arity..end * self.arity], arity: self.arity }
    }

    pub fn to_points(&self) -> Points {
        Points { values: self.values.to_vec(), arity: self.arity }
    }
}

impl<'a> IntoIterator for PointSlice<'a> {
    type Item = &'a [f64];
    type IntoIter = std::slice::ChunksExact<'a, f64>;
    fn into_iter(self) -> Self::IntoIter { self.values.chunks_exact(self.arity) }
}

/// One plotted line: sorted points plus the host's declared `pointsize`,
/// the number of slots that follow x in each drawable point.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    points: Points,
    pointsize: usize,
}

impl Series {
    /// Series drawing every stored slot.
    pub fn new(points: Points) -> Self {
        let pointsize = points.arity() - 1;
        Self { points, pointsize }
    }

    /// Series drawing only the first `pointsize + 1` slots of each point.
    pub fn with_pointsize(points: Points, pointsize: usize) -> Result<Self> {
        if pointsize == 0 {
            return Err(FilterError::ArityTooSmall(pointsize + 1));
        }
        if pointsize + 1 > points.arity() {
            return Err(FilterError::PointsizeTooLarge { pointsize, arity: points.arity() });
        }
        Ok(Self { points, pointsize })
    }

    pub fn with_data(data: Vec<(f64, f64)>) -> Self {
        Self::new(Points::from_xy(&data))
    }

    pub fn points(&self) -> &Points { &self.points }
    pub fn pointsize(&self) -> usize { self.pointsize }
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// Data extent on x; `None` when empty.
    pub fn x_extent(&self) -> Option<(f64, f64)> {
        let view = self.points.as_slice();
        if view.is_empty() { return None; }
        Some((view.x(0), view.x(view.len() - 1)))
    }
}

fn check_arity(arity: usize) -> Result<()> {
    if arity < 2 { Err(FilterError::ArityTooSmall(arity)) } else { Ok(()) }
}
