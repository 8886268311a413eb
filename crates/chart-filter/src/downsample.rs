// File: crates/chart-filter/src/downsample.rs
// Summary: Fixed-size bucket averaging that reduces a point run to at most one point per pixel.

use crate::series::{PointSlice, Points};

/// Reduce `points` to at most `target` points by averaging fixed-size buckets
/// of consecutive points. Every slot (x, y and auxiliary values) is averaged
/// independently. Input that already fits is returned unchanged.
///
/// Bucket `i` starts at `round(i * ratio)` and spans `round(ratio)` points,
/// where `ratio = len / target`. The last bucket is clamped to the input.
pub fn average_buckets(points: PointSlice<'_>, target: usize) -> Points {
    let n = points.len();
    if n <= target {
        return points.to_points();
    }
    let arity = points.arity();
    if target == 0 {
        return Points::with_capacity(arity, 0);
    }

    let ratio = n as f64 / target as f64;
    let step = ratio.round() as usize;
    let mut out = Points::with_capacity(arity, target);
    let mut acc = vec![0.0f64; arity];

    for i in 0..target {
        let start = (i as f64 * ratio).round() as usize;
        if start >= n { break; }
        let end = (start + step).min(n);
        if end == start {
            // zero-width bucket: keep the source point as is
            out.push_unchecked(points.point(start));
            continue;
        }

        // Divide per member rather than once at the end to keep partial sums small.
        let k = (end - start) as f64;
        acc.fill(0.0);
        for p in points.sub(start, end - 1) {
            for (a, v) in acc.iter_mut().zip(p) {
                *a += v / k;
            }
        }
        out.push_unchecked(&acc);
    }
    out
}
