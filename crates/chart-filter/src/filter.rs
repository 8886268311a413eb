// File: crates/chart-filter/src/filter.rs
// Summary: The averaging filter plugin: clip to the visible window, bucket-average, flatten.

use tracing::{debug, trace};

use crate::downsample::average_buckets;
use crate::flatten::{flatten, FlatBuffer};
use crate::options::PlotOptions;
use crate::plugin::{DrawContext, DrawSeriesHook, Hooks, Plugin};
use crate::range::{locate, VisibleRange};
use crate::series::Series;

/// Registers [`AverageFilter`] when `filter` is `"average"`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FilterPlugin;

impl Plugin for FilterPlugin {
    fn name(&self) -> &'static str { "filter" }
    fn version(&self) -> &'static str { "0.1" }

    fn process_options(&self, options: &PlotOptions, hooks: &mut Hooks) {
        if options.filter.is_enabled() {
            debug!(mode = %options.filter, "registering series filter");
            hooks.push_draw_series(AverageFilter);
        }
    }
}

/// Draw hook replacing each series with its averaged visible points.
#[derive(Clone, Copy, Debug, Default)]
pub struct AverageFilter;

impl DrawSeriesHook for AverageFilter {
    fn id(&self) -> &'static str { "average_filter" }

    fn draw_series(&self, ctx: &DrawContext<'_>, series: &Series) -> Option<FlatBuffer> {
        Some(filter_series(series, ctx.visible_range(), ctx.plot_width))
    }
}

/// Drawable buffer for `series` within `range` at `plot_width` pixels.
/// Points outside the window are dropped (keeping one neighbour per side);
/// when more points remain than pixels, buckets are averaged down to
/// `plot_width` points. A window missing the data yields an empty buffer.
pub fn filter_series(series: &Series, range: VisibleRange, plot_width: usize) -> FlatBuffer {
    let pointsize = series.pointsize();
    let all = series.points().as_slice();

    let Some(window) = locate(all, range) else {
        trace!(points = all.len(), min = range.min, max = range.max, "series outside visible range");
        return FlatBuffer::empty(pointsize + 1);
    };

    let visible = all.sub(window.lo, window.hi);
    let out = if visible.len() > plot_width {
        let reduced = average_buckets(visible, plot_width);
        flatten(reduced.as_slice(), pointsize)
    } else {
        flatten(visible, pointsize)
    };
    trace!(
        points = all.len(),
        visible = visible.len(),
        drawn = out.point_count(),
        plot_width,
        "filtered series"
    );
    out
}
