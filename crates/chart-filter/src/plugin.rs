// File: crates/chart-filter/src/plugin.rs
// Summary: Plugin and draw-hook traits; the renderer-agnostic extension point of a chart.

use crate::axis::Axis;
use crate::flatten::FlatBuffer;
use crate::options::PlotOptions;
use crate::range::VisibleRange;
use crate::series::Series;

/// Everything a draw hook may read about the current pass.
#[derive(Clone, Copy, Debug)]
pub struct DrawContext<'a> {
    pub x_axis: &'a Axis,
    /// Horizontal pixels available for the plot area.
    pub plot_width: usize,
}

impl DrawContext<'_> {
    pub fn visible_range(&self) -> VisibleRange {
        self.x_axis.visible_range()
    }
}

/// Runs once per series per draw pass, before the series is painted.
pub trait DrawSeriesHook {
    fn id(&self) -> &'static str;
    /// Replacement drawable buffer for `series` for this pass only, or `None`
    /// to keep whatever the chart would draw otherwise.
    fn draw_series(&self, ctx: &DrawContext<'_>, series: &Series) -> Option<FlatBuffer>;
}

/// Hook lists filled by plugins while options are processed.
#[derive(Default)]
pub struct Hooks {
    draw_series: Vec<Box<dyn DrawSeriesHook>>,
}

impl Hooks {
    pub fn push_draw_series(&mut self, hook: impl DrawSeriesHook + 'static) {
        self.draw_series.push(Box::new(hook));
    }

    pub fn draw_series(&self) -> &[Box<dyn DrawSeriesHook>] {
        &self.draw_series
    }

    pub fn is_empty(&self) -> bool {
        self.draw_series.is_empty()
    }
}

/// A chart extension. Plugins inspect the plot options once and register the
/// hooks they need; they hold no per-draw state.
pub trait Plugin {
    fn name(&self) -> &'static str;
    fn version(&self) -> &'static str;
    fn process_options(&self, options: &PlotOptions, hooks: &mut Hooks);
}
