// File: crates/chart-filter/src/chart.rs
// Summary: Chart struct and the per-pass drawable-buffer pipeline run through plugin hooks.

use tracing::debug;

use crate::axis::Axis;
use crate::filter::FilterPlugin;
use crate::flatten::{flatten, FlatBuffer};
use crate::options::PlotOptions;
use crate::plugin::{DrawContext, Hooks, Plugin};
use crate::series::Series;
use crate::types::RenderOptions;

pub struct Chart {
    pub series: Vec<Series>,
    pub x_axis: Axis,
    options: PlotOptions,
    plugins: Vec<Box<dyn Plugin>>,
    hooks: Hooks,
}

impl Chart {
    /// Chart with default options (filtering off).
    pub fn new() -> Self {
        Self::with_options(PlotOptions::default())
    }

    /// Chart with the built-in plugins configured from `options`.
    pub fn with_options(options: PlotOptions) -> Self {
        Self::with_plugins(options, vec![Box::new(FilterPlugin) as Box<dyn Plugin>])
    }

    /// Chart with an explicit plugin set. Each plugin sees `options` once,
    /// here, and registers its hooks.
    pub fn with_plugins(options: PlotOptions, plugins: Vec<Box<dyn Plugin>>) -> Self {
        let mut hooks = Hooks::default();
        for p in &plugins {
            debug!(plugin = p.name(), version = p.version(), "processing options");
            p.process_options(&options, &mut hooks);
        }
        Self { series: Vec::new(), x_axis: Axis::default_x(), options, plugins, hooks }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn options(&self) -> &PlotOptions { &self.options }
    pub fn plugins(&self) -> &[Box<dyn Plugin>] { &self.plugins }
    pub fn hooks(&self) -> &Hooks { &self.hooks }

    /// Drawable buffers for one pass, one per series, in series order.
    /// Without hooks every series is flattened whole; each draw-series hook
    /// may replace that buffer. Series themselves are left untouched.
    pub fn draw_pass(&self, opts: &RenderOptions) -> Vec<FlatBuffer> {
        let ctx = DrawContext { x_axis: &self.x_axis, plot_width: opts.plot_width() };
        self.series.iter().map(|s| self.draw_series(&ctx, s)).collect()
    }

    fn draw_series(&self, ctx: &DrawContext<'_>, series: &Series) -> FlatBuffer {
        let mut out = None;
        for hook in self.hooks.draw_series() {
            if let Some(buf) = hook.draw_series(ctx, series) {
                out = Some(buf);
            }
        }
        out.unwrap_or_else(|| flatten(series.points().as_slice(), series.pointsize()))
    }
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}
