// File: crates/chart-filter/src/lib.rs
// Summary: Core library entry point; exports the series filter pipeline and its chart host.

pub mod axis;
pub mod chart;
pub mod downsample;
pub mod error;
pub mod filter;
pub mod flatten;
pub mod options;
pub mod plugin;
pub mod range;
pub mod series;
pub mod types;

pub use axis::Axis;
pub use chart::Chart;
pub use downsample::average_buckets;
pub use error::{FilterError, Result};
pub use filter::{filter_series, AverageFilter, FilterPlugin};
pub use flatten::{flatten, FlatBuffer};
pub use options::{FilterMode, PlotOptions};
pub use plugin::{DrawContext, DrawSeriesHook, Hooks, Plugin};
pub use range::{locate, IndexWindow, VisibleRange};
pub use series::{PointSlice, Points, Series};
pub use types::{Insets, RenderOptions};
