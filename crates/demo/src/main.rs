// File: crates/demo/src/main.rs
// Summary: Demo loads an x,y[,aux...] CSV, runs one filtered draw pass and writes the drawable buffer as CSV.

use anyhow::{Context, Result};
use chart_filter::{Axis, Chart, PlotOptions, Points, RenderOptions, Series};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_logging();

    // Usage: demo <csv> [x_min x_max] [width]
    let args: Vec<String> = std::env::args().skip(1).collect();
    let raw = args.first().map(String::as_str).unwrap_or("series.csv");
    let (path, used_alt) = resolve_path(raw)?;
    tracing::info!("Using input file: {}", path.display());
    if used_alt {
        tracing::info!("  (extension swapped between .csv/.cvs)");
    }

    let points = load_points_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    if points.is_empty() {
        anyhow::bail!("no points loaded; check headers/delimiter.");
    }
    tracing::info!("Loaded {} points with {} values each", points.len(), points.arity());
    let series = Series::new(points);

    let Some((x_first, x_last)) = series.x_extent() else {
        anyhow::bail!("series has no extent");
    };
    let (x_min, x_max) = match (args.get(1), args.get(2)) {
        (Some(a), Some(b)) => (parse_arg(a, "x_min")?, parse_arg(b, "x_max")?),
        _ => (x_first, x_last),
    };

    let mut opts = RenderOptions::default();
    if let Some(w) = args.get(3) {
        opts.width = w.parse().with_context(|| format!("invalid width '{w}'"))?;
    }

    let mut chart = Chart::with_options(PlotOptions::with_filter("average"));
    chart.x_axis = Axis::new("X", x_min, x_max);
    chart.add_series(series);

    let buffers = chart.draw_pass(&opts);
    let buf = &buffers[0];
    tracing::info!(
        "Window [{x_min}, {x_max}] at {} px: {} points -> {}",
        opts.plot_width(),
        chart.series[0].len(),
        buf.point_count()
    );

    let out = out_name_with(&path, "filtered");
    let mut wtr = csv::Writer::from_path(&out).with_context(|| format!("creating {}", out.display()))?;
    for p in buf.points() {
        wtr.write_record(p.iter().map(|v| v.to_string()))?;
    }
    wtr.flush()?;
    tracing::info!("Wrote {}", out.display());

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).compact().init();
}

fn parse_arg(s: &str, name: &str) -> Result<f64> {
    s.trim().parse::<f64>().with_context(|| format!("invalid {name} '{s}'"))
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Produce output file name like target/out/<stem>_<suffix>.csv
fn out_name_with(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("series");
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("{stem}_{suffix}.csv"));
    out
}

/// Load numeric rows. The first column is x, the rest are y and auxiliary
/// values. Rows that fail to parse are skipped; rows must be sorted by x.
fn load_points_csv(path: &Path) -> Result<Points> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    tracing::debug!("Headers: {:?}", headers);
    let arity = headers.len().max(2);

    let mut points = Points::new(arity)?;
    let mut skipped = 0usize;
    let mut row = Vec::with_capacity(arity);
    for rec in rdr.records() {
        let rec = rec?;
        row.clear();
        row.extend(rec.iter().take(arity).filter_map(|s| s.trim().parse::<f64>().ok()));
        if row.len() == arity {
            points.push(&row)?;
        } else {
            skipped += 1;
        }
    }
    if skipped > 0 {
        tracing::warn!("Skipped {skipped} malformed rows");
    }
    Ok(points)
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}
