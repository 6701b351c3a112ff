//! Power-over-time line charts.

use super::style::{plot_style, polyline_chunks, PlotStyle, TRACE_LINE_COLOR};
use crate::output::ensure_parent_dir;
use crate::utils::config::{TRACE_FIGURE_SIZE, Y_PADDING_HIGH, Y_PADDING_LOW};
use crate::utils::error::PlotError;
use log::{debug, info};
use plotters::prelude::*;
use std::error::Error;
use std::ops::Range;
use std::path::Path;

/// Display unit of the cycle axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleUnit {
    Raw,
    Thousands,
    Millions,
    Billions,
}

impl CycleUnit {
    /// Pick a unit so the axis shows more than five whole units
    ///
    /// Uses truncating division, so 5.9e9 cycles still display in millions.
    pub fn for_cycles(cycles: u64) -> Self {
        if cycles / 1_000_000_000 > 5 {
            CycleUnit::Billions
        } else if cycles / 1_000_000 > 5 {
            CycleUnit::Millions
        } else if cycles / 1_000 > 5 {
            CycleUnit::Thousands
        } else {
            CycleUnit::Raw
        }
    }

    pub fn scale(self) -> f64 {
        match self {
            CycleUnit::Raw => 1.0,
            CycleUnit::Thousands => 1e3,
            CycleUnit::Millions => 1e6,
            CycleUnit::Billions => 1e9,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CycleUnit::Raw => "",
            CycleUnit::Thousands => "(K)",
            CycleUnit::Millions => "(M)",
            CycleUnit::Billions => "(B)",
        }
    }
}

/// Sample positions along the cycle axis, in display units
///
/// One point every `window` cycles from 0 up to (not including) `cycles`.
pub fn cycle_axis(cycles: u64, window: u64) -> Result<(Vec<f64>, CycleUnit), PlotError> {
    if window == 0 {
        return Err(PlotError::ZeroWindow);
    }

    let unit = CycleUnit::for_cycles(cycles);
    let scale = unit.scale();
    let points = (0..cycles)
        .step_by(window as usize)
        .map(|c| c as f64 / scale)
        .collect();

    Ok((points, unit))
}

/// Plot a power series against cycles
///
/// **Public** - called once for the total and once per module
///
/// # Arguments
/// * `path` - Output PNG path (parent directories are created)
/// * `y` - Power samples in mW
/// * `cycles` - Cycles covered by `y`
/// * `window` - Cycles per sample
/// * `title` - Reserved; logged but not drawn
///
/// # Errors
/// * `PlotError::EmptySeries` - Nothing to plot (e.g. skip past the end)
/// * `PlotError::Drawing` - Backend failure
pub fn plot_power(
    path: impl AsRef<Path>,
    y: &[f64],
    cycles: u64,
    window: u64,
    title: Option<&str>,
) -> Result<(), PlotError> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;

    info!("Power Plot: {}", path.display());
    if let Some(title) = title {
        debug!("Plot title: {}", title);
    }

    let (xs, unit) = cycle_axis(cycles, window)?;
    let len = xs.len().min(y.len());
    if len == 0 {
        let name = title.map_or_else(|| path.display().to_string(), str::to_string);
        return Err(PlotError::EmptySeries(name));
    }

    let points: Vec<(f64, f64)> = xs[..len].iter().copied().zip(y[..len].iter().copied()).collect();
    let x_range = x_bounds(&xs[..len]);
    let y_range = y_bounds(&y[..len]);

    draw_power_chart(path, &points, x_range, y_range, unit, plot_style())
        .map_err(|e| PlotError::Drawing(e.to_string()))
}

/// X range `[0, max(x)]`, widened when there is a single point
fn x_bounds(xs: &[f64]) -> Range<f64> {
    let x_max = xs.iter().copied().fold(0.0, f64::max);
    if x_max > 0.0 {
        0.0..x_max
    } else {
        0.0..1.0
    }
}

/// Y range with 5% padding below the minimum and above the maximum
fn y_bounds(ys: &[f64]) -> Range<f64> {
    let y_min = ys.iter().copied().fold(f64::INFINITY, f64::min);
    let y_max = ys.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let mut low = Y_PADDING_LOW * y_min;
    let mut high = Y_PADDING_HIGH * y_max;
    if low > high {
        std::mem::swap(&mut low, &mut high);
    }
    if high - low <= f64::EPSILON {
        low -= 0.5;
        high += 0.5;
    }

    low..high
}

/// Render the chart and flush it to disk
///
/// **Private** - the drawing area is dropped on return
fn draw_power_chart(
    path: &Path,
    points: &[(f64, f64)],
    x_range: Range<f64>,
    y_range: Range<f64>,
    unit: CycleUnit,
    style: &PlotStyle,
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, TRACE_FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(90)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(format!("Cycles {}", unit.label()))
        .y_desc("Predicted Power (mW)")
        .label_style(style.font())
        .axis_desc_style(style.font())
        .draw()?;

    for chunk in polyline_chunks(points, style.path_chunk_size) {
        chart.draw_series(LineSeries::new(chunk.iter().copied(), &TRACE_LINE_COLOR))?;
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_thresholds() {
        assert_eq!(CycleUnit::for_cycles(6_000_000_000), CycleUnit::Billions);
        assert_eq!(CycleUnit::for_cycles(5_900_000_000), CycleUnit::Millions);
        assert_eq!(CycleUnit::for_cycles(6_000_000), CycleUnit::Millions);
        assert_eq!(CycleUnit::for_cycles(4_000_000), CycleUnit::Thousands);
        assert_eq!(CycleUnit::for_cycles(5_999), CycleUnit::Raw);
        assert_eq!(CycleUnit::for_cycles(6_000), CycleUnit::Thousands);
    }

    #[test]
    fn test_unit_labels() {
        assert_eq!(CycleUnit::Billions.label(), "(B)");
        assert_eq!(CycleUnit::Billions.scale(), 1e9);
        assert_eq!(CycleUnit::Raw.label(), "");
    }

    #[test]
    fn test_cycle_axis_raw() {
        let (xs, unit) = cycle_axis(6, 2).unwrap();
        assert_eq!(unit, CycleUnit::Raw);
        assert_eq!(xs, vec![0.0, 2.0, 4.0]);
    }

    #[test]
    fn test_cycle_axis_scaled() {
        let (xs, unit) = cycle_axis(12_000, 4_000).unwrap();
        assert_eq!(unit, CycleUnit::Thousands);
        assert_eq!(xs, vec![0.0, 4.0, 8.0]);
    }

    #[test]
    fn test_cycle_axis_zero_window() {
        assert!(matches!(cycle_axis(10, 0), Err(PlotError::ZeroWindow)));
    }

    #[test]
    fn test_y_bounds_padding() {
        let range = y_bounds(&[10.0, 20.0]);
        assert!((range.start - 9.5).abs() < 1e-9);
        assert!((range.end - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_y_bounds_flat_zero_series() {
        let range = y_bounds(&[0.0, 0.0]);
        assert!(range.start < range.end);
    }

    #[test]
    fn test_x_bounds_single_point() {
        assert_eq!(x_bounds(&[0.0]), 0.0..1.0);
        assert_eq!(x_bounds(&[0.0, 2.0, 4.0]), 0.0..4.0);
    }

    #[test]
    fn test_plot_power_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("core/bench.png");

        plot_power(&path, &[1.0, 2.0, 3.0], 6, 2, Some("core")).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_plot_power_empty_series() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");

        let err = plot_power(&path, &[], 0, 10, Some("core")).unwrap_err();
        assert!(matches!(err, PlotError::EmptySeries(name) if name == "core"));
    }
}
