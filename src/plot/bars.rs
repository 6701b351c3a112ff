//! Stacked-bar breakdown of mean power per module.

use super::style::{palette_color, plot_style, PlotStyle};
use crate::aggregator::metrics::{stack_offsets, BreakdownRow};
use crate::output::ensure_parent_dir;
use crate::utils::config::{BAR_FIGURE_SIZE, BREAKDOWN_CATEGORY};
use crate::utils::error::PlotError;
use log::info;
use plotters::prelude::*;
use std::error::Error;
use std::ops::Range;
use std::path::Path;

/// Half of the bar width, in category units
const BAR_HALF_WIDTH: f64 = 0.25;

/// One stacked segment of the bar
#[derive(Debug, Clone, PartialEq)]
struct BarSegment<'a> {
    label: &'a str,
    bottom: f64,
    height: f64,
    color: RGBColor,
}

/// Plot mean power per module as a single stacked bar
///
/// **Public** - the caller decides which rows appear (see `dump_power_bars`)
///
/// # Arguments
/// * `path` - Output PNG path
/// * `rows` - Modules in stacking order, bottom first
/// * `title` - Optional chart caption
pub fn plot_power_bars(
    path: impl AsRef<Path>,
    rows: &[BreakdownRow],
    title: Option<&str>,
) -> Result<(), PlotError> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;

    info!("Power Break-down: {}", path.display());

    let segments = build_segments(rows);
    let y_range = stack_bounds(&segments);

    draw_bar_chart(path, &segments, y_range, title, plot_style())
        .map_err(|e| PlotError::Drawing(e.to_string()))
}

/// Stack the means bottom-up, coloring by position
fn build_segments(rows: &[BreakdownRow]) -> Vec<BarSegment<'_>> {
    let means: Vec<f64> = rows.iter().map(|r| r.mean_power).collect();

    rows.iter()
        .zip(stack_offsets(&means))
        .enumerate()
        .map(|(i, (row, bottom))| BarSegment {
            label: &row.module,
            bottom,
            height: row.mean_power,
            color: palette_color(i),
        })
        .collect()
}

/// Y range covering every segment, with headroom above the stack
fn stack_bounds(segments: &[BarSegment<'_>]) -> Range<f64> {
    let (low, high) = segments.iter().fold((0.0_f64, 0.0_f64), |(low, high), s| {
        let top = s.bottom + s.height;
        (low.min(top).min(s.bottom), high.max(top).max(s.bottom))
    });

    if high - low <= f64::EPSILON {
        return 0.0..1.0;
    }
    low..high * 1.05
}

fn draw_bar_chart(
    path: &Path,
    segments: &[BarSegment<'_>],
    y_range: Range<f64>,
    title: Option<&str>,
    style: &PlotStyle,
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, BAR_FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut builder = ChartBuilder::on(&root);
    builder.margin(20).x_label_area_size(40).y_label_area_size(80);
    if let Some(title) = title {
        builder.caption(title, style.scaled_font(1.2));
    }
    let mut chart = builder.build_cartesian_2d(-0.5..1.5, y_range)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(5)
        .x_label_formatter(&|x: &f64| {
            if x.abs() < 1e-6 {
                BREAKDOWN_CATEGORY.to_string()
            } else {
                String::new()
            }
        })
        .y_desc("Power(mW)")
        .label_style(style.font())
        .axis_desc_style(style.scaled_font(1.2))
        .draw()?;

    // Legend lists series in draw order; draw top segment first so the
    // legend reads top-down like the bar.
    for segment in segments.iter().rev() {
        let color = segment.color;
        let corners = [
            (-BAR_HALF_WIDTH, segment.bottom),
            (BAR_HALF_WIDTH, segment.bottom + segment.height),
        ];
        chart
            .draw_series(vec![
                Rectangle::new(corners, color.filled()),
                Rectangle::new(corners, BLACK.stroke_width(1)),
            ])?
            .label(segment.label)
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(style.scaled_font(0.6))
        .draw()?;

    root.present()?;
    Ok(())
}
