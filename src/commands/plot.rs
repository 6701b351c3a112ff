//! Plot command implementation.
//!
//! For every trace, in order:
//! 1. Loads the trace CSV
//! 2. Sums component modules into a total series
//! 3. Drops skipped leading cycles
//! 4. Plots the total and every module over time
//! 5. Writes the mean-power breakdown (PNG + CSV)

use super::models::{BenchmarkArtifacts, PlotArgs, PlotReport};
use super::utils::benchmark_name;
use crate::aggregator::{aggregate_trace, apply_skip, component_rows, power_breakdown, BreakdownSummary};
use crate::output::store_power_bars;
use crate::parser::load_power_trace;
use crate::parser::schema::ModuleSeries;
use crate::plot::{plot_power, plot_power_bars};
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Prepare arguments for execution
///
/// **Public** - creates the output directory (with parents) if missing
pub fn resolve_args(args: PlotArgs) -> Result<PlotArgs> {
    if !args.dir.is_dir() {
        debug!("Creating output directory: {}", args.dir.display());
        std::fs::create_dir_all(&args.dir)
            .with_context(|| format!("Failed to create output directory {}", args.dir.display()))?;
    }
    Ok(args)
}

/// Execute the plot command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// The first failing trace aborts the whole batch.
pub fn execute_plot(args: PlotArgs) -> Result<PlotReport> {
    let start_time = Instant::now();
    let args = resolve_args(args)?;

    if args.power.is_empty() {
        debug!("No power traces given");
    }

    let mut report = PlotReport::default();
    for trace in &args.power {
        let benchmark = benchmark_name(trace);
        let artifacts = plot_trace(&benchmark, trace, &args)
            .with_context(|| format!("Failed to plot trace {}", trace.display()))?;
        report.benchmarks.push(artifacts);
    }

    info!(
        "Wrote {} files for {} benchmarks in {:.2}s",
        report.file_count(),
        report.benchmarks.len(),
        start_time.elapsed().as_secs_f64()
    );

    Ok(report)
}

/// Process one trace file
///
/// **Private** - internal helper for execute_plot
fn plot_trace(benchmark: &str, trace: &Path, args: &PlotArgs) -> Result<BenchmarkArtifacts> {
    let trace = load_power_trace(trace, true)?;
    let mut profile = aggregate_trace(trace);

    if let Some(skip) = args.skip {
        apply_skip(&mut profile, skip);
    }

    let trace_plot = args.dir.join(format!("{}-trace.png", benchmark));
    plot_power(
        &trace_plot,
        &profile.total,
        profile.total_cycles,
        profile.window,
        Some(benchmark),
    )?;

    let mut module_plots = Vec::with_capacity(profile.modules.len());
    for module in &profile.modules {
        let path = module_plot_path(&args.dir, &module.name, benchmark);
        plot_power(
            &path,
            &module.samples,
            profile.total_cycles,
            profile.window,
            Some(module.name.as_str()),
        )?;
        module_plots.push(path);
    }

    let (bars_plot, bars_csv) = dump_power_bars(&args.dir, benchmark, &profile.modules)?;

    Ok(BenchmarkArtifacts {
        benchmark: benchmark.to_string(),
        trace_plot,
        module_plots,
        bars_plot,
        bars_csv,
    })
}

/// `<dir>/<module>/<benchmark>.png`
fn module_plot_path(dir: &Path, module: &str, benchmark: &str) -> PathBuf {
    dir.join(module).join(format!("{}.png", benchmark))
}

/// Plot and store the mean-power breakdown of one benchmark
///
/// **Public** - the bar chart shows component modules only; the CSV also
/// records the aggregate row.
///
/// # Returns
/// Paths of the PNG and CSV written
pub fn dump_power_bars(
    dir: &Path,
    benchmark: &str,
    modules: &[ModuleSeries],
) -> Result<(PathBuf, PathBuf)> {
    let csv_path = dir.join(format!("power-bars-{}.csv", benchmark));
    let png_path = dir.join(format!("power-bars-{}.png", benchmark));

    let rows = power_breakdown(modules)?;
    debug!("Breakdown: {}", BreakdownSummary::from_rows(&rows).summary());

    plot_power_bars(&png_path, &component_rows(&rows), None).context("Failed to plot power breakdown")?;
    store_power_bars(&csv_path, &rows).context("Failed to write power breakdown CSV")?;

    Ok((png_path, csv_path))
}
