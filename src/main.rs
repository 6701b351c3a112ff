//! Power Trace Plot CLI
//!
//! Renders power-over-time charts and mean-power breakdowns from
//! per-module power trace CSV files.

use anyhow::Result;
use clap::{ArgAction, Parser};
use env_logger::Env;
use std::io::Write;
use std::path::PathBuf;

use power_trace_plot::commands::{execute_plot, retain_known_args, PlotArgs};
use power_trace_plot::plot::{init_plot_style, PlotStyle};
use power_trace_plot::utils::config::DEFAULT_OUTPUT_DIR;

/// Power Trace Plot - charts and breakdowns for power traces
#[derive(Parser, Debug)]
#[command(name = "power-trace-plot")]
#[command(version, about, long_about = None)]
#[command(args_override_self = true)]
struct Cli {
    /// Power trace CSV files (a repeated -p replaces the earlier list)
    #[arg(short, long, num_args = 1.., action = ArgAction::Set)]
    power: Vec<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    dir: PathBuf,

    /// Number of cycles to skip at the start of each trace
    #[arg(long)]
    skip: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Unknown arguments are ignored, not rejected
    let cli = Cli::parse_from(retain_known_args(std::env::args_os()));

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();

    init_plot_style(PlotStyle::default());

    let args = PlotArgs {
        power: cli.power,
        dir: cli.dir,
        skip: cli.skip,
    };

    execute_plot(args)?;

    Ok(())
}
