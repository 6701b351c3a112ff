//! PNG rendering of power traces.
//!
//! - Time-series line charts (total and per module)
//! - Stacked-bar breakdown of mean power
//! - Process-wide style shared by both

pub mod bars;
pub mod style;
pub mod timeseries;

pub use bars::plot_power_bars;
pub use style::{init_plot_style, plot_style, PlotStyle};
pub use timeseries::{cycle_axis, plot_power, CycleUnit};
