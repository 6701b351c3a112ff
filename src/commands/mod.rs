//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod plot;
pub mod utils;

// Re-export main command functions
pub use models::{BenchmarkArtifacts, PlotArgs, PlotReport};
pub use plot::{dump_power_bars, execute_plot, resolve_args};
pub use utils::{benchmark_name, retain_known_args};
