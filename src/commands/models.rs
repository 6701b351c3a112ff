use crate::utils::config::DEFAULT_OUTPUT_DIR;
use std::path::PathBuf;

/// Arguments for the plot command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct PlotArgs {
    /// Power trace CSV files, processed in order
    pub power: Vec<PathBuf>,

    /// Output directory for every artifact
    pub dir: PathBuf,

    /// Leading cycles to discard from each trace
    pub skip: Option<u64>,
}

impl Default for PlotArgs {
    fn default() -> Self {
        Self {
            power: Vec::new(),
            dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            skip: None,
        }
    }
}

/// Artifacts written for one benchmark
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchmarkArtifacts {
    pub benchmark: String,
    pub trace_plot: PathBuf,
    pub module_plots: Vec<PathBuf>,
    pub bars_plot: PathBuf,
    pub bars_csv: PathBuf,
}

impl BenchmarkArtifacts {
    pub fn file_count(&self) -> usize {
        3 + self.module_plots.len()
    }
}

/// Result of a plot run
///
/// **Public** - returned from execute_plot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotReport {
    pub benchmarks: Vec<BenchmarkArtifacts>,
}

impl PlotReport {
    pub fn file_count(&self) -> usize {
        self.benchmarks.iter().map(BenchmarkArtifacts::file_count).sum()
    }
}
