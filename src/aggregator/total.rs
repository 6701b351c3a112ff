//! Total power series and leading-cycle trimming.

use crate::parser::schema::{ModuleRole, ModuleSeries, Trace};
use log::{debug, warn};

/// Aggregated view of one trace, ready for plotting
///
/// **Public** - returned from aggregate_trace
#[derive(Debug, Clone, PartialEq)]
pub struct PowerProfile {
    /// Cycles per sample
    pub window: u64,

    /// Cycles covered by the (possibly trimmed) series
    pub total_cycles: u64,

    /// Element-wise sum of the component series
    pub total: Vec<f64>,

    /// Per-module series, aggregate column included
    pub modules: Vec<ModuleSeries>,
}

/// Sum component series into a total power series
///
/// **Public** - main entry point for aggregation
///
/// The aggregate column is excluded from the sum. A single-module trace
/// has no aggregate column, so its total is the module's own series.
pub fn aggregate_trace(trace: Trace) -> PowerProfile {
    let total = sum_components(&trace.modules);
    // The loader rejects windows whose cycle count would overflow
    let total_cycles = (total.len() as u64).saturating_mul(trace.window);

    debug!(
        "Aggregated {} samples into {} cycles",
        total.len(),
        total_cycles
    );

    PowerProfile {
        window: trace.window,
        total_cycles,
        total,
        modules: trace.modules,
    }
}

/// Element-wise sum of every component series
///
/// **Private** - internal helper for aggregate_trace
fn sum_components(modules: &[ModuleSeries]) -> Vec<f64> {
    let mut components = modules.iter().filter(|m| m.role == ModuleRole::Component);

    let Some(first) = components.next() else {
        return Vec::new();
    };

    components.fold(first.samples.clone(), |mut acc, module| {
        for (sum, value) in acc.iter_mut().zip(&module.samples) {
            *sum += value;
        }
        acc
    })
}

/// Drop the samples covering the first `skip` cycles
///
/// **Public** - applied after aggregation when `--skip` is given
///
/// Only whole windows are dropped (`skip / window`). Skipping past the end
/// of the trace leaves every series empty; the plotter rejects those.
///
/// # Returns
/// Number of samples dropped from each series
pub fn apply_skip(profile: &mut PowerProfile, skip: u64) -> usize {
    let start_index = (skip / profile.window) as usize;
    if start_index == 0 {
        return 0;
    }

    profile.total_cycles = profile
        .total_cycles
        .saturating_sub(start_index as u64 * profile.window);

    drop_leading(&mut profile.total, start_index);
    for module in &mut profile.modules {
        drop_leading(&mut module.samples, start_index);
    }

    if profile.total.is_empty() {
        warn!(
            "Skipping {} cycles leaves no samples (window {})",
            skip, profile.window
        );
    } else {
        debug!("Skipped {} samples ({} cycles)", start_index, skip);
    }

    start_index
}

fn drop_leading(samples: &mut Vec<f64>, count: usize) {
    samples.drain(..count.min(samples.len()));
}
