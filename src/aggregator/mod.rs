//! Aggregation of trace data into plot-ready series.
//!
//! This module transforms parsed power traces into:
//! - A total power series (sum of component modules)
//! - Trimmed series after skipping leading cycles
//! - Mean power per module for the breakdown

pub mod total;
pub mod metrics;

// Re-export main types and functions
pub use total::{aggregate_trace, apply_skip, PowerProfile};
pub use metrics::{component_rows, mean_power, power_breakdown, stack_offsets, BreakdownRow, BreakdownSummary};
