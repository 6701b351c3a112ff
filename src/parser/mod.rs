//! Trace parsing and schema definitions.
//!
//! This module handles:
//! - Reading power trace CSV files
//! - Validating the window header and row widths
//! - Tagging aggregate and component module columns

pub mod power_trace;
pub mod schema;

// Re-export main types
pub use power_trace::load_power_trace;
pub use schema::{ModuleRole, ModuleSeries, Trace};
