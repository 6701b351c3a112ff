//! Power Trace Plot
//!
//! Time-series and breakdown plots for per-module power traces.
//!
//! This crate provides the core implementation for the
//! `power-trace-plot` CLI tool: loading trace CSVs, summing module power,
//! and rendering PNG charts plus a CSV summary of mean power per module.
//!
//! ## Getting Started
//!
//! ```bash
//! power-trace-plot -p traces/bench1.csv traces/bench2.csv -d plots --skip 100000
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod plot;
pub mod utils;
