//! Power trace CSV parser.
//!
//! A trace file looks like:
//!
//! ```text
//! window,1000
//! total,core,uncore
//! 12.5,8.0,4.5
//! 13.0,8.25,4.75
//! ```
//!
//! The first row carries the sampling window, the second the module names,
//! and every following row one power sample per module.

use super::schema::Trace;
use crate::utils::config::{DEFAULT_WINDOW, WINDOW_HEADER};
use crate::utils::error::TraceError;
use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter};
use log::{debug, info};
use std::fs::File;
use std::path::Path;

/// Load a power trace from a CSV file
///
/// **Public** - main entry point for parsing
///
/// # Arguments
/// * `path` - Trace CSV file
/// * `has_window` - Whether the first row is a `window,<cycles>` header
///
/// # Errors
/// * `TraceError::MissingWindowHeader` - First cell is not `window`
/// * `TraceError::InvalidWindow` - Window is missing, not an integer, or zero
/// * `TraceError::RowWidth` - A sample row does not match the module count
/// * `TraceError::InvalidNumber` - A sample is not a number
pub fn load_power_trace(path: impl AsRef<Path>, has_window: bool) -> Result<Trace, TraceError> {
    let path = path.as_ref();
    info!("Power trace file: {}", path.display());

    let file = File::open(path)?;
    let reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let trace = parse_records(reader.into_records(), has_window)?;

    debug!(
        "Loaded {} modules x {} samples (window {})",
        trace.modules.len(),
        trace.sample_count(),
        trace.window
    );

    Ok(trace)
}

/// Parse trace records from an already-open CSV stream
///
/// **Private** - shared by `load_power_trace` and the tests
fn parse_records<R: std::io::Read>(
    mut records: StringRecordsIntoIter<R>,
    has_window: bool,
) -> Result<Trace, TraceError> {
    let window = if has_window {
        let header = records.next().transpose()?.unwrap_or_default();
        parse_window(&header)?
    } else {
        DEFAULT_WINDOW
    };

    let names: Vec<String> = match records.next().transpose()? {
        Some(record) => record.iter().map(str::to_string).collect(),
        None => return Err(TraceError::MissingModules),
    };

    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); names.len()];

    for record in records {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());

        if record.len() != names.len() {
            return Err(TraceError::RowWidth {
                line,
                expected: names.len(),
                found: record.len(),
            });
        }

        for ((cell, column), name) in record.iter().zip(columns.iter_mut()).zip(&names) {
            let value = cell.trim().parse::<f64>().map_err(|_| TraceError::InvalidNumber {
                line,
                module: name.clone(),
                value: cell.to_string(),
            })?;
            column.push(value);
        }
    }

    // Total cycles (samples x window) must fit in a u64
    let samples = columns.first().map_or(0, Vec::len) as u64;
    if samples.checked_mul(window).is_none() {
        return Err(TraceError::InvalidWindow {
            value: window.to_string(),
        });
    }

    Ok(Trace::from_columns(window, names, columns))
}

/// Parse the `window,<cycles>` header row
///
/// **Private** - internal helper for parse_records
fn parse_window(record: &StringRecord) -> Result<u64, TraceError> {
    let marker = record.get(0).unwrap_or_default();
    if marker != WINDOW_HEADER {
        return Err(TraceError::MissingWindowHeader {
            found: marker.to_string(),
        });
    }

    let raw = record.get(1).unwrap_or_default();
    match raw.trim().parse::<u64>() {
        Ok(window) if window > 0 => Ok(window),
        _ => Err(TraceError::InvalidWindow {
            value: raw.to_string(),
        }),
    }
}
